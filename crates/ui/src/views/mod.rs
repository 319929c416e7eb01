mod challenges;
mod home;
mod not_found;
mod popups;
mod shell;
mod state;
mod timers;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use not_found::NotFoundView;
pub use state::ViewError;
