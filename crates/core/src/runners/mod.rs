//! Per-challenge state machines.
//!
//! Each runner owns its local state and is driven by two kinds of input:
//! learner actions (plain methods) and timer events (`Runner::fire`). Both
//! answer with an [`Outcome`], which may ask the caller to deliver a timer
//! event later. The caller owns the scheduler, so cancelling a runner's
//! pending work is a matter of dropping its timers.

use std::fmt;
use std::time::Duration;

pub mod authorization;
pub mod federated;
pub mod least_privilege;
pub mod login;
pub mod permissions;
pub mod rbac;

pub use authorization::{AuthorizationRunner, GhostGame, GhostTimer, Page};
pub use federated::{FederatedRunner, FederatedTimer, Phase};
pub use least_privilege::{LeastPrivilegeRunner, LeastPrivilegeTimer};
pub use login::LoginRunner;
pub use permissions::{PermissionsRunner, PermissionsTimer};
pub use rbac::{RbacRunner, RbacTimer};

/// Delay between a correct configuration and the success callback.
pub const SUCCESS_DELAY: Duration = Duration::from_millis(1_500);

/// Timer type for runners that never schedule anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoTimer {}

/// What the caller must do after feeding an input to a runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Outcome<T = NoTimer> {
    /// State changed (or not); nothing else to do.
    Idle,
    /// The challenge is solved; invoke the success callback now.
    Completed,
    /// Deliver `T` back through [`Runner::fire`] once the delay has elapsed.
    After(Duration, T),
}

impl<T> Outcome<T> {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed)
    }

    /// The pending timer, if any.
    #[must_use]
    pub fn scheduled(&self) -> Option<(Duration, &T)> {
        match self {
            Outcome::After(delay, timer) => Some((*delay, timer)),
            _ => None,
        }
    }
}

/// Common interface of every interactive challenge.
pub trait Runner {
    type Timer: Copy + fmt::Debug + 'static;

    /// Deliver a timer event previously requested through `Outcome::After`.
    fn fire(&mut self, timer: Self::Timer) -> Outcome<Self::Timer>;
}
