use std::time::Duration;

use crate::runners::{NoTimer, Outcome, Runner};

pub const DASHBOARD_URL: &str = "https://entreprise.locale/dashboard";
pub const ADMIN_URL: &str = "https://entreprise.locale/admin";
pub const NOT_FOUND_ERROR: &str = "Page not found";

/// Markup shown when the learner inspects the admin button.
pub const INITIAL_INSPECTOR_MARKUP: &str = "<button id=\"adminButton\" disabled=\"true\" class=\"px-4 py-2 bg-gray-400 text-white rounded cursor-not-allowed\">\n  Admin Access\n</button>";

/// Substring that, once applied through the inspector, enables the button.
pub const EXPLOIT_MARKER: &str = "disabled=\"false\"";

/// Every button on the admin panel. Any of them solves the challenge.
pub const ADMIN_ACTIONS: [&str; 6] = [
    "Reset All User Passwords",
    "Grant Super Admin Rights",
    "View All User Data",
    "Database Connection Settings",
    "Security Protocols Override",
    "API Keys Management",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    AdminPanel,
    NotFound,
}

/// Fake window and navigation buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserControl {
    Close,
    Minimise,
    Maximise,
    Back,
    Forward,
    Reload,
}

impl BrowserControl {
    #[must_use]
    pub fn joke(self) -> &'static str {
        match self {
            BrowserControl::Close => "Really? All the work I had, and you want to leave??? 😭",
            _ => "This is a fake browser, do you really think I would write the code for that? 😅",
        }
    }
}

//
// ─── FAKE BROWSER ──────────────────────────────────────────────────────────────
//

/// A mock intranet whose admin access is only guarded client-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationRunner {
    url: String,
    page: Page,
    inspector_text: String,
    inspector_open: bool,
    admin_enabled: bool,
    error: Option<&'static str>,
    popup: Option<&'static str>,
}

impl Default for AuthorizationRunner {
    fn default() -> Self {
        Self {
            url: DASHBOARD_URL.to_string(),
            page: Page::Dashboard,
            inspector_text: INITIAL_INSPECTOR_MARKUP.to_string(),
            inspector_open: false,
            admin_enabled: false,
            error: None,
            popup: None,
        }
    }
}

impl AuthorizationRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Edit the URL bar without navigating.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    /// Navigate to whatever the URL bar holds.
    ///
    /// The admin address only resolves once the button has been enabled;
    /// before that it is indistinguishable from an unknown page.
    pub fn submit_url(&mut self) {
        match self.url.as_str() {
            DASHBOARD_URL => self.show(Page::Dashboard),
            ADMIN_URL if self.admin_enabled => self.show(Page::AdminPanel),
            _ => {
                self.page = Page::NotFound;
                self.error = Some(NOT_FOUND_ERROR);
            }
        }
    }

    fn show(&mut self, page: Page) {
        self.page = page;
        self.error = None;
    }

    /// "Back to Dashboard" from the not-found page.
    pub fn back_to_dashboard(&mut self) {
        self.url = DASHBOARD_URL.to_string();
        self.show(Page::Dashboard);
    }

    /// Right-click on the admin button.
    pub fn inspect_admin_button(&mut self) {
        if self.page == Page::Dashboard {
            self.inspector_open = true;
        }
    }

    pub fn edit_inspector(&mut self, text: impl Into<String>) {
        self.inspector_text = text.into();
    }

    pub fn close_inspector(&mut self) {
        self.inspector_open = false;
    }

    /// Apply the edited markup; the button is enabled if it now says so.
    pub fn apply_inspector(&mut self) {
        if self.inspector_text.contains(EXPLOIT_MARKER) {
            self.admin_enabled = true;
        }
        self.inspector_open = false;
    }

    /// Click on the admin button. Does nothing while it is disabled.
    pub fn click_admin_button(&mut self) {
        if self.admin_enabled {
            self.url = ADMIN_URL.to_string();
            self.show(Page::AdminPanel);
        }
    }

    /// Leave the admin panel and put the dashboard back in its initial state.
    pub fn exit_admin(&mut self) {
        self.admin_enabled = false;
        self.inspector_text = INITIAL_INSPECTOR_MARKUP.to_string();
        self.url = DASHBOARD_URL.to_string();
        self.show(Page::Dashboard);
    }

    /// Trigger one of the sensitive admin actions.
    pub fn admin_action(&mut self) -> Outcome {
        if self.page == Page::AdminPanel {
            Outcome::Completed
        } else {
            Outcome::Idle
        }
    }

    pub fn press(&mut self, control: BrowserControl) {
        self.popup = Some(control.joke());
    }

    pub fn dismiss_popup(&mut self) {
        self.popup = None;
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub fn inspector_text(&self) -> &str {
        &self.inspector_text
    }

    #[must_use]
    pub fn is_inspector_open(&self) -> bool {
        self.inspector_open
    }

    #[must_use]
    pub fn is_admin_enabled(&self) -> bool {
        self.admin_enabled
    }

    #[must_use]
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    #[must_use]
    pub fn popup(&self) -> Option<&'static str> {
        self.popup
    }
}

impl Runner for AuthorizationRunner {
    type Timer = NoTimer;

    fn fire(&mut self, timer: NoTimer) -> Outcome {
        match timer {}
    }
}

//
// ─── GHOST GAME ────────────────────────────────────────────────────────────────
//

pub const GHOST_MOVE_INTERVAL: Duration = Duration::from_millis(1_000);
pub const CATCH_BADGE_DURATION: Duration = Duration::from_millis(1_000);
pub const GHOST_MAX_POSITION: f64 = 90.0;
pub const GHOST_MAX_STEP: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GhostTimer {
    Move,
    HideBadge,
}

/// Source of per-axis offsets in `[-GHOST_MAX_STEP, GHOST_MAX_STEP]`.
pub type Jitter = fn() -> f64;

fn still() -> f64 {
    0.0
}

/// "Catch the ghost" on the not-found page.
///
/// Positions are percentages of the play area.
#[derive(Debug, Clone)]
pub struct GhostGame {
    x: f64,
    y: f64,
    score: u32,
    badge_visible: bool,
    jitter: Jitter,
}

impl Default for GhostGame {
    fn default() -> Self {
        Self::new(still)
    }
}

impl GhostGame {
    #[must_use]
    pub fn new(jitter: Jitter) -> Self {
        Self {
            x: 50.0,
            y: 50.0,
            score: 0,
            badge_visible: false,
            jitter,
        }
    }

    /// First movement timer; re-armed by every `GhostTimer::Move`.
    #[must_use]
    pub fn start(&self) -> Outcome<GhostTimer> {
        Outcome::After(GHOST_MOVE_INTERVAL, GhostTimer::Move)
    }

    /// Shift the ghost, keeping it inside the play area.
    pub fn nudge(&mut self, dx: f64, dy: f64) {
        let step = |v: f64| v.clamp(-GHOST_MAX_STEP, GHOST_MAX_STEP);
        self.x = (self.x + step(dx)).clamp(0.0, GHOST_MAX_POSITION);
        self.y = (self.y + step(dy)).clamp(0.0, GHOST_MAX_POSITION);
    }

    pub fn catch(&mut self) -> Outcome<GhostTimer> {
        self.score += 1;
        self.badge_visible = true;
        Outcome::After(CATCH_BADGE_DURATION, GhostTimer::HideBadge)
    }

    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_badge_visible(&self) -> bool {
        self.badge_visible
    }

    /// Encouragement under the play area, if the score earns one.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        match self.score {
            1 => Some("Nice catch! But can you catch more? 🎯"),
            5..=9 => Some("You're getting good at this! 🌟"),
            10.. => Some("Ghost hunter extraordinaire! 👑"),
            _ => None,
        }
    }
}

impl Runner for GhostGame {
    type Timer = GhostTimer;

    fn fire(&mut self, timer: GhostTimer) -> Outcome<GhostTimer> {
        match timer {
            GhostTimer::Move => {
                let (dx, dy) = ((self.jitter)(), (self.jitter)());
                self.nudge(dx, dy);
                Outcome::After(GHOST_MOVE_INTERVAL, GhostTimer::Move)
            }
            GhostTimer::HideBadge => {
                self.badge_visible = false;
                Outcome::Idle
            }
        }
    }
}
