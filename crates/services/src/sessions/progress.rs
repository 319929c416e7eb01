use iam_core::model::Session;

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionProgress {
    pub total: usize,
    pub completed: usize,
    pub percent: f64,
}

impl SessionProgress {
    #[must_use]
    pub fn of(session: &Session) -> Self {
        Self {
            total: session.total(),
            completed: session.completed_count(),
            percent: session.progress_percent(),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }

    /// "completed/total", as shown next to the bar.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}/{}", self.completed, self.total)
    }

    /// Bar width, rounded for display.
    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{:.0}%", self.percent)
    }
}
