use services::SessionProgress;

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressVm {
    pub label: String,
    pub percent_label: String,
    pub bar_style: String,
    pub complete: bool,
}

impl From<&SessionProgress> for ProgressVm {
    fn from(progress: &SessionProgress) -> Self {
        Self {
            label: progress.label(),
            percent_label: progress.percent_label(),
            bar_style: format!("width: {:.2}%;", progress.percent.clamp(0.0, 100.0)),
            complete: progress.is_complete(),
        }
    }
}

#[must_use]
pub fn map_progress(progress: &SessionProgress) -> ProgressVm {
    ProgressVm::from(progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iam_core::catalog::Catalog;
    use iam_core::model::Session;

    #[test]
    fn fresh_session_renders_empty_bar() {
        let session = Session::new(Catalog::builtin().unwrap().into_challenges());
        let vm = map_progress(&SessionProgress::of(&session));
        assert_eq!(vm.label, "0/7");
        assert_eq!(vm.percent_label, "0%");
        assert_eq!(vm.bar_style, "width: 0.00%;");
        assert!(!vm.complete);
    }
}
