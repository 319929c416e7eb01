#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    SessionUnavailable,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::SessionUnavailable => {
                "Impossible de démarrer la session. Vérifiez le défi demandé au lancement."
            }
        }
    }
}
