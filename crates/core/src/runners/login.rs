use crate::runners::{NoTimer, Outcome, Runner};

pub const EXPECTED_USERNAME: &str = "exalt";
pub const EXPECTED_PASSWORD: &str = "shield";

/// Weaknesses the login form deliberately demonstrates.
pub const VULNERABILITIES: [&str; 7] = [
    "Pas de politique de mot de passe fort",
    "Absence de limitation de tentatives (rate limiting)",
    "Pas de verrouillage de compte",
    "Absence de CAPTCHA",
    "Messages d'erreur trop descriptifs",
    "Pas d'authentification à deux facteurs (2FA)",
    "Indices de sécurité révélateurs",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

impl LoginField {
    #[must_use]
    pub fn error_message(self) -> &'static str {
        match self {
            LoginField::Username => "Nom d'utilisateur incorrect.",
            LoginField::Password => "Mot de passe incorrect.",
        }
    }

    /// Hint unlocked after `attempts` failures on this field.
    #[must_use]
    pub fn hint(self, attempts: u32) -> Option<&'static str> {
        let hint = match (self, attempts) {
            (LoginField::Username, 15..) => "🔍 What about the name of our company?",
            (LoginField::Username, 10..) => "🏢 Notre nom est synonyme d'élévation...",
            (LoginField::Username, 5..) => "💡 Regardez notre logo d'entreprise",
            (LoginField::Password, 15..) => "🛡️ What about our entity?",
            (LoginField::Password, 10..) => "🔐 Ce qui nous protège...",
            (LoginField::Password, 5..) => "🤔 Notre symbole de protection",
            _ => return None,
        };
        Some(hint)
    }
}

/// Feedback shown under the form after a failed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginFailure {
    pub field: LoginField,
    pub message: &'static str,
    pub hint: Option<&'static str>,
}

/// A login form with hard-coded credentials, no lockout and no rate limit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginRunner {
    username_attempts: u32,
    password_attempts: u32,
    last_failure: Option<LoginFailure>,
}

impl LoginRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a credential pair. The password is only looked at once the
    /// username matches.
    pub fn submit(&mut self, username: &str, password: &str) -> Outcome {
        if !username.eq_ignore_ascii_case(EXPECTED_USERNAME) {
            self.username_attempts += 1;
            self.fail(LoginField::Username, self.username_attempts);
            return Outcome::Idle;
        }
        if !password.eq_ignore_ascii_case(EXPECTED_PASSWORD) {
            self.password_attempts += 1;
            self.fail(LoginField::Password, self.password_attempts);
            return Outcome::Idle;
        }
        self.last_failure = None;
        Outcome::Completed
    }

    fn fail(&mut self, field: LoginField, attempts: u32) {
        self.last_failure = Some(LoginFailure {
            field,
            message: field.error_message(),
            hint: field.hint(attempts),
        });
    }

    #[must_use]
    pub fn username_attempts(&self) -> u32 {
        self.username_attempts
    }

    #[must_use]
    pub fn password_attempts(&self) -> u32 {
        self.password_attempts
    }

    #[must_use]
    pub fn total_attempts(&self) -> u32 {
        self.username_attempts + self.password_attempts
    }

    #[must_use]
    pub fn last_failure(&self) -> Option<&LoginFailure> {
        self.last_failure.as_ref()
    }
}

impl Runner for LoginRunner {
    type Timer = NoTimer;

    fn fire(&mut self, timer: NoTimer) -> Outcome {
        match timer {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_match_in_any_case() {
        let mut runner = LoginRunner::new();
        assert_eq!(runner.submit("EXALT", "SHIELD"), Outcome::Completed);
        assert_eq!(runner.total_attempts(), 0);
        assert_eq!(LoginRunner::new().submit("Exalt", "sHiElD"), Outcome::Completed);
    }

    #[test]
    fn wrong_username_only_counts_username() {
        let mut runner = LoginRunner::new();
        assert_eq!(runner.submit("admin", "shield"), Outcome::Idle);
        assert_eq!(runner.username_attempts(), 1);
        assert_eq!(runner.password_attempts(), 0);
        let failure = runner.last_failure().unwrap();
        assert_eq!(failure.field, LoginField::Username);
        assert_eq!(failure.message, "Nom d'utilisateur incorrect.");
        assert_eq!(failure.hint, None);
    }

    #[test]
    fn wrong_password_counts_password_once() {
        let mut runner = LoginRunner::new();
        assert_eq!(runner.submit("exalt", "hunter2"), Outcome::Idle);
        assert_eq!(runner.username_attempts(), 0);
        assert_eq!(runner.password_attempts(), 1);
        assert_eq!(runner.last_failure().unwrap().field, LoginField::Password);
    }

    #[test]
    fn username_hints_unlock_at_thresholds() {
        let field = LoginField::Username;
        assert_eq!(field.hint(4), None);
        let tiers = [field.hint(5), field.hint(10), field.hint(15)];
        assert!(tiers.iter().all(Option::is_some));
        assert_ne!(tiers[0], tiers[1]);
        assert_ne!(tiers[1], tiers[2]);
        assert_eq!(field.hint(9), tiers[0]);
        assert_eq!(field.hint(40), tiers[2]);
    }

    #[test]
    fn hint_follows_the_submission_count() {
        let mut runner = LoginRunner::new();
        for _ in 0..5 {
            let _ = runner.submit("nope", "");
        }
        assert_eq!(
            runner.last_failure().and_then(|f| f.hint),
            Some("💡 Regardez notre logo d'entreprise")
        );
        let _ = runner.submit("exalt", "wrong");
        assert_eq!(runner.last_failure().and_then(|f| f.hint), None);
        assert_eq!(runner.total_attempts(), 6);
    }
}
