use std::collections::HashSet;
use std::time::Duration;

use crate::runners::{Outcome, Runner};

pub const SYMBOLS: &str = "!@#$%^&*";
pub const COMMON_WORDS: [&str; 3] = ["password", "123456", "admin"];

pub const FRUSTRATION_MAX: u8 = 100;
pub const FRUSTRATION_PER_ACCOUNT: u8 = 20;
pub const FRUSTRATION_PER_KEYSTROKE: u8 = 2;

pub const REVEAL_DELAY: Duration = Duration::from_millis(1_000);
pub const SSO_EXIT_DELAY: Duration = Duration::from_millis(1_000);
pub const SUMMARY_DELAY: Duration = Duration::from_millis(6_000);

pub const REUSED_PASSWORD_WARNING: &str = "Pour votre sécurité, n'utilisez jamais le même mot de passe pour différents comptes. Chaque compte doit avoir un mot de passe unique.";

//
// ─── PASSWORD POLICIES ─────────────────────────────────────────────────────────
//

/// One clause of a password policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    MinLength(usize),
    Uppercase,
    Digit,
    Symbol,
    NoCommonWords,
}

impl Requirement {
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Requirement::MinLength(min) => format!("Au moins {min} caractères"),
            Requirement::Uppercase => "Au moins une majuscule".to_string(),
            Requirement::Digit => "Au moins un chiffre".to_string(),
            Requirement::Symbol => format!("Au moins un caractère spécial ({SYMBOLS})"),
            Requirement::NoCommonWords => "Pas de mots communs".to_string(),
        }
    }

    #[must_use]
    pub fn is_met(self, password: &str) -> bool {
        match self {
            Requirement::MinLength(min) => password.chars().count() >= min,
            Requirement::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Requirement::Digit => password.chars().any(|c| c.is_ascii_digit()),
            Requirement::Symbol => password.chars().any(|c| SYMBOLS.contains(c)),
            Requirement::NoCommonWords => {
                let lowered = password.to_lowercase();
                !COMMON_WORDS.iter().any(|word| lowered.contains(word))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub uppercase: bool,
    pub digit: bool,
    pub symbol: bool,
    pub no_common_words: bool,
}

impl PasswordPolicy {
    /// Clauses in display order; the length clause always comes first.
    #[must_use]
    pub fn requirements(&self) -> Vec<Requirement> {
        let mut requirements = vec![Requirement::MinLength(self.min_length)];
        let optional = [
            (self.uppercase, Requirement::Uppercase),
            (self.digit, Requirement::Digit),
            (self.symbol, Requirement::Symbol),
            (self.no_common_words, Requirement::NoCommonWords),
        ];
        requirements.extend(
            optional
                .into_iter()
                .filter_map(|(enabled, requirement)| enabled.then_some(requirement)),
        );
        requirements
    }

    /// Per-clause status for live feedback.
    #[must_use]
    pub fn check(&self, password: &str) -> Vec<(Requirement, bool)> {
        self.requirements()
            .into_iter()
            .map(|requirement| (requirement, requirement.is_met(password)))
            .collect()
    }

    #[must_use]
    pub fn accepts(&self, password: &str) -> bool {
        self.requirements()
            .into_iter()
            .all(|requirement| requirement.is_met(password))
    }
}

/// A consumer application the learner has to sign up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub username_placeholder: &'static str,
    pub password_placeholder: &'static str,
    pub submit_label: &'static str,
    pub policy: PasswordPolicy,
}

pub static APPS: [AppDefinition; 3] = [
    AppDefinition {
        id: "spotify",
        name: "Spotify",
        tagline: "Adresse e-mail ou nom d'utilisateur",
        username_placeholder: "Email ou nom d'utilisateur",
        password_placeholder: "Mot de passe",
        submit_label: "Se connecter",
        policy: PasswordPolicy {
            min_length: 8,
            uppercase: false,
            digit: true,
            symbol: false,
            no_common_words: false,
        },
    },
    AppDefinition {
        id: "gmail",
        name: "Gmail",
        tagline: "Continuer vers Gmail",
        username_placeholder: "Email ou téléphone",
        password_placeholder: "Entrez votre mot de passe",
        submit_label: "Suivant",
        policy: PasswordPolicy {
            min_length: 10,
            uppercase: true,
            digit: true,
            symbol: true,
            no_common_words: false,
        },
    },
    AppDefinition {
        id: "slack",
        name: "Slack",
        tagline: "Nous suggérons d'utiliser l'adresse email que vous utilisez au travail.",
        username_placeholder: "nom@travail.com",
        password_placeholder: "Votre mot de passe",
        submit_label: "Se connecter avec email",
        policy: PasswordPolicy {
            min_length: 12,
            uppercase: true,
            digit: true,
            symbol: true,
            no_common_words: true,
        },
    },
];

//
// ─── SINGLE SIGN-ON ────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Google,
    Microsoft,
    PingId,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Google, Provider::Microsoft, Provider::PingId];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Provider::Google => "Google",
            Provider::Microsoft => "Microsoft",
            Provider::PingId => "Ping ID",
        }
    }
}

/// Stages of the SSO hand-off modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SsoStep {
    SendRequest,
    VerifyIdentity,
    ProviderConfirms,
    AccessGranted,
}

impl SsoStep {
    pub const COUNT: usize = 4;

    /// How long this step stays on screen.
    #[must_use]
    pub fn duration(self) -> Duration {
        match self {
            SsoStep::SendRequest | SsoStep::AccessGranted => Duration::from_millis(2_000),
            SsoStep::VerifyIdentity | SsoStep::ProviderConfirms => Duration::from_millis(2_500),
        }
    }

    #[must_use]
    pub fn next(self) -> Option<SsoStep> {
        match self {
            SsoStep::SendRequest => Some(SsoStep::VerifyIdentity),
            SsoStep::VerifyIdentity => Some(SsoStep::ProviderConfirms),
            SsoStep::ProviderConfirms => Some(SsoStep::AccessGranted),
            SsoStep::AccessGranted => None,
        }
    }

    /// 1-based position, for the step dots and the progress bar.
    #[must_use]
    pub fn number(self) -> usize {
        self as usize + 1
    }

    #[must_use]
    pub fn message(self, provider: Provider) -> String {
        match self {
            SsoStep::SendRequest => {
                format!("Connexion sécurisée à {} en cours...", provider.name())
            }
            SsoStep::VerifyIdentity => "Vérification de votre identité...".to_string(),
            SsoStep::ProviderConfirms => format!("{} a validé votre identité !", provider.name()),
            SsoStep::AccessGranted => "Accès accordé ! Configuration de votre espace...".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SsoModal {
    pub provider: Provider,
    pub step: SsoStep,
    pub exiting: bool,
}

//
// ─── RUNNER ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Creating one account per application.
    #[default]
    Registration,
    /// Post-SSO summary.
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FederatedTimer {
    RevealFederatedOption,
    SsoAdvance,
    SsoFinish,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub app: &'static str,
    pub username: String,
}

/// Password fatigue across three sign-ups, relieved by single sign-on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FederatedRunner {
    phase: Phase,
    app_index: usize,
    accounts: Vec<Account>,
    used_passwords: HashSet<String>,
    frustration: u8,
    haptic_pending: bool,
    draft_username: String,
    draft_password: String,
    warning_shown: bool,
    federated_visible: bool,
    sso: Option<SsoModal>,
}

impl FederatedRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current_app(&self) -> &'static AppDefinition {
        &APPS[self.app_index.min(APPS.len() - 1)]
    }

    pub fn edit_username(&mut self, value: impl Into<String>) {
        self.draft_username = value.into();
        self.bump(FRUSTRATION_PER_KEYSTROKE);
    }

    pub fn edit_password(&mut self, value: impl Into<String>) {
        self.draft_password = value.into();
        self.bump(FRUSTRATION_PER_KEYSTROKE);
    }

    fn bump(&mut self, by: u8) {
        let before = self.frustration;
        self.frustration = before.saturating_add(by).min(FRUSTRATION_MAX);
        if before < FRUSTRATION_MAX && self.frustration == FRUSTRATION_MAX {
            self.haptic_pending = true;
        }
    }

    /// Consume the one-shot pulse raised when the gauge hits its maximum.
    pub fn take_haptic_pulse(&mut self) -> bool {
        std::mem::take(&mut self.haptic_pending)
    }

    /// Live status of every clause of the current policy.
    #[must_use]
    pub fn requirement_status(&self) -> Vec<(Requirement, bool)> {
        self.current_app().policy.check(&self.draft_password)
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.phase == Phase::Registration
            && self.accounts.len() < APPS.len()
            && !self.draft_username.trim().is_empty()
            && self.current_app().policy.accepts(&self.draft_password)
    }

    /// Create the account for the current application.
    pub fn submit(&mut self) -> Outcome<FederatedTimer> {
        if !self.can_submit() {
            return Outcome::Idle;
        }
        if self.used_passwords.contains(&self.draft_password) {
            self.warning_shown = true;
            return Outcome::Idle;
        }

        let password = std::mem::take(&mut self.draft_password);
        let username = std::mem::take(&mut self.draft_username);
        self.used_passwords.insert(password);
        self.accounts.push(Account {
            app: self.current_app().id,
            username: username.trim().to_string(),
        });
        self.bump(FRUSTRATION_PER_ACCOUNT);

        if self.app_index + 1 < APPS.len() {
            self.app_index += 1;
            Outcome::Idle
        } else {
            Outcome::After(REVEAL_DELAY, FederatedTimer::RevealFederatedOption)
        }
    }

    pub fn dismiss_warning(&mut self) {
        self.warning_shown = false;
    }

    /// Start the SSO hand-off with `provider`.
    pub fn choose_provider(&mut self, provider: Provider) -> Outcome<FederatedTimer> {
        if !self.federated_visible || self.sso.is_some() || self.phase != Phase::Registration {
            return Outcome::Idle;
        }
        self.frustration = 0;
        self.haptic_pending = false;
        let step = SsoStep::SendRequest;
        self.sso = Some(SsoModal {
            provider,
            step,
            exiting: false,
        });
        Outcome::After(step.duration(), FederatedTimer::SsoAdvance)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn app_index(&self) -> usize {
        self.app_index
    }

    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    #[must_use]
    pub fn frustration(&self) -> u8 {
        self.frustration
    }

    #[must_use]
    pub fn draft_username(&self) -> &str {
        &self.draft_username
    }

    #[must_use]
    pub fn draft_password(&self) -> &str {
        &self.draft_password
    }

    #[must_use]
    pub fn is_warning_shown(&self) -> bool {
        self.warning_shown
    }

    #[must_use]
    pub fn is_federated_visible(&self) -> bool {
        self.federated_visible
    }

    #[must_use]
    pub fn sso(&self) -> Option<&SsoModal> {
        self.sso.as_ref()
    }
}

impl Runner for FederatedRunner {
    type Timer = FederatedTimer;

    fn fire(&mut self, timer: FederatedTimer) -> Outcome<FederatedTimer> {
        match timer {
            FederatedTimer::RevealFederatedOption => {
                self.federated_visible = true;
                Outcome::Idle
            }
            FederatedTimer::SsoAdvance => {
                let Some(modal) = self.sso.as_mut() else {
                    return Outcome::Idle;
                };
                match modal.step.next() {
                    Some(next) => {
                        modal.step = next;
                        Outcome::After(next.duration(), FederatedTimer::SsoAdvance)
                    }
                    None => {
                        modal.exiting = true;
                        Outcome::After(SSO_EXIT_DELAY, FederatedTimer::SsoFinish)
                    }
                }
            }
            FederatedTimer::SsoFinish => {
                if self.sso.take().is_none() {
                    return Outcome::Idle;
                }
                self.phase = Phase::Summary;
                Outcome::After(SUMMARY_DELAY, FederatedTimer::Success)
            }
            FederatedTimer::Success if self.phase == Phase::Summary => Outcome::Completed,
            FederatedTimer::Success => Outcome::Idle,
        }
    }
}
