use std::time::Duration;

use dioxus::prelude::*;
use iam_core::runners::federated::{
    APPS, FRUSTRATION_MAX, Provider, REUSED_PASSWORD_WARNING, SsoModal, SsoStep,
};
use iam_core::runners::{FederatedRunner, Phase};

use crate::views::popups::{InfoBox, WarningPopup};
use crate::views::timers::{RunnerTimers, drive, use_runner_timers};

const HAPTIC_PULSE: Duration = Duration::from_millis(500);

#[component]
pub fn FederatedIdentityChallenge(on_success: Callback<()>) -> Element {
    let mut runner = use_signal(FederatedRunner::new);
    let timers = use_runner_timers();
    let shaking = use_signal(|| false);

    let state = runner.read();
    let phase = state.phase();
    let warning_shown = state.is_warning_shown();
    let federated_visible = state.is_federated_visible();
    let frustration = state.frustration();
    let sso = state.sso().copied();
    drop(state);

    rsx! {
        div { class: "federated-challenge",
            if warning_shown {
                WarningPopup {
                    message: REUSED_PASSWORD_WARNING.to_string(),
                    on_close: move |()| runner.write().dismiss_warning(),
                }
            }

            InfoBox { title: "Identité Fédérée",
                p {
                    "Découvrez comment l'identité fédérée simplifie la gestion des comptes tout en renforçant la sécurité."
                }
            }

            match phase {
                Phase::Registration => rsx! {
                    div { class: "federated-layout",
                        div { class: "federated-main",
                            if federated_visible {
                                ProviderPicker { runner, timers, on_success }
                            } else {
                                RegistrationForm { runner, timers, shaking, on_success }
                            }
                        }
                        FrustrationGauge { level: frustration, shaking: shaking() }
                    }
                },
                Phase::Summary => rsx! { FederatedSummary {} },
            }

            if let Some(modal) = sso {
                SsoProgress { modal }
            }
        }
    }
}

/// Consume the runner's one-shot pulse and shake the gauge for a moment.
fn pulse_if_saturated(mut runner: Signal<FederatedRunner>, timers: RunnerTimers, shaking: Signal<bool>) {
    if runner.write().take_haptic_pulse() {
        let mut shaking = shaking;
        shaking.set(true);
        timers.schedule(HAPTIC_PULSE, move || shaking.set(false));
    }
}

#[component]
fn RegistrationForm(
    runner: Signal<FederatedRunner>,
    timers: RunnerTimers,
    shaking: Signal<bool>,
    on_success: Callback<()>,
) -> Element {
    let mut runner = runner;
    let state = runner.read();
    let app = state.current_app();
    let app_index = state.app_index();
    let username = state.draft_username().to_string();
    let password = state.draft_password().to_string();
    let requirements = state.requirement_status();
    let can_submit = state.can_submit();
    let accounts: Vec<String> = state
        .accounts()
        .iter()
        .map(|account| format!("{} · {}", account.app, account.username))
        .collect();
    drop(state);

    rsx! {
        div { class: "app-signup app-{app.id}",
            div { class: "app-signup-steps",
                for (index, definition) in APPS.iter().enumerate() {
                    span {
                        key: "{definition.id}",
                        class: step_class(index, app_index),
                        "{definition.name}"
                    }
                }
            }
            h2 { class: "app-signup-name", "{app.name}" }
            p { class: "app-signup-tagline", "{app.tagline}" }
            form {
                class: "app-signup-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let outcome = runner.write().submit();
                    pulse_if_saturated(runner, timers, shaking);
                    drive(runner, timers, on_success, outcome);
                },
                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "{app.username_placeholder}",
                    value: "{username}",
                    oninput: move |evt| {
                        runner.write().edit_username(evt.value());
                        pulse_if_saturated(runner, timers, shaking);
                    },
                }
                input {
                    class: "input",
                    r#type: "password",
                    placeholder: "{app.password_placeholder}",
                    value: "{password}",
                    oninput: move |evt| {
                        runner.write().edit_password(evt.value());
                        pulse_if_saturated(runner, timers, shaking);
                    },
                }
                ul { class: "requirements",
                    for (requirement, met) in requirements {
                        li { class: if met { "requirement met" } else { "requirement" },
                            if met { "✓ " } else { "✗ " }
                            "{requirement.label()}"
                        }
                    }
                }
                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: !can_submit,
                    "{app.submit_label}"
                }
            }
            if !accounts.is_empty() {
                div { class: "accounts",
                    h4 { "Comptes créés" }
                    ul {
                        for account in accounts {
                            li { "{account}" }
                        }
                    }
                }
            }
        }
    }
}

fn step_class(index: usize, current: usize) -> &'static str {
    match index.cmp(&current) {
        std::cmp::Ordering::Less => "step done",
        std::cmp::Ordering::Equal => "step current",
        std::cmp::Ordering::Greater => "step",
    }
}

#[component]
fn ProviderPicker(
    runner: Signal<FederatedRunner>,
    timers: RunnerTimers,
    on_success: Callback<()>,
) -> Element {
    let mut runner = runner;
    rsx! {
        div { class: "provider-picker",
            h2 { class: "provider-picker-brand", "Boond" }
            p { "Connectez-vous avec votre fournisseur d'identité" }
            div { class: "provider-buttons",
                for provider in Provider::ALL {
                    button {
                        key: "{provider.name()}",
                        class: "btn provider-button",
                        r#type: "button",
                        onclick: move |evt| {
                            evt.prevent_default();
                            let outcome = runner.write().choose_provider(provider);
                            drive(runner, timers, on_success, outcome);
                        },
                        "Se connecter avec {provider.name()}"
                    }
                }
            }
        }
    }
}

#[component]
fn FrustrationGauge(level: u8, shaking: bool) -> Element {
    let style = format!(
        "height: {}%;",
        u32::from(level) * 100 / u32::from(FRUSTRATION_MAX)
    );
    let face = match level {
        0..=32 => "🙂",
        33..=65 => "😕",
        66..=99 => "😠",
        _ => "🤯",
    };

    rsx! {
        div { class: if shaking { "gauge shaking" } else { "gauge" },
            h4 { "Niveau de frustration" }
            div { class: "gauge-track",
                div { class: "gauge-fill", style: "{style}" }
            }
            div { class: "gauge-face", "{face}" }
            div { class: "gauge-value", "{level}%" }
        }
    }
}

#[component]
fn SsoProgress(modal: SsoModal) -> Element {
    let message = modal.step.message(modal.provider);
    let current = modal.step.number();
    let icon = match modal.step {
        SsoStep::SendRequest => "📨",
        SsoStep::VerifyIdentity => "⏳",
        SsoStep::ProviderConfirms => "✅",
        SsoStep::AccessGranted => "🛡",
    };

    rsx! {
        div { class: if modal.exiting { "popup-overlay sso exiting" } else { "popup-overlay sso" },
            div { class: "popup sso-modal",
                div { class: "sso-icon", "{icon}" }
                p { class: "sso-message", "{message}" }
                div { class: "sso-steps",
                    for number in 1..=SsoStep::COUNT {
                        span {
                            key: "{number}",
                            class: if number <= current { "sso-dot active" } else { "sso-dot" },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FederatedSummary() -> Element {
    rsx! {
        div { class: "federated-summary",
            div { class: "verdict verdict-success",
                h2 { "Félicitations !" }
                p {
                    "Vous venez de découvrir la puissance de l'identité fédérée. "
                    "Un seul compte sécurisé pour accéder à toutes vos applications."
                }
            }
            div { class: "summary-grid",
                div { class: "summary-card",
                    h3 { "Expérience Utilisateur" }
                    p { "Plus besoin de gérer de multiples identifiants et mots de passe" }
                }
                div { class: "summary-card",
                    h3 { "Sécurité Renforcée" }
                    p { "Une identité unique et forte, gérée de manière centralisée" }
                }
                div { class: "summary-card",
                    h3 { "Efficacité Opérationnelle" }
                    p { "Réduction des coûts de gestion et support IT" }
                }
            }
        }
    }
}
