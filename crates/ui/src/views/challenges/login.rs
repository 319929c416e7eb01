use dioxus::prelude::*;
use iam_core::runners::LoginRunner;
use iam_core::runners::login::{LoginField, VULNERABILITIES};

use crate::views::timers::{drive, use_runner_timers};

#[component]
pub fn LoginChallenge(on_success: Callback<()>) -> Element {
    let mut runner = use_signal(LoginRunner::new);
    let timers = use_runner_timers();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let outcome = runner.write().submit(&username.read(), &password.read());
        drive(runner, timers, on_success, outcome);
    };

    let state = runner.read();
    let total_attempts = state.total_attempts();
    let failure = state.last_failure().cloned();
    drop(state);

    let username_failure = failure
        .clone()
        .filter(|failure| failure.field == LoginField::Username);
    let password_failure = failure.filter(|failure| failure.field == LoginField::Password);

    rsx! {
        div { class: "login-challenge",
            div { class: "login-card",
                h3 { class: "login-title", "Connexion Administrateur" }
                form { class: "login-form", onsubmit: on_submit,
                    div { class: "form-field",
                        label { r#for: "login-username", "Nom d'utilisateur" }
                        input {
                            id: "login-username",
                            r#type: "text",
                            class: if username_failure.is_some() { "input input-error" } else { "input" },
                            placeholder: "Entrez le nom d'utilisateur",
                            value: "{username}",
                            oninput: move |evt| username.set(evt.value()),
                        }
                        if let Some(failure) = &username_failure {
                            p { class: "form-error", "{failure.message}" }
                            if let Some(hint) = &failure.hint {
                                p { class: "form-hint", "{hint}" }
                            }
                        }
                    }
                    div { class: "form-field",
                        label { r#for: "login-password", "Mot de passe" }
                        input {
                            id: "login-password",
                            r#type: "password",
                            class: if password_failure.is_some() { "input input-error" } else { "input" },
                            placeholder: "Entrez le mot de passe",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                        if let Some(failure) = &password_failure {
                            p { class: "form-error", "{failure.message}" }
                            if let Some(hint) = &failure.hint {
                                p { class: "form-hint", "{hint}" }
                            }
                        }
                    }
                    div { class: "login-attempts", "Nombre total de tentatives: {total_attempts}" }
                    button { class: "btn btn-primary btn-block", r#type: "submit", "Se connecter" }
                }
                div { class: "login-vulnerabilities",
                    h4 { "Vulnérabilités de sécurité présentes:" }
                    ul {
                        for vulnerability in VULNERABILITIES {
                            li { "{vulnerability}" }
                        }
                    }
                }
            }
        }
    }
}
