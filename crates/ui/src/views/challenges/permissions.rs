use dioxus::prelude::*;
use iam_core::runners::PermissionsRunner;
use iam_core::runners::permissions::{EMPLOYEES, Permission, UserScore};

use crate::views::popups::{InfoBox, VerdictBanner};
use crate::views::timers::{drive, use_runner_timers};

#[component]
pub fn PermissionsChallenge(on_success: Callback<()>) -> Element {
    let mut runner = use_signal(PermissionsRunner::new);
    let timers = use_runner_timers();

    let state = runner.read();
    let completed = state.completed_count();
    let selected = state.selected();
    let verification = state.is_verification_shown();
    let last_user = state.is_last_user();
    let scores: Vec<_> = (0..EMPLOYEES.len()).map(|user| state.score(user)).collect();
    let grants = selected.and_then(|user| state.grants(user).copied());
    drop(state);

    let all_correct = scores
        .iter()
        .all(|score| score.is_some_and(|score| score.is_correct()));
    let progress_style = format!("width: {:.0}%;", completed as f64 / 3.0 * 100.0);

    rsx! {
        div { class: "permissions-challenge",
            InfoBox { title: "À propos de cette approche",
                p {
                    "Cette page illustre l'approche traditionnelle de gestion des accès via une interface de type \"Active Directory\". "
                    "Les autorisations sont attribuées directement aux utilisateurs de manière individuelle."
                }
                p {
                    "Bien que simple à comprendre, cette approche devient difficile à maintenir lorsque le nombre d'utilisateurs et de permissions augmente."
                }
            }

            div { class: "exercise-progress",
                span { "Progression: {completed}/3 utilisateurs configurés" }
                div { class: "mini-track",
                    div { class: "mini-fill", style: "{progress_style}" }
                }
                button {
                    class: "btn btn-link",
                    r#type: "button",
                    onclick: move |_| {
                        timers.cancel_all();
                        runner.write().reset();
                    },
                    "Tout réinitialiser"
                }
            }

            div { class: "permissions-layout",
                div { class: "user-list",
                    h2 { "Utilisateurs" }
                    for (index, employee) in EMPLOYEES.iter().enumerate() {
                        button {
                            key: "{employee.email}",
                            class: if selected == Some(index) { "user-card selected" } else { "user-card" },
                            r#type: "button",
                            onclick: move |_| runner.write().select_user(index),
                            span { class: "avatar", "{employee.initials}" }
                            div { class: "user-card-text",
                                h3 { "{employee.name}" }
                                p { class: "user-card-job", "{employee.job}" }
                                p { class: "user-card-email", "{employee.email}" }
                            }
                            if let Some(score) = scores[index] {
                                span {
                                    class: score_class(verification, score),
                                    if verification { "{score.score}/{score.total}" } else { "✓" }
                                }
                            }
                        }
                    }
                }

                div { class: "permission-panel",
                    match (selected, grants) {
                        (Some(user), Some(grants)) => rsx! {
                            div { class: "permission-panel-head",
                                h2 { "Permissions de {EMPLOYEES[user].name}" }
                                if !verification {
                                    div { class: "permission-panel-actions",
                                        button {
                                            class: "btn btn-link",
                                            r#type: "button",
                                            onclick: move |_| runner.write().deny_all(),
                                            "Tout refuser"
                                        }
                                        button {
                                            class: if last_user { "btn btn-success" } else { "btn btn-primary" },
                                            r#type: "button",
                                            onclick: move |_| {
                                                let outcome = runner.write().save();
                                                drive(runner, timers, on_success, outcome);
                                            },
                                            if last_user { "Vérifier mes réponses" } else { "Sauvegarder" }
                                        }
                                    }
                                }
                            }
                            div { class: "permission-rows",
                                for permission in Permission::ALL {
                                    label {
                                        key: "{permission.id()}",
                                        class: if verification { "permission-row locked" } else { "permission-row" },
                                        div { class: "permission-row-text",
                                            span { class: "permission-category", "{permission.category()}" }
                                            h3 { "{permission.label()}" }
                                            p { "{permission.description()}" }
                                        }
                                        input {
                                            r#type: "checkbox",
                                            class: "toggle",
                                            checked: grants.allows(permission),
                                            disabled: verification,
                                            onchange: move |_| runner.write().toggle(permission),
                                        }
                                    }
                                }
                            }
                        },
                        _ => rsx! {
                            p { class: "permission-panel-empty",
                                "Sélectionnez un utilisateur pour gérer ses autorisations"
                            }
                        },
                    }
                }
            }

            if verification {
                VerdictBanner { success: all_correct,
                    if all_correct {
                        h3 { "Félicitations ! Découvrons maintenant l'approche RBAC" }
                        p { "Chaque utilisateur dispose exactement des accès dont il a besoin." }
                    } else {
                        h3 { "Certaines permissions ne correspondent pas aux fonctions" }
                        p { "Comparez les scores, puis réinitialisez pour réessayer." }
                    }
                    div { class: "verdict-limits",
                        h4 { "Limitations de l'approche actuelle" }
                        ul {
                            li { "Gestion manuelle des permissions pour chaque utilisateur" }
                            li { "Risque d'incohérence dans l'attribution des permissions" }
                            li { "Difficulté à maintenir une politique de sécurité cohérente" }
                            li { "Complexité croissante avec le nombre d'utilisateurs" }
                        }
                    }
                }
            }
        }
    }
}

fn score_class(verification: bool, score: UserScore) -> &'static str {
    match (verification, score.is_correct()) {
        (false, _) => "score-badge",
        (true, true) => "score-badge ok",
        (true, false) => "score-badge ko",
    }
}
