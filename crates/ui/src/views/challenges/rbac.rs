use dioxus::prelude::*;
use iam_core::runners::RbacRunner;
use iam_core::runners::rbac::{RBAC_USERS, ROLES};

use crate::views::popups::{InfoBox, VerdictBanner};
use crate::views::timers::{drive, use_runner_timers};

#[component]
pub fn RbacChallenge(on_success: Callback<()>) -> Element {
    let mut runner = use_signal(RbacRunner::new);
    let timers = use_runner_timers();

    let state = runner.read();
    let assigned_count = state.assigned_count();
    let selected = state.selected();
    let verification = state.is_verification_shown();
    let can_verify = state.can_verify();
    let can_retry = state.can_retry();
    let all_correct = state.all_correct();
    let unassigned: Vec<usize> = (0..RBAC_USERS.len())
        .filter(|&user| state.assignment(user).is_none())
        .collect();
    let members: Vec<Vec<(usize, Option<bool>)>> = (0..ROLES.len())
        .map(|role| state.members(role).map(|user| (user, state.mark(user))).collect())
        .collect();
    drop(state);

    let progress_style = format!(
        "width: {:.0}%;",
        assigned_count as f64 / RBAC_USERS.len() as f64 * 100.0
    );

    rsx! {
        div { class: "rbac-challenge",
            InfoBox { title: "L'approche RBAC",
                p {
                    "Le contrôle d'accès basé sur les rôles (RBAC) simplifie la gestion des permissions en les attribuant à des rôles plutôt qu'à des utilisateurs individuels."
                }
                p { "Héritage: Les rôles peuvent hériter des permissions d'autres rôles, créant une hiérarchie naturelle." }
                p { "Moindre privilège: Chaque utilisateur reçoit uniquement les accès nécessaires à sa fonction." }
            }

            div { class: "exercise-progress",
                span { "Progression: {assigned_count}/{RBAC_USERS.len()} utilisateurs assignés" }
                div { class: "mini-track",
                    div { class: "mini-fill", style: "{progress_style}" }
                }
                if can_retry {
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            timers.cancel_all();
                            runner.write().reset();
                        },
                        "⟲ Réessayer"
                    }
                }
            }

            div { class: "rbac-layout",
                div { class: "user-list",
                    h2 { "Utilisateurs à assigner" }
                    for user in unassigned {
                        div {
                            key: "{RBAC_USERS[user].email}",
                            class: if selected == Some(user) { "user-card selected" } else { "user-card" },
                            draggable: "true",
                            ondragstart: move |_| runner.write().start_drag(user),
                            onclick: move |_| runner.write().click_user(user),
                            span { class: "avatar", "{RBAC_USERS[user].initials}" }
                            div { class: "user-card-text",
                                h3 { "{RBAC_USERS[user].name}" }
                                p { class: "user-card-job", "{RBAC_USERS[user].job}" }
                                p { class: "user-card-email", "{RBAC_USERS[user].email}" }
                            }
                        }
                    }
                }

                div { class: "role-list",
                    div { class: "role-list-head",
                        h2 { "Rôles et permissions" }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: !can_verify,
                            onclick: move |_| {
                                let outcome = runner.write().verify();
                                drive(runner, timers, on_success, outcome);
                            },
                            "Vérifier les assignations"
                        }
                    }
                    for (role, definition) in ROLES.iter().enumerate() {
                        div {
                            key: "{definition.name}",
                            class: if selected.is_some() { "role-card droppable" } else { "role-card" },
                            ondragover: move |evt| evt.prevent_default(),
                            ondrop: move |evt| {
                                evt.prevent_default();
                                runner.write().drop_on(role);
                            },
                            onclick: move |_| runner.write().click_role(role),
                            div { class: "role-card-head",
                                span { class: "role-number", "{role + 1}" }
                                h3 { "{definition.name}" }
                            }
                            p { class: "role-description", "{definition.description}" }
                            ul { class: "role-permissions",
                                for permission in definition.permissions.iter() {
                                    li { "{permission}" }
                                }
                            }
                            div { class: "role-members",
                                for (user, mark) in members[role].clone() {
                                    button {
                                        key: "{user}",
                                        class: mark_class(mark),
                                        r#type: "button",
                                        title: if verification { "" } else { "Cliquez pour retirer l'utilisateur" },
                                        onclick: move |evt| {
                                            evt.stop_propagation();
                                            runner.write().unassign(user);
                                        },
                                        "{RBAC_USERS[user].name}"
                                        match mark {
                                            Some(true) => rsx! { span { class: "mark", " ✓" } },
                                            Some(false) => rsx! { span { class: "mark", " ✗" } },
                                            None => rsx! {},
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if verification {
                VerdictBanner { success: all_correct,
                    if all_correct {
                        h3 { "Bravo ! Chaque utilisateur a le rôle qui correspond à sa fonction." }
                    } else {
                        h3 { "Certaines assignations sont incorrectes." }
                        p { "Les utilisateurs marqués ✗ n'ont pas le bon rôle. Réessayez !" }
                    }
                }
            }
        }
    }
}

fn mark_class(mark: Option<bool>) -> &'static str {
    match mark {
        None => "member-chip",
        Some(true) => "member-chip correct",
        Some(false) => "member-chip incorrect",
    }
}
