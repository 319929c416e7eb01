use dioxus::prelude::*;
use iam_core::runners::LeastPrivilegeRunner;
use iam_core::runners::least_privilege::{Role, RoleFeedback, Task};

use crate::views::popups::InfoBox;
use crate::views::timers::{drive, use_runner_timers};

#[component]
pub fn LeastPrivilegeChallenge(on_success: Callback<()>) -> Element {
    let mut runner = use_signal(LeastPrivilegeRunner::new);
    let timers = use_runner_timers();

    let state = runner.read();
    let showing_results = state.is_showing_results();
    let rows: Vec<(Role, Option<RoleFeedback>, Vec<(Task, bool)>)> = Role::ALL
        .into_iter()
        .map(|role| {
            let tasks = Task::ALL
                .into_iter()
                .map(|task| (task, state.is_assigned(role, task)))
                .collect();
            (role, state.feedback(role), tasks)
        })
        .collect();
    drop(state);

    rsx! {
        div { class: "least-privilege-challenge",
            InfoBox { title: "Principe du moindre privilège",
                p {
                    "Chaque rôle doit avoir uniquement les permissions nécessaires à l'accomplissement de ses tâches, ni plus ni moins."
                }
                p { "⚠ Trop de permissions augmente les risques de sécurité." }
                p { "✗ Trop peu de permissions empêche les utilisateurs de travailler." }
            }

            div { class: "exercise-actions",
                h2 { "Assignez les permissions minimales nécessaires" }
                div { class: "exercise-actions-buttons",
                    button {
                        class: "btn btn-link",
                        r#type: "button",
                        onclick: move |_| {
                            timers.cancel_all();
                            runner.write().reset();
                        },
                        "Réinitialiser"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: showing_results,
                        onclick: move |_| {
                            let outcome = runner.write().verify();
                            drive(runner, timers, on_success, outcome);
                        },
                        "Vérifier"
                    }
                }
            }

            div { class: "role-grid",
                for (role, feedback, tasks) in rows {
                    div { key: "{role.label()}", class: feedback_class(feedback),
                        div { class: "role-card-head",
                            div {
                                h3 { "{role.label()}" }
                                p { class: "role-description", "{role.description()}" }
                            }
                            if let Some(feedback) = feedback {
                                div { class: "role-feedback",
                                    if feedback.too_many {
                                        p { class: "feedback too-many", "⚠ Trop de permissions accordées" }
                                    }
                                    if feedback.too_few {
                                        p { class: "feedback too-few", "⚠ Permissions insuffisantes" }
                                    }
                                    if feedback.is_optimal() {
                                        p { class: "feedback optimal", "✓ {feedback.headline()}" }
                                    }
                                }
                            }
                        }
                        div { class: "task-grid",
                            for (task, assigned) in tasks {
                                div {
                                    key: "{task.id()}",
                                    class: task_class(assigned, showing_results && role.requires(task)),
                                    onclick: move |_| runner.write().toggle(role, task),
                                    span { class: "task-category", "{task.category()}" }
                                    span { class: "task-label", "{task.label()}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn feedback_class(feedback: Option<RoleFeedback>) -> &'static str {
    match feedback {
        None => "role-card",
        Some(feedback) if feedback.too_many => "role-card too-many",
        Some(feedback) if feedback.too_few => "role-card too-few",
        Some(_) => "role-card optimal",
    }
}

fn task_class(assigned: bool, required: bool) -> &'static str {
    match (assigned, required) {
        (true, true) => "task assigned required",
        (true, false) => "task assigned",
        (false, true) => "task required",
        (false, false) => "task",
    }
}
