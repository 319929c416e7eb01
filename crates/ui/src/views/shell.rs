use dioxus::prelude::*;
use iam_core::model::ChallengeId;

use crate::vm::{ChallengeCardVm, ChallengeDetailVm, ProgressVm};

use super::challenges::ChallengeRunner;

#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "app-header",
            div { class: "app-header-brand",
                span { class: "app-header-icon", "🛡" }
                h1 { "Défi IAM" }
            }
            p { class: "app-header-tagline", "Apprenez la Sécurité en Pratique" }
        }
    }
}

#[component]
pub fn ProgressSection(progress: ProgressVm) -> Element {
    rsx! {
        section { class: "progress-section",
            h2 { "Votre Progression" }
            div { class: "progress-track",
                div {
                    class: if progress.complete { "progress-fill complete" } else { "progress-fill" },
                    style: "{progress.bar_style}",
                }
            }
            div { class: "progress-meta",
                span { "{progress.label}" }
                span { "{progress.percent_label}" }
            }
        }
    }
}

#[component]
pub fn ChallengeCard(card: ChallengeCardVm, on_select: Callback<ChallengeId>) -> Element {
    let id = card.id.clone();
    rsx! {
        div {
            class: if card.completed { "challenge-card completed" } else { "challenge-card" },
            onclick: move |_| on_select.call(id.clone()),
            div { class: "challenge-card-head",
                h3 { "{card.title}" }
                span { class: "challenge-card-icon",
                    if card.completed { "✔" } else { "🔒" }
                }
            }
            p { class: "challenge-card-description", "{card.description}" }
            div { class: "challenge-card-status", "{card.status_label}" }
        }
    }
}

#[component]
pub fn ChallengeGrid(cards: Vec<ChallengeCardVm>, on_select: Callback<ChallengeId>) -> Element {
    rsx! {
        div { class: "challenge-grid",
            for card in cards {
                ChallengeCard { key: "{card.id}", card: card.clone(), on_select }
            }
        }
    }
}

/// The selected challenge: title, principle, its runner and the way back.
#[component]
pub fn ChallengeFrame(
    detail: ChallengeDetailVm,
    on_back: Callback<()>,
    on_complete: Callback<()>,
) -> Element {
    rsx! {
        div { class: "challenge-frame",
            h2 { class: "challenge-frame-title", "{detail.title}" }
            p { class: "challenge-frame-principle", "{detail.principle}" }
            ChallengeRunner {
                key: "{detail.id}",
                kind: detail.kind,
                content: detail.content.clone(),
                on_success: on_complete,
            }
            div { class: "challenge-frame-actions",
                button {
                    class: "btn btn-link",
                    r#type: "button",
                    onclick: move |_| on_back.call(()),
                    "Retour"
                }
            }
        }
    }
}
