use dioxus::prelude::*;
use iam_core::model::ChallengeId;
use services::SessionService;

use crate::context::AppContext;
use crate::vm::{map_challenge_cards, map_challenge_detail, map_progress};

use super::shell::{ChallengeFrame, ChallengeGrid, Header, ProgressSection};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let initial = use_hook(|| ctx.initial_session());

    rsx! {
        div { class: "page",
            Header {}
            match initial {
                Ok(session) => rsx! { ChallengeBoard { initial: session } },
                Err(err) => rsx! {
                    div { class: "view-error",
                        p { "{err.message()}" }
                    }
                },
            }
        }
    }
}

/// Owns the learner session for as long as the home view is mounted.
#[component]
fn ChallengeBoard(initial: SessionService) -> Element {
    let mut session = use_signal(move || initial);

    let on_select = move |id: ChallengeId| {
        // Unknown ids are logged by the service; the grid stays as it was.
        let _ = session.write().select(&id);
    };
    let on_back = move |()| {
        session.write().clear_selection();
    };
    let on_complete = move |()| {
        session.write().complete_selected();
    };

    let current = session.read();
    let progress = map_progress(&current.progress());
    let detail = current.selected().map(map_challenge_detail);
    let cards = map_challenge_cards(current.challenges());
    drop(current);

    rsx! {
        main { class: "board",
            ProgressSection { progress }
            if let Some(detail) = detail {
                ChallengeFrame { detail, on_back, on_complete }
            } else {
                ChallengeGrid { cards, on_select }
            }
        }
    }
}
