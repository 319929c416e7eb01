use dioxus::prelude::*;
use dioxus_router::use_navigator;
use iam_core::runners::GhostGame;

use crate::context::AppContext;
use crate::routes::Route;

use super::timers::{drive, use_runner_timers};

/// "Catch the ghost" 404 page, shared by the fake browser and the app router.
#[component]
pub fn GhostPage(on_back: Callback<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut ghost = use_signal(|| GhostGame::new(ctx.ghost_jitter()));
    let timers = use_runner_timers();
    let ignore = use_callback(|()| {});

    use_hook(move || {
        let first = ghost.peek().start();
        drive(ghost, timers, ignore, first);
    });

    let game = ghost.read();
    let (x, y) = game.position();
    let score = game.score();
    let badge_visible = game.is_badge_visible();
    let message = game.message();
    drop(game);

    rsx! {
        div { class: "ghost-page",
            h1 { class: "ghost-title", "404" }
            p { class: "ghost-subtitle", "Oops! Page not found" }

            div { class: "ghost-arena",
                div {
                    class: "ghost",
                    style: "left: {x}%; top: {y}%;",
                    onclick: move |_| {
                        let outcome = ghost.write().catch();
                        drive(ghost, timers, ignore, outcome);
                    },
                    "👻"
                }
                if badge_visible {
                    div { class: "ghost-badge", "+1" }
                }
                div { class: "ghost-score", "Score: {score}" }
                p { class: "ghost-hint", "Catch the ghost! 👻" }
            }

            p { class: "ghost-lost",
                "The page you're looking for might have moved to another dimension..."
            }
            button {
                class: "btn btn-ghost",
                r#type: "button",
                onclick: move |_| on_back.call(()),
                "⌂ Back to Dashboard"
            }
            if let Some(message) = message {
                div { class: "ghost-message", "{message}" }
            }
        }
    }
}

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let navigator = use_navigator();
    let path = segments.join("/");

    rsx! {
        div { class: "page",
            p { class: "ghost-path", "/{path}" }
            GhostPage {
                on_back: move |()| {
                    navigator.push(Route::Home {});
                },
            }
        }
    }
}
