use dioxus::prelude::*;

/// Light-hearted message from the fake browser chrome.
#[component]
pub fn JokePopup(message: String, on_close: Callback<()>) -> Element {
    rsx! {
        div {
            class: "popup-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "popup",
                onclick: move |evt| evt.stop_propagation(),
                p { class: "popup-body", "{message}" }
                div { class: "popup-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "Ok, got it! 😅"
                    }
                }
            }
        }
    }
}

#[component]
pub fn WarningPopup(message: String, on_close: Callback<()>) -> Element {
    rsx! {
        div {
            class: "popup-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "popup popup-warning",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "popup-title", "⚠ Attention !" }
                p { class: "popup-body", "{message}" }
                div { class: "popup-actions",
                    button {
                        class: "btn btn-warning",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "Compris"
                    }
                }
            }
        }
    }
}

/// Collapsible-looking explanation box shown above each exercise.
#[component]
pub fn InfoBox(title: String, children: Element) -> Element {
    rsx! {
        div { class: "info-box",
            h3 { class: "info-box-title", "ℹ {title}" }
            div { class: "info-box-body", {children} }
        }
    }
}

/// Result banner once a verification step has run.
#[component]
pub fn VerdictBanner(success: bool, children: Element) -> Element {
    rsx! {
        div { class: if success { "verdict verdict-success" } else { "verdict verdict-failure" },
            {children}
        }
    }
}
