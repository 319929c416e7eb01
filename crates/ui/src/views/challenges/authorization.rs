use dioxus::prelude::*;
use iam_core::runners::authorization::{ADMIN_ACTIONS, BrowserControl};
use iam_core::runners::{AuthorizationRunner, Page};

use crate::views::not_found::GhostPage;
use crate::views::popups::JokePopup;
use crate::views::timers::{drive, use_runner_timers};

#[component]
pub fn AuthorizationChallenge(on_success: Callback<()>) -> Element {
    let mut runner = use_signal(AuthorizationRunner::new);
    let timers = use_runner_timers();

    let state = runner.read();
    let url = state.url().to_string();
    let page = state.page();
    let error = state.error();
    let popup = state.popup();
    let inspector_open = state.is_inspector_open();
    let inspector_text = state.inspector_text().to_string();
    let admin_enabled = state.is_admin_enabled();
    drop(state);

    let back_to_dashboard = use_callback(move |()| runner.write().back_to_dashboard());
    let admin_action = use_callback(move |()| {
        let outcome = runner.write().admin_action();
        drive(runner, timers, on_success, outcome);
    });

    rsx! {
        div { class: "browser",
            div { class: "browser-chrome",
                div { class: "browser-window-controls",
                    BrowserButton { runner, control: BrowserControl::Close, class: "dot dot-close", label: "" }
                    BrowserButton { runner, control: BrowserControl::Minimise, class: "dot dot-minimise", label: "" }
                    BrowserButton { runner, control: BrowserControl::Maximise, class: "dot dot-maximise", label: "" }
                }
                form {
                    class: "browser-url-bar",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        runner.write().submit_url();
                    },
                    BrowserButton { runner, control: BrowserControl::Back, class: "nav-button", label: "←" }
                    BrowserButton { runner, control: BrowserControl::Forward, class: "nav-button", label: "→" }
                    BrowserButton { runner, control: BrowserControl::Reload, class: "nav-button", label: "⟳" }
                    if page == Page::NotFound {
                        button {
                            class: "nav-button",
                            r#type: "button",
                            onclick: move |_| back_to_dashboard.call(()),
                            "⌂"
                        }
                    }
                    input {
                        class: "browser-url",
                        r#type: "text",
                        value: "{url}",
                        oninput: move |evt| runner.write().set_url(evt.value()),
                    }
                }
                if let Some(error) = error {
                    div { class: "browser-error", "{error}" }
                }
            }

            div { class: "browser-content",
                match page {
                    Page::NotFound => rsx! { GhostPage { on_back: back_to_dashboard } },
                    Page::AdminPanel => rsx! {
                        AdminPanel {
                            on_action: admin_action,
                            on_exit: move |()| runner.write().exit_admin(),
                        }
                    },
                    Page::Dashboard => rsx! {
                        Dashboard {
                            admin_enabled,
                            on_inspect: move |()| runner.write().inspect_admin_button(),
                            on_admin: move |()| runner.write().click_admin_button(),
                        }
                    },
                }
            }

            if inspector_open {
                div {
                    class: "popup-overlay",
                    onclick: move |_| runner.write().close_inspector(),
                    div {
                        class: "popup inspector",
                        onclick: move |evt| evt.stop_propagation(),
                        h3 { class: "popup-title", "Inspect Element" }
                        textarea {
                            class: "inspector-text",
                            rows: "6",
                            value: "{inspector_text}",
                            oninput: move |evt| runner.write().edit_inspector(evt.value()),
                        }
                        div { class: "popup-actions",
                            button {
                                class: "btn",
                                r#type: "button",
                                onclick: move |_| runner.write().close_inspector(),
                                "Cancel"
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                onclick: move |_| runner.write().apply_inspector(),
                                "Apply Changes"
                            }
                        }
                    }
                }
            }

            if let Some(message) = popup {
                JokePopup {
                    message: message.to_string(),
                    on_close: move |()| runner.write().dismiss_popup(),
                }
            }
        }
    }
}

#[component]
fn BrowserButton(
    runner: Signal<AuthorizationRunner>,
    control: BrowserControl,
    class: &'static str,
    label: &'static str,
) -> Element {
    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: move |_| runner.write().press(control),
            "{label}"
        }
    }
}

#[component]
fn Dashboard(admin_enabled: bool, on_inspect: Callback<()>, on_admin: Callback<()>) -> Element {
    rsx! {
        div { class: "dashboard",
            div { class: "dashboard-head",
                h2 { "Welcome to the Company Dashboard" }
                button {
                    id: "adminButton",
                    class: if admin_enabled { "btn btn-danger" } else { "btn btn-disabled" },
                    r#type: "button",
                    oncontextmenu: move |evt: MouseEvent| {
                        evt.prevent_default();
                        on_inspect.call(());
                    },
                    onclick: move |_| on_admin.call(()),
                    "Admin Access"
                }
            }
            div { class: "dashboard-widgets",
                div { class: "widget",
                    h3 { "Projets en cours" }
                    p { class: "widget-value", "12" }
                }
                div { class: "widget",
                    h3 { "Tickets ouverts" }
                    p { class: "widget-value", "5" }
                }
                div { class: "widget",
                    h3 { "Équipe" }
                    p { class: "widget-value", "8 membres" }
                }
            }
            p { class: "dashboard-tip",
                "Astuce : le bouton Admin Access est désactivé... côté navigateur seulement. Essayez un clic droit."
            }
        }
    }
}

#[component]
fn AdminPanel(on_action: Callback<()>, on_exit: Callback<()>) -> Element {
    let (user_actions, system_actions) = ADMIN_ACTIONS.split_at(3);

    rsx! {
        div { class: "admin-panel",
            div { class: "admin-panel-head",
                h2 { "Admin Control Panel" }
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| on_exit.call(()),
                    "Exit Admin Mode"
                }
            }
            div { class: "admin-sections",
                div { class: "admin-section",
                    h3 { "User Management" }
                    for action in user_actions.iter() {
                        button {
                            class: "btn btn-danger btn-block",
                            r#type: "button",
                            onclick: move |_| on_action.call(()),
                            "{action}"
                        }
                    }
                }
                div { class: "admin-section",
                    h3 { "System Configuration" }
                    for action in system_actions.iter() {
                        button {
                            class: "btn btn-danger btn-block",
                            r#type: "button",
                            onclick: move |_| on_action.call(()),
                            "{action}"
                        }
                    }
                }
            }
            div { class: "admin-warning",
                h3 { "Security Vulnerability Exposed!" }
                p { "You've gained unauthorized access to the admin panel by:" }
                ul {
                    li { "Manipulating HTML attributes through inspection" }
                    li { "Bypassing client-side security controls" }
                    li { "Accessing restricted functionality without proper authentication" }
                }
                p { "A real application needs:" }
                ul {
                    li { "Server-side authentication checks" }
                    li { "Proper session management" }
                    li { "Role-based access control (RBAC)" }
                    li { "API endpoint protection" }
                }
            }
        }
    }
}
