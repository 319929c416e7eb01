use dioxus::prelude::*;
use iam_core::model::ChallengeContent;

/// Intro and lessons for challenges without an interactive runner.
#[component]
pub fn StaticContent(content: Option<ChallengeContent>) -> Element {
    let Some(content) = content else {
        return rsx! {};
    };

    rsx! {
        div { class: "static-content",
            p { class: "static-content-intro", "{content.intro}" }
            if content.has_lessons() {
                div { class: "static-content-lessons",
                    h4 { "Leçons à retenir:" }
                    ul {
                        for lesson in content.lessons.iter() {
                            li { "{lesson}" }
                        }
                    }
                }
            }
        }
    }
}
