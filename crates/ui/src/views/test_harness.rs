use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use iam_core::model::{AppSettingsDraft, ChallengeId, SessionError};
use iam_core::runners::authorization::Jitter;
use iam_core::time::TimerScale;
use services::{AppServices, AppServicesError, SessionService};

use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::{HomeView, NotFoundView};

fn still() -> f64 {
    0.0
}

struct TestApp {
    services: AppServices,
    broken: bool,
}

impl UiApp for TestApp {
    fn start_session(&self) -> Result<SessionService, AppServicesError> {
        if self.broken {
            let id = ChallengeId::new("missing").expect("valid id");
            return Err(SessionError::UnknownChallenge(id).into());
        }
        self.services.start_session()
    }

    fn timer_scale(&self) -> TimerScale {
        self.services.timer_scale()
    }

    fn ghost_jitter(&self) -> Jitter {
        still
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    NotFound(Vec<String>),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::NotFound(segments) => rsx! { NotFoundView { segments } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

fn harness_for(app: TestApp, view: ViewKind) -> ViewHarness {
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::new(app),
            view,
        },
    );
    ViewHarness { dom }
}

/// Home or 404 view over the built-in catalog, optionally opened on
/// `start_challenge`.
pub fn setup_view_harness(view: ViewKind, start_challenge: Option<&str>) -> ViewHarness {
    let mut draft = AppSettingsDraft::new();
    draft.start_challenge = start_challenge.map(str::to_string);
    let settings = draft.validate().expect("valid settings");
    let services = AppServices::bootstrap(settings).expect("bootstrap services");
    harness_for(
        TestApp {
            services,
            broken: false,
        },
        view,
    )
}

/// Home view whose session fails to start.
pub fn setup_broken_harness() -> ViewHarness {
    let settings = AppSettingsDraft::new().validate().expect("valid settings");
    let services = AppServices::bootstrap(settings).expect("bootstrap services");
    harness_for(
        TestApp {
            services,
            broken: true,
        },
        ViewKind::Home,
    )
}

/// Context for components mounted straight into a `VirtualDom`, with every
/// runner delay multiplied by `timer_scale`.
pub fn timer_context(timer_scale: &str) -> AppContext {
    let draft = AppSettingsDraft {
        timer_scale: Some(timer_scale.to_string()),
        ..AppSettingsDraft::default()
    };
    let settings = draft.validate().expect("valid settings");
    let services = AppServices::bootstrap(settings).expect("bootstrap services");
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        services,
        broken: false,
    });
    build_app_context(&app)
}
