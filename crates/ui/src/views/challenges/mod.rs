mod authorization;
mod federated;
mod least_privilege;
mod login;
mod permissions;
mod rbac;
mod static_content;

use dioxus::prelude::*;
use iam_core::model::{ChallengeContent, ChallengeKind};

use authorization::AuthorizationChallenge;
use federated::FederatedIdentityChallenge;
use least_privilege::LeastPrivilegeChallenge;
use login::LoginChallenge;
use permissions::PermissionsChallenge;
use rbac::RbacChallenge;
use static_content::StaticContent;

/// Mount the runner matching `kind`. `on_success` fires at most once per
/// mount, when the runner's own success condition is met.
#[component]
pub fn ChallengeRunner(
    kind: ChallengeKind,
    content: Option<ChallengeContent>,
    on_success: Callback<()>,
) -> Element {
    match kind {
        ChallengeKind::Login => rsx! { LoginChallenge { on_success } },
        ChallengeKind::Authorization => rsx! { AuthorizationChallenge { on_success } },
        ChallengeKind::Permissions => rsx! { PermissionsChallenge { on_success } },
        ChallengeKind::Rbac => rsx! { RbacChallenge { on_success } },
        ChallengeKind::LeastPrivilege => rsx! { LeastPrivilegeChallenge { on_success } },
        ChallengeKind::FederatedIdentity => rsx! { FederatedIdentityChallenge { on_success } },
        ChallengeKind::StaticContent => rsx! { StaticContent { content } },
    }
}
