use super::test_harness::{ViewKind, setup_broken_harness, setup_view_harness};

fn render_home(start_challenge: Option<&str>) -> String {
    let mut harness = setup_view_harness(ViewKind::Home, start_challenge);
    harness.rebuild();
    harness.render()
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_grid_and_progress() {
    let html = render_home(None);
    assert!(html.contains("Défi IAM"), "missing header in {html}");
    assert!(html.contains("Votre Progression"), "missing progress in {html}");
    assert!(html.contains("0/7"), "missing progress label in {html}");
    for title in ["Authentication", "Autorisation", "RBAC", "Permissions", "Moindre Privilège"] {
        assert!(html.contains(title), "missing card {title} in {html}");
    }
    assert_eq!(html.matches("À compléter").count(), 7, "unexpected status in {html}");
    assert!(!html.contains("Retour"), "detail frame rendered without selection: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn login_challenge_smoke_renders_form() {
    let html = render_home(Some("auth"));
    assert!(html.contains("Connexion Administrateur"), "missing form in {html}");
    assert!(html.contains("Nombre total de tentatives: 0"), "missing counter in {html}");
    assert!(html.contains("Absence de CAPTCHA"), "missing vulnerabilities in {html}");
    assert!(html.contains("Retour"), "missing back button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn authorization_challenge_smoke_renders_dashboard() {
    let html = render_home(Some("authz"));
    assert!(
        html.contains("https://entreprise.locale/dashboard"),
        "missing url in {html}"
    );
    assert!(html.contains("Admin Access"), "missing admin button in {html}");
    assert!(!html.contains("Admin Control Panel"), "admin panel leaked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn permissions_challenge_smoke_renders_users() {
    let html = render_home(Some("permissions"));
    for name in ["Thomas Martin", "Sophie Dubois", "Philippe Legrand"] {
        assert!(html.contains(name), "missing {name} in {html}");
    }
    assert!(html.contains("Progression: 0/3"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn rbac_challenge_smoke_renders_roles() {
    let html = render_home(Some("rbac"));
    for role in ["Consultant", "Sales Manager", "Director"] {
        assert!(html.contains(role), "missing role {role} in {html}");
    }
    assert!(html.contains("Vérifier les assignations"), "missing verify in {html}");
    assert!(
        html.contains("Progression: 0/3 utilisateurs assignés"),
        "missing assignment progress in {html}"
    );
    assert!(html.contains("width: 0%;"), "missing empty progress bar in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn least_privilege_challenge_smoke_renders_matrix() {
    let html = render_home(Some("least-privilege"));
    assert!(html.contains("Développeur"), "missing role in {html}");
    assert!(html.contains("Auditeur"), "missing role in {html}");
    assert!(html.contains("Vérifier"), "missing verify in {html}");
    assert!(!html.contains("Permissions optimales"), "feedback before verify in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn federated_challenge_smoke_renders_first_app() {
    let html = render_home(Some("identity"));
    assert!(html.contains("Spotify"), "missing first app in {html}");
    assert!(html.contains("Niveau de frustration"), "missing gauge in {html}");
    assert!(html.contains("Au moins 8 caractères"), "missing policy in {html}");
    assert!(!html.contains("Ping ID"), "providers shown too early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn static_challenge_smoke_renders_lessons() {
    let html = render_home(Some("access-control"));
    assert!(html.contains("Leçons à retenir:"), "missing lessons in {html}");
    assert!(html.contains("Retour"), "missing back button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn not_found_view_smoke_renders_ghost_game() {
    let mut harness = setup_view_harness(ViewKind::NotFound(vec!["missing".to_string()]), None);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("404"), "missing title in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("/missing"), "missing path in {html}");
    assert!(html.contains("Back to Dashboard"), "missing back action in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_reports_session_failure() {
    let mut harness = setup_broken_harness();
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Impossible de démarrer la session"), "missing error in {html}");
    assert!(!html.contains("Votre Progression"), "progress rendered on failure: {html}");
}
