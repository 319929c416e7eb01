use iam_core::model::{AppSettings, ChallengeId, Completion};
use iam_core::runners::least_privilege::Role;
use iam_core::runners::{LeastPrivilegeRunner, LoginRunner, Outcome, RbacRunner, Runner};
use services::AppServices;

fn id(raw: &str) -> ChallengeId {
    ChallengeId::new(raw).unwrap()
}

/// Feed every scheduled timer back to the runner immediately.
fn settle<R: Runner>(runner: &mut R, mut outcome: Outcome<R::Timer>) -> Outcome<R::Timer> {
    while let Outcome::After(_, timer) = outcome {
        outcome = runner.fire(timer);
    }
    outcome
}

#[test]
fn solving_runners_drives_session_progress() {
    let services = AppServices::bootstrap(AppSettings::default()).unwrap();
    let mut session = services.start_session().unwrap();
    assert_eq!(session.progress().percent, 0.0);

    session.select(&id("auth")).unwrap();
    let mut login = LoginRunner::new();
    assert_eq!(login.submit("nope", "nope"), Outcome::Idle);
    assert!(login.submit("Exalt", "Shield").is_completed());
    assert_eq!(
        session.complete_selected(),
        Completion::Completed {
            id: id("auth"),
            newly_completed: true
        }
    );

    session.select(&id("rbac")).unwrap();
    let mut rbac = RbacRunner::new();
    for (user, role) in [(0, 1), (1, 2), (2, 0)] {
        rbac.click_user(user);
        rbac.click_role(role);
    }
    let verify = rbac.verify();
    assert!(settle(&mut rbac, verify).is_completed());
    session.complete_selected();

    session.select(&id("least-privilege")).unwrap();
    let mut least = LeastPrivilegeRunner::new();
    for role in Role::ALL {
        for task in role.required_tasks() {
            least.toggle(role, *task);
        }
    }
    let verify = least.verify();
    assert!(settle(&mut least, verify).is_completed());
    session.complete_selected();

    let progress = session.progress();
    assert_eq!(progress.completed, 3);
    assert_eq!(progress.total, 7);
    assert!(session.selected().is_none());
}

#[test]
fn completing_every_challenge_reaches_hundred_percent() {
    let services = AppServices::bootstrap(AppSettings::default()).unwrap();
    let mut session = services.start_session().unwrap();
    let ids: Vec<ChallengeId> = session
        .challenges()
        .iter()
        .map(|challenge| challenge.id().clone())
        .collect();

    for challenge in &ids {
        session.select(challenge).unwrap();
        session.complete_selected();
    }
    session.select(&ids[0]).unwrap();
    assert_eq!(
        session.complete_selected(),
        Completion::Completed {
            id: ids[0].clone(),
            newly_completed: false
        }
    );

    let progress = session.progress();
    assert!(progress.is_complete());
    assert_eq!(progress.percent, 100.0);
}
