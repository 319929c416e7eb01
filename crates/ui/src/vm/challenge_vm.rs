use iam_core::model::{Challenge, ChallengeContent, ChallengeId, ChallengeKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChallengeCardVm {
    pub id: ChallengeId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub status_label: &'static str,
}

impl From<&Challenge> for ChallengeCardVm {
    fn from(challenge: &Challenge) -> Self {
        let completed = challenge.is_completed();
        Self {
            id: challenge.id().clone(),
            title: challenge.title().to_string(),
            description: challenge.description().to_string(),
            completed,
            status_label: if completed { "Complété" } else { "À compléter" },
        }
    }
}

#[must_use]
pub fn map_challenge_cards(challenges: &[Challenge]) -> Vec<ChallengeCardVm> {
    challenges.iter().map(ChallengeCardVm::from).collect()
}

/// Everything the detail frame needs for the selected challenge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChallengeDetailVm {
    pub id: ChallengeId,
    pub title: String,
    pub principle: String,
    pub kind: ChallengeKind,
    pub content: Option<ChallengeContent>,
}

impl From<&Challenge> for ChallengeDetailVm {
    fn from(challenge: &Challenge) -> Self {
        Self {
            id: challenge.id().clone(),
            title: challenge.title().to_string(),
            principle: challenge.principle().to_string(),
            kind: challenge.kind(),
            content: challenge.content().cloned(),
        }
    }
}

#[must_use]
pub fn map_challenge_detail(challenge: &Challenge) -> ChallengeDetailVm {
    ChallengeDetailVm::from(challenge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iam_core::catalog::Catalog;
    use iam_core::model::Session;

    #[test]
    fn cards_follow_catalog_order_and_status() {
        let mut session = Session::new(Catalog::builtin().unwrap().into_challenges());
        session.select(&ChallengeId::new("rbac").unwrap()).unwrap();
        let _ = session.complete_selected();

        let cards = map_challenge_cards(session.challenges());
        assert_eq!(cards.len(), 7);
        assert_eq!(cards[0].id.as_str(), "auth");
        let rbac = cards.iter().find(|card| card.id.as_str() == "rbac").unwrap();
        assert!(rbac.completed);
        assert_eq!(rbac.status_label, "Complété");
        assert_eq!(cards[0].status_label, "À compléter");
    }

    #[test]
    fn detail_keeps_runner_kind_and_content() {
        let catalog = Catalog::builtin().unwrap();
        let access = catalog
            .find(&ChallengeId::new("access-control").unwrap())
            .unwrap();
        let detail = map_challenge_detail(access);
        assert_eq!(detail.kind, ChallengeKind::StaticContent);
        assert!(detail.content.is_some_and(|content| content.has_lessons()));
    }
}
