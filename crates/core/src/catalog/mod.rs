//! The built-in, ordered list of challenges.

use std::collections::HashSet;

use thiserror::Error;

use crate::model::{Challenge, ChallengeError, ChallengeId};

const BUILTIN_CATALOG: &str = include_str!("challenges.json");

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog contains no challenges")]
    Empty,

    #[error("duplicate challenge id in catalog: {0}")]
    DuplicateId(ChallengeId),

    #[error(transparent)]
    Challenge(#[from] ChallengeError),
}

/// Static challenge definitions in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    challenges: Vec<Challenge>,
}

impl Catalog {
    /// Parse the catalog shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the embedded document is malformed.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse a catalog from a JSON array of challenge records.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON, `CatalogError::Empty`
    /// for an empty list, `CatalogError::DuplicateId` when two records share an
    /// id and `CatalogError::Challenge` when a record breaks its own invariants.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let challenges: Vec<Challenge> = serde_json::from_str(raw)?;
        Self::new(challenges)
    }

    /// # Errors
    ///
    /// See [`Catalog::from_json`].
    pub fn new(challenges: Vec<Challenge>) -> Result<Self, CatalogError> {
        if challenges.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for challenge in &challenges {
            challenge.validate()?;
            if !seen.insert(challenge.id().clone()) {
                return Err(CatalogError::DuplicateId(challenge.id().clone()));
            }
        }
        Ok(Self { challenges })
    }

    #[must_use]
    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    #[must_use]
    pub fn find(&self, id: &ChallengeId) -> Option<&Challenge> {
        self.challenges.iter().find(|challenge| challenge.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }

    #[must_use]
    pub fn into_challenges(self) -> Vec<Challenge> {
        self.challenges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChallengeKind;

    #[test]
    fn builtin_catalog_parses_in_order() {
        let catalog = Catalog::builtin().unwrap();
        let ids: Vec<&str> = catalog
            .challenges()
            .iter()
            .map(|challenge| challenge.id().as_str())
            .collect();
        assert_eq!(
            ids,
            [
                "auth",
                "authz",
                "identity",
                "access-control",
                "rbac",
                "permissions",
                "least-privilege"
            ]
        );
        assert!(catalog.challenges().iter().all(|c| !c.is_completed()));
    }

    #[test]
    fn builtin_catalog_covers_every_runner_kind() {
        let catalog = Catalog::builtin().unwrap();
        let kinds: HashSet<ChallengeKind> =
            catalog.challenges().iter().map(Challenge::kind).collect();
        assert_eq!(kinds.len(), 7);
        let access = catalog
            .find(&ChallengeId::new("access-control").unwrap())
            .unwrap();
        assert_eq!(access.kind(), ChallengeKind::StaticContent);
        assert_eq!(access.content().unwrap().lessons.len(), 4);
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(matches!(Catalog::from_json("[]"), Err(CatalogError::Empty)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let raw = r#"[
            {"id":"a","title":"A","description":"","principle":"","runner":"login"},
            {"id":"a","title":"B","description":"","principle":"","runner":"rbac"}
        ]"#;
        let err = Catalog::from_json(raw).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id.as_str() == "a"));
    }

    #[test]
    fn rejects_static_challenge_without_content() {
        let raw = r#"[{"id":"a","title":"A","description":"","principle":""}]"#;
        assert!(matches!(
            Catalog::from_json(raw),
            Err(CatalogError::Challenge(ChallengeError::MissingContent { .. }))
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            Catalog::from_json("{"),
            Err(CatalogError::Parse(_))
        ));
    }
}
