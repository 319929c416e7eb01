use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Rich lesson material attached to a challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeContent {
    pub intro: String,
    pub simulation: Simulation,
    #[serde(default)]
    pub lessons: Vec<String>,
}

impl ChallengeContent {
    #[must_use]
    pub fn has_lessons(&self) -> bool {
        !self.lessons.is_empty()
    }
}

/// Opaque description of the mock system behind a challenge.
///
/// Only the `type` tag is interpreted; every other key is kept verbatim so the
/// catalog can carry per-simulation details without a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Simulation {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Simulation {
    #[must_use]
    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.get(key)
    }
}
