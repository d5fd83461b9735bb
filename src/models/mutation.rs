use serde::{Deserialize, Serialize};

use crate::models::plant::Confidence;

/// A value-multiplying mutation.
///
/// Stackable mutations combine additively by bonus; non-stackable mutations are
/// mutually exclusive and only the highest multiplier among them applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mutation {
    pub key: String,

    pub name: String,

    pub multiplier: f64,

    /// How the mutation is obtained in game.
    pub trigger: String,

    pub stackable: bool,

    /// Mutual-exclusion group id; mutations sharing a group cannot co-occur.
    /// Selection-time rule only, the engine does not enforce it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub data_source: String,

    pub last_verified_at: String,

    pub confidence: Confidence,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Mutation {
    /// Bonus over the neutral multiplier.
    #[inline]
    pub fn bonus(&self) -> f64 {
        self.multiplier - 1.0
    }
}

impl PartialEq for Mutation {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Mutation {}

impl std::hash::Hash for Mutation {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{
            "key": "golden",
            "name": "Golden",
            "multiplier": 2.0,
            "trigger": "1% chance on any harvest",
            "stackable": false,
            "data_source": "wiki",
            "last_verified_at": "2026-07-20",
            "confidence": "A"
        }"#;

        let mutation: Mutation = serde_json::from_str(json).unwrap();
        assert_eq!(mutation.key, "golden");
        assert!(mutation.group.is_none());
        assert!((mutation.bonus() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_equality_by_key() {
        let a: Mutation = serde_json::from_str(
            r#"{"key": "wet", "name": "Wet", "multiplier": 1.2, "trigger": "rain",
                "stackable": true, "data_source": "wiki",
                "last_verified_at": "2026-07-20", "confidence": "A"}"#,
        )
        .unwrap();
        let mut b = a.clone();
        b.multiplier = 1.5;
        assert_eq!(a, b);
    }
}
