use serde::{Deserialize, Serialize};

/// Rarity tier of a plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
    Mythical,
}

impl Rarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Legendary => "Legendary",
            Rarity::Mythical => "Mythical",
        }
    }
}

/// Data confidence tier for catalog provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    A,
    B,
    C,
}

/// A catalog plant with economics, physical stats, and provenance.
///
/// Loaded once from the static catalog; immutable for the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    pub slug: String,

    pub name: String,

    pub rarity: Rarity,

    /// Acquisition cost in coins.
    pub cost: f64,

    /// Sell value at 1.0x multiplier.
    #[serde(rename = "baseValue")]
    pub base_value: f64,

    /// Seconds from planting to harvest.
    #[serde(rename = "growTimeSec")]
    pub grow_time_sec: f64,

    /// Average harvest weight, in kg.
    #[serde(rename = "avgWeight")]
    pub avg_weight: f64,

    /// Whether the plant yields repeatedly without replanting.
    #[serde(rename = "multiHarvest")]
    pub multi_harvest: bool,

    pub data_source: String,

    pub last_verified_at: String,

    pub confidence: Confidence,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Plant {
    /// Basic validation: the stats ROI and profit/hour depend on must be positive.
    pub fn is_valid(&self) -> bool {
        self.cost >= 0.0
            && self.base_value > 0.0
            && self.grow_time_sec > 0.0
            && self.avg_weight > 0.0
    }

    /// Canonical key for lookups (lowercase slug).
    pub fn key(&self) -> String {
        self.slug.to_lowercase()
    }
}

impl PartialEq for Plant {
    fn eq(&self, other: &Self) -> bool {
        self.slug.to_lowercase() == other.slug.to_lowercase()
    }
}

impl Eq for Plant {}

impl std::hash::Hash for Plant {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.slug.to_lowercase().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plant() -> Plant {
        Plant {
            slug: "sunberry".to_string(),
            name: "Sunberry".to_string(),
            rarity: Rarity::Common,
            cost: 100.0,
            base_value: 200.0,
            grow_time_sec: 3600.0,
            avg_weight: 1.0,
            multi_harvest: false,
            data_source: "wiki".to_string(),
            last_verified_at: "2026-08-01".to_string(),
            confidence: Confidence::A,
            evidence: None,
            notes: None,
        }
    }

    #[test]
    fn test_is_valid() {
        let plant = sample_plant();
        assert!(plant.is_valid());

        let mut invalid = sample_plant();
        invalid.grow_time_sec = 0.0;
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_equality_case_insensitive() {
        let plant1 = sample_plant();
        let mut plant2 = sample_plant();
        plant2.slug = "SUNBERRY".to_string();
        assert_eq!(plant1, plant2);
    }

    #[test]
    fn test_deserialize_catalog_shape() {
        let json = r#"{
            "slug": "moonvine",
            "name": "Moonvine",
            "rarity": "Rare",
            "cost": 450,
            "baseValue": 380,
            "growTimeSec": 5400,
            "avgWeight": 2.4,
            "multiHarvest": true,
            "data_source": "wiki",
            "last_verified_at": "2026-07-15",
            "confidence": "B"
        }"#;

        let plant: Plant = serde_json::from_str(json).unwrap();
        assert_eq!(plant.slug, "moonvine");
        assert_eq!(plant.rarity, Rarity::Rare);
        assert!(plant.multi_harvest);
        assert!(plant.evidence.is_none());
    }
}
