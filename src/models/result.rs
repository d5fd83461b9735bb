use serde::{Deserialize, Serialize};

use crate::models::Plant;

/// Harvest ripeness stage. Exactly three variants with fixed multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Unripe,
    Ripened,
    Lush,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Unripe, Stage::Ripened, Stage::Lush];

    /// Fixed value multiplier for this stage.
    #[inline]
    pub fn multiplier(&self) -> f64 {
        match self {
            Stage::Unripe => 0.5,
            Stage::Ripened => 1.0,
            Stage::Lush => 1.5,
        }
    }

    /// Parse a stage name, defaulting to Ripened for anything unrecognized.
    pub fn parse_lenient(s: &str) -> Stage {
        match s.trim().to_lowercase().as_str() {
            "unripe" => Stage::Unripe,
            "lush" => Stage::Lush,
            _ => Stage::Ripened,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Unripe => "unripe",
            Stage::Ripened => "ripened",
            Stage::Lush => "lush",
        }
    }
}

/// Coarse ROI quality grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
        }
    }
}

/// Result of one profitability calculation.
///
/// Echoes the scenario it was computed from. Currency fields are rounded to
/// whole coins, percentage fields to one decimal place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResult {
    pub plant: Plant,
    pub stage: Stage,
    pub mutation_keys: Vec<String>,
    pub weight: f64,

    pub sell_price: f64,
    pub profit: f64,
    pub roi: f64,
    pub profit_per_hour: f64,
    pub grade: Grade,

    /// Percentage upside available by waiting for lush. Absent at lush stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap_to_best: Option<f64>,

    /// Percentage of lush value forfeited by harvesting now. Absent at lush stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loss_if_harvest_now: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_multipliers() {
        assert_eq!(Stage::Unripe.multiplier(), 0.5);
        assert_eq!(Stage::Ripened.multiplier(), 1.0);
        assert_eq!(Stage::Lush.multiplier(), 1.5);
    }

    #[test]
    fn test_parse_lenient_defaults_to_ripened() {
        assert_eq!(Stage::parse_lenient("lush"), Stage::Lush);
        assert_eq!(Stage::parse_lenient("UNRIPE"), Stage::Unripe);
        assert_eq!(Stage::parse_lenient("ripened"), Stage::Ripened);
        assert_eq!(Stage::parse_lenient("overripe"), Stage::Ripened);
        assert_eq!(Stage::parse_lenient(""), Stage::Ripened);
    }
}
