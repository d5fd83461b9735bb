use serde::{Deserialize, Serialize};

use crate::models::CalculationResult;

/// A saved calculation scenario.
///
/// The id and created_at are assigned by the plan store when the plan is saved,
/// never by the calculation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedPlan {
    pub id: String,

    /// User-chosen label for the plan.
    pub name: String,

    pub result: CalculationResult,

    /// Unix timestamp (seconds) at save time.
    pub created_at: u64,
}
