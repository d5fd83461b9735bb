use serde::{Deserialize, Serialize};

/// Gamified usage tracking, persisted between sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProgress {
    pub total_calculations: u32,

    pub total_plans_saved: u32,

    pub days_active: u32,

    /// Unix day number (days since epoch) of the last recorded visit. 0 = never.
    pub last_visit_day: u64,

    /// Consecutive-day visit streak.
    pub streak: u32,

    /// Unlocked achievement keys, in unlock order.
    pub achievements: Vec<String>,

    /// Plant that produced the best ROI seen so far.
    pub top_plant: Option<String>,

    pub best_roi: f64,
}
