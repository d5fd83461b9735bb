/// Stage multiplier applied at the lush (best) stage.
pub const LUSH_MULT: f64 = 1.5;

/// ROI thresholds for the letter grade (percent).
pub const GRADE_A_ROI: f64 = 100.0;
pub const GRADE_B_ROI: f64 = 50.0;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// ROI lead (percentage points) a rival plant needs before a switch is recommended.
pub const SWITCH_ROI_MARGIN: f64 = 10.0;

/// Default length of the top-N ranking tables.
pub const DEFAULT_TOP_N: usize = 10;

/// Number of plants returned by the budget/playtime recommender.
pub const RECOMMEND_LIMIT: usize = 5;
