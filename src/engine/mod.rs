pub mod calculations;
pub mod constants;
pub mod ranking;

pub use calculations::{calculate, mutation_multiplier, stage_multiplier, weight_factor};
pub use constants::*;
pub use ranking::{
    best_plant_by_profit_per_hour, best_plant_by_roi, next_best_action, rank_by_profit_per_hour,
    rank_by_roi, recommend, Goal, NextAction,
};
