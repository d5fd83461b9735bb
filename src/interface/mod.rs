pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_ranking_csv;
pub use prompts::{
    prompt_budget, prompt_goal, prompt_mutations, prompt_plan_name, prompt_plant,
    prompt_playtime_hours, prompt_stage, prompt_weight, prompt_yes_no,
};
pub use render::{
    display_codes, display_mutations, display_next_action, display_plans, display_plants,
    display_progress, display_ranking, display_recommendations, display_result, format_currency,
    format_time, PlantSort,
};
