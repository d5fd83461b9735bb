mod catalog;
mod store;

pub use catalog::Catalog;
pub use store::{achievement_info, PlanStore, ACHIEVEMENTS};
