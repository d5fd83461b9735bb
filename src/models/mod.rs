pub mod code;
pub mod mutation;
pub mod plan;
pub mod plant;
pub mod progress;
pub mod result;

pub use code::{CodeStatus, RedeemCode};
pub use mutation::Mutation;
pub use plan::SavedPlan;
pub use plant::{Confidence, Plant, Rarity};
pub use progress::UserProgress;
pub use result::{CalculationResult, Grade, Stage};
