pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{GardenError, Result};
pub use models::{CalculationResult, Grade, Mutation, Plant, Stage};
