use thiserror::Error;

#[derive(Debug, Error)]
pub enum GardenError {
    #[error("Plant not found: {0}")]
    PlantNotFound(String),

    #[error("Mutation not found: {0}")]
    MutationNotFound(String),

    #[error("Plan not found: {0}")]
    PlanNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Catalog is empty")]
    EmptyCatalog,
}

pub type Result<T> = std::result::Result<T, GardenError>;
