use thiserror::Error;

/// Why a blend calculation produced no recipe.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BlendError {
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("No candidate ingredients: none can be used without breaking a zero target")]
    NoCandidates,

    #[error("No feasible blend: try widening the tolerance or relaxing the targets")]
    Infeasible,

    #[error("Solver reported an unbounded objective; the model is malformed")]
    Unbounded,

    #[error("Solver returned a numerically undefined result")]
    Undefined,

    #[error("Solver returned unknown status: {0}")]
    UnknownStatus(String),

    #[error("Solver failed: {0}")]
    SolverFault(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Ingredient not found: {0}")]
    IngredientNotFound(String),

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

    #[error(transparent)]
    Blend(#[from] BlendError),
}

pub type Result<T> = std::result::Result<T, AppError>;
