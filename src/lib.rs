pub mod blend;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod solver;
pub mod state;

pub use blend::{calculate_mix, calculate_mix_with, FormulationConfig};
pub use error::{AppError, BlendError, Result};
pub use models::{Blend, BlendRequest, Ingredient, Nutrient, NutrientTriple};
pub use solver::{GoodLpSolver, Solver};
