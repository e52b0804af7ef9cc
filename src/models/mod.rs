pub mod blend;
pub mod ingredient;
pub mod problem;
pub mod request;
pub mod solution;

pub use blend::{Blend, Recipe, RecipeLine};
pub use ingredient::{Ingredient, Nutrient, NutrientTriple};
pub use problem::{
    Bound, DecisionVariables, Direction, LinearConstraint, Model, ModelBuilder, Objective, VarId,
    VariableDecl, VariableKind,
};
pub use request::BlendRequest;
pub use solution::{Solution, SolutionStatus};
