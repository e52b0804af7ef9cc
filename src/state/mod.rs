mod library;
mod persistence;

pub use library::{IngredientLibrary, FUZZY_MATCH_THRESHOLD};
pub use persistence::load_ingredients;
