use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::Result;
use crate::models::Ingredient;
use crate::state::IngredientLibrary;

/// Load an ingredient library from a JSON file.
///
/// Records without an `Id` get their lowercase name. Out-of-convention
/// grades are logged but kept.
pub fn load_ingredients<P: AsRef<Path>>(path: P) -> Result<IngredientLibrary> {
    let content = fs::read_to_string(path)?;
    let mut ingredients: Vec<Ingredient> = serde_json::from_str(&content)?;

    for ingredient in &mut ingredients {
        if ingredient.id.is_empty() {
            ingredient.id = ingredient.key();
        }
        if !ingredient.is_valid() {
            warn!(
                name = %ingredient.name,
                grade = %ingredient.grade_label(),
                "ingredient grade outside 0-100%"
            );
        }
    }

    Ok(IngredientLibrary::new(ingredients))
}
