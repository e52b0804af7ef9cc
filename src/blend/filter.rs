use crate::error::BlendError;
use crate::models::{Ingredient, Nutrient, NutrientTriple};

/// Whether an ingredient can be used at all under the given targets.
///
/// An ingredient carrying any nutrient whose target is exactly zero is out.
pub fn is_compatible(ingredient: &Ingredient, targets: &NutrientTriple) -> bool {
    Nutrient::ALL
        .iter()
        .all(|&n| targets.get(n) != 0.0 || ingredient.percent(n) == 0.0)
}

/// Keep the candidates compatible with the zero targets, in input order.
pub fn filter_candidates(
    ingredients: &[Ingredient],
    targets: &NutrientTriple,
) -> Result<Vec<Ingredient>, BlendError> {
    let kept: Vec<Ingredient> = ingredients
        .iter()
        .filter(|i| is_compatible(i, targets))
        .cloned()
        .collect();

    if kept.is_empty() {
        return Err(BlendError::NoCandidates);
    }

    Ok(kept)
}
