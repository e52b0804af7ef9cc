use serde::Serialize;

use crate::models::{Ingredient, Nutrient, NutrientTriple};

/// One ingredient and its weight in a finished blend.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeLine {
    pub ingredient: Ingredient,

    /// Grams of this ingredient.
    pub amount: f64,
}

/// Ordered recipe lines; every amount is above the inclusion threshold.
pub type Recipe = Vec<RecipeLine>;

/// A successful blend calculation.
#[derive(Debug, Clone, Serialize)]
pub struct Blend {
    pub recipe: Recipe,

    /// Achieved N-P-K percentages.
    pub actual_percentages: NutrientTriple,

    /// Sum of recipe amounts in grams.
    pub actual_weight: f64,

    /// Nutrients that were held to the tolerance band.
    pub constrained: Vec<Nutrient>,
}

impl Blend {
    /// Number of distinct ingredients in the recipe.
    pub fn ingredient_count(&self) -> usize {
        self.recipe.len()
    }

    /// True when the solver returned a point with no ingredient above the threshold.
    pub fn is_trivial(&self) -> bool {
        self.recipe.is_empty()
    }

    /// Signed deviation from target, in percentage points.
    pub fn deviation(&self, targets: &NutrientTriple, nutrient: Nutrient) -> f64 {
        self.actual_percentages.get(nutrient) - targets.get(nutrient)
    }
}
