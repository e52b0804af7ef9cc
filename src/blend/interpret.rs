use tracing::warn;

use crate::blend::builder::Formulation;
use crate::error::BlendError;
use crate::models::{Blend, Nutrient, NutrientTriple, RecipeLine, Solution, SolutionStatus};

/// Map a non-successful status to its error.
pub fn classify_status(status: &SolutionStatus) -> Option<BlendError> {
    match status {
        SolutionStatus::Optimal | SolutionStatus::Feasible => None,
        SolutionStatus::Infeasible => Some(BlendError::Infeasible),
        SolutionStatus::Unbounded => Some(BlendError::Unbounded),
        SolutionStatus::Undefined => Some(BlendError::Undefined),
        SolutionStatus::Other(raw) => Some(BlendError::UnknownStatus(raw.clone())),
    }
}

/// Actual N-P-K percentages of a recipe; all zero when the recipe weighs nothing.
pub fn actual_percentages(lines: &[RecipeLine]) -> (NutrientTriple, f64) {
    let total_weight: f64 = lines.iter().map(|l| l.amount).sum();

    let mut totals = NutrientTriple::default();
    for line in lines {
        for nutrient in Nutrient::ALL {
            *totals.get_mut(nutrient) += line.amount * line.ingredient.percent(nutrient) / 100.0;
        }
    }

    if total_weight == 0.0 {
        return (NutrientTriple::default(), 0.0);
    }

    let mut percentages = NutrientTriple::default();
    for nutrient in Nutrient::ALL {
        *percentages.get_mut(nutrient) = totals.get(nutrient) / total_weight * 100.0;
    }

    (percentages, total_weight)
}

/// Rebuild a recipe from solver output.
pub fn interpret_solution(
    solution: &Solution,
    formulation: &Formulation,
    recipe_epsilon: f64,
) -> Result<Blend, BlendError> {
    if let Some(err) = classify_status(&solution.status) {
        return Err(err);
    }

    let mut recipe = Vec::new();
    for (vars, ingredient) in formulation.variables.iter().zip(&formulation.candidates) {
        let name = &formulation.model.variable(vars.amount).name;
        let amount = match solution.value(name) {
            Some(v) => v,
            None => {
                warn!(variable = %name, "solution has no value for variable, treating as zero");
                0.0
            }
        };

        if amount > recipe_epsilon {
            recipe.push(RecipeLine {
                ingredient: ingredient.clone(),
                amount,
            });
        }
    }

    let (actual_percentages, actual_weight) = actual_percentages(&recipe);

    Ok(Blend {
        recipe,
        actual_percentages,
        actual_weight,
        constrained: formulation.constrained.clone(),
    })
}
