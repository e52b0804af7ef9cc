use dialoguer::{Confirm, Input};

use crate::error::{AppError, Result};
use crate::models::NutrientTriple;

/// Numeric parameters of a blend request, before ingredients are chosen.
#[derive(Debug, Clone)]
pub struct BlendParameters {
    pub targets: NutrientTriple,
    pub total_weight: f64,
    pub tolerance: f64,
    pub increment: f64,
}

/// Prompt for a number with a default.
pub fn prompt_number(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("'{}' is not a number", input)))
}

/// Prompt for a non-negative percentage.
pub fn prompt_percent(prompt: &str, default: f64) -> Result<f64> {
    let value = prompt_number(prompt, default)?;
    if !(0.0..=100.0).contains(&value) {
        return Err(AppError::InvalidInput(format!(
            "{} must be between 0 and 100",
            prompt
        )));
    }
    Ok(value)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect targets, weight, tolerance and increment interactively.
///
/// `defaults` pre-fills every prompt.
pub fn collect_blend_parameters(defaults: &BlendParameters) -> Result<BlendParameters> {
    let n = prompt_percent("Target nitrogen (N) %", defaults.targets.n)?;
    let p = prompt_percent("Target phosphorus (P) %", defaults.targets.p)?;
    let k = prompt_percent("Target potassium (K) %", defaults.targets.k)?;
    let total_weight = prompt_number("Total blend weight (g)", defaults.total_weight)?;
    let tolerance = prompt_number("Tolerance (% of target)", defaults.tolerance)?;
    let increment = prompt_number("Dosing increment (g)", defaults.increment)?;

    Ok(BlendParameters {
        targets: NutrientTriple::new(n, p, k),
        total_weight,
        tolerance,
        increment,
    })
}
