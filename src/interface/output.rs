use std::path::Path;

use crate::error::Result;
use crate::models::{Blend, BlendRequest, Nutrient};

/// Round a float to n decimal places.
fn truncate(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write the recipe lines to a CSV file.
pub fn write_recipe_csv(blend: &Blend, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["id", "name", "grade", "grams", "share_pct"])?;

    for line in &blend.recipe {
        let share = if blend.actual_weight > 0.0 {
            line.amount / blend.actual_weight * 100.0
        } else {
            0.0
        };
        wtr.write_record([
            line.ingredient.id.clone(),
            line.ingredient.name.clone(),
            line.ingredient.grade_label(),
            format!("{:.3}", line.amount),
            format!("{:.2}", share),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// JSON summary of a blend against its request.
pub fn blend_json(request: &BlendRequest, blend: &Blend) -> serde_json::Value {
    serde_json::json!({
        "recipe": blend.recipe.iter().map(|line| {
            serde_json::json!({
                "id": line.ingredient.id,
                "name": line.ingredient.name,
                "grams": truncate(line.amount, 3),
            })
        }).collect::<Vec<_>>(),
        "actual": {
            "N": truncate(blend.actual_percentages.n, 3),
            "P": truncate(blend.actual_percentages.p, 3),
            "K": truncate(blend.actual_percentages.k, 3),
        },
        "target": {
            "N": request.targets.n,
            "P": request.targets.p,
            "K": request.targets.k,
        },
        "total_weight": truncate(blend.actual_weight, 3),
        "constrained": blend.constrained.iter().map(|n| n.symbol()).collect::<Vec<_>>(),
    })
}

/// Nutrients outside the band, as `(nutrient, actual, target)`.
pub fn out_of_band(request: &BlendRequest, blend: &Blend) -> Vec<(Nutrient, f64, f64)> {
    let tol = request.tolerance / 100.0;
    blend
        .constrained
        .iter()
        .filter_map(|&n| {
            let target = request.targets.get(n);
            let actual = blend.actual_percentages.get(n);
            let slack = target * tol + 1e-6;
            ((actual - target).abs() > slack).then_some((n, actual, target))
        })
        .collect()
}
