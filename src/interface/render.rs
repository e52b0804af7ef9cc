use crate::models::{Blend, BlendRequest, Ingredient, Nutrient};

/// Display a blend as a table with a target comparison.
pub fn display_blend(request: &BlendRequest, blend: &Blend) {
    if blend.is_trivial() {
        println!("Solver found a blend with no ingredient above the inclusion threshold.");
        return;
    }

    println!();
    println!("=== Blend Recipe ===");
    println!();

    let max_name_len = blend
        .recipe
        .iter()
        .map(|l| l.ingredient.name.len())
        .max()
        .unwrap_or(10);

    for (i, line) in blend.recipe.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} ({:>10}) - {:>10.2} g",
            i + 1,
            line.ingredient.name,
            line.ingredient.grade_label(),
            line.amount,
            width = max_name_len
        );
    }

    println!();
    println!("--- Nutrients ---");
    for nutrient in Nutrient::ALL {
        let target = request.targets.get(nutrient);
        let actual = blend.actual_percentages.get(nutrient);
        let tag = if blend.constrained.contains(&nutrient) {
            ""
        } else {
            "  (unconstrained)"
        };
        println!(
            "  {}: {:>7.3}% (target {:.3}%, {:+.3} pp){}",
            nutrient.symbol(),
            actual,
            target,
            blend.deviation(&request.targets, nutrient),
            tag
        );
    }

    println!();
    println!("--- Summary ---");
    println!("Ingredients used: {}", blend.ingredient_count());
    println!("Total weight: {:.2} g", blend.actual_weight);
    println!();
}

/// Display a simple list of ingredients.
pub fn display_ingredient_list(ingredients: &[Ingredient], title: &str) {
    if ingredients.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, ingredients.len());
    println!();

    for ingredient in ingredients {
        println!(
            "  {} [{}] - N:{} P:{} K:{}",
            ingredient.name, ingredient.id, ingredient.n, ingredient.p, ingredient.k
        );
    }

    println!();
}
