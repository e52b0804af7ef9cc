use std::collections::HashMap;

use strsim::jaro_winkler;
use tracing::debug;

use crate::error::{AppError, Result};
use crate::models::Ingredient;

/// Minimum Jaro-Winkler score for a fuzzy name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.85;

/// Read-only ingredient library with case-insensitive lookup.
///
/// Keeps the order ingredients were loaded in; that order becomes the
/// candidate order of a blend request.
#[derive(Debug)]
pub struct IngredientLibrary {
    ingredients: Vec<Ingredient>,
    /// Lowercase name -> position in `ingredients`.
    index: HashMap<String, usize>,
}

impl IngredientLibrary {
    /// Build a library; later duplicates replace earlier ones in place.
    pub fn new(ingredients: Vec<Ingredient>) -> Self {
        let mut ordered: Vec<Ingredient> = Vec::with_capacity(ingredients.len());
        let mut index = HashMap::new();
        for ingredient in ingredients {
            match index.get(&ingredient.key()) {
                Some(&pos) => ordered[pos] = ingredient,
                None => {
                    index.insert(ingredient.key(), ordered.len());
                    ordered.push(ingredient);
                }
            }
        }
        Self {
            ingredients: ordered,
            index,
        }
    }

    /// Get an ingredient by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Ingredient> {
        self.index
            .get(&name.to_lowercase())
            .map(|&pos| &self.ingredients[pos])
    }

    /// Exact match first, then the best fuzzy match above the threshold.
    pub fn resolve(&self, name: &str) -> Result<&Ingredient> {
        if let Some(ingredient) = self.get(name) {
            return Ok(ingredient);
        }

        let wanted = name.trim().to_lowercase();
        let best = self
            .ingredients
            .iter()
            .map(|i| (i, jaro_winkler(&i.key(), &wanted)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        match best {
            Some((ingredient, score)) => {
                debug!(query = name, matched = %ingredient.name, score, "fuzzy ingredient match");
                Ok(ingredient)
            }
            None => Err(AppError::IngredientNotFound(name.to_string())),
        }
    }

    /// Resolve a list of names, dropping repeats, in the order given.
    pub fn select(&self, names: &[String]) -> Result<Vec<Ingredient>> {
        let mut selected: Vec<Ingredient> = Vec::with_capacity(names.len());
        for name in names {
            let ingredient = self.resolve(name)?;
            if !selected.contains(ingredient) {
                selected.push(ingredient.clone());
            }
        }
        Ok(selected)
    }

    /// All ingredients in load order.
    pub fn all(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}
