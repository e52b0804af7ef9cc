use serde::{Deserialize, Serialize};

/// One of the three primary plant nutrients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nutrient {
    Nitrogen,
    Phosphorus,
    Potassium,
}

impl Nutrient {
    /// All nutrients in N-P-K order.
    pub const ALL: [Nutrient; 3] = [Nutrient::Nitrogen, Nutrient::Phosphorus, Nutrient::Potassium];

    /// Single-letter symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Nutrient::Nitrogen => "N",
            Nutrient::Phosphorus => "P",
            Nutrient::Potassium => "K",
        }
    }
}

/// Three values indexed by [`Nutrient`], in N-P-K order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTriple {
    pub n: f64,
    pub p: f64,
    pub k: f64,
}

impl NutrientTriple {
    pub fn new(n: f64, p: f64, k: f64) -> Self {
        Self { n, p, k }
    }

    #[inline]
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Nitrogen => self.n,
            Nutrient::Phosphorus => self.p,
            Nutrient::Potassium => self.k,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, nutrient: Nutrient) -> &mut f64 {
        match nutrient {
            Nutrient::Nitrogen => &mut self.n,
            Nutrient::Phosphorus => &mut self.p,
            Nutrient::Potassium => &mut self.k,
        }
    }
}

/// A raw blending ingredient with fixed nutrient percentages by weight.
///
/// Percentages are expected in `0..=100`; the core does not enforce it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "Id", default)]
    pub id: String,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "N")]
    pub n: f64,

    #[serde(rename = "P")]
    pub p: f64,

    #[serde(rename = "K")]
    pub k: f64,
}

impl Ingredient {
    /// Build an ingredient whose id is derived from its name.
    pub fn new(name: &str, n: f64, p: f64, k: f64) -> Self {
        Self {
            id: name.to_lowercase(),
            name: name.to_string(),
            n,
            p,
            k,
        }
    }

    /// Percentage of a given nutrient.
    #[inline]
    pub fn percent(&self, nutrient: Nutrient) -> f64 {
        self.grade().get(nutrient)
    }

    /// The N-P-K grade as a triple.
    #[inline]
    pub fn grade(&self) -> NutrientTriple {
        NutrientTriple::new(self.n, self.p, self.k)
    }

    /// Percentages are non-negative, at most 100 each and sum to at most 100.
    pub fn is_valid(&self) -> bool {
        let in_range = |v: f64| v.is_finite() && (0.0..=100.0).contains(&v);
        in_range(self.n) && in_range(self.p) && in_range(self.k) && self.n + self.p + self.k <= 100.0
    }

    /// Grade label such as `18-46-0`.
    pub fn grade_label(&self) -> String {
        format!("{}-{}-{}", self.n, self.p, self.k)
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Ingredient {}
