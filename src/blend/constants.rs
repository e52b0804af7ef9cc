/// Big-M is this multiple of the total blend weight.
///
/// Any feasible amount is at most the total weight, so 2x leaves slack
/// without hurting numerics.
pub const BIG_M_FACTOR: f64 = 2.0;

/// Lower linking threshold in grams: `amount >= LINK_EPSILON * used`.
pub const LINK_EPSILON: f64 = 0.001;

/// Amounts at or below this many grams are dropped from the recipe.
pub const RECIPE_EPSILON: f64 = 0.001;

/// Slack allowed when checking solver output against the model.
pub const SOLUTION_CHECK_TOLERANCE: f64 = 1e-6;

// ─────────────────────────────────────────────────────────────────────────────
// Variable and constraint names
// ─────────────────────────────────────────────────────────────────────────────

pub const AMOUNT_PREFIX: &str = "amount";
pub const DOSE_PREFIX: &str = "dose";
pub const USED_PREFIX: &str = "used";

pub const TOTAL_WEIGHT_CONSTRAINT: &str = "total_weight";

pub fn amount_name(i: usize) -> String {
    format!("{}_{}", AMOUNT_PREFIX, i)
}

pub fn dose_name(i: usize) -> String {
    format!("{}_{}", DOSE_PREFIX, i)
}

pub fn used_name(i: usize) -> String {
    format!("{}_{}", USED_PREFIX, i)
}

/// Tunable knobs of the formulation.
#[derive(Debug, Clone)]
pub struct FormulationConfig {
    pub big_m_factor: f64,
    pub link_epsilon: f64,
    pub recipe_epsilon: f64,
}

impl Default for FormulationConfig {
    fn default() -> Self {
        Self {
            big_m_factor: BIG_M_FACTOR,
            link_epsilon: LINK_EPSILON,
            recipe_epsilon: RECIPE_EPSILON,
        }
    }
}

impl FormulationConfig {
    /// Big-M value for a given total weight.
    pub fn big_m(&self, total_weight: f64) -> f64 {
        self.big_m_factor * total_weight
    }
}
