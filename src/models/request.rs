use serde::{Deserialize, Serialize};

use crate::error::BlendError;
use crate::models::{Ingredient, NutrientTriple};

/// Everything needed for one blend calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlendRequest {
    /// Target N-P-K percentages of the finished blend.
    pub targets: NutrientTriple,

    /// Total blend weight in grams.
    pub total_weight: f64,

    /// Accepted deviation, as a percentage of each target.
    pub tolerance: f64,

    /// Smallest dosing step in grams.
    pub increment: f64,

    /// Candidate ingredients, in caller order.
    pub ingredients: Vec<Ingredient>,
}

impl BlendRequest {
    pub fn new(
        targets: NutrientTriple,
        total_weight: f64,
        tolerance: f64,
        increment: f64,
        ingredients: Vec<Ingredient>,
    ) -> Self {
        Self {
            targets,
            total_weight,
            tolerance,
            increment,
            ingredients,
        }
    }

    /// Check the numeric parameters before any model is built.
    pub fn validate(&self) -> Result<(), BlendError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.total_weight) || !positive(self.increment) {
            return Err(BlendError::InvalidParameters(format!(
                "total weight and increment must be positive (got weight {}, increment {})",
                self.total_weight, self.increment
            )));
        }

        let non_negative = |v: f64| v.is_finite() && v >= 0.0;
        if !non_negative(self.tolerance) {
            return Err(BlendError::InvalidParameters(format!(
                "tolerance must be a non-negative percentage (got {})",
                self.tolerance
            )));
        }
        if ![self.targets.n, self.targets.p, self.targets.k]
            .into_iter()
            .all(non_negative)
        {
            return Err(BlendError::InvalidParameters(
                "nutrient targets must be non-negative".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(weight: f64, increment: f64) -> BlendRequest {
        BlendRequest::new(
            NutrientTriple::new(10.0, 10.0, 10.0),
            weight,
            5.0,
            increment,
            vec![Ingredient::new("Urea", 46.0, 0.0, 0.0)],
        )
    }

    #[test]
    fn test_validate_accepts_positive() {
        assert!(request(1000.0, 10.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_weight() {
        let err = request(0.0, 10.0).validate().unwrap_err();
        assert!(matches!(err, BlendError::InvalidParameters(_)));
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn test_validate_rejects_negative_increment() {
        assert!(request(1000.0, -1.0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nan() {
        assert!(request(f64::NAN, 10.0).validate().is_err());
    }
}
