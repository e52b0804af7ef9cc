use crate::blend::constants::{FormulationConfig, TOTAL_WEIGHT_CONSTRAINT};
use crate::models::{
    Bound, BlendRequest, DecisionVariables, Direction, Ingredient, ModelBuilder, Nutrient,
};

/// Dosing lattice and usage indicator links for every candidate.
///
/// - `amount - increment * dose = 0`
/// - `amount - M * used <= 0`
/// - `amount - eps * used >= 0`
pub fn add_linking_constraints(
    builder: &mut ModelBuilder,
    variables: &[DecisionVariables],
    request: &BlendRequest,
    config: &FormulationConfig,
) {
    let big_m = config.big_m(request.total_weight);

    for (i, v) in variables.iter().enumerate() {
        builder.add_constraint(
            format!("dosing_{}", i),
            vec![(v.amount, 1.0), (v.dose_count, -request.increment)],
            Bound::Eq(0.0),
        );
        builder.add_constraint(
            format!("usage_upper_{}", i),
            vec![(v.amount, 1.0), (v.used, -big_m)],
            Bound::Le(0.0),
        );
        builder.add_constraint(
            format!("usage_lower_{}", i),
            vec![(v.amount, 1.0), (v.used, -config.link_epsilon)],
            Bound::Ge(0.0),
        );
    }
}

/// Whether a nutrient needs a tolerance constraint.
///
/// A zero target with no candidate carrying the nutrient is vacuous and skipped.
pub fn needs_tolerance(nutrient: Nutrient, target: f64, candidates: &[Ingredient]) -> bool {
    target != 0.0 || candidates.iter().any(|c| c.percent(nutrient) != 0.0)
}

/// Tolerance band in grams of nutrient.
pub fn tolerance_band(total_weight: f64, target_percent: f64, tolerance: f64) -> (f64, f64) {
    let target_amount = total_weight * target_percent / 100.0;
    let tol = tolerance / 100.0;
    (target_amount * (1.0 - tol), target_amount * (1.0 + tol))
}

/// Total weight equality and per-nutrient tolerance bands.
///
/// Returns the nutrients that received a tolerance constraint.
pub fn add_global_constraints(
    builder: &mut ModelBuilder,
    variables: &[DecisionVariables],
    candidates: &[Ingredient],
    request: &BlendRequest,
) -> Vec<Nutrient> {
    builder.add_constraint(
        TOTAL_WEIGHT_CONSTRAINT.to_string(),
        variables.iter().map(|v| (v.amount, 1.0)).collect(),
        Bound::Eq(request.total_weight),
    );

    let mut constrained = Vec::with_capacity(Nutrient::ALL.len());
    for nutrient in Nutrient::ALL {
        let target = request.targets.get(nutrient);
        if !needs_tolerance(nutrient, target, candidates) {
            continue;
        }

        let (lower, upper) = tolerance_band(request.total_weight, target, request.tolerance);
        let terms = variables
            .iter()
            .zip(candidates)
            .map(|(v, c)| (v.amount, c.percent(nutrient) / 100.0))
            .collect();

        builder.add_constraint(
            format!("nutrient_{}", nutrient.symbol()),
            terms,
            Bound::Range { lower, upper },
        );
        constrained.push(nutrient);
    }

    constrained
}

/// Minimize the number of ingredients used.
pub fn set_objective(builder: &mut ModelBuilder, variables: &[DecisionVariables]) {
    builder.set_objective(
        Direction::Minimize,
        variables.iter().map(|v| (v.used, 1.0)).collect(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blend::builder::formulate;
    use crate::models::NutrientTriple;

    fn request(targets: NutrientTriple, candidates: Vec<Ingredient>) -> BlendRequest {
        BlendRequest::new(targets, 1000.0, 5.0, 10.0, candidates)
    }

    #[test]
    fn test_linking_coefficients() {
        let candidates = vec![Ingredient::new("Urea", 46.0, 0.0, 0.0)];
        let req = request(NutrientTriple::new(46.0, 0.0, 0.0), candidates.clone());
        let f = formulate(&req, &candidates, &FormulationConfig::default());
        let v = f.variables[0];

        let dosing = f.model.constraint("dosing_0").unwrap();
        assert_eq!(dosing.terms, vec![(v.amount, 1.0), (v.dose_count, -10.0)]);
        assert_eq!(dosing.bound, Bound::Eq(0.0));

        let upper = f.model.constraint("usage_upper_0").unwrap();
        assert_eq!(upper.terms, vec![(v.amount, 1.0), (v.used, -2000.0)]);
        assert_eq!(upper.bound, Bound::Le(0.0));

        let lower = f.model.constraint("usage_lower_0").unwrap();
        assert_eq!(lower.terms, vec![(v.amount, 1.0), (v.used, -0.001)]);
        assert_eq!(lower.bound, Bound::Ge(0.0));
    }

    #[test]
    fn test_custom_big_m() {
        let candidates = vec![Ingredient::new("Urea", 46.0, 0.0, 0.0)];
        let req = request(NutrientTriple::new(46.0, 0.0, 0.0), candidates.clone());
        let config = FormulationConfig {
            big_m_factor: 1.0,
            ..Default::default()
        };
        let f = formulate(&req, &candidates, &config);
        let upper = f.model.constraint("usage_upper_0").unwrap();
        assert_eq!(upper.terms[1].1, -1000.0);
    }

    #[test]
    fn test_tolerance_band() {
        let (lo, hi) = tolerance_band(1000.0, 10.0, 5.0);
        assert!((lo - 95.0).abs() < 1e-9);
        assert!((hi - 105.0).abs() < 1e-9);

        let (lo, hi) = tolerance_band(100.0, 100.0, 0.0);
        assert_eq!((lo, hi), (100.0, 100.0));
    }

    #[test]
    fn test_vacuous_nutrient_omitted() {
        let candidates = vec![
            Ingredient::new("Urea", 46.0, 0.0, 0.0),
            Ingredient::new("Filler", 0.0, 0.0, 0.0),
        ];
        let req = request(NutrientTriple::new(20.0, 0.0, 0.0), candidates.clone());
        let f = formulate(&req, &candidates, &FormulationConfig::default());

        assert_eq!(f.constrained, vec![Nutrient::Nitrogen]);
        assert!(f.model.constraint("nutrient_N").is_some());
        assert!(f.model.constraint("nutrient_P").is_none());
        assert!(f.model.constraint("nutrient_K").is_none());
    }

    #[test]
    fn test_zero_target_with_carrier_is_kept() {
        // Only reachable without the pre-filter; the band collapses to [0, 0].
        let candidates = vec![Ingredient::new("DAP", 18.0, 46.0, 0.0)];
        let req = request(NutrientTriple::new(18.0, 0.0, 0.0), candidates.clone());
        let f = formulate(&req, &candidates, &FormulationConfig::default());

        let p = f.model.constraint("nutrient_P").unwrap();
        assert_eq!(p.bound, Bound::Range { lower: 0.0, upper: 0.0 });
    }

    #[test]
    fn test_constraint_count() {
        let candidates = vec![
            Ingredient::new("Urea", 46.0, 0.0, 0.0),
            Ingredient::new("DAP", 18.0, 46.0, 0.0),
            Ingredient::new("Potash", 0.0, 0.0, 60.0),
        ];
        let req = request(NutrientTriple::new(10.0, 10.0, 10.0), candidates.clone());
        let f = formulate(&req, &candidates, &FormulationConfig::default());

        // 3 linking per candidate, total weight, 3 nutrients
        assert_eq!(f.model.constraints().len(), 3 * 3 + 1 + 3);
    }
}
