use tracing::debug;

use crate::blend::constants::{amount_name, dose_name, used_name, FormulationConfig};
use crate::blend::constraints::{add_global_constraints, add_linking_constraints, set_objective};
use crate::models::{
    BlendRequest, DecisionVariables, Ingredient, Model, ModelBuilder, Nutrient, VariableKind,
};

/// A built model plus the bookkeeping needed to read its solution back.
#[derive(Debug)]
pub struct Formulation {
    pub model: Model,

    /// Filtered candidates the model was built from.
    pub candidates: Vec<Ingredient>,

    /// One entry per candidate, same order as `candidates`.
    pub variables: Vec<DecisionVariables>,

    /// Nutrients that received a tolerance constraint.
    pub constrained: Vec<Nutrient>,
}

/// Declare the amount/dose/used triple for every candidate, in order.
///
/// Callers must have validated `total_weight > 0` and `increment > 0`.
pub fn allocate_variables(
    builder: &mut ModelBuilder,
    candidates: &[Ingredient],
    total_weight: f64,
    increment: f64,
) -> Vec<DecisionVariables> {
    let max_doses = (total_weight / increment).floor();

    (0..candidates.len())
        .map(|i| DecisionVariables {
            amount: builder.add_variable(amount_name(i), 0.0, total_weight, VariableKind::Continuous),
            dose_count: builder.add_variable(dose_name(i), 0.0, max_doses, VariableKind::Integer),
            used: builder.add_variable(used_name(i), 0.0, 1.0, VariableKind::Binary),
        })
        .collect()
}

/// Turn a validated request and its filtered candidates into a MILP.
pub fn formulate(
    request: &BlendRequest,
    candidates: &[Ingredient],
    config: &FormulationConfig,
) -> Formulation {
    let mut builder = ModelBuilder::new();

    let variables = allocate_variables(
        &mut builder,
        candidates,
        request.total_weight,
        request.increment,
    );
    add_linking_constraints(&mut builder, &variables, request, config);
    let constrained = add_global_constraints(&mut builder, &variables, candidates, request);
    set_objective(&mut builder, &variables);

    debug!(
        variables = builder.variable_count(),
        constraints = builder.constraint_count(),
        "built blend model"
    );

    Formulation {
        model: builder.build(),
        candidates: candidates.to_vec(),
        variables,
        constrained,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Bound, NutrientTriple, VarId};

    fn candidates() -> Vec<Ingredient> {
        vec![
            Ingredient::new("Urea", 46.0, 0.0, 0.0),
            Ingredient::new("DAP", 18.0, 46.0, 0.0),
        ]
    }

    #[test]
    fn test_allocate_bounds_and_kinds() {
        let mut builder = ModelBuilder::new();
        let vars = allocate_variables(&mut builder, &candidates(), 1000.0, 30.0);
        let model = builder.build();

        assert_eq!(vars.len(), 2);
        assert_eq!(model.variables().len(), 6);

        let amount = model.variable(vars[1].amount);
        assert_eq!(amount.name, "amount_1");
        assert_eq!(amount.kind, VariableKind::Continuous);
        assert_eq!((amount.lower, amount.upper), (0.0, 1000.0));

        let dose = model.variable(vars[1].dose_count);
        assert_eq!(dose.kind, VariableKind::Integer);
        assert_eq!(dose.upper, 33.0);

        let used = model.variable(vars[1].used);
        assert_eq!(used.kind, VariableKind::Binary);
        assert_eq!((used.lower, used.upper), (0.0, 1.0));
    }

    #[test]
    fn test_allocation_is_positional() {
        let mut builder = ModelBuilder::new();
        let vars = allocate_variables(&mut builder, &candidates(), 100.0, 10.0);
        assert_eq!(vars[0].amount, VarId(0));
        assert_eq!(vars[1].amount, VarId(3));
        assert_eq!(vars[1].used, VarId(5));
    }

    #[test]
    fn test_formulate_objective_counts_usage() {
        let request = BlendRequest::new(
            NutrientTriple::new(20.0, 10.0, 0.0),
            1000.0,
            5.0,
            10.0,
            candidates(),
        );
        let f = formulate(&request, &candidates(), &FormulationConfig::default());

        let objective = f.model.objective();
        let used: Vec<VarId> = f.variables.iter().map(|v| v.used).collect();
        let terms: Vec<VarId> = objective.terms.iter().map(|&(v, _)| v).collect();
        assert_eq!(terms, used);
        assert!(objective.terms.iter().all(|&(_, c)| c == 1.0));

        let total = f.model.constraint("total_weight").unwrap();
        assert_eq!(total.bound, Bound::Eq(1000.0));
    }

    #[test]
    fn test_formulation_keeps_candidates_aligned() {
        let request = BlendRequest::new(
            NutrientTriple::new(20.0, 10.0, 0.0),
            1000.0,
            5.0,
            10.0,
            candidates(),
        );
        let f = formulate(&request, &candidates(), &FormulationConfig::default());

        assert_eq!(f.candidates.len(), f.variables.len());
        let names: Vec<&str> = f.candidates.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Urea", "DAP"]);
        assert_eq!(f.model.variable(f.variables[1].amount).name, "amount_1");
    }
}
