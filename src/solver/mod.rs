//! Boundary to the MILP engine.
//!
//! The blend core only ever talks to [`Solver`]; [`GoodLpSolver`] is the
//! bundled backend.

mod good_lp_backend;

pub use good_lp_backend::GoodLpSolver;

use thiserror::Error;

use crate::models::{Model, Solution, VarId};

/// The solver could not run to completion.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{0}")]
pub struct SolverFault(pub String);

/// Anything that can solve a [`Model`].
///
/// Implementations must honour declared bounds, integrality and constraint
/// bounds, and return a value for every declared variable whenever the
/// status is optimal or feasible.
pub trait Solver {
    fn solve(&self, model: &Model) -> Result<Solution, SolverFault>;
}

impl<F> Solver for F
where
    F: Fn(&Model) -> Result<Solution, SolverFault>,
{
    fn solve(&self, model: &Model) -> Result<Solution, SolverFault> {
        self(model)
    }
}

/// Names of constraints (and variable bounds) a solution breaks by more than `tol`.
///
/// Missing variable values are read as zero.
pub fn violations(model: &Model, solution: &Solution, tol: f64) -> Vec<String> {
    let value = |id: VarId| solution.value(&model.variable(id).name).unwrap_or(0.0);
    let mut broken = Vec::new();

    for (i, decl) in model.variables().iter().enumerate() {
        let v = value(VarId(i));
        if v < decl.lower - tol || v > decl.upper + tol {
            broken.push(decl.name.clone());
        }
    }

    for constraint in model.constraints() {
        if !constraint.bound.admits(constraint.lhs(value), tol) {
            broken.push(constraint.name.clone());
        }
    }

    broken
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::models::{Bound, ModelBuilder, SolutionStatus, VariableKind};

    fn model() -> Model {
        let mut b = ModelBuilder::new();
        let x = b.add_variable("x".into(), 0.0, 10.0, VariableKind::Continuous);
        let y = b.add_variable("y".into(), 0.0, 10.0, VariableKind::Continuous);
        b.add_constraint("sum".into(), vec![(x, 1.0), (y, 1.0)], Bound::Eq(10.0));
        b.build()
    }

    fn solution(x: f64, y: f64) -> Solution {
        let values = HashMap::from([("x".to_string(), x), ("y".to_string(), y)]);
        Solution::with_values(SolutionStatus::Optimal, values)
    }

    #[test]
    fn test_violations_empty_for_valid_point() {
        assert!(violations(&model(), &solution(4.0, 6.0), 1e-6).is_empty());
    }

    #[test]
    fn test_violations_reports_constraint_and_bound() {
        let broken = violations(&model(), &solution(12.0, 6.0), 1e-6);
        assert_eq!(broken, vec!["x".to_string(), "sum".to_string()]);
    }

    #[test]
    fn test_closure_is_a_solver() {
        let solver = |_: &Model| -> Result<Solution, SolverFault> { Err(SolverFault("offline".into())) };
        assert_eq!(solver.solve(&model()).unwrap_err().to_string(), "offline");
    }
}
