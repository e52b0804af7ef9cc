use std::collections::HashMap;

use good_lp::solvers::microlp::microlp;
use good_lp::{
    constraint, variable, Constraint, Expression, ProblemVariables, ResolutionError,
    Solution as _, SolutionStatus as LpStatus, SolverModel, Variable,
};
use tracing::debug;

use crate::models::{
    Bound, Direction, LinearConstraint, Model, Solution, SolutionStatus, VarId, VariableDecl,
    VariableKind,
};
use crate::solver::{Solver, SolverFault};

/// [`Solver`] backed by `good_lp` with the pure-Rust microlp engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoodLpSolver;

impl GoodLpSolver {
    pub fn new() -> Self {
        Self
    }
}

fn definition(decl: &VariableDecl) -> good_lp::variable::VariableDefinition {
    let def = variable();
    match decl.kind {
        VariableKind::Continuous => def.min(decl.lower).max(decl.upper),
        VariableKind::Integer => def.integer().min(decl.lower).max(decl.upper),
        VariableKind::Binary => def.binary(),
    }
}

fn expression(terms: &[(VarId, f64)], handles: &[Variable]) -> Expression {
    let mut expr = Expression::default();
    for &(id, coef) in terms {
        expr += handles[id.0] * coef;
    }
    expr
}

/// good_lp has no ranged constraint, so a range becomes a `>=` and `<=` pair.
fn lower(c: &LinearConstraint, handles: &[Variable]) -> Vec<Constraint> {
    let lhs = expression(&c.terms, handles);
    match c.bound {
        Bound::Eq(rhs) => vec![constraint::eq(lhs, rhs)],
        Bound::Le(rhs) => vec![constraint::leq(lhs, rhs)],
        Bound::Ge(rhs) => vec![constraint::geq(lhs, rhs)],
        Bound::Range { lower, upper } => vec![
            constraint::geq(lhs.clone(), lower),
            constraint::leq(lhs, upper),
        ],
    }
}

fn run(model: &Model) -> Result<Solution, SolverFault> {
    let mut vars = ProblemVariables::new();
    let handles: Vec<Variable> = model
        .variables()
        .iter()
        .map(|decl| vars.add(definition(decl)))
        .collect();

    let objective = expression(&model.objective().terms, &handles);
    let unsolved = match model.objective().direction {
        Direction::Minimize => vars.minimise(objective),
        Direction::Maximize => vars.maximise(objective),
    };

    let mut problem = unsolved.using(microlp);
    for c in model.constraints() {
        for lowered in lower(c, &handles) {
            problem = problem.with(lowered);
        }
    }

    match problem.solve() {
        Ok(solution) => {
            let status = if matches!(solution.status(), LpStatus::Optimal) {
                SolutionStatus::Optimal
            } else {
                SolutionStatus::Feasible
            };
            let values: HashMap<String, f64> = model
                .variables()
                .iter()
                .zip(&handles)
                .map(|(decl, &var)| (decl.name.clone(), solution.value(var)))
                .collect();
            Ok(Solution::with_values(status, values))
        }
        Err(ResolutionError::Infeasible) => Ok(Solution::status_only(SolutionStatus::Infeasible)),
        Err(ResolutionError::Unbounded) => Ok(Solution::status_only(SolutionStatus::Unbounded)),
        Err(other) => Err(SolverFault(other.to_string())),
    }
}

impl Solver for GoodLpSolver {
    fn solve(&self, model: &Model) -> Result<Solution, SolverFault> {
        debug!(
            variables = model.variables().len(),
            constraints = model.constraints().len(),
            "solving with microlp"
        );
        run(model)
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;

    use super::*;
    use crate::models::ModelBuilder;

    #[test]
    fn test_small_milp() {
        // max x + y, x + 2y <= 7, x <= 3.5, both integer
        let mut b = ModelBuilder::new();
        let x = b.add_variable("x".into(), 0.0, 3.5, VariableKind::Integer);
        let y = b.add_variable("y".into(), 0.0, 10.0, VariableKind::Integer);
        b.add_constraint("cap".into(), vec![(x, 1.0), (y, 2.0)], Bound::Le(7.0));
        b.set_objective(Direction::Maximize, vec![(x, 1.0), (y, 1.0)]);

        let solution = GoodLpSolver.solve(&b.build()).unwrap();
        assert!(solution.status.has_values());
        let total = solution.value("x").unwrap() + solution.value("y").unwrap();
        assert_float_absolute_eq!(total, 5.0, 1e-6);
    }

    #[test]
    fn test_range_constraint() {
        let mut b = ModelBuilder::new();
        let x = b.add_variable("x".into(), 0.0, 100.0, VariableKind::Continuous);
        b.add_constraint(
            "band".into(),
            vec![(x, 1.0)],
            Bound::Range {
                lower: 20.0,
                upper: 30.0,
            },
        );
        b.set_objective(Direction::Minimize, vec![(x, 1.0)]);

        let solution = GoodLpSolver.solve(&b.build()).unwrap();
        assert_float_absolute_eq!(solution.value("x").unwrap(), 20.0, 1e-6);
    }

    #[test]
    fn test_infeasible_is_status() {
        let mut b = ModelBuilder::new();
        let x = b.add_variable("x".into(), 0.0, 1.0, VariableKind::Continuous);
        b.add_constraint("impossible".into(), vec![(x, 1.0)], Bound::Ge(5.0));
        b.set_objective(Direction::Minimize, vec![(x, 1.0)]);

        let solution = GoodLpSolver.solve(&b.build()).unwrap();
        assert_eq!(solution.status, SolutionStatus::Infeasible);
        assert!(solution.values.is_empty());
    }
}
