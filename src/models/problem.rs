//! Solver-independent description of a mixed-integer linear program.
//!
//! A [`Model`] is assembled through [`ModelBuilder`] and is read-only once
//! built, so a solver backend can only inspect it.

/// Domain of a decision variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    Continuous,
    Integer,
    Binary,
}

/// Handle to a declared variable (its position in the declaration list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(pub usize);

/// A declared variable with its bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDecl {
    pub name: String,
    pub lower: f64,
    pub upper: f64,
    pub kind: VariableKind,
}

/// Right-hand side of a linear constraint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Eq(f64),
    Le(f64),
    Ge(f64),
    Range { lower: f64, upper: f64 },
}

impl Bound {
    /// Whether a left-hand side value satisfies this bound within `tol`.
    pub fn admits(&self, value: f64, tol: f64) -> bool {
        match *self {
            Bound::Eq(rhs) => (value - rhs).abs() <= tol,
            Bound::Le(rhs) => value <= rhs + tol,
            Bound::Ge(rhs) => value >= rhs - tol,
            Bound::Range { lower, upper } => value >= lower - tol && value <= upper + tol,
        }
    }
}

/// `sum(coef * var) <bound>`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    pub name: String,
    pub terms: Vec<(VarId, f64)>,
    pub bound: Bound,
}

impl LinearConstraint {
    /// Left-hand side evaluated at `value(var)`.
    pub fn lhs(&self, value: impl Fn(VarId) -> f64) -> f64 {
        self.terms.iter().map(|&(var, coef)| coef * value(var)).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Minimize,
    Maximize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Objective {
    pub direction: Direction,
    pub terms: Vec<(VarId, f64)>,
}

/// The three variables allocated for one candidate ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionVariables {
    /// Grams of the ingredient (continuous).
    pub amount: VarId,
    /// Number of dosing increments (integer).
    pub dose_count: VarId,
    /// Whether the ingredient participates (binary).
    pub used: VarId,
}

/// A complete, immutable MILP.
#[derive(Debug, Clone)]
pub struct Model {
    objective: Objective,
    constraints: Vec<LinearConstraint>,
    variables: Vec<VariableDecl>,
}

impl Model {
    pub fn objective(&self) -> &Objective {
        &self.objective
    }

    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }

    pub fn variables(&self) -> &[VariableDecl] {
        &self.variables
    }

    pub fn variable(&self, id: VarId) -> &VariableDecl {
        &self.variables[id.0]
    }

    /// Find a constraint by name.
    pub fn constraint(&self, name: &str) -> Option<&LinearConstraint> {
        self.constraints.iter().find(|c| c.name == name)
    }
}

/// Accumulates declarations and constraints for a single [`Model`].
#[derive(Debug)]
pub struct ModelBuilder {
    objective: Objective,
    constraints: Vec<LinearConstraint>,
    variables: Vec<VariableDecl>,
}

impl Default for ModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self {
            objective: Objective {
                direction: Direction::Minimize,
                terms: Vec::new(),
            },
            constraints: Vec::new(),
            variables: Vec::new(),
        }
    }

    /// Declare a variable and return its handle.
    pub fn add_variable(&mut self, name: String, lower: f64, upper: f64, kind: VariableKind) -> VarId {
        let id = VarId(self.variables.len());
        self.variables.push(VariableDecl {
            name,
            lower,
            upper,
            kind,
        });
        id
    }

    pub fn add_constraint(&mut self, name: String, terms: Vec<(VarId, f64)>, bound: Bound) {
        self.constraints.push(LinearConstraint { name, terms, bound });
    }

    pub fn set_objective(&mut self, direction: Direction, terms: Vec<(VarId, f64)>) {
        self.objective = Objective { direction, terms };
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Freeze into a [`Model`].
    pub fn build(self) -> Model {
        Model {
            objective: self.objective,
            constraints: self.constraints,
            variables: self.variables,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_assigns_sequential_ids() {
        let mut builder = ModelBuilder::new();
        let a = builder.add_variable("a".into(), 0.0, 1.0, VariableKind::Binary);
        let b = builder.add_variable("b".into(), 0.0, 5.0, VariableKind::Integer);
        assert_eq!(a, VarId(0));
        assert_eq!(b, VarId(1));

        builder.add_constraint("sum".into(), vec![(a, 1.0), (b, 1.0)], Bound::Le(3.0));
        let model = builder.build();
        assert_eq!(model.variables().len(), 2);
        assert_eq!(model.variable(b).kind, VariableKind::Integer);
        assert!(model.constraint("sum").is_some());
        assert!(model.constraint("missing").is_none());
    }

    #[test]
    fn test_bound_admits() {
        assert!(Bound::Eq(10.0).admits(10.0 + 1e-9, 1e-6));
        assert!(!Bound::Le(10.0).admits(10.1, 1e-6));
        assert!(Bound::Ge(0.0).admits(0.0, 0.0));
        let range = Bound::Range {
            lower: 95.0,
            upper: 105.0,
        };
        assert!(range.admits(100.0, 0.0));
        assert!(!range.admits(94.0, 0.0));
    }

    #[test]
    fn test_constraint_lhs() {
        let c = LinearConstraint {
            name: "link".into(),
            terms: vec![(VarId(0), 1.0), (VarId(1), -10.0)],
            bound: Bound::Eq(0.0),
        };
        let values = [50.0, 5.0];
        assert_eq!(c.lhs(|v| values[v.0]), 0.0);
    }
}
