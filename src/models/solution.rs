use std::collections::HashMap;
use std::fmt;

/// Termination status reported by a solver backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolutionStatus {
    Optimal,
    Feasible,
    Infeasible,
    Unbounded,
    Undefined,
    /// A status the backend reported that has no mapping here.
    Other(String),
}

impl SolutionStatus {
    /// Whether variable values accompany this status.
    pub fn has_values(&self) -> bool {
        matches!(self, SolutionStatus::Optimal | SolutionStatus::Feasible)
    }
}

impl fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionStatus::Optimal => f.write_str("optimal"),
            SolutionStatus::Feasible => f.write_str("feasible"),
            SolutionStatus::Infeasible => f.write_str("infeasible"),
            SolutionStatus::Unbounded => f.write_str("unbounded"),
            SolutionStatus::Undefined => f.write_str("undefined"),
            SolutionStatus::Other(raw) => f.write_str(raw),
        }
    }
}

/// Raw solver output: a status plus variable values keyed by name.
#[derive(Debug, Clone)]
pub struct Solution {
    pub status: SolutionStatus,
    pub values: HashMap<String, f64>,
}

impl Solution {
    /// A solution carrying values.
    pub fn with_values(status: SolutionStatus, values: HashMap<String, f64>) -> Self {
        Self { status, values }
    }

    /// A solution without values (infeasible, unbounded, ...).
    pub fn status_only(status: SolutionStatus) -> Self {
        Self {
            status,
            values: HashMap::new(),
        }
    }

    pub fn value(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }
}
