//! Blend formulation: request validation, candidate filtering, MILP
//! construction and solution interpretation.

pub mod builder;
pub mod constants;
pub mod constraints;
pub mod filter;
pub mod interpret;

pub use builder::{allocate_variables, formulate, Formulation};
pub use constants::*;
pub use filter::{filter_candidates, is_compatible};
pub use interpret::{actual_percentages, classify_status, interpret_solution};

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, info, warn};

use crate::error::BlendError;
use crate::models::{Blend, BlendRequest};
use crate::solver::{violations, Solver};

/// Text of a panic payload, for reporting a crashed solver.
fn panic_message(payload: Box<dyn Any + Send>) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "solver panicked".to_string())
}

/// Compute a blend with the default formulation constants.
pub fn calculate_mix<S: Solver + ?Sized>(
    request: &BlendRequest,
    solver: &S,
) -> Result<Blend, BlendError> {
    calculate_mix_with(request, solver, &FormulationConfig::default())
}

/// Compute a blend: validate, filter, build, solve, interpret.
///
/// Every failure comes back as a [`BlendError`]; nothing panics past here.
pub fn calculate_mix_with<S: Solver + ?Sized>(
    request: &BlendRequest,
    solver: &S,
    config: &FormulationConfig,
) -> Result<Blend, BlendError> {
    debug!(
        candidates = request.ingredients.len(),
        weight = request.total_weight,
        increment = request.increment,
        "received blend request"
    );

    if request.ingredients.is_empty() {
        return Err(BlendError::NoCandidates);
    }

    let candidates = filter_candidates(&request.ingredients, &request.targets)?;
    debug!(
        kept = candidates.len(),
        dropped = request.ingredients.len() - candidates.len(),
        "filtered candidates"
    );

    request.validate()?;
    let formulation = formulate(request, &candidates, config);

    // Backends may report internal failures by panicking.
    let solution = panic::catch_unwind(AssertUnwindSafe(|| solver.solve(&formulation.model)))
        .map_err(|payload| BlendError::SolverFault(panic_message(payload)))?
        .map_err(|fault| BlendError::SolverFault(fault.to_string()))?;
    debug!(status = %solution.status, "solver finished");

    if solution.status.has_values() {
        let broken = violations(&formulation.model, &solution, SOLUTION_CHECK_TOLERANCE);
        if !broken.is_empty() {
            warn!(?broken, "solver output breaks model constraints");
        }
    }

    let blend = interpret_solution(&solution, &formulation, config.recipe_epsilon)?;
    info!(
        ingredients = blend.ingredient_count(),
        weight = blend.actual_weight,
        "blend calculated"
    );

    Ok(blend)
}
