pub mod builder;
pub mod extract;
pub mod milp;

// Common solver capability types
use crate::models::{Problem, VarKey};
use std::collections::HashMap;

/// Outcome classification of one solve attempt.
/// Infeasible is a legitimate business answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveStatus {
    /// A provably cost-minimal integer assignment was found
    Optimal,
    /// The constraint set admits no integer assignment
    Infeasible,
    /// The objective can decrease without bound
    Unbounded,
    /// Any other engine verdict, with the engine's own description
    Other(String),
}

impl SolveStatus {
    /// True only for a proven optimum
    pub fn is_optimal(&self) -> bool {
        matches!(self, SolveStatus::Optimal)
    }
}

/// Raw result of one solve: verdict, per-variable values and the
/// solver-reported objective. Values are floats because MILP engines
/// report integer variables as near-integer floats.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutcome {
    /// Engine verdict
    pub status: SolveStatus,

    /// Solved value per decision variable; empty unless Optimal
    pub values: HashMap<VarKey, f64>,

    /// Objective value as accounted by the engine; None unless Optimal
    pub objective: Option<f64>,
}

impl SolveOutcome {
    /// A non-optimal outcome with no assignment
    pub fn without_solution(status: SolveStatus) -> Self {
        Self {
            status,
            values: HashMap::new(),
            objective: None,
        }
    }
}

/// Capability interface for a mixed-integer linear programming engine.
/// The formulation and extraction layers only depend on this contract, so
/// they can be exercised against a fake engine as well as a real one.
pub trait MilpSolver {
    /// Solve the problem to proven optimality or report why not
    fn solve(&self, problem: &Problem) -> SolveOutcome;
}
