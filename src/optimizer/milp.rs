// MILP engine adapter - translates the abstract problem into good_lp and
// maps the engine verdict back onto the solver capability contract.

use crate::models::{ConstraintOp, Problem, VarKey};
use crate::optimizer::{MilpSolver, SolveOutcome, SolveStatus};
use good_lp::{
    constraint, default_solver, variable, Expression, ProblemVariables, ResolutionError, Solution,
    SolverModel, Variable,
};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{info, warn};

/// Production solver backed by good_lp with its pure-Rust microlp engine.
/// The engine is a black box: one blocking call, no timeout, no retries.
#[derive(Debug, Default)]
pub struct GoodLpSolver;

impl GoodLpSolver {
    pub fn new() -> Self {
        Self
    }
}

impl MilpSolver for GoodLpSolver {
    fn solve(&self, problem: &Problem) -> SolveOutcome {
        // Constant constraints (items with no eligible supplier) never
        // reach the engine: a violated one settles the verdict here, a
        // satisfied one carries no information.
        for row in problem.constraints.iter().filter(|c| c.is_constant()) {
            if !row.constant_holds() {
                warn!(constraint = %row.kind, "constant constraint violated");
                return SolveOutcome::without_solution(SolveStatus::Infeasible);
            }
        }

        // Nothing left to decide: the empty order plan is optimal.
        if problem.variables.is_empty() {
            return SolveOutcome {
                status: SolveStatus::Optimal,
                values: HashMap::new(),
                objective: Some(0.0),
            };
        }

        let mut vars = ProblemVariables::new();
        let mut by_key: HashMap<VarKey, Variable> = HashMap::new();
        for &key in &problem.variables {
            by_key.insert(key, vars.add(variable().integer().min(0)));
        }

        let mut objective = Expression::from(0.0);
        for (key, cost) in &problem.objective {
            objective += *cost * by_key[key];
        }

        let mut model = vars.minimise(objective.clone()).using(default_solver);
        for row in problem.constraints.iter().filter(|c| !c.is_constant()) {
            let mut lhs = Expression::from(0.0);
            for (key, coefficient) in &row.terms {
                lhs += *coefficient * by_key[key];
            }
            model = model.with(match row.op {
                ConstraintOp::Geq => constraint::geq(lhs, row.bound),
                ConstraintOp::Leq => constraint::leq(lhs, row.bound),
            });
        }

        let started = Instant::now();
        match model.solve() {
            Ok(solution) => {
                let values = problem
                    .variables
                    .iter()
                    .map(|&key| (key, solution.value(by_key[&key])))
                    .collect();
                let objective_value = solution.eval(&objective);
                info!(
                    variables = problem.variable_count(),
                    objective = objective_value,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "solved to optimality"
                );
                SolveOutcome {
                    status: SolveStatus::Optimal,
                    values,
                    objective: Some(objective_value),
                }
            }
            Err(ResolutionError::Infeasible) => {
                info!("engine reported infeasible");
                SolveOutcome::without_solution(SolveStatus::Infeasible)
            }
            Err(ResolutionError::Unbounded) => {
                warn!("engine reported unbounded");
                SolveOutcome::without_solution(SolveStatus::Unbounded)
            }
            Err(error) => {
                warn!(%error, "engine failed");
                SolveOutcome::without_solution(SolveStatus::Other(error.to_string()))
            }
        }
    }
}
