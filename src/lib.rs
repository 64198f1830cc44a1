// Public modules
pub mod models;
pub mod optimizer;
pub mod utils;

// Re-exports for convenience
pub use models::{Item, OrderLine, OrderPlan, Problem, Supplier, UNITS_PER_PALLET};
pub use optimizer::builder::build_problem;
pub use optimizer::extract::extract_plan;
pub use optimizer::milp::GoodLpSolver;
pub use optimizer::{MilpSolver, SolveOutcome, SolveStatus};
pub use utils::prepare::{prepare_planning_data, PlanningData};
