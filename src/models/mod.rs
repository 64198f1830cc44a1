// Models module - exports all model types

mod item;
mod plan;
mod problem;
mod supplier;

// Re-export model types
pub use self::item::Item;
pub use self::plan::{OrderLine, OrderPlan};
pub use self::problem::{Constraint, ConstraintKind, ConstraintOp, Problem, VarKey};
pub use self::supplier::Supplier;

// Common type aliases for improved code readability
pub type ItemId = u32;
pub type SupplierId = u32;
pub type Cost = f64;
pub type Pallets = u32;

/// Number of item units on one pallet (fixed ordering granularity)
pub const UNITS_PER_PALLET: u32 = 24;
