// Abstract optimization problem - solver-agnostic variables, objective and constraints

use crate::models::{ItemId, SupplierId};
use std::fmt;

/// Identity of one decision variable: pallets of an item ordered from a
/// supplier. A structured key, so two pairs can never collide the way
/// formatted string names can.
pub type VarKey = (ItemId, SupplierId);

/// Direction of a linear inequality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintOp {
    /// Left-hand side must be greater than or equal to the bound
    Geq,
    /// Left-hand side must be less than or equal to the bound
    Leq,
}

/// Business meaning of a constraint, kept for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// Post-order stock must stay at or above the item's safety floor
    MinStock(ItemId),
    /// Post-order stock must stay at or below the item's storage ceiling
    MaxStock(ItemId),
    /// Aggregate pallets from a supplier must meet its minimum order
    SupplierMin(SupplierId),
    /// Aggregate pallets from a supplier must not exceed its capacity
    SupplierMax(SupplierId),
    /// A single order must be consumable before the item expires,
    /// accounting for the supplier's lead time
    LeadTimeExpiry(ItemId, SupplierId),
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintKind::MinStock(item) => write!(f, "min_stock[{}]", item),
            ConstraintKind::MaxStock(item) => write!(f, "max_stock[{}]", item),
            ConstraintKind::SupplierMin(supplier) => write!(f, "supplier_min[{}]", supplier),
            ConstraintKind::SupplierMax(supplier) => write!(f, "supplier_max[{}]", supplier),
            ConstraintKind::LeadTimeExpiry(item, supplier) => {
                write!(f, "lead_time_expiry[{},{}]", item, supplier)
            }
        }
    }
}

/// One linear constraint: `sum(coefficient * variable) op bound`
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// Business meaning, used in logs and infeasibility diagnostics
    pub kind: ConstraintKind,

    /// Variable coefficients on the left-hand side; may be empty when an
    /// item has no eligible supplier
    pub terms: Vec<(VarKey, f64)>,

    /// Inequality direction
    pub op: ConstraintOp,

    /// Right-hand side bound
    pub bound: f64,
}

impl Constraint {
    /// A constraint with no variables is a constant fact about the input
    /// data; it either holds or proves the problem infeasible outright.
    pub fn is_constant(&self) -> bool {
        self.terms.is_empty()
    }

    /// Checks whether a constant constraint is satisfied (left-hand side 0)
    pub fn constant_holds(&self) -> bool {
        match self.op {
            ConstraintOp::Geq => 0.0 >= self.bound,
            ConstraintOp::Leq => 0.0 <= self.bound,
        }
    }
}

/// A full integer program: minimize `objective` subject to `constraints`,
/// with every variable a non-negative integer
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Problem {
    /// Decision variables, one per eligible (item, supplier) pair, in
    /// deterministic (item, supplier) order
    pub variables: Vec<VarKey>,

    /// Objective coefficients (cost per pallet), aligned with `variables`
    pub objective: Vec<(VarKey, f64)>,

    /// All constraints of the program
    pub constraints: Vec<Constraint>,
}

impl Problem {
    /// Number of decision variables
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Number of constraints, constant ones included
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}
