// Supplier model representing a vendor with commercial order bounds

use crate::models::SupplierId;

/// Represents a supplier with aggregate order bounds and delivery lead time
#[derive(Debug, Clone, PartialEq)]
pub struct Supplier {
    /// Unique identifier for the supplier
    pub id: SupplierId,

    /// Display name of the supplier
    pub name: String,

    /// Minimum pallets per order across all items (commercial terms)
    pub min_pallets: u32,

    /// Maximum pallets per order across all items (capacity ceiling)
    pub max_pallets: u32,

    /// Days between order placement and delivery
    pub lead_time: u32,
}

impl Supplier {
    /// Creates a new supplier
    pub fn new<S: Into<String>>(
        id: SupplierId,
        name: S,
        min_pallets: u32,
        max_pallets: u32,
        lead_time: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            min_pallets,
            max_pallets,
            lead_time,
        }
    }
}
