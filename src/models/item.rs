// Item model representing a stocked article with its replenishment bounds

use crate::models::{ItemId, UNITS_PER_PALLET};

/// Represents a stocked item with replenishment and shelf-life attributes
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Unique identifier for the item
    pub id: ItemId,

    /// Display name of the item
    pub name: String,

    /// Units currently on hand
    pub current_stock: u32,

    /// Safety floor the post-order stock must not drop below
    pub min_stock: u32,

    /// Storage ceiling the post-order stock must not exceed
    pub max_stock: u32,

    /// Units packed on one pallet
    pub units_per_pallet: u32,

    /// Historical average units sold per day
    pub average_daily_sale: f64,

    /// Shelf-life horizon in days
    pub expiry_days: u32,
}

impl Item {
    /// Creates a new item with the standard pallet size
    pub fn new<S: Into<String>>(
        id: ItemId,
        name: S,
        current_stock: u32,
        min_stock: u32,
        max_stock: u32,
        average_daily_sale: f64,
        expiry_days: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            current_stock,
            min_stock,
            max_stock,
            units_per_pallet: UNITS_PER_PALLET,
            average_daily_sale,
            expiry_days,
        }
    }

    /// Projected consumption over the shelf-life horizon.
    /// Used as the upper bound on justified inventory; an item that never
    /// sells has an expected demand of zero.
    pub fn expected_demand(&self) -> f64 {
        self.average_daily_sale * self.expiry_days as f64
    }
}
