// Order plan model - the business-facing result of one optimization run

use crate::models::{Cost, ItemId, Pallets, SupplierId};
use serde::Serialize;

/// One row of the purchasing plan: a positive pallet order of a single
/// item from a single supplier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
    /// Ordered item
    #[serde(rename = "ItemID")]
    pub item_id: ItemId,

    /// Item display name
    #[serde(rename = "ItemName")]
    pub item_name: String,

    /// Supplier the pallets are ordered from
    #[serde(rename = "SupplierID")]
    pub supplier_id: SupplierId,

    /// Supplier display name
    #[serde(rename = "SupplierName")]
    pub supplier_name: String,

    /// Pallets ordered, always strictly positive
    #[serde(rename = "PalletsOrdered")]
    pub pallets: Pallets,

    /// Units ordered (pallets times units per pallet)
    #[serde(rename = "UnitsOrdered")]
    pub units: u32,

    /// Agreed cost of one pallet
    #[serde(rename = "CostPerPallet")]
    pub cost_per_pallet: Cost,

    /// Line total (pallets times cost per pallet)
    #[serde(rename = "TotalCost")]
    pub total_cost: Cost,
}

impl OrderLine {
    /// Creates a line, deriving units and line total
    pub fn new(
        item_id: ItemId,
        item_name: String,
        supplier_id: SupplierId,
        supplier_name: String,
        pallets: Pallets,
        units_per_pallet: u32,
        cost_per_pallet: Cost,
    ) -> Self {
        Self {
            item_id,
            item_name,
            supplier_id,
            supplier_name,
            pallets,
            units: pallets * units_per_pallet,
            cost_per_pallet,
            total_cost: pallets as f64 * cost_per_pallet,
        }
    }
}

/// Complete purchasing plan for one optimization run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderPlan {
    /// Order lines in (item, supplier) order
    pub lines: Vec<OrderLine>,

    /// Total plan cost as reported by the solver objective. May differ
    /// from the line sum by floating-point noise; the solver's accounting
    /// wins.
    pub total_cost: Cost,
}

impl OrderPlan {
    /// Total pallets across all lines
    pub fn total_pallets(&self) -> u32 {
        self.lines.iter().map(|line| line.pallets).sum()
    }

    /// Total units across all lines
    pub fn total_units(&self) -> u32 {
        self.lines.iter().map(|line| line.units).sum()
    }

    /// Pallets ordered per supplier, in ascending supplier order
    pub fn pallets_by_supplier(&self) -> Vec<(SupplierId, u32)> {
        let mut totals: Vec<(SupplierId, u32)> = Vec::new();
        for line in &self.lines {
            match totals.iter_mut().find(|(id, _)| *id == line.supplier_id) {
                Some((_, pallets)) => *pallets += line.pallets,
                None => totals.push((line.supplier_id, line.pallets)),
            }
        }
        totals.sort_by_key(|(id, _)| *id);
        totals
    }

    /// Cost incurred per supplier, in ascending supplier order
    pub fn cost_by_supplier(&self) -> Vec<(SupplierId, Cost)> {
        let mut totals: Vec<(SupplierId, Cost)> = Vec::new();
        for line in &self.lines {
            match totals.iter_mut().find(|(id, _)| *id == line.supplier_id) {
                Some((_, cost)) => *cost += line.total_cost,
                None => totals.push((line.supplier_id, line.total_cost)),
            }
        }
        totals.sort_by_key(|(id, _)| *id);
        totals
    }
}
