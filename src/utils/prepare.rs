// Normalization - turns raw table records into the typed planning data
// the model builder consumes. This is the only boundary between ingestion
// and the optimization core.

use crate::models::{Cost, Item, ItemId, Supplier, SupplierId};
use crate::utils::loader::{ItemRecord, PriceRecord, SupplierRecord};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// Input contract violations. These are caller-side data errors and are
/// surfaced immediately; normalization never repairs or retries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrepareError {
    #[error("pricing references unknown item {0}")]
    UnknownItem(ItemId),

    #[error("pricing references unknown supplier {0}")]
    UnknownSupplier(SupplierId),
}

/// Normalized snapshot of one optimization run: four named mappings with
/// typed keys. Eligibility is derived from which cost entries exist; it is
/// never assumed complete.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlanningData {
    /// Item attributes by item id
    pub items: HashMap<ItemId, Item>,

    /// Supplier attributes by supplier id
    pub suppliers: HashMap<SupplierId, Supplier>,

    /// Eligible suppliers per item, sorted and deduplicated. Every item
    /// has an entry, possibly empty.
    pub available_suppliers: HashMap<ItemId, Vec<SupplierId>>,

    /// Cost per pallet for each eligible (item, supplier) pair
    pub costs: HashMap<ItemId, HashMap<SupplierId, Cost>>,
}

impl PlanningData {
    /// Eligible suppliers for an item; empty when none exist
    pub fn suppliers_for_item(&self, item_id: ItemId) -> &[SupplierId] {
        self.available_suppliers
            .get(&item_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Cost per pallet for one eligible pair
    pub fn cost(&self, item_id: ItemId, supplier_id: SupplierId) -> Option<Cost> {
        self.costs
            .get(&item_id)
            .and_then(|by_supplier| by_supplier.get(&supplier_id))
            .copied()
    }

    /// Number of eligible (item, supplier) pairs
    pub fn eligible_pair_count(&self) -> usize {
        self.available_suppliers.values().map(Vec::len).sum()
    }
}

/// Builds the normalized planning snapshot from raw table records.
/// Pricing rows referencing an unknown item or supplier fail the run;
/// duplicate pricing rows for the same pair keep the last cost.
pub fn prepare_planning_data(
    item_records: &[ItemRecord],
    supplier_records: &[SupplierRecord],
    price_records: &[PriceRecord],
) -> Result<PlanningData, PrepareError> {
    let mut data = PlanningData::default();

    for record in item_records {
        data.items.insert(
            record.item_id,
            Item::new(
                record.item_id,
                record.name.clone(),
                record.current_stock,
                record.min_stock,
                record.max_stock,
                record.average_daily_sale,
                record.expiry_days,
            ),
        );
        data.available_suppliers.insert(record.item_id, Vec::new());
        data.costs.insert(record.item_id, HashMap::new());
    }

    for record in supplier_records {
        data.suppliers.insert(
            record.supplier_id,
            Supplier::new(
                record.supplier_id,
                record.name.clone(),
                record.min_pallets,
                record.max_pallets,
                record.lead_time,
            ),
        );
    }

    for record in price_records {
        if !data.items.contains_key(&record.item_id) {
            return Err(PrepareError::UnknownItem(record.item_id));
        }
        if !data.suppliers.contains_key(&record.supplier_id) {
            return Err(PrepareError::UnknownSupplier(record.supplier_id));
        }
        data.costs
            .entry(record.item_id)
            .or_default()
            .insert(record.supplier_id, record.cost_per_pallet);
    }

    // Derive eligibility from the cost entries that survived, in a
    // deterministic order
    for (item_id, by_supplier) in &data.costs {
        let mut eligible: Vec<SupplierId> = by_supplier.keys().copied().collect();
        eligible.sort_unstable();
        data.available_suppliers.insert(*item_id, eligible);
    }

    debug!(
        items = data.items.len(),
        suppliers = data.suppliers.len(),
        eligible_pairs = data.eligible_pair_count(),
        "prepared planning data"
    );
    Ok(data)
}
