// CSV ingestion - reads the item, supplier and pricing tables from a
// source directory

use crate::models::{Cost, ItemId, SupplierId};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors raised while reading the source tables
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("source directory not found: {0}")]
    MissingSourceDir(PathBuf),

    #[error("failed to read {file}: {source}")]
    Csv {
        file: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// One row of `items.csv`
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRecord {
    #[serde(rename = "ItemID")]
    pub item_id: ItemId,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "CurrentStock")]
    pub current_stock: u32,

    #[serde(rename = "MinStock")]
    pub min_stock: u32,

    #[serde(rename = "MaxStock")]
    pub max_stock: u32,

    #[serde(rename = "AverageDailySale")]
    pub average_daily_sale: f64,

    #[serde(rename = "Expiry (days)")]
    pub expiry_days: u32,
}

/// One row of `suppliers.csv`
#[derive(Debug, Clone, Deserialize)]
pub struct SupplierRecord {
    #[serde(rename = "SupplierID")]
    pub supplier_id: SupplierId,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "MinPallets")]
    pub min_pallets: u32,

    #[serde(rename = "MaxPallets")]
    pub max_pallets: u32,

    #[serde(rename = "LeadTime (days)")]
    pub lead_time: u32,
}

/// One row of `pricing.csv`; a row existing is what makes the
/// (item, supplier) pair eligible
#[derive(Debug, Clone, Deserialize)]
pub struct PriceRecord {
    #[serde(rename = "ItemID")]
    pub item_id: ItemId,

    #[serde(rename = "SupplierID")]
    pub supplier_id: SupplierId,

    #[serde(rename = "CostPerPallet")]
    pub cost_per_pallet: Cost,
}

fn load_csv<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Vec<T>, LoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| LoadError::Csv {
        file: path.to_path_buf(),
        source,
    })?;
    let records = reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(|source| LoadError::Csv {
            file: path.to_path_buf(),
            source,
        })?;
    info!(file = %path.display(), records = records.len(), "loaded table");
    Ok(records)
}

/// Loads the item table from `<source_dir>/items.csv`
pub fn load_item_data(source_dir: &Path) -> Result<Vec<ItemRecord>, LoadError> {
    ensure_source_dir(source_dir)?;
    load_csv(&source_dir.join("items.csv"))
}

/// Loads the supplier table from `<source_dir>/suppliers.csv`
pub fn load_supplier_data(source_dir: &Path) -> Result<Vec<SupplierRecord>, LoadError> {
    ensure_source_dir(source_dir)?;
    load_csv(&source_dir.join("suppliers.csv"))
}

/// Loads the pricing table from `<source_dir>/pricing.csv`
pub fn load_pricing_data(source_dir: &Path) -> Result<Vec<PriceRecord>, LoadError> {
    ensure_source_dir(source_dir)?;
    load_csv(&source_dir.join("pricing.csv"))
}

fn ensure_source_dir(source_dir: &Path) -> Result<(), LoadError> {
    if source_dir.is_dir() {
        Ok(())
    } else {
        Err(LoadError::MissingSourceDir(source_dir.to_path_buf()))
    }
}
