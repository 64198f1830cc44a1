// Report output - persists the purchasing plan and prints the run summary

use crate::models::OrderPlan;
use crate::utils::prepare::PlanningData;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors raised while persisting the plan
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write {file}: {source}")]
    Csv {
        file: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write {file}: {source}")]
    Json {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Writes the plan as a flat CSV table, one row per order line with a
/// header row. The file is fully overwritten on every run; no summary
/// rows are mixed into the data.
pub fn save_plan_csv(plan: &OrderPlan, output_file: &Path) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_path(output_file).map_err(|source| ReportError::Csv {
        file: output_file.to_path_buf(),
        source,
    })?;
    for line in &plan.lines {
        writer.serialize(line).map_err(|source| ReportError::Csv {
            file: output_file.to_path_buf(),
            source,
        })?;
    }
    writer.flush().map_err(|source| ReportError::Csv {
        file: output_file.to_path_buf(),
        source: source.into(),
    })?;
    info!(file = %output_file.display(), lines = plan.lines.len(), "saved purchasing plan");
    Ok(())
}

/// Writes the plan as pretty-printed JSON, for downstream dashboards
pub fn save_plan_json(plan: &OrderPlan, output_file: &Path) -> Result<(), ReportError> {
    let file = std::fs::File::create(output_file).map_err(|source| ReportError::Json {
        file: output_file.to_path_buf(),
        source,
    })?;
    serde_json::to_writer_pretty(file, plan).map_err(|source| ReportError::Json {
        file: output_file.to_path_buf(),
        source: source.into(),
    })?;
    info!(file = %output_file.display(), "saved plan as JSON");
    Ok(())
}

/// Prints a human-readable summary of the plan to stdout
pub fn print_summary(plan: &OrderPlan, data: &PlanningData) {
    println!("\nSummary of Optimal Purchasing Plan:");
    println!("Total cost: ${:.2}", plan.total_cost);
    println!("Order lines: {}", plan.lines.len());
    println!("Total pallets to order: {}", plan.total_pallets());
    println!("Total units to order: {}", plan.total_units());

    println!("\nOrders by Supplier:");
    let pallets = plan.pallets_by_supplier();
    let costs = plan.cost_by_supplier();
    for ((supplier_id, pallet_total), (_, cost_total)) in pallets.iter().zip(costs.iter()) {
        let name = data
            .suppliers
            .get(supplier_id)
            .map(|supplier| supplier.name.as_str())
            .unwrap_or("unknown");
        println!(
            "  Supplier {} ({}): {} pallets, ${:.2}",
            supplier_id, name, pallet_total, cost_total
        );
    }

    // Items already covered by stock on hand are worth calling out
    let ordered: Vec<u32> = plan.lines.iter().map(|line| line.item_id).collect();
    let mut skipped: Vec<_> = data
        .items
        .values()
        .filter(|item| !ordered.contains(&item.id))
        .collect();
    if !skipped.is_empty() {
        skipped.sort_by_key(|item| item.id);
        println!("\nItems that don't need to be ordered ({}):", skipped.len());
        for item in skipped {
            println!(
                "  - Item {} ({}): current stock = {}, min stock = {}",
                item.id, item.name, item.current_stock, item.min_stock
            );
        }
    }
}
