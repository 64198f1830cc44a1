// Chart rendering - draws the orders-by-supplier breakdown as a PNG,
// the batch counterpart of the interactive dashboard

use crate::models::OrderPlan;
use crate::utils::prepare::PlanningData;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;
use tracing::info;

/// Renders a bar chart of total cost per supplier for the given plan
pub fn render_supplier_chart(
    plan: &OrderPlan,
    data: &PlanningData,
    output_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let costs = plan.cost_by_supplier();
    if costs.is_empty() {
        return Ok(());
    }

    let max_cost = costs
        .iter()
        .map(|(_, cost)| *cost)
        .fold(f64::NEG_INFINITY, f64::max);

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Purchasing cost by supplier (total ${:.2})", plan.total_cost),
            ("sans-serif", 24).into_font(),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..costs.len() as f64, 0f64..max_cost * 1.1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(costs.len())
        .x_label_formatter(&|x| {
            let index = x.floor() as usize;
            costs
                .get(index)
                .and_then(|(supplier_id, _)| data.suppliers.get(supplier_id))
                .map(|supplier| supplier.name.clone())
                .unwrap_or_default()
        })
        .y_desc("Cost ($)")
        .draw()?;

    chart.draw_series(costs.iter().enumerate().map(|(index, (_, cost))| {
        Rectangle::new(
            [(index as f64 + 0.15, 0.0), (index as f64 + 0.85, *cost)],
            ShapeStyle::from(&BLUE).filled(),
        )
    }))?;

    root.present()?;
    info!(file = %output_path.display(), suppliers = costs.len(), "rendered supplier chart");
    Ok(())
}
