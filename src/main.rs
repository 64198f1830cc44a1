use anyhow::{bail, Context};
use clap::Parser;
use std::path::PathBuf;
use stock_optimizer::utils::loader::{load_item_data, load_pricing_data, load_supplier_data};
use stock_optimizer::utils::{chart, report};
use stock_optimizer::{
    build_problem, extract_plan, prepare_planning_data, GoodLpSolver, MilpSolver, SolveStatus,
};
use tracing_subscriber::EnvFilter;

/// Computes a cost-minimal stock purchasing plan from the item, supplier
/// and pricing tables
#[derive(Debug, Parser)]
#[command(name = "stock_optimizer", version)]
struct Args {
    /// Directory holding items.csv, suppliers.csv and pricing.csv
    #[arg(long, default_value = "Source")]
    source_dir: PathBuf,

    /// Output file for the purchasing plan (overwritten on every run)
    #[arg(long, default_value = "optimal_purchasing_plan.csv")]
    output: PathBuf,

    /// Also export the plan as JSON to this file
    #[arg(long)]
    json: Option<PathBuf>,

    /// Also render an orders-by-supplier chart to this PNG file
    #[arg(long)]
    chart: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    println!("Loading data...");
    let items = load_item_data(&args.source_dir)?;
    let suppliers = load_supplier_data(&args.source_dir)?;
    let pricing = load_pricing_data(&args.source_dir)?;
    println!(
        "Loaded {} items, {} suppliers and {} pricing records.",
        items.len(),
        suppliers.len(),
        pricing.len()
    );

    let data = prepare_planning_data(&items, &suppliers, &pricing)
        .context("input tables violate the normalization contract")?;

    println!("Creating optimization model...");
    let problem = build_problem(&data);
    println!(
        "  {} decision variables, {} constraints",
        problem.variable_count(),
        problem.constraint_count()
    );

    println!("Solving optimization model...");
    let outcome = GoodLpSolver::new().solve(&problem);

    let plan = match extract_plan(&problem, &outcome, &data) {
        Some(plan) => plan,
        None => match outcome.status {
            SolveStatus::Infeasible => {
                bail!("the model is infeasible; check the stock and supplier constraints")
            }
            SolveStatus::Unbounded => bail!("the model is unbounded; check the pricing data"),
            SolveStatus::Other(reason) => bail!("solver failed: {}", reason),
            SolveStatus::Optimal => {
                bail!("optimal verdict with an assignment that references unknown data")
            }
        },
    };

    report::save_plan_csv(&plan, &args.output)?;
    println!("Optimal purchasing plan saved to {}", args.output.display());

    if let Some(json_path) = &args.json {
        report::save_plan_json(&plan, json_path)?;
        println!("Plan exported as JSON to {}", json_path.display());
    }
    if let Some(chart_path) = &args.chart {
        chart::render_supplier_chart(&plan, &data, chart_path)
            .map_err(|e| anyhow::anyhow!("failed to render chart: {}", e))?;
        println!("Supplier chart rendered to {}", chart_path.display());
    }

    report::print_summary(&plan, &data);
    Ok(())
}
