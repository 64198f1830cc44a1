// Result extractor - turns a raw solver assignment back into a typed
// order plan, or nothing when the solve did not reach optimality.

use crate::models::{OrderLine, OrderPlan, Problem};
use crate::optimizer::SolveOutcome;
use crate::utils::prepare::PlanningData;
use tracing::warn;

/// Integer variables come back from MILP engines as near-integer floats.
/// Values within this distance of an integer are considered exact; a
/// larger drift is rounded anyway but logged, since it hints at engine
/// trouble rather than ordinary float noise.
pub const INTEGRALITY_TOLERANCE: f64 = 1e-6;

/// Reconstructs the order plan from a solve outcome.
///
/// Returns `None` for any non-optimal status; the caller reports the
/// status to the user. On an optimal outcome, every eligible pair with a
/// strictly positive rounded quantity becomes one order line, in the
/// problem's (item, supplier) variable order, so no duplicate pairs can
/// occur. Small negative artifacts are clamped to zero before the
/// positivity filter. The plan total is the engine's own objective value,
/// not a re-summation of lines.
pub fn extract_plan(
    problem: &Problem,
    outcome: &SolveOutcome,
    data: &PlanningData,
) -> Option<OrderPlan> {
    if !outcome.status.is_optimal() {
        return None;
    }

    let mut lines = Vec::new();
    for key in &problem.variables {
        let raw = outcome.values.get(key).copied().unwrap_or(0.0);
        let pallets = round_pallets(raw, key);
        if pallets == 0 {
            continue;
        }

        let (item_id, supplier_id) = *key;
        let item = data.items.get(&item_id)?;
        let supplier = data.suppliers.get(&supplier_id)?;
        let cost_per_pallet = data.cost(item_id, supplier_id)?;
        lines.push(OrderLine::new(
            item_id,
            item.name.clone(),
            supplier_id,
            supplier.name.clone(),
            pallets,
            item.units_per_pallet,
            cost_per_pallet,
        ));
    }

    Some(OrderPlan {
        lines,
        total_cost: outcome.objective.unwrap_or(0.0),
    })
}

/// Clamps negative float artifacts to zero and rounds to the nearest
/// whole pallet count
fn round_pallets(raw: f64, key: &(u32, u32)) -> u32 {
    let clamped = raw.max(0.0);
    let rounded = clamped.round();
    if (clamped - rounded).abs() > INTEGRALITY_TOLERANCE {
        warn!(
            item = key.0,
            supplier = key.1,
            value = raw,
            "solved pallet count drifts from integrality"
        );
    }
    rounded as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Item, Supplier};
    use crate::optimizer::builder::build_problem;
    use crate::optimizer::{SolveOutcome, SolveStatus};
    use crate::utils::prepare::PlanningData;
    use std::collections::HashMap;

    fn create_test_data() -> PlanningData {
        let mut data = PlanningData::default();
        data.items
            .insert(1, Item::new(1, "Olive Oil", 5, 10, 100, 1.0, 60));
        data.items
            .insert(2, Item::new(2, "Pasta", 15, 20, 200, 2.0, 40));
        data.suppliers
            .insert(1, Supplier::new(1, "Acme Foods", 1, 50, 3));
        data.suppliers
            .insert(2, Supplier::new(2, "Mill & Co", 2, 100, 5));
        data.available_suppliers.insert(1, vec![1, 2]);
        data.available_suppliers.insert(2, vec![1, 2]);
        data.costs
            .insert(1, HashMap::from([(1, 100.0), (2, 110.0)]));
        data.costs
            .insert(2, HashMap::from([(1, 120.0), (2, 105.0)]));
        data
    }

    /// Stand-in for a real engine: a fixed assignment with an Optimal
    /// verdict
    fn fake_outcome(values: &[((u32, u32), f64)], objective: f64) -> SolveOutcome {
        SolveOutcome {
            status: SolveStatus::Optimal,
            values: values.iter().copied().collect(),
            objective: Some(objective),
        }
    }

    #[test]
    fn test_non_optimal_yields_no_plan() {
        let data = create_test_data();
        let problem = build_problem(&data);
        for status in [
            SolveStatus::Infeasible,
            SolveStatus::Unbounded,
            SolveStatus::Other("node limit".into()),
        ] {
            let outcome = SolveOutcome::without_solution(status);
            assert_eq!(extract_plan(&problem, &outcome, &data), None);
        }
    }

    #[test]
    fn test_positive_quantities_become_lines() {
        let data = create_test_data();
        let problem = build_problem(&data);
        let outcome = fake_outcome(&[((1, 1), 1.0), ((2, 2), 2.0)], 310.0);

        let plan = extract_plan(&problem, &outcome, &data).unwrap();
        assert_eq!(plan.lines.len(), 2);
        assert_eq!(plan.lines[0].item_id, 1);
        assert_eq!(plan.lines[0].supplier_name, "Acme Foods");
        assert_eq!(plan.lines[0].units, 24);
        assert_eq!(plan.lines[1].pallets, 2);
        assert_eq!(plan.lines[1].total_cost, 210.0);
    }

    #[test]
    fn test_zero_and_missing_variables_are_omitted() {
        let data = create_test_data();
        let problem = build_problem(&data);
        // (1,2) solved to zero, (2,1) missing from the assignment
        let outcome = fake_outcome(&[((1, 1), 1.0), ((1, 2), 0.0)], 100.0);

        let plan = extract_plan(&problem, &outcome, &data).unwrap();
        assert_eq!(plan.lines.len(), 1);
        assert!(plan.lines.iter().all(|line| line.pallets > 0));
    }

    #[test]
    fn test_near_integer_values_are_rounded() {
        let data = create_test_data();
        let problem = build_problem(&data);
        let outcome = fake_outcome(&[((1, 1), 2.9999997), ((2, 2), 1.0000002)], 405.0);

        let plan = extract_plan(&problem, &outcome, &data).unwrap();
        assert_eq!(plan.lines[0].pallets, 3);
        assert_eq!(plan.lines[1].pallets, 1);
    }

    #[test]
    fn test_negative_artifacts_are_clamped() {
        let data = create_test_data();
        let problem = build_problem(&data);
        let outcome = fake_outcome(&[((1, 1), -1e-9), ((2, 2), 2.0)], 210.0);

        let plan = extract_plan(&problem, &outcome, &data).unwrap();
        assert_eq!(plan.lines.len(), 1);
        assert_eq!(plan.lines[0].item_id, 2);
    }

    #[test]
    fn test_total_cost_is_the_engine_objective() {
        let data = create_test_data();
        let problem = build_problem(&data);
        // objective deliberately off the line-sum by float noise
        let outcome = fake_outcome(&[((1, 1), 1.0)], 100.00000001);

        let plan = extract_plan(&problem, &outcome, &data).unwrap();
        assert_eq!(plan.total_cost, 100.00000001);
    }

    #[test]
    fn test_no_duplicate_pairs() {
        let data = create_test_data();
        let problem = build_problem(&data);
        let outcome = fake_outcome(
            &[((1, 1), 1.0), ((1, 2), 1.0), ((2, 1), 1.0), ((2, 2), 1.0)],
            435.0,
        );

        let plan = extract_plan(&problem, &outcome, &data).unwrap();
        let mut pairs: Vec<(u32, u32)> = plan
            .lines
            .iter()
            .map(|line| (line.item_id, line.supplier_id))
            .collect();
        pairs.sort_unstable();
        pairs.dedup();
        assert_eq!(pairs.len(), plan.lines.len());
    }
}
