// Model builder - turns a normalized planning snapshot into an abstract
// integer program: one non-negative integer variable per eligible
// (item, supplier) pair, a cost-minimizing objective, and the stock,
// supplier and shelf-life constraints.

use crate::models::{
    Constraint, ConstraintKind, ConstraintOp, Item, ItemId, Problem, Supplier, SupplierId, VarKey,
};
use crate::utils::prepare::PlanningData;
use tracing::debug;

/// Builds the purchasing problem from a planning snapshot.
///
/// Inputs are assumed to satisfy the normalization contract: every cost
/// entry pairs an existing item with an existing supplier. Business-level
/// nonsense (min above max and the like) is not validated here; it flows
/// through and surfaces as solver infeasibility.
///
/// The result is deterministic: variables in (item, supplier) order,
/// stock constraints per item, supplier constraints per supplier with at
/// least one eligible item, one lead-time/expiry constraint per eligible
/// pair.
pub fn build_problem(data: &PlanningData) -> Problem {
    let mut problem = Problem::default();

    let mut item_ids: Vec<ItemId> = data.items.keys().copied().collect();
    item_ids.sort_unstable();
    let mut supplier_ids: Vec<SupplierId> = data.suppliers.keys().copied().collect();
    supplier_ids.sort_unstable();

    // Decision variables and objective, only for eligible pairs. Pairs
    // without a price entry get no variable at all, so ineligible
    // combinations can never leak into a plan as zero-cost edges.
    for &item_id in &item_ids {
        for &supplier_id in data.suppliers_for_item(item_id) {
            let key: VarKey = (item_id, supplier_id);
            problem.variables.push(key);
            if let Some(cost) = data.cost(item_id, supplier_id) {
                problem.objective.push((key, cost));
            }
        }
    }

    // Stock constraints, one pair per item. Items with no eligible
    // supplier keep their constraints with an empty left-hand side; those
    // act as constant feasibility checks on current stock alone.
    for &item_id in &item_ids {
        let item = &data.items[&item_id];
        let terms: Vec<(VarKey, f64)> = data
            .suppliers_for_item(item_id)
            .iter()
            .map(|&supplier_id| ((item_id, supplier_id), item.units_per_pallet as f64))
            .collect();

        problem.constraints.push(Constraint {
            kind: ConstraintKind::MinStock(item_id),
            terms: terms.clone(),
            op: ConstraintOp::Geq,
            bound: item.min_stock as f64 - item.current_stock as f64,
        });
        problem.constraints.push(Constraint {
            kind: ConstraintKind::MaxStock(item_id),
            terms,
            op: ConstraintOp::Leq,
            bound: item.max_stock as f64 - item.current_stock as f64,
        });
    }

    // Supplier order-volume constraints, skipped entirely for suppliers
    // with no eligible item so no vacuous minimum can force an order.
    for &supplier_id in &supplier_ids {
        let supplier = &data.suppliers[&supplier_id];
        let terms: Vec<(VarKey, f64)> = item_ids
            .iter()
            .filter(|&&item_id| data.suppliers_for_item(item_id).contains(&supplier_id))
            .map(|&item_id| ((item_id, supplier_id), 1.0))
            .collect();
        if terms.is_empty() {
            continue;
        }

        problem.constraints.push(Constraint {
            kind: ConstraintKind::SupplierMin(supplier_id),
            terms: terms.clone(),
            op: ConstraintOp::Geq,
            bound: supplier.min_pallets as f64,
        });
        problem.constraints.push(Constraint {
            kind: ConstraintKind::SupplierMax(supplier_id),
            terms,
            op: ConstraintOp::Leq,
            bound: supplier.max_pallets as f64,
        });
    }

    // Lead-time/expiry constraints, one per eligible pair: stock on hand
    // plus a single order must stay consumable within the expected-demand
    // horizon plus the demand covered while the supplier delivers. An item
    // with no recorded sales has a zero horizon, which forbids any order
    // while stock is positive.
    for &item_id in &item_ids {
        let item = &data.items[&item_id];
        for &supplier_id in data.suppliers_for_item(item_id) {
            let supplier = &data.suppliers[&supplier_id];
            problem.constraints.push(Constraint {
                kind: ConstraintKind::LeadTimeExpiry(item_id, supplier_id),
                terms: vec![((item_id, supplier_id), item.units_per_pallet as f64)],
                op: ConstraintOp::Leq,
                bound: lead_time_expiry_bound(item, supplier),
            });
        }
    }

    debug!(
        variables = problem.variable_count(),
        constraints = problem.constraint_count(),
        "built purchasing problem"
    );
    problem
}

fn lead_time_expiry_bound(item: &Item, supplier: &Supplier) -> f64 {
    item.expected_demand() + item.average_daily_sale * supplier.lead_time as f64
        - item.current_stock as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Item, Supplier};
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

    #[test]
    fn test_one_variable_per_eligible_pair() {
        let problem = build_problem(&create_test_data());
        assert_eq!(problem.variables, vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(problem.objective.len(), 4);
    }

    #[test]
    fn test_constraint_count_formula() {
        // 2 per item + 2 per supplier with eligible items + 1 per pair
        let problem = build_problem(&create_test_data());
        assert_eq!(problem.constraint_count(), 2 * 2 + 2 * 2 + 4);
    }

    #[test]
    fn test_build_is_deterministic() {
        let data = create_test_data();
        assert_eq!(build_problem(&data), build_problem(&data));
    }

    #[test]
    fn test_stock_constraint_bounds() {
        let problem = build_problem(&create_test_data());
        let min_stock = problem
            .constraints
            .iter()
            .find(|c| c.kind == ConstraintKind::MinStock(1))
            .unwrap();
        // 10 required minus 5 on hand
        assert_eq!(min_stock.bound, 5.0);
        assert_eq!(min_stock.op, ConstraintOp::Geq);
        assert_eq!(min_stock.terms, vec![((1, 1), 24.0), ((1, 2), 24.0)]);

        let max_stock = problem
            .constraints
            .iter()
            .find(|c| c.kind == ConstraintKind::MaxStock(2))
            .unwrap();
        assert_eq!(max_stock.bound, 185.0);
        assert_eq!(max_stock.op, ConstraintOp::Leq);
    }

    #[test]
    fn test_lead_time_expiry_bound() {
        let problem = build_problem(&create_test_data());
        let constraint = problem
            .constraints
            .iter()
            .find(|c| c.kind == ConstraintKind::LeadTimeExpiry(1, 1))
            .unwrap();
        // expected demand 60 + 1/day over 3 lead days - 5 on hand
        assert_eq!(constraint.bound, 58.0);
        assert_eq!(constraint.terms, vec![((1, 1), 24.0)]);
    }

    #[test]
    fn test_supplier_without_eligible_items_is_skipped() {
        let mut data = create_test_data();
        data.suppliers
            .insert(3, Supplier::new(3, "Idle Vendor", 5, 10, 2));

        let problem = build_problem(&data);
        assert!(!problem
            .constraints
            .iter()
            .any(|c| matches!(c.kind, ConstraintKind::SupplierMin(3))
                || matches!(c.kind, ConstraintKind::SupplierMax(3))));
        assert!(!problem.variables.iter().any(|&(_, s)| s == 3));
    }

    #[test]
    fn test_item_without_suppliers_keeps_constant_stock_constraints() {
        let mut data = create_test_data();
        data.items
            .insert(3, Item::new(3, "Orphan", 2, 8, 50, 1.0, 30));
        data.available_suppliers.insert(3, vec![]);
        data.costs.insert(3, HashMap::new());

        let problem = build_problem(&data);
        let min_stock = problem
            .constraints
            .iter()
            .find(|c| c.kind == ConstraintKind::MinStock(3))
            .unwrap();
        assert!(min_stock.is_constant());
        // 8 required minus 2 on hand cannot be covered without a supplier
        assert!(!min_stock.constant_holds());
    }

    #[test]
    fn test_zero_sales_item_forbids_ordering() {
        let mut data = create_test_data();
        data.items
            .insert(1, Item::new(1, "Non-mover", 5, 10, 100, 0.0, 60));

        let problem = build_problem(&data);
        let constraint = problem
            .constraints
            .iter()
            .find(|c| c.kind == ConstraintKind::LeadTimeExpiry(1, 1))
            .unwrap();
        // zero horizon minus positive stock: no positive order can fit
        assert_eq!(constraint.bound, -5.0);
    }
}
