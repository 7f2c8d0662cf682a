use super::common::*;
use approx::assert_relative_eq;

use crate::orc::domain::UnitType;
use crate::orc::{calculate_orc, FormulaKind, OrcBreakdown};

#[test]
fn banana_scenario_matches_worked_example() {
    let result = calculate_orc(&banana_record());
    assert_eq!(result.formula, FormulaKind::Perennial);

    let OrcBreakdown::Perennial(b) = &result.breakdown else {
        panic!("expected perennial breakdown, got {:?}", result.breakdown);
    };
    assert_relative_eq!(b.value_of_crop, 180_000.0);
    assert_relative_eq!(b.harvesting_costs, 20_000.0);
    assert_relative_eq!(b.destruction_depreciation_factor, 0.9, epsilon = 1e-12);
    assert_relative_eq!(b.replanting_depreciation_factor, 0.9, epsilon = 1e-12);
    assert_relative_eq!(b.destruction_costs, 13_500.0, epsilon = 1e-6);
    assert_relative_eq!(b.additional_costs, 5_000.0);
    assert_relative_eq!(b.replanting_costs, 9_000.0, epsilon = 1e-6);
    assert_relative_eq!(b.fallow_loss, 30_000.0);
    assert_relative_eq!(b.capital_items_value, 5_000.0);
    assert_eq!(b.stored_produce_value, 0.0);
    assert_relative_eq!(result.total_orc, 222_500.0, epsilon = 1e-6);
    assert_relative_eq!(result.orc_per_hectare, 22_250.0, epsilon = 1e-6);
}

#[test]
fn banana_biosecurity_costs_fold_into_component_c() {
    let mut record = banana_record();
    record.biosecurity_operating_costs = 100.0;
    record.biosecurity_capital_costs = 2_500.0;

    let result = calculate_orc(&record);
    let OrcBreakdown::Perennial(b) = &result.breakdown else {
        panic!("expected perennial breakdown");
    };
    assert_relative_eq!(b.additional_costs, (500.0 + 100.0) * 10.0 + 2_500.0);
    assert_relative_eq!(result.total_orc, 222_500.0 + 1_000.0 + 2_500.0, epsilon = 1e-6);
}

#[test]
fn broad_acre_uses_forward_contract_price() {
    let result = calculate_orc(&broad_acre_record());
    assert_eq!(result.formula, FormulaKind::AnnualBroadAcre);

    let OrcBreakdown::AnnualBroadAcre(b) = &result.breakdown else {
        panic!("expected broad-acre breakdown");
    };
    assert_relative_eq!(b.value_of_crop, 7_000.0);
    assert_relative_eq!(b.harvesting_costs, 500.0);
    assert_relative_eq!(result.total_orc, 6_500.0);
}

#[test]
fn broad_acre_subtracts_alternative_enterprise_profit() {
    let mut record = broad_acre_record();
    record.has_forward_contract = false;
    record.alternative_enterprise_profit = 50.0;
    record.gross_margin = 200.0;
    record.fallow_period = 2.0;
    record.normal_fallow_period = 1.0;
    record.stored_produce_amount = 3.0;
    record.stored_produce_price = 310.0;

    let result = calculate_orc(&record);
    let OrcBreakdown::AnnualBroadAcre(b) = &result.breakdown else {
        panic!("expected broad-acre breakdown");
    };
    assert_relative_eq!(b.value_of_crop, 6_000.0);
    assert_relative_eq!(b.alternative_profit, 250.0);
    assert_relative_eq!(b.fallow_loss, 1_000.0);
    assert_relative_eq!(b.stored_produce_value, 930.0);
    assert_relative_eq!(
        result.total_orc,
        6_000.0 - 500.0 + 1_000.0 - 250.0 + 930.0,
        epsilon = 1e-9
    );
}

#[test]
fn short_rotation_count_below_threshold_earns_no_fallow() {
    let mut record = count_short_rotation_record();
    record.gross_margin = 5_000.0;
    let result = calculate_orc(&record);
    assert_eq!(result.formula, FormulaKind::AnnualShortRotation);

    let OrcBreakdown::AnnualShortRotation(b) = &result.breakdown else {
        panic!("expected short-rotation breakdown");
    };
    assert_relative_eq!(b.value_of_crop, 1_000.0);
    assert_eq!(b.fallow_loss, 0.0);
    assert_eq!(b.effective_fallow_period, 0.0);
    assert_eq!(b.min_fallow_period_weeks, 10.0);
}

#[test]
fn short_rotation_count_ignores_forward_contract() {
    let mut record = count_short_rotation_record();
    record.has_forward_contract = true;
    record.forward_contract_price = 9.0;

    let result = calculate_orc(&record);
    let OrcBreakdown::AnnualShortRotation(b) = &result.breakdown else {
        panic!("expected short-rotation breakdown");
    };
    assert_relative_eq!(b.value_of_crop, 1_000.0);
}

#[test]
fn short_rotation_weight_above_threshold() {
    let mut record = count_short_rotation_record();
    record.unit_type = UnitType::Weight;
    record.yield_per_hectare = 40.0;
    record.price = 900.0;
    record.has_forward_contract = true;
    record.forward_contract_price = 1_000.0;
    record.harvesting_costs = 3_000.0;
    record.production_costs = 1_000.0;
    record.packaging_costs = 500.0;
    record.treatment_costs = 250.0;
    record.additional_costs = 100.0;
    record.glass_house_costs = 400.0;
    record.gross_margin = 2_000.0;
    record.fallow_period = 1.0;
    record.min_fallow_period = 26.0;

    let result = calculate_orc(&record);
    let OrcBreakdown::AnnualShortRotation(b) = &result.breakdown else {
        panic!("expected short-rotation breakdown");
    };
    assert_relative_eq!(b.value_of_crop, 80_000.0);
    assert_relative_eq!(b.harvesting_costs, 9_500.0);
    assert_relative_eq!(b.additional_costs, 1_000.0);
    assert_relative_eq!(b.effective_fallow_period, 0.5, epsilon = 1e-12);
    assert_relative_eq!(b.fallow_loss, 2_000.0, epsilon = 1e-9);
    assert_eq!(b.min_fallow_period_weeks, 26.0);
    assert_relative_eq!(
        result.total_orc,
        80_000.0 - 9_500.0 + 1_000.0 + 2_000.0,
        epsilon = 1e-6
    );
}

#[test]
fn short_rotation_zero_threshold_means_ten_weeks() {
    let mut record = count_short_rotation_record();
    record.min_fallow_period = 0.0;
    let result = calculate_orc(&record);
    let OrcBreakdown::AnnualShortRotation(b) = &result.breakdown else {
        panic!("expected short-rotation breakdown");
    };
    assert_eq!(b.min_fallow_period_weeks, 10.0);
}

#[test]
fn tree_vine_nut_depreciates_destruction_replanting_and_immature_loss() {
    let result = calculate_orc(&orchard_record());
    assert_eq!(result.formula, FormulaKind::TreeVineNut);

    let OrcBreakdown::TreeVineNut(b) = &result.breakdown else {
        panic!("expected tree breakdown");
    };
    assert_relative_eq!(b.depreciation_factor, 0.75, epsilon = 1e-12);
    assert_relative_eq!(b.value_of_crop, 80_000.0);
    assert_relative_eq!(b.harvesting_costs, 8_000.0);
    assert_relative_eq!(b.additional_costs, 1_000.0);
    // 4.5 excess years, uncapped.
    assert_relative_eq!(b.fallow_loss, 72_000.0);
    assert_relative_eq!(b.destruction_costs, 6_000.0, epsilon = 1e-9);
    assert_relative_eq!(b.replanting_costs, 18_000.0, epsilon = 1e-9);
    assert_relative_eq!(b.immature_loss_total, 36_000.0, epsilon = 1e-9);
    assert_eq!(b.non_bearing_period, 3.0);
    assert_relative_eq!(b.stored_produce_value, 7_000.0);

    let expected =
        80_000.0 - 8_000.0 + 1_000.0 + 12_000.0 + 72_000.0 + 6_000.0 + 18_000.0 + 36_000.0
            + 7_000.0;
    assert_relative_eq!(result.total_orc, expected, epsilon = 1e-6);
}

#[test]
fn tree_vine_nut_prefers_explicit_immature_loss() {
    let mut record = orchard_record();
    record.immature_loss = 1_000.0;

    let result = calculate_orc(&record);
    let OrcBreakdown::TreeVineNut(b) = &result.breakdown else {
        panic!("expected tree breakdown");
    };
    assert_relative_eq!(b.immature_loss_total, 1_000.0 * 4.0 * 3.0 * 0.75, epsilon = 1e-9);
}

#[test]
fn tree_vine_nut_ignores_forward_contract() {
    let mut record = orchard_record();
    record.has_forward_contract = true;
    record.forward_contract_price = 2_000.0;

    let result = calculate_orc(&record);
    let OrcBreakdown::TreeVineNut(b) = &result.breakdown else {
        panic!("expected tree breakdown");
    };
    assert_relative_eq!(b.value_of_crop, 80_000.0);
}

#[test]
fn nursery_scenario_is_purely_additive() {
    let result = calculate_orc(&nursery_record());
    assert_eq!(result.formula, FormulaKind::NurseryRootStock);

    let OrcBreakdown::NurseryRootStock(b) = &result.breakdown else {
        panic!("expected nursery breakdown");
    };
    assert_eq!(b.value_of_crop, 1_000.0);
    assert_eq!(b.additional_costs, 500.0);
    assert_eq!(b.capital_items_value, 1_000.0);
    assert_eq!(b.stored_produce_value, 100.0);
    assert_eq!(result.total_orc, 2_600.0);
    assert_eq!(result.orc_per_hectare, 2_600.0);
}

#[test]
fn nursery_ignores_harvesting_and_fallow_inputs() {
    let mut record = nursery_record();
    record.harvesting_costs = 9_999.0;
    record.gross_margin = 9_999.0;
    record.fallow_period = 3.0;
    record.crop_age = 10.0;
    record.rotation_period = 12.0;

    assert_eq!(calculate_orc(&record).total_orc, 2_600.0);
}
