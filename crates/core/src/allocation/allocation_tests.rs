use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::allocation::*;
use crate::parties::{InvestorActivity, Party, PartyMap};
use crate::weights::CapitalDayWeights;

fn weights(founders: Decimal, investor_a: Decimal, investor_b: Decimal) -> CapitalDayWeights {
    CapitalDayWeights::from_raw(&PartyMap::new(founders, investor_a, investor_b))
}

fn assert_close(actual: Decimal, expected: Decimal) {
    assert!(
        (actual - expected).abs() < dec!(0.000001),
        "expected {} but got {}",
        expected,
        actual
    );
}

// ==================== Reference scenarios ====================

#[test]
fn test_deployed_scenario_split() {
    let result = allocate(
        dec!(4113),
        dec!(20),
        &weights(dec!(340), dec!(175), dec!(55)),
        &InvestorActivity::all_active(),
    );

    assert_close(result.net_amount(Party::Founders), dec!(2785.294737));
    assert_close(result.net_amount(Party::InvestorA), dec!(1010.210526));
    assert_close(result.net_amount(Party::InvestorB), dec!(317.494737));
    assert_close(result.totals.distributed, dec!(4113));
    assert!(result.verify().is_ok());
}

#[test]
fn test_not_deployed_scenario_split() {
    let result = allocate(
        dec!(4113),
        dec!(20),
        &weights(dec!(340), dec!(175), Decimal::ZERO),
        &InvestorActivity::all_active().with(Party::InvestorB, false),
    );

    assert_close(result.net_amount(Party::Founders), dec!(2994.902913));
    assert_close(result.net_amount(Party::InvestorA), dec!(1118.097087));
    assert_eq!(result.net_amount(Party::InvestorB), Decimal::ZERO);
    assert_close(result.totals.distributed, dec!(4113));
}

#[test]
fn test_matches_closed_form_for_thousand_profit() {
    let result = allocate(
        dec!(1000),
        dec!(20),
        &weights(dec!(340), dec!(175), dec!(55)),
        &InvestorActivity::all_active(),
    );

    assert_close(result.net_amount(Party::Founders), dec!(677.192982));
    assert_close(result.net_amount(Party::InvestorA), dec!(245.614035));
    assert_close(result.net_amount(Party::InvestorB), dec!(77.192982));
}

// ==================== Carry routing ====================

#[test]
fn test_carry_routes_to_founders() {
    let result = allocate(
        dec!(1000),
        dec!(20),
        &weights(dec!(50), dec!(30), dec!(20)),
        &InvestorActivity::all_active(),
    );

    let a = result.parties[Party::InvestorA];
    let b = result.parties[Party::InvestorB];
    let f = result.parties[Party::Founders];

    assert_eq!(a.gross_share, dec!(300));
    assert_eq!(a.carry, dec!(60));
    assert_eq!(a.net_amount, dec!(240));
    assert_eq!(b.carry, dec!(40));
    assert_eq!(b.net_amount, dec!(160));

    assert_eq!(f.gross_share, dec!(500));
    assert_eq!(f.carry, dec!(100));
    assert_eq!(f.net_amount, dec!(600));
    assert_eq!(result.totals.carry_collected, dec!(100));
    assert_eq!(result.totals.routed_to_founders, Decimal::ZERO);
}

#[test]
fn test_inactive_investor_routes_nominal_share() {
    let result = allocate(
        dec!(1000),
        dec!(20),
        &weights(dec!(50), dec!(30), dec!(20)),
        &InvestorActivity::all_active().with(Party::InvestorB, false),
    );

    let b = result.parties[Party::InvestorB];
    assert_eq!(b.gross_share, dec!(200));
    assert_eq!(b.effective_gross, Decimal::ZERO);
    assert_eq!(b.carry, Decimal::ZERO);
    assert_eq!(b.routed_to_founders, dec!(200));
    assert_eq!(b.net_amount, Decimal::ZERO);
    assert!(!b.active);

    let f = result.parties[Party::Founders];
    // base 500 + carry 60 from A + 200 routed from B
    assert_eq!(f.carry, dec!(60));
    assert_eq!(f.routed_to_founders, dec!(200));
    assert_eq!(f.net_amount, dec!(760));
    assert!(result.verify().is_ok());
}

// ==================== Clamping and edge cases ====================

#[test]
fn test_negative_profit_clamps_to_zero() {
    let result = allocate(
        dec!(-250),
        dec!(20),
        &weights(dec!(50), dec!(30), dec!(20)),
        &InvestorActivity::all_active(),
    );

    assert_eq!(result.profit, Decimal::ZERO);
    for (_, party) in result.parties.iter() {
        assert_eq!(party.net_amount, Decimal::ZERO);
    }
    assert_eq!(result.carry_rate, dec!(0.2));
    assert_eq!(result.weights.get(Party::Founders), dec!(0.5));
}

#[test]
fn test_carry_percent_clamps() {
    let w = weights(dec!(50), dec!(30), dec!(20));
    let over = allocate(dec!(100), dec!(150), &w, &InvestorActivity::all_active());
    assert_eq!(over.carry_percent, dec!(100));
    assert_eq!(over.net_amount(Party::Founders), dec!(100));

    let under = allocate(dec!(100), dec!(-10), &w, &InvestorActivity::all_active());
    assert_eq!(under.carry_rate, Decimal::ZERO);
    assert_eq!(under.net_amount(Party::InvestorA), dec!(30));
}

#[test]
fn test_founders_only_weights_take_everything_without_carry() {
    let result = allocate(
        dec!(4113),
        dec!(20),
        &weights(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
        &InvestorActivity::all_active(),
    );

    assert_eq!(result.net_amount(Party::Founders), dec!(4113));
    assert_eq!(result.totals.carry_collected, Decimal::ZERO);
    assert_eq!(result.net_amount(Party::InvestorA), Decimal::ZERO);
}

#[test]
fn test_allocation_input_round_trips_through_allocate() {
    let input = AllocationInput::new(
        dec!(4113),
        dec!(20),
        weights(dec!(340), dec!(175), dec!(55)),
        InvestorActivity::all_active(),
    );
    assert_eq!(input.allocate(), input.allocate());
}

#[test]
fn test_verify_rejects_tampered_result() {
    let mut result = allocate(
        dec!(1000),
        dec!(20),
        &weights(dec!(50), dec!(30), dec!(20)),
        &InvestorActivity::all_active(),
    );
    result.parties.founders.net_amount += dec!(1);
    assert!(result.verify().is_err());

    let mut result = allocate(
        dec!(1000),
        dec!(20),
        &weights(dec!(50), dec!(30), dec!(20)),
        &InvestorActivity::all_active(),
    );
    result.parties.founders.carry = dec!(99);
    assert!(result.verify().is_err());
}
