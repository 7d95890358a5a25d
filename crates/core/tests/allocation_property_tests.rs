//! Property-based tests for the allocation engine.
//!
//! These verify the conservation and routing rules across random inputs,
//! using the `proptest` crate for case generation.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use carrysplit_core::constants::CONSERVATION_TOLERANCE;
use carrysplit_core::weights::{compute_weights, CapitalContribution, ContributionsByParty};
use carrysplit_core::{
    allocate, distribute_moonshot, CapitalDayWeights, InvestorActivity, Party, PartyMap,
};

// =============================================================================
// Generators
// =============================================================================

/// Currency amount with cents, up to ten million.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Carry percent with two decimals, including values outside [0, 100].
fn arb_carry_percent() -> impl Strategy<Value = Decimal> {
    (-2_000i64..12_000).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

/// Raw, unnormalized weights. Zero entries are common on purpose.
fn arb_raw_weights() -> impl Strategy<Value = PartyMap<Decimal>> {
    let entry = prop_oneof![
        1 => Just(Decimal::ZERO),
        4 => (1i64..1_000_000).prop_map(Decimal::from),
    ];
    (entry.clone(), entry.clone(), entry)
        .prop_map(|(founders, investor_a, investor_b)| PartyMap::new(founders, investor_a, investor_b))
}

fn arb_weights() -> impl Strategy<Value = CapitalDayWeights> {
    arb_raw_weights().prop_map(|raw| CapitalDayWeights::from_raw(&raw))
}

fn arb_activity() -> impl Strategy<Value = InvestorActivity> {
    (any::<bool>(), any::<bool>()).prop_map(|(investor_a, investor_b)| InvestorActivity {
        investor_a,
        investor_b,
    })
}

fn arb_contribution() -> impl Strategy<Value = CapitalContribution> {
    (
        -1_000i64..100_000,
        0i64..400,
        proptest::option::of(0i64..400),
    )
        .prop_map(|(amount, start_offset, end_offset)| {
            let base = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
            CapitalContribution::dated(
                Decimal::from(amount),
                base + Duration::days(start_offset),
                end_offset.map(|offset| base + Duration::days(offset)),
            )
        })
}

fn arb_contributions() -> impl Strategy<Value = ContributionsByParty> {
    let list = || proptest::collection::vec(arb_contribution(), 0..5);
    (list(), list(), list()).prop_map(|(founders, investor_a, investor_b)| {
        ContributionsByParty::new(founders, investor_a, investor_b)
    })
}

fn within_tolerance(expected: Decimal, actual: Decimal) -> bool {
    (expected - actual).abs() <= CONSERVATION_TOLERANCE * expected.abs().max(Decimal::ONE)
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Net amounts always add back to the (clamped) profit.
    #[test]
    fn prop_allocation_conserves_profit(
        profit in arb_amount(),
        carry in arb_carry_percent(),
        weights in arb_weights(),
        activity in arb_activity(),
    ) {
        let result = allocate(profit, carry, &weights, &activity);
        let distributed: Decimal = Party::ALL.iter().map(|p| result.net_amount(*p)).sum();

        prop_assert!(
            within_tolerance(profit, distributed),
            "distributed {} for profit {}", distributed, profit
        );
        prop_assert!(result.verify().is_ok());
    }

    /// Each active investor pays `profit × weight × rate`, and Founders
    /// collect exactly the sum once.
    #[test]
    fn prop_carry_routes_to_founders(
        profit in arb_amount(),
        carry in arb_carry_percent(),
        weights in arb_weights(),
        activity in arb_activity(),
    ) {
        let result = allocate(profit, carry, &weights, &activity);
        let mut paid = Decimal::ZERO;

        for party in Party::INVESTORS {
            let slot = result.parties[party];
            let expected = if activity.is_active(party) {
                profit * weights.get(party) * result.carry_rate
            } else {
                Decimal::ZERO
            };
            prop_assert_eq!(slot.carry, expected);
            paid += slot.carry;
        }

        prop_assert_eq!(result.parties.founders.carry, paid);
        prop_assert!(result.carry_rate >= Decimal::ZERO && result.carry_rate <= Decimal::ONE);
    }

    /// An inactive investor receives nothing and its nominal share shows up
    /// in Founders' routed total.
    #[test]
    fn prop_inactive_investor_routes_in_full(
        profit in arb_amount(),
        carry in arb_carry_percent(),
        weights in arb_weights(),
    ) {
        let activity = InvestorActivity::all_active().with(Party::InvestorB, false);
        let result = allocate(profit, carry, &weights, &activity);
        let b = result.parties[Party::InvestorB];

        prop_assert_eq!(b.net_amount, Decimal::ZERO);
        prop_assert_eq!(b.routed_to_founders, profit * weights.get(Party::InvestorB));
        prop_assert_eq!(result.parties.founders.routed_to_founders, b.routed_to_founders);
    }

    /// Normalized weights sum to one; zero input falls back to Founders.
    #[test]
    fn prop_weights_are_normalized(raw in arb_raw_weights()) {
        let weights = CapitalDayWeights::from_raw(&raw);
        prop_assert_eq!(weights.total(), Decimal::ONE);

        if raw.total().is_zero() {
            prop_assert_eq!(weights, CapitalDayWeights::founders_only());
        }
        for party in Party::ALL {
            prop_assert!(weights.get(party) >= Decimal::ZERO);
        }
    }

    /// Capital-day weighting of arbitrary dated contributions is normalized
    /// and never negative.
    #[test]
    fn prop_capital_day_weights_are_normalized(contributions in arb_contributions()) {
        let evaluation_date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let result = compute_weights(&contributions, evaluation_date);

        prop_assert_eq!(result.weights.total(), Decimal::ONE);
        prop_assert_eq!(result.total_capital_days, result.capital_days.total());
        for party in Party::ALL {
            prop_assert!(result.capital_days[party] >= Decimal::ZERO);
        }
        if result.total_capital_days.is_zero() {
            prop_assert_eq!(result.weights.get(Party::Founders), Decimal::ONE);
        }
    }

    /// The moonshot split keeps 25/75 and distributes the whole pool.
    #[test]
    fn prop_moonshot_distributes_whole_pool(
        pool in arb_amount(),
        weights in arb_weights(),
        activity in arb_activity(),
    ) {
        let result = distribute_moonshot(pool, &weights, &activity);

        prop_assert!(within_tolerance(pool, result.base_founder_share + result.investor_pool));
        prop_assert!(within_tolerance(pool, result.amounts.total()));
        prop_assert!(result.amount(Party::Founders) >= result.base_founder_share);

        for party in Party::INVESTORS {
            if !activity.is_active(party) {
                prop_assert_eq!(result.amount(party), Decimal::ZERO);
            }
        }
    }

    /// No hidden state: identical inputs give identical results.
    #[test]
    fn prop_allocation_is_idempotent(
        profit in arb_amount(),
        carry in arb_carry_percent(),
        weights in arb_weights(),
        activity in arb_activity(),
    ) {
        prop_assert_eq!(
            allocate(profit, carry, &weights, &activity),
            allocate(profit, carry, &weights, &activity)
        );
    }
}

// =============================================================================
// Reference scenarios
// =============================================================================

#[test]
fn test_reference_moonshot_example() {
    let weights = CapitalDayWeights::from_raw(&PartyMap::new(
        Decimal::ZERO,
        Decimal::new(76, 2),
        Decimal::new(24, 2),
    ));
    let result = distribute_moonshot(Decimal::from(1000), &weights, &InvestorActivity::all_active());

    assert_eq!(result.amount(Party::Founders), Decimal::from(250));
    assert_eq!(result.amount(Party::InvestorA), Decimal::from(570));
    assert_eq!(result.amount(Party::InvestorB), Decimal::from(180));
}
