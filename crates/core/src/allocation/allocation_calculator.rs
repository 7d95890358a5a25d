use log::{debug, error};
use rust_decimal::Decimal;

use crate::fees::apply_carry;
use crate::parties::{InvestorActivity, Party, PartyMap};
use crate::utils::number_utils::{clamp_percent, non_negative, percent_to_rate};
use crate::weights::CapitalDayWeights;

use super::{AllocationInput, AllocationResult, AllocationTotals, PartyAllocation};

impl AllocationInput {
    pub fn new(
        profit: Decimal,
        carry_percent: Decimal,
        weights: CapitalDayWeights,
        activity: InvestorActivity,
    ) -> Self {
        Self {
            profit,
            carry_percent,
            weights,
            activity,
        }
    }

    pub fn allocate(&self) -> AllocationResult {
        allocate(self.profit, self.carry_percent, &self.weights, &self.activity)
    }
}

/// Splits a realized profit across the three parties.
///
/// Each investor's gross share is `profit × weight`. Active investors pay
/// carry on it; an inactive investor's whole nominal share is handed to
/// Founders instead. Founders end with their own base share plus all carry
/// and all routed shares, so the net amounts always add back to `profit`.
pub fn allocate(
    profit: Decimal,
    carry_percent: Decimal,
    weights: &CapitalDayWeights,
    activity: &InvestorActivity,
) -> AllocationResult {
    let profit = non_negative(profit);
    let carry_percent = clamp_percent(carry_percent);
    let carry_rate = percent_to_rate(carry_percent);

    let mut parties = PartyMap::from_fn(|party| {
        PartyAllocation::zero(weights.get(party), activity.is_active(party))
    });
    let mut totals = AllocationTotals::default();

    for party in Party::INVESTORS {
        let slot = &mut parties[party];
        slot.gross_share = profit * slot.weight;
        totals.investor_gross += slot.gross_share;

        if !slot.active {
            slot.routed_to_founders = slot.gross_share;
            totals.routed_to_founders += slot.gross_share;
            if !slot.gross_share.is_zero() {
                debug!(
                    "{} inactive; routing {} to Founders",
                    party, slot.gross_share
                );
            }
            continue;
        }

        slot.effective_gross = slot.gross_share;
        let outcome = apply_carry(slot.effective_gross, carry_rate);
        slot.carry = outcome.carry_amount;
        slot.net_amount = outcome.net;
        totals.carry_collected += outcome.carry_amount;
        totals.investor_net += outcome.net;
    }

    let founders = &mut parties.founders;
    founders.gross_share = profit * founders.weight;
    founders.effective_gross = founders.gross_share;
    founders.carry = totals.carry_collected;
    founders.routed_to_founders = totals.routed_to_founders;
    founders.net_amount = founders.gross_share + totals.carry_collected + totals.routed_to_founders;

    totals.distributed = parties.map(|_, p| p.net_amount).total();

    let result = AllocationResult {
        profit,
        carry_percent,
        carry_rate,
        weights: *weights,
        parties,
        totals,
    };

    let verification = result.verify();
    if let Err(err) = &verification {
        error!("Allocation invariant violated: {}", err);
    }
    debug_assert!(verification.is_ok(), "allocation invariant violated");

    result
}
