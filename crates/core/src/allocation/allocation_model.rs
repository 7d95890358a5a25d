//! Allocation inputs and results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{CalculatorError, Result};
use crate::parties::{InvestorActivity, Party, PartyMap};
use crate::utils::number_utils::within_tolerance;
use crate::weights::CapitalDayWeights;

/// Everything the profit allocator needs for one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationInput {
    /// Realized profit. Negative values are treated as zero.
    pub profit: Decimal,
    /// Carry as a percentage, clamped to [0, 100].
    pub carry_percent: Decimal,
    /// Used exactly as supplied.
    pub weights: CapitalDayWeights,
    #[serde(default)]
    pub activity: InvestorActivity,
}

/// One party's slice of the profit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyAllocation {
    pub weight: Decimal,
    /// `profit × weight` before carry.
    pub gross_share: Decimal,
    /// Part of the gross share that is actually paid out to the party.
    /// Zero for an inactive investor.
    pub effective_gross: Decimal,
    /// Carry paid (investors) or collected (Founders).
    pub carry: Decimal,
    /// Investors: nominal share handed to Founders while inactive.
    /// Founders: total received from inactive investors.
    pub routed_to_founders: Decimal,
    pub net_amount: Decimal,
    pub active: bool,
}

impl PartyAllocation {
    pub fn zero(weight: Decimal, active: bool) -> Self {
        Self {
            weight,
            gross_share: Decimal::ZERO,
            effective_gross: Decimal::ZERO,
            carry: Decimal::ZERO,
            routed_to_founders: Decimal::ZERO,
            net_amount: Decimal::ZERO,
            active,
        }
    }
}

/// Aggregates shown next to the per-party figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationTotals {
    pub carry_collected: Decimal,
    pub routed_to_founders: Decimal,
    pub investor_gross: Decimal,
    pub investor_net: Decimal,
    pub distributed: Decimal,
}

/// The canonical per-party distribution of a realized profit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationResult {
    /// Profit after clamping.
    pub profit: Decimal,
    /// Carry percent after clamping.
    pub carry_percent: Decimal,
    pub carry_rate: Decimal,
    pub weights: CapitalDayWeights,
    pub parties: PartyMap<PartyAllocation>,
    pub totals: AllocationTotals,
}

impl AllocationResult {
    pub fn net_amount(&self, party: Party) -> Decimal {
        self.parties[party].net_amount
    }

    /// Checks conservation (`Σ net == profit`), that Founders collected
    /// exactly the carry investors paid, and that nobody ends up negative.
    pub fn verify(&self) -> Result<()> {
        let distributed = self.parties.map(|_, p| p.net_amount).total();
        if !within_tolerance(self.profit, distributed) {
            return Err(CalculatorError::ConservationViolated {
                expected: self.profit,
                distributed,
            }
            .into());
        }

        let paid: Decimal = Party::INVESTORS
            .iter()
            .map(|party| self.parties[*party].carry)
            .sum();
        let collected = self.parties.founders.carry;
        if collected != paid {
            return Err(CalculatorError::CarryRoutingMismatch { collected, paid }.into());
        }

        for (party, allocation) in self.parties.iter() {
            if allocation.net_amount < Decimal::ZERO {
                return Err(CalculatorError::NegativeAmount {
                    party,
                    amount: allocation.net_amount,
                }
                .into());
            }
        }
        Ok(())
    }
}
