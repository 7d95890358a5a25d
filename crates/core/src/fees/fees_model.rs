use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::parties::PartyMap;
use crate::utils::number_utils::percent_to_rate;

/// Result of charging carry on an investor's gross share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarryOutcome {
    pub net: Decimal,
    pub carry_amount: Decimal,
}

/// Sequential entry + management fees on one amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    pub original_amount: Decimal,
    pub entry_fee: Decimal,
    /// Balance after the entry fee, the base for the management fee.
    pub after_entry: Decimal,
    pub management_fee: Decimal,
    pub total_fees: Decimal,
    pub net_amount: Decimal,
}

/// Entry and management fees as percentages (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeSchedule {
    #[serde(default)]
    pub entry_fee_percent: Decimal,
    #[serde(default)]
    pub management_fee_percent: Decimal,
}

impl FeeSchedule {
    pub fn new(entry_fee_percent: Decimal, management_fee_percent: Decimal) -> Self {
        Self {
            entry_fee_percent,
            management_fee_percent,
        }
    }

    pub fn entry_rate(&self) -> Decimal {
        percent_to_rate(self.entry_fee_percent)
    }

    pub fn management_rate(&self) -> Decimal {
        percent_to_rate(self.management_fee_percent)
    }

    pub fn is_empty(&self) -> bool {
        self.entry_rate().is_zero() && self.management_rate().is_zero()
    }
}

/// Fee flows for one party after the waterfall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyFees {
    /// Amount the party held after carry, before fees.
    pub pre_fee_amount: Decimal,
    /// Entry fee paid (investors) or collected (Founders).
    pub entry_fee: Decimal,
    /// Management fee paid (investors) or collected (Founders).
    pub management_fee: Decimal,
    pub net_amount: Decimal,
}

impl PartyFees {
    pub fn total_fees(&self) -> Decimal {
        self.entry_fee + self.management_fee
    }
}

/// An allocation after investor fees have been routed to Founders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeWaterfall {
    pub entry_fee_rate: Decimal,
    pub management_fee_rate: Decimal,
    pub profit: Decimal,
    pub parties: PartyMap<PartyFees>,
    /// Total fees paid by investors, all of it collected by Founders.
    pub total_fees: Decimal,
}
