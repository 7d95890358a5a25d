use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{CalculatorError, Result};
use crate::parties::{Party, PartyMap};
use crate::utils::number_utils::within_tolerance;

/// Amounts handed to Founders instead of an investor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonshotRouting {
    /// Whole investor pool, when no investor carries any weight.
    pub investor_pool_to_founders: Decimal,
    /// Would-be shares of inactive investors.
    pub inactive_to_founders: PartyMap<Decimal>,
}

impl MoonshotRouting {
    pub fn total(&self) -> Decimal {
        self.investor_pool_to_founders + self.inactive_to_founders.investor_total()
    }
}

/// Result of a moonshot split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonshotResult {
    /// Pool after clamping.
    pub pool: Decimal,
    pub base_founder_share: Decimal,
    pub investor_pool: Decimal,
    /// Investor weights renormalized within the investor subset.
    pub investor_weights: PartyMap<Decimal>,
    pub amounts: PartyMap<Decimal>,
    pub routed: MoonshotRouting,
}

impl MoonshotResult {
    pub fn zero() -> Self {
        Self {
            pool: Decimal::ZERO,
            base_founder_share: Decimal::ZERO,
            investor_pool: Decimal::ZERO,
            investor_weights: PartyMap::default(),
            amounts: PartyMap::default(),
            routed: MoonshotRouting::default(),
        }
    }

    pub fn amount(&self, party: Party) -> Decimal {
        self.amounts[party]
    }

    /// Checks `base + investor pool == pool` and `Σ amounts == pool`.
    pub fn verify(&self) -> Result<()> {
        let split = self.base_founder_share + self.investor_pool;
        if !within_tolerance(self.pool, split) {
            return Err(CalculatorError::ConservationViolated {
                expected: self.pool,
                distributed: split,
            }
            .into());
        }

        let distributed = self.amounts.total();
        if !within_tolerance(self.pool, distributed) {
            return Err(CalculatorError::ConservationViolated {
                expected: self.pool,
                distributed,
            }
            .into());
        }
        Ok(())
    }
}
