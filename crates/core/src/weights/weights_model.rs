//! Normalized ownership weights and the weighting result.

use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::CONSERVATION_TOLERANCE;
use crate::errors::{CalculatorError, Result};
use crate::parties::{Party, PartyMap};
use crate::utils::number_utils::non_negative;

use super::SkippedContribution;

/// Ownership weights that always sum to one.
///
/// The only ways to build one normalize their input, so the allocators can
/// use a `CapitalDayWeights` exactly as supplied. When nothing is positive
/// the whole weight falls back to Founders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PartyMap<Decimal>", into = "PartyMap<Decimal>")]
pub struct CapitalDayWeights {
    shares: PartyMap<Decimal>,
}

impl CapitalDayWeights {
    /// Everything to Founders.
    pub fn founders_only() -> Self {
        Self {
            shares: PartyMap::new(Decimal::ONE, Decimal::ZERO, Decimal::ZERO),
        }
    }

    /// Normalizes raw, unscaled weights. Negative entries count as zero.
    pub fn from_raw(raw: &PartyMap<Decimal>) -> Self {
        let clamped = raw.map(|_, value| non_negative(*value));
        // Each entry fits a Decimal but the sum may not; dividing by three
        // keeps the sum in range and leaves the ratios unchanged.
        let (clamped, total) = match clamped.checked_total() {
            Some(total) => (clamped, total),
            None => {
                let scaled = clamped.map(|_, value| *value / Decimal::from(3));
                (scaled, scaled.total())
            }
        };
        if total <= Decimal::ZERO {
            warn!("Raw weights have no positive entry; assigning all weight to Founders");
            return Self::founders_only();
        }

        let mut shares = clamped.map(|_, value| *value / total);
        absorb_residual(&mut shares);
        Self { shares }
    }

    /// Normalizes per-party capital-days.
    pub fn from_capital_days(capital_days: &PartyMap<Decimal>) -> Self {
        Self::from_raw(capital_days)
    }

    pub fn get(&self, party: Party) -> Decimal {
        self.shares[party]
    }

    pub fn total(&self) -> Decimal {
        self.shares.total()
    }

    /// Sum of the two investor weights.
    pub fn investor_total(&self) -> Decimal {
        self.shares.investor_total()
    }

    /// Checks that the weights sum to one within tolerance.
    pub fn verify(&self) -> Result<()> {
        let total = self.total();
        if (total - Decimal::ONE).abs() > CONSERVATION_TOLERANCE {
            return Err(CalculatorError::WeightsNotNormalized(total).into());
        }
        Ok(())
    }
}

impl Default for CapitalDayWeights {
    fn default() -> Self {
        Self::founders_only()
    }
}

impl From<PartyMap<Decimal>> for CapitalDayWeights {
    fn from(raw: PartyMap<Decimal>) -> Self {
        Self::from_raw(&raw)
    }
}

impl From<CapitalDayWeights> for PartyMap<Decimal> {
    fn from(weights: CapitalDayWeights) -> Self {
        weights.shares
    }
}

/// Folds the rounding residual of the division into the largest share so the
/// weights sum to exactly one.
fn absorb_residual(shares: &mut PartyMap<Decimal>) {
    let residual = Decimal::ONE - shares.total();
    if residual.is_zero() {
        return;
    }
    let largest = Party::ALL
        .into_iter()
        .max_by(|a, b| shares[*a].cmp(&shares[*b]))
        .unwrap_or(Party::Founders);
    shares[largest] += residual;
}

/// Output of a weighting pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightingResult {
    pub weights: CapitalDayWeights,
    pub capital_days: PartyMap<Decimal>,
    pub total_capital_days: Decimal,
    /// Records excluded because of unusable input. Empty for typed input.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedContribution>,
}

impl WeightingResult {
    /// A weighting backed by fixed raw weights rather than dated capital.
    /// The raw figures are reported as the capital-day units.
    pub fn from_fixed(raw: &PartyMap<Decimal>) -> Self {
        let capital_days = raw.map(|_, value| non_negative(*value));
        Self {
            weights: CapitalDayWeights::from_raw(&capital_days),
            total_capital_days: capital_days.checked_total().unwrap_or(Decimal::MAX),
            capital_days,
            skipped: Vec::new(),
        }
    }
}
