use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use crate::parties::PartyMap;
use crate::utils::number_utils::saturating_add;

use super::{
    CapitalContribution, CapitalDayWeights, ContributionRecord, SkippedContribution,
    WeightingResult,
};

/// Contributions grouped by the party that supplied them.
pub type ContributionsByParty = PartyMap<Vec<CapitalContribution>>;

/// Computes capital-day weights for typed contributions.
///
/// Each party's capital-days are `Σ amount × activeDays`. Weights are the
/// capital-days normalized by their total, or everything to Founders when
/// the total is zero. Sums beyond the `Decimal` range clamp to
/// `Decimal::MAX`.
pub fn compute_weights(
    contributions: &ContributionsByParty,
    evaluation_date: NaiveDate,
) -> WeightingResult {
    let capital_days = contributions.map(|_, list| {
        list.iter()
            .map(|contribution| contribution.capital_days(evaluation_date))
            .fold(Decimal::ZERO, saturating_add)
    });
    let total_capital_days = capital_days.checked_total().unwrap_or(Decimal::MAX);

    if total_capital_days.is_zero() {
        debug!(
            "No capital-days as of {}; weights fall back to Founders",
            evaluation_date
        );
    }

    WeightingResult {
        weights: CapitalDayWeights::from_capital_days(&capital_days),
        capital_days,
        total_capital_days,
        skipped: Vec::new(),
    }
}

/// Validates raw records, groups the usable ones by party and computes
/// their weights. Unusable records contribute nothing and are reported in
/// `WeightingResult::skipped`.
pub fn compute_weights_from_records(
    records: &[ContributionRecord],
    evaluation_date: NaiveDate,
) -> WeightingResult {
    let (contributions, skipped) = group_records(records);
    let mut result = compute_weights(&contributions, evaluation_date);
    result.skipped = skipped;
    result
}

/// Splits records into valid contributions per party and skip diagnostics.
pub fn group_records(
    records: &[ContributionRecord],
) -> (ContributionsByParty, Vec<SkippedContribution>) {
    let mut contributions = ContributionsByParty::default();
    let mut skipped = Vec::new();

    for (index, record) in records.iter().enumerate() {
        match record.validate() {
            Ok((party, contribution)) => contributions[party].push(contribution),
            Err(reason) => {
                debug!("Skipping contribution #{}: {:?}", index, reason);
                skipped.push(SkippedContribution { index, reason });
            }
        }
    }

    (contributions, skipped)
}
