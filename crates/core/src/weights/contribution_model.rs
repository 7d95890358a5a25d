//! Capital contributions and the loosely typed records they are parsed from.

use chrono::NaiveDate;
use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::parties::Party;
use crate::utils::number_utils::{decimal_from_f64, non_negative, parse_amount};
use crate::utils::time_utils::{days_between, parse_date};

/// How long a contribution counts toward the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ActiveSpan {
    /// Active from `start_date` until `end_date` (withdrawal) or the
    /// evaluation date, whichever is earlier.
    Dated {
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    },
    /// A fixed number of days supplied directly by the input source.
    Days { days: Decimal },
}

impl ActiveSpan {
    /// Whole days active as of `evaluation_date`, never negative.
    pub fn active_days(&self, evaluation_date: NaiveDate) -> Decimal {
        match *self {
            ActiveSpan::Dated {
                start_date,
                end_date,
            } => {
                let effective_end = match end_date {
                    Some(end) if end < evaluation_date => end,
                    _ => evaluation_date,
                };
                Decimal::from(days_between(start_date, effective_end))
            }
            ActiveSpan::Days { days } => non_negative(days),
        }
    }
}

/// Capital supplied by one party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapitalContribution {
    /// Currency magnitude; negative values are treated as zero.
    pub amount: Decimal,
    pub span: ActiveSpan,
    /// Floor for the active days of a contribution that has started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_days: Option<Decimal>,
}

impl CapitalContribution {
    pub fn dated(amount: Decimal, start_date: NaiveDate, end_date: Option<NaiveDate>) -> Self {
        Self {
            amount,
            span: ActiveSpan::Dated {
                start_date,
                end_date,
            },
            minimum_days: None,
        }
    }

    pub fn for_days(amount: Decimal, days: Decimal) -> Self {
        Self {
            amount,
            span: ActiveSpan::Days { days },
            minimum_days: None,
        }
    }

    /// Capital-days supplied as a single figure: one unit of capital held
    /// for `capital_days` days.
    pub fn precomputed(capital_days: Decimal) -> Self {
        Self::for_days(Decimal::ONE, capital_days)
    }

    pub fn with_minimum_days(mut self, minimum_days: Decimal) -> Self {
        self.minimum_days = Some(minimum_days);
        self
    }

    /// `amount × activeDays`. Zero whenever either factor is non-positive;
    /// clamps to `Decimal::MAX` when the product leaves the `Decimal` range.
    pub fn capital_days(&self, evaluation_date: NaiveDate) -> Decimal {
        let amount = non_negative(self.amount);
        let mut days = self.span.active_days(evaluation_date);
        if amount.is_zero() || days.is_zero() {
            return Decimal::ZERO;
        }
        if let Some(minimum) = self.minimum_days {
            days = days.max(minimum);
        }

        amount.checked_mul(days).unwrap_or_else(|| {
            warn!(
                "Capital-days for {} over {} days overflow; clamping to the maximum",
                amount, days
            );
            Decimal::MAX
        })
    }
}

/// A numeric field as it arrives from JSON: a number or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// `None` when the value holds no number. Non-finite numbers become 0.
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            RawValue::Number(value) => Some(decimal_from_f64(*value)),
            RawValue::Text(text) => parse_amount(text),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

/// A contribution exactly as supplied by a scenario file or an upload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionRecord {
    #[serde(
        alias = "investor",
        alias = "holder",
        alias = "key",
        alias = "classKey",
        alias = "className"
    )]
    pub party: Option<String>,
    #[serde(alias = "capital", alias = "value")]
    pub amount: Option<RawValue>,
    #[serde(alias = "start", alias = "from", alias = "deployedOn")]
    pub start_date: Option<String>,
    #[serde(alias = "end", alias = "to", alias = "until", alias = "withdrawnOn")]
    pub end_date: Option<String>,
    #[serde(alias = "durationDays")]
    pub days: Option<RawValue>,
    /// Capital-days given directly; replaces amount and dates.
    pub capital_days: Option<RawValue>,
    pub minimum_days: Option<RawValue>,
}

/// Why a contribution record was left out of the weighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "reason")]
pub enum SkipReason {
    UnknownParty { value: Option<String> },
    MissingAmount,
    InvalidAmount { value: String },
    InvalidDays { value: String },
    InvalidCapitalDays { value: String },
    InvalidMinimumDays { value: String },
    MissingStartDate,
    InvalidStartDate { value: String },
    InvalidEndDate { value: String },
}

/// A record excluded from the weighting, by position in the input list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedContribution {
    pub index: usize,
    pub reason: SkipReason,
}

fn describe(value: &RawValue) -> String {
    match value {
        RawValue::Number(n) => n.to_string(),
        RawValue::Text(text) => text.clone(),
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl ContributionRecord {
    /// Resolves the party and parses amount and dates.
    ///
    /// A negative amount is not an error: it clamps to zero and the
    /// contribution is kept with zero capital-days. An explicit
    /// `capitalDays` wins over amount, `days` and dates.
    pub fn validate(&self) -> Result<(Party, CapitalContribution), SkipReason> {
        let party = non_blank(&self.party)
            .and_then(Party::from_alias)
            .ok_or_else(|| SkipReason::UnknownParty {
                value: self.party.clone(),
            })?;

        if let Some(raw) = &self.capital_days {
            let capital_days = raw
                .to_decimal()
                .ok_or_else(|| SkipReason::InvalidCapitalDays {
                    value: describe(raw),
                })?;
            return Ok((party, CapitalContribution::precomputed(capital_days)));
        }

        let contribution = self.parse_span()?;
        match &self.minimum_days {
            Some(raw) => {
                let minimum = raw
                    .to_decimal()
                    .ok_or_else(|| SkipReason::InvalidMinimumDays {
                        value: describe(raw),
                    })?;
                Ok((party, contribution.with_minimum_days(minimum)))
            }
            None => Ok((party, contribution)),
        }
    }

    fn parse_span(&self) -> Result<CapitalContribution, SkipReason> {
        let raw_amount = self.amount.as_ref().ok_or(SkipReason::MissingAmount)?;
        let amount = raw_amount
            .to_decimal()
            .ok_or_else(|| SkipReason::InvalidAmount {
                value: describe(raw_amount),
            })?;
        let amount = non_negative(amount);

        if let Some(raw_days) = &self.days {
            let days = raw_days
                .to_decimal()
                .ok_or_else(|| SkipReason::InvalidDays {
                    value: describe(raw_days),
                })?;
            return Ok(CapitalContribution::for_days(amount, days));
        }

        let start_text = non_blank(&self.start_date).ok_or(SkipReason::MissingStartDate)?;
        let start_date = parse_date(start_text).ok_or_else(|| SkipReason::InvalidStartDate {
            value: start_text.to_string(),
        })?;

        let end_date = match non_blank(&self.end_date) {
            Some(end_text) => Some(parse_date(end_text).ok_or_else(|| {
                SkipReason::InvalidEndDate {
                    value: end_text.to_string(),
                }
            })?),
            None => None,
        };

        Ok(CapitalContribution::dated(amount, start_date, end_date))
    }
}
