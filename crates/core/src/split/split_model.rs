use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::allocation::AllocationResult;
use crate::fees::{FeeSchedule, FeeWaterfall};
use crate::metrics::{TradingMetrics, TradingSummary};
use crate::moonshot::MoonshotResult;
use crate::scenarios::ScenarioConfig;
use crate::weights::WeightingResult;

/// Inputs for one calculation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitRequest {
    pub scenario: ScenarioConfig,
    /// Realized profit to allocate.
    pub profit: Decimal,
    pub carry_percent: Decimal,
    /// Overrides the scenario's evaluation date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation_date: Option<NaiveDate>,
    /// Overrides the scenario's fee schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<FeeSchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trading: Option<TradingSummary>,
    /// Moonshot pool. Defaults to the trading summary's combined profit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moonshot_pool: Option<Decimal>,
}

impl SplitRequest {
    pub fn new(scenario: ScenarioConfig, profit: Decimal, carry_percent: Decimal) -> Self {
        Self {
            scenario,
            profit,
            carry_percent,
            evaluation_date: None,
            fees: None,
            trading: None,
            moonshot_pool: None,
        }
    }

    pub fn evaluation_date(&self) -> NaiveDate {
        self.evaluation_date
            .unwrap_or_else(|| self.scenario.resolved_evaluation_date())
    }

    pub fn fee_schedule(&self) -> Option<FeeSchedule> {
        self.fees
            .or(self.scenario.fees)
            .filter(|schedule| !schedule.is_empty())
    }

    pub fn resolved_moonshot_pool(&self) -> Option<Decimal> {
        self.moonshot_pool
            .or_else(|| self.trading.map(|summary| summary.combined_profit()))
    }
}

/// Everything a consumer needs to render a split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitReport {
    pub scenario_name: String,
    pub evaluation_date: NaiveDate,
    pub weighting: WeightingResult,
    pub allocation: AllocationResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<FeeWaterfall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moonshot: Option<MoonshotResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<TradingMetrics>,
}

impl SplitReport {
    /// Final amount per party: after fees when a schedule applied.
    pub fn final_amount(&self, party: crate::parties::Party) -> Decimal {
        match &self.fees {
            Some(waterfall) => waterfall.net_amount(party),
            None => self.allocation.net_amount(party),
        }
    }
}
