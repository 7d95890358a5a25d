use std::path::Path;

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::fees::FeeSchedule;
use crate::parties::{InvestorActivity, PartyMap};
use crate::utils::time_utils::evaluation_date_today;
use crate::weights::{compute_weights_from_records, ContributionRecord, WeightingResult};

/// Where a scenario's weights come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum WeightSource {
    /// Dated capital contributions, weighted by capital-days.
    Contributions { contributions: Vec<ContributionRecord> },
    /// Raw capital-day units entered directly.
    Fixed { raw: PartyMap<Decimal> },
}

/// Read-only inputs describing one pool configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Defaults to today when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation_date: Option<NaiveDate>,
    pub weights: WeightSource,
    #[serde(default)]
    pub activity: InvestorActivity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<FeeSchedule>,
}

impl ScenarioConfig {
    /// Parses and validates a scenario from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ScenarioConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a scenario file.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading scenario from {}", path.display());
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::ConfigIO(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidConfigValue(
                "Scenario name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    pub fn resolved_evaluation_date(&self) -> NaiveDate {
        self.evaluation_date.unwrap_or_else(evaluation_date_today)
    }

    /// Runs the weighting for this scenario.
    pub fn weighting(&self, evaluation_date: NaiveDate) -> WeightingResult {
        match &self.weights {
            WeightSource::Contributions { contributions } => {
                compute_weights_from_records(contributions, evaluation_date)
            }
            WeightSource::Fixed { raw } => WeightingResult::from_fixed(raw),
        }
    }
}
