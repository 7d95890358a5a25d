//! The two historical pool configurations, as plain records.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::parties::{InvestorActivity, Party, PartyMap};

use super::{ScenarioConfig, WeightSource};

pub const NOT_DEPLOYED_SCENARIO: &str = "notDeployed";
pub const DEPLOYED_SCENARIO: &str = "deployed";

/// InvestorB's capital not yet deployed: 340/175/0 units, InvestorB inactive.
pub fn not_deployed_scenario() -> ScenarioConfig {
    ScenarioConfig {
        name: NOT_DEPLOYED_SCENARIO.to_string(),
        label: Some("Not deployed (0 weight)".to_string()),
        evaluation_date: None,
        weights: WeightSource::Fixed {
            raw: PartyMap::new(dec!(340), dec!(175), dec!(0)),
        },
        activity: InvestorActivity::all_active().with(Party::InvestorB, false),
        fees: None,
    }
}

/// InvestorB deployed on 2025-08-02: 340/175/55 units, everyone active.
pub fn deployed_scenario() -> ScenarioConfig {
    ScenarioConfig {
        name: DEPLOYED_SCENARIO.to_string(),
        label: Some("Deployed on 2025-08-02 (5,000 capital)".to_string()),
        evaluation_date: NaiveDate::from_ymd_opt(2025, 8, 2),
        weights: WeightSource::Fixed {
            raw: PartyMap::new(dec!(340), dec!(175), dec!(55)),
        },
        activity: InvestorActivity::all_active(),
        fees: None,
    }
}

pub fn builtin_scenarios() -> Vec<ScenarioConfig> {
    vec![not_deployed_scenario(), deployed_scenario()]
}

/// Looks up a built-in scenario by name, case-insensitively. Unknown names
/// fall back to the not-deployed configuration.
pub fn builtin_scenario(name: &str) -> ScenarioConfig {
    builtin_scenarios()
        .into_iter()
        .find(|scenario| scenario.name.eq_ignore_ascii_case(name.trim()))
        .unwrap_or_else(not_deployed_scenario)
}
