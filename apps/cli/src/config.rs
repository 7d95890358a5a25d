use rust_decimal::Decimal;

use carrysplit_core::constants::DEFAULT_CARRY_PERCENT;
use carrysplit_core::scenarios::NOT_DEPLOYED_SCENARIO;
use carrysplit_core::utils::number_utils::parse_amount;

/// Settings read from the environment (and `.env`), overridden by flags.
pub struct Config {
    /// Built-in scenario name or path to a scenario JSON file.
    pub scenario: String,
    pub carry_percent: Decimal,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let scenario = std::env::var("CARRYSPLIT_SCENARIO")
            .unwrap_or_else(|_| NOT_DEPLOYED_SCENARIO.to_string());
        let carry_percent = std::env::var("CARRYSPLIT_CARRY_PERCENT")
            .ok()
            .and_then(|value| parse_amount(&value))
            .unwrap_or(DEFAULT_CARRY_PERCENT);
        let log_format =
            std::env::var("CARRYSPLIT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        Self {
            scenario,
            carry_percent,
            log_format,
        }
    }
}
