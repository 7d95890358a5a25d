pub mod allocate;
pub mod moonshot;
pub mod scenarios;

use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use rust_decimal::Decimal;

use carrysplit_core::parties::Party;
use carrysplit_core::scenarios::{builtin_scenario, ScenarioConfig};
use carrysplit_core::utils::number_utils::parse_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// A path to an existing file is loaded; anything else names a built-in.
pub fn resolve_scenario(reference: &str) -> anyhow::Result<ScenarioConfig> {
    let path = Path::new(reference);
    if path.is_file() {
        return ScenarioConfig::load(path)
            .with_context(|| format!("Failed to load scenario {}", path.display()));
    }
    let scenario = builtin_scenario(reference);
    if !scenario.name.eq_ignore_ascii_case(reference.trim()) {
        tracing::warn!(
            "Unknown scenario '{}', using '{}'",
            reference,
            scenario.name
        );
    }
    Ok(scenario)
}

/// Numeric flags follow the engine's input policy: unparseable means zero.
pub fn amount_arg(name: &str, raw: &str) -> Decimal {
    parse_amount(raw).unwrap_or_else(|| {
        tracing::warn!("Could not read {} '{}', using 0", name, raw);
        Decimal::ZERO
    })
}

/// Parses `--inactive` values such as `damon` or `investorB`.
pub fn parse_party(raw: &str) -> Result<Party, String> {
    Party::from_alias(raw).ok_or_else(|| format!("unknown party '{}'", raw))
}
