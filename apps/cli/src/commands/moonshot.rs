use std::io::Write;

use clap::Args;
use rust_decimal::Decimal;

use carrysplit_core::export::write_moonshot_csv;
use carrysplit_core::moonshot::distribute_moonshot;
use carrysplit_core::parties::Party;

use super::{amount_arg, parse_party, resolve_scenario, OutputFormat};
use crate::config::Config;
use crate::render;

#[derive(Debug, Args)]
pub struct MoonshotArgs {
    /// Pool to split. Defaults to realized + unrealized.
    #[arg(long)]
    pub pool: Option<String>,

    /// Realized profit component of the pool
    #[arg(long)]
    pub realized: Option<String>,

    /// Unrealized profit component of the pool
    #[arg(long)]
    pub unrealized: Option<String>,

    /// Built-in scenario name or scenario JSON file
    #[arg(long)]
    pub scenario: Option<String>,

    /// Mark an investor as not deployed (repeatable)
    #[arg(long, value_parser = parse_party)]
    pub inactive: Vec<Party>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl MoonshotArgs {
    fn pool(&self) -> Decimal {
        if let Some(raw) = &self.pool {
            return amount_arg("pool", raw);
        }
        let component = |raw: &Option<String>, name: &str| {
            raw.as_deref()
                .map(|value| amount_arg(name, value))
                .unwrap_or_default()
        };
        component(&self.realized, "realized") + component(&self.unrealized, "unrealized")
    }
}

pub fn run<W: Write>(args: &MoonshotArgs, config: &Config, out: &mut W) -> anyhow::Result<()> {
    let mut scenario = resolve_scenario(args.scenario.as_deref().unwrap_or(&config.scenario))?;
    for party in &args.inactive {
        scenario.activity = scenario.activity.with(*party, false);
    }

    let weighting = scenario.weighting(scenario.resolved_evaluation_date());
    let result = distribute_moonshot(args.pool(), &weighting.weights, &scenario.activity);
    result.verify()?;

    match args.format {
        OutputFormat::Table => render::write_moonshot_table(out, &result)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &result)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_moonshot_csv(&mut *out, &result)?,
    }
    Ok(())
}
