use std::io::Write;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Args;

use carrysplit_core::export::write_allocation_csv;
use carrysplit_core::fees::FeeSchedule;
use carrysplit_core::metrics::TradingSummary;
use carrysplit_core::parties::Party;
use carrysplit_core::split::{SplitRequest, SplitService, SplitServiceTrait};

use super::{amount_arg, parse_party, resolve_scenario, OutputFormat};
use crate::config::Config;
use crate::render;

#[derive(Debug, Args)]
pub struct AllocateArgs {
    /// Realized profit to split
    #[arg(long)]
    pub profit: String,

    /// Carry percent charged on investor profit (0-100)
    #[arg(long)]
    pub carry: Option<String>,

    /// Built-in scenario name or scenario JSON file
    #[arg(long)]
    pub scenario: Option<String>,

    /// Mark an investor as not deployed (repeatable)
    #[arg(long, value_parser = parse_party)]
    pub inactive: Vec<Party>,

    /// Override the scenario's evaluation date (YYYY-MM-DD)
    #[arg(long)]
    pub evaluation_date: Option<NaiveDate>,

    /// Entry fee percent on investor net
    #[arg(long)]
    pub entry_fee: Option<String>,

    /// Management fee percent on investor net after the entry fee
    #[arg(long)]
    pub management_fee: Option<String>,

    /// Unrealized profit; adds a moonshot split of realized + unrealized
    #[arg(long)]
    pub unrealized: Option<String>,

    /// Explicit moonshot pool
    #[arg(long)]
    pub moonshot_pool: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl AllocateArgs {
    fn to_request(&self, config: &Config) -> anyhow::Result<SplitRequest> {
        let mut scenario =
            resolve_scenario(self.scenario.as_deref().unwrap_or(&config.scenario))?;
        for party in &self.inactive {
            scenario.activity = scenario.activity.with(*party, false);
        }

        let profit = amount_arg("profit", &self.profit);
        let carry_percent = self
            .carry
            .as_deref()
            .map(|raw| amount_arg("carry", raw))
            .unwrap_or(config.carry_percent);

        let mut request = SplitRequest::new(scenario, profit, carry_percent);
        request.evaluation_date = self.evaluation_date;

        if self.entry_fee.is_some() || self.management_fee.is_some() {
            let percent = |raw: &Option<String>, name: &str| {
                raw.as_deref()
                    .map(|value| amount_arg(name, value))
                    .unwrap_or_default()
            };
            request.fees = Some(FeeSchedule::new(
                percent(&self.entry_fee, "entry fee"),
                percent(&self.management_fee, "management fee"),
            ));
        }

        if let Some(raw) = &self.unrealized {
            request.trading = Some(TradingSummary {
                realized_pnl: profit,
                unrealized_pnl: amount_arg("unrealized", raw),
                ..Default::default()
            });
        }
        request.moonshot_pool = self
            .moonshot_pool
            .as_deref()
            .map(|raw| amount_arg("moonshot pool", raw));

        Ok(request)
    }
}

pub fn run<W: Write>(args: &AllocateArgs, config: &Config, out: &mut W) -> anyhow::Result<()> {
    let request = args.to_request(config)?;
    let report = SplitService::new()
        .calculate(&request)
        .context("Split calculation failed")?;

    tracing::info!(
        scenario = %report.scenario_name,
        profit = %report.allocation.profit,
        "Allocation complete"
    );

    match args.format {
        OutputFormat::Table => render::write_report_table(out, &report)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_allocation_csv(&mut *out, &report)?,
    }
    Ok(())
}
