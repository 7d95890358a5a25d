//! Writes split reports as CSV. Amounts are rounded here, never in the
//! calculators.

use std::io::Write;

use csv::WriterBuilder;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{DISPLAY_DECIMAL_PRECISION, WEIGHT_DISPLAY_PRECISION};
use crate::errors::{Error, Result};
use crate::moonshot::MoonshotResult;
use crate::parties::Party;
use crate::split::SplitReport;

pub const ALLOCATION_CSV_HEADER: [&str; 10] = [
    "Party",
    "Gross",
    "Carry",
    "Routed",
    "Fees",
    "Net",
    "Weight",
    "Profit",
    "CarryPercent",
    "Scenario",
];

pub const MOONSHOT_CSV_HEADER: [&str; 4] = ["Party", "Amount", "InvestorWeight", "Routed"];

fn money(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(DISPLAY_DECIMAL_PRECISION))
}

fn percent(fraction: Decimal) -> String {
    format!(
        "{:.4}%",
        (fraction * dec!(100)).round_dp(WEIGHT_DISPLAY_PRECISION)
    )
}

/// One row per party with the allocation, fees and final amount.
pub fn write_allocation_csv<W: Write>(writer: W, report: &SplitReport) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(ALLOCATION_CSV_HEADER)?;

    let allocation = &report.allocation;
    for party in Party::ALL {
        let slot = &allocation.parties[party];
        let fees = report
            .fees
            .as_ref()
            .map(|waterfall| waterfall.parties[party].total_fees())
            .unwrap_or(Decimal::ZERO);

        csv_writer.write_record([
            party.label().to_string(),
            money(slot.gross_share),
            money(slot.carry),
            money(slot.routed_to_founders),
            money(fees),
            money(report.final_amount(party)),
            percent(slot.weight),
            money(allocation.profit),
            allocation.carry_percent.normalize().to_string(),
            report.scenario_name.clone(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| Error::Export(e.to_string()))
}

/// One row per party for a moonshot split.
pub fn write_moonshot_csv<W: Write>(writer: W, moonshot: &MoonshotResult) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(MOONSHOT_CSV_HEADER)?;

    for party in Party::ALL {
        let (weight, routed) = match party {
            Party::Founders => (String::new(), money(moonshot.routed.total())),
            _ => (
                percent(moonshot.investor_weights[party]),
                money(moonshot.routed.inactive_to_founders[party]),
            ),
        };
        csv_writer.write_record([
            party.label().to_string(),
            money(moonshot.amount(party)),
            weight,
            routed,
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| Error::Export(e.to_string()))
}
