//! Plain-text tables for terminal output.

use std::io::Write;

use rust_decimal::Decimal;

use carrysplit_core::constants::DISPLAY_DECIMAL_PRECISION;
use carrysplit_core::moonshot::MoonshotResult;
use carrysplit_core::parties::Party;
use carrysplit_core::split::SplitReport;

/// `$1,234.56`, negatives as `-$1,234.56`.
pub fn format_currency(value: Decimal) -> String {
    let value = value.round_dp(DISPLAY_DECIMAL_PRECISION);
    let rounded = format!("{:.2}", value.abs());
    let (whole, cents) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < Decimal::ZERO { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

/// `59.65%` from a fraction.
pub fn format_percent(fraction: Decimal) -> String {
    format!("{:.2}%", (fraction * Decimal::ONE_HUNDRED).round_dp(2))
}

pub fn write_report_table<W: Write>(out: &mut W, report: &SplitReport) -> std::io::Result<()> {
    let allocation = &report.allocation;
    writeln!(
        out,
        "Scenario {} as of {}: profit {} at {}% carry",
        report.scenario_name,
        report.evaluation_date,
        format_currency(allocation.profit),
        allocation.carry_percent.normalize()
    )?;

    let weighting = &report.weighting;
    writeln!(
        out,
        "Capital-day weights (total {} units)",
        weighting.total_capital_days.round_dp(0)
    )?;
    for party in Party::ALL {
        writeln!(
            out,
            "  {:<10} {:>8}  {:>12} units",
            party.label(),
            format_percent(weighting.weights.get(party)),
            weighting.capital_days[party].round_dp(0)
        )?;
    }
    if !weighting.skipped.is_empty() {
        writeln!(out, "  ({} contribution(s) skipped)", weighting.skipped.len())?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "{:<10} {:>14} {:>12} {:>12} {:>12} {:>14}",
        "Party", "Gross", "Carry", "Routed", "Fees", "Net"
    )?;
    for party in Party::ALL {
        let slot = &allocation.parties[party];
        let fees = report
            .fees
            .as_ref()
            .map(|waterfall| waterfall.parties[party].total_fees())
            .unwrap_or_default();
        writeln!(
            out,
            "{:<10} {:>14} {:>12} {:>12} {:>12} {:>14}",
            party.label(),
            format_currency(slot.gross_share),
            format_currency(slot.carry),
            format_currency(slot.routed_to_founders),
            format_currency(fees),
            format_currency(report.final_amount(party)),
        )?;
    }

    if let Some(moonshot) = &report.moonshot {
        writeln!(out)?;
        write_moonshot_table(out, moonshot)?;
    }

    if let Some(metrics) = &report.metrics {
        writeln!(out)?;
        writeln!(
            out,
            "Combined profit {}  ROI {}  win rate {}",
            format_currency(metrics.combined_profit),
            format_percent(metrics.roi),
            format_percent(metrics.win_rate)
        )?;
        for party in Party::ALL {
            writeln!(
                out,
                "  {:<10} {:>14}",
                party.label(),
                format_currency(metrics.distribution[party])
            )?;
        }
    }
    Ok(())
}

pub fn write_moonshot_table<W: Write>(out: &mut W, moonshot: &MoonshotResult) -> std::io::Result<()> {
    writeln!(
        out,
        "Moonshot pool {}: {} locked to Founders, {} to investors",
        format_currency(moonshot.pool),
        format_currency(moonshot.base_founder_share),
        format_currency(moonshot.investor_pool)
    )?;
    for party in Party::ALL {
        writeln!(
            out,
            "  {:<10} {:>14}",
            party.label(),
            format_currency(moonshot.amount(party))
        )?;
    }
    let routed = moonshot.routed.total();
    if !routed.is_zero() {
        writeln!(out, "  ({} routed to Founders)", format_currency(routed))?;
    }
    Ok(())
}
