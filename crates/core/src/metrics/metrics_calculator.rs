use rust_decimal::Decimal;

use crate::parties::PartyMap;
use crate::utils::number_utils::saturating_add;
use crate::weights::CapitalDayWeights;

use super::{TradingMetrics, TradingSummary};

/// `numerator / denominator`, or 0 when the denominator is not positive.
fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator > Decimal::ZERO {
        numerator / denominator
    } else {
        Decimal::ZERO
    }
}

impl TradingSummary {
    pub fn combined_profit(&self) -> Decimal {
        saturating_add(self.realized_pnl, self.unrealized_pnl)
    }
}

/// Statement ratios plus the combined profit split by `weights`.
pub fn calculate_trading_metrics(
    summary: &TradingSummary,
    weights: &CapitalDayWeights,
) -> TradingMetrics {
    let total_trades = Decimal::from(summary.total_trades);
    let combined_profit = summary.combined_profit();

    TradingMetrics {
        combined_profit,
        distribution: PartyMap::from_fn(|party| combined_profit * weights.get(party)),
        win_rate: ratio(Decimal::from(summary.win_trades), total_trades),
        loss_rate: ratio(Decimal::from(summary.loss_trades), total_trades),
        profit_per_trade: ratio(summary.realized_pnl, total_trades),
        roi: ratio(combined_profit, summary.wallet_size),
    }
}
