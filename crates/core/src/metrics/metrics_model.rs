use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::parties::PartyMap;

/// Figures read off a trading statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingSummary {
    #[serde(default)]
    pub wallet_size: Decimal,
    #[serde(default, alias = "pnl")]
    pub realized_pnl: Decimal,
    #[serde(default)]
    pub unrealized_pnl: Decimal,
    #[serde(default)]
    pub total_trades: u64,
    #[serde(default)]
    pub win_trades: u64,
    #[serde(default)]
    pub loss_trades: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingMetrics {
    /// Realized plus unrealized PnL.
    pub combined_profit: Decimal,
    /// Combined profit split by ownership weight, before carry.
    pub distribution: PartyMap<Decimal>,
    pub win_rate: Decimal,
    pub loss_rate: Decimal,
    pub profit_per_trade: Decimal,
    /// Combined profit over wallet size.
    pub roi: Decimal,
}
