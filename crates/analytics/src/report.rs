use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The canonical, fully-populated statistics aggregate.
///
/// This struct is the normalized form every consumer of trade statistics can
/// rely on: all six fields are always present, `win_rate` is always inside
/// [0, 100], and `total_trades >= profitable_trades + losing_trades` (open
/// and break-even trades count toward the total only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_trades: u64,
    pub profitable_trades: u64,
    pub losing_trades: u64,
    /// Sum of realized P/L over closed trades.
    pub total_profit: Decimal,
    /// Percentage of decided trades that won, clamped to [0, 100].
    pub win_rate: Decimal,
    /// Wins per loss; falls back to the bare win count when no losses exist.
    pub win_loss_ratio: Decimal,
}

/// One fixed-width bucket of the realized profit/loss histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionBin {
    /// Inclusive lower edge of the bucket; the upper edge sits one bin width
    /// above it.
    pub lower_bound: Decimal,
    pub count: u64,
    /// True when the bucket sits at or above break-even.
    pub is_profit: bool,
}

/// Current, longest and average win-run lengths over a trade sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinStreakSummary {
    /// The trailing run of profitable trades in the supplied order.
    pub current: u32,
    pub longest: u32,
    /// Mean run length over completed and trailing runs; zero when no trade
    /// has won.
    pub average: Decimal,
}

/// The final state of an equity-curve walk over a chronological trade
/// sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawdownSummary {
    /// The worst peak-to-trough decline seen anywhere in the walk.
    pub max_drawdown: Decimal,
    /// `max_drawdown` as a percentage of the peak; zero when the peak never
    /// rose above zero.
    pub max_drawdown_pct: Decimal,
    pub peak_equity: Decimal,
    pub current_equity: Decimal,
    /// How far below the peak the walk ended.
    pub current_drawdown: Decimal,
    pub max_consecutive_losses: u32,
    /// The single worst realized loss; zero when no trade lost money.
    pub biggest_loss: Decimal,
}

/// Which aspect of trading behaviour an insight talks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategory {
    Timing,
    Risk,
    Performance,
}

impl InsightCategory {
    /// Human-readable label for reports and messages.
    pub fn label(&self) -> &'static str {
        match self {
            InsightCategory::Timing => "timing",
            InsightCategory::Risk => "risk",
            InsightCategory::Performance => "performance",
        }
    }
}

/// How the reader should weigh an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightSeverity {
    Positive,
    Warning,
    Info,
}

impl InsightSeverity {
    /// Human-readable label for reports and messages.
    pub fn label(&self) -> &'static str {
        match self {
            InsightSeverity::Positive => "positive",
            InsightSeverity::Warning => "warning",
            InsightSeverity::Info => "info",
        }
    }
}

/// A single qualitative observation derived from the trade history.
///
/// The message carries the computed figures already formatted; rounding to
/// two decimals happens at formatting time only, never inside the
/// calculations that produced the figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub category: InsightCategory,
    pub severity: InsightSeverity,
    pub message: String,
}
