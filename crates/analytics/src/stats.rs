use crate::report::Stats;
use core_types::Trade;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// A possibly-partial statistics aggregate from an external source.
///
/// Field names follow the snapshot's camelCase schema. The two fields the
/// exporters disagree on are accepted under either name via explicit serde
/// aliases, rather than free-form key mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStats {
    #[serde(default)]
    pub total_trades: Option<u64>,
    /// Some exporters call this field `winningTrades`.
    #[serde(default, alias = "winningTrades")]
    pub profitable_trades: Option<u64>,
    #[serde(default)]
    pub losing_trades: Option<u64>,
    /// Some exporters call this field `totalPnl`.
    #[serde(default, alias = "totalPnl")]
    pub total_profit: Option<Decimal>,
    #[serde(default)]
    pub win_rate: Option<Decimal>,
    #[serde(default)]
    pub win_loss_ratio: Option<Decimal>,
}

/// Reconciles a possibly-partial aggregate into the canonical [`Stats`] shape.
///
/// Absent counts and totals fall back to zero; the two derived ratios fall
/// back to their formulas, with every division guarded:
///
/// - `win_rate`: the supplied value clamped into [0, 100], else
///   `profitable / total * 100` when the total is non-zero, else 0.
/// - `win_loss_ratio`: the supplied value, else `profitable / losing` when
///   losses exist, else the win count itself stands in for the ratio.
///
/// `None` in, `None` out. The input is only read, never mutated.
pub fn normalize_stats(raw: Option<&RawStats>) -> Option<Stats> {
    let raw = raw?;

    let total_trades = raw.total_trades.unwrap_or(0);
    let profitable_trades = raw.profitable_trades.unwrap_or(0);
    let losing_trades = raw.losing_trades.unwrap_or(0);

    let win_rate = match raw.win_rate {
        Some(rate) => rate.clamp(Decimal::ZERO, dec!(100)),
        None => win_rate_of(profitable_trades, total_trades),
    };
    let win_loss_ratio = match raw.win_loss_ratio {
        Some(ratio) => ratio,
        None => win_loss_ratio_of(profitable_trades, losing_trades),
    };

    Some(Stats {
        total_trades,
        profitable_trades,
        losing_trades,
        total_profit: raw.total_profit.unwrap_or(Decimal::ZERO),
        win_rate,
        win_loss_ratio,
    })
}

/// Derives the full canonical aggregate from the trade list itself.
///
/// Open and break-even trades count toward `total_trades` but toward neither
/// wins nor losses, so `total_trades >= profitable_trades + losing_trades`
/// holds by construction.
pub fn compute_stats(trades: &[Trade]) -> Stats {
    let mut profitable_trades = 0u64;
    let mut losing_trades = 0u64;
    let mut total_profit = Decimal::ZERO;

    for pl in trades.iter().filter_map(|trade| trade.realized_pl()) {
        total_profit += pl;
        if pl > Decimal::ZERO {
            profitable_trades += 1;
        } else if pl < Decimal::ZERO {
            losing_trades += 1;
        }
    }

    let total_trades = trades.len() as u64;
    Stats {
        total_trades,
        profitable_trades,
        losing_trades,
        total_profit,
        win_rate: win_rate_of(profitable_trades, total_trades),
        win_loss_ratio: win_loss_ratio_of(profitable_trades, losing_trades),
    }
}

fn win_rate_of(profitable: u64, total: u64) -> Decimal {
    if total > 0 {
        Decimal::from(profitable) / Decimal::from(total) * dec!(100)
    } else {
        Decimal::ZERO
    }
}

// A loss-free record reads as "N wins per loss", so the bare win count stands
// in for the ratio instead of a division by zero.
fn win_loss_ratio_of(profitable: u64, losing: u64) -> Decimal {
    if losing > 0 {
        Decimal::from(profitable) / Decimal::from(losing)
    } else {
        Decimal::from(profitable)
    }
}
