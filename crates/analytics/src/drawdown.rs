use crate::report::DrawdownSummary;
use core_types::Trade;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Walks a chronologically ordered trade sequence and reports the worst
/// peak-to-trough decline of the resulting equity curve.
///
/// Only closed trades move equity; open positions contribute nothing until
/// they settle. Each step's drawdown depends on the running peak, so the walk
/// is inherently sequential and the input order is part of the contract.
pub fn track_drawdown(trades: &[Trade], starting_capital: Decimal) -> DrawdownSummary {
    let mut equity = starting_capital;
    let mut peak_equity = starting_capital;
    let mut max_drawdown = Decimal::ZERO;
    let mut consecutive_losses = 0u32;
    let mut max_consecutive_losses = 0u32;
    let mut biggest_loss = Decimal::ZERO;

    for pl in trades.iter().filter_map(|trade| trade.realized_pl()) {
        equity += pl;
        peak_equity = peak_equity.max(equity);

        let drawdown = peak_equity - equity;
        max_drawdown = max_drawdown.max(drawdown);

        if pl < Decimal::ZERO {
            consecutive_losses += 1;
            biggest_loss = biggest_loss.min(pl);
        } else {
            consecutive_losses = 0;
        }
        max_consecutive_losses = max_consecutive_losses.max(consecutive_losses);
    }

    let max_drawdown_pct = if peak_equity > Decimal::ZERO {
        max_drawdown / peak_equity * dec!(100)
    } else {
        Decimal::ZERO
    };

    DrawdownSummary {
        max_drawdown,
        max_drawdown_pct,
        peak_equity,
        current_equity: equity,
        current_drawdown: peak_equity - equity,
        max_consecutive_losses,
        biggest_loss,
    }
}
