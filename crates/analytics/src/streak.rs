use crate::report::WinStreakSummary;
use core_types::Trade;
use rust_decimal::Decimal;

/// Counts the trailing run of profitable trades in the supplied order.
///
/// The scan walks the slice exactly as given and never re-orders it: a
/// realized profit extends the run, anything else (a loss, a break-even
/// close, a still-open trade) resets it to zero, and the counter left
/// standing after the full scan is the answer. Callers wanting the
/// chronological current streak must pre-sort descending by date before
/// calling.
///
/// The scan is order-dependent by definition; it cannot be split across
/// partitions of a single sequence.
pub fn current_win_streak(trades: &[Trade]) -> u32 {
    let mut streak = 0u32;
    for trade in trades {
        match trade.realized_pl() {
            Some(pl) if pl > Decimal::ZERO => streak += 1,
            _ => streak = 0,
        }
    }
    streak
}

/// Summarizes every win run in the supplied order: the trailing run, the
/// longest run, and the mean run length.
///
/// `current` is exactly [`current_win_streak`] over the same slice. The two
/// figures answer different questions and are deliberately kept as separate
/// operations rather than folded into one definition of "streak".
pub fn win_streaks(trades: &[Trade]) -> WinStreakSummary {
    let mut runs: Vec<u32> = Vec::new();
    let mut streak = 0u32;

    for trade in trades {
        match trade.realized_pl() {
            Some(pl) if pl > Decimal::ZERO => streak += 1,
            _ => {
                if streak > 0 {
                    runs.push(streak);
                }
                streak = 0;
            }
        }
    }
    if streak > 0 {
        runs.push(streak);
    }

    let longest = runs.iter().copied().max().unwrap_or(0);
    let average = if runs.is_empty() {
        Decimal::ZERO
    } else {
        let total: u32 = runs.iter().sum();
        Decimal::from(total) / Decimal::from(runs.len())
    };

    WinStreakSummary {
        current: streak,
        longest,
        average,
    }
}
