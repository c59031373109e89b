use crate::report::DistributionBin;
use core_types::Trade;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Buckets the realized P/L of closed trades into fixed-width histogram bins.
///
/// A value lands in the bin whose inclusive lower bound is
/// `floor(pl / bin_width) * bin_width`. The floor goes toward negative
/// infinity, so a small loss bins into the losing bucket below it, never into
/// the break-even bucket: -10 at width 50 lands in bin -50, not bin 0.
///
/// Bins come back sorted ascending by lower bound. Open trades carry no
/// realized P/L and are ignored; an empty or all-open trade list yields no
/// bins, as does a non-positive bin width.
pub fn profit_loss_distribution(trades: &[Trade], bin_width: Decimal) -> Vec<DistributionBin> {
    if bin_width <= Decimal::ZERO {
        tracing::warn!(%bin_width, "Non-positive histogram bin width, returning no bins");
        return Vec::new();
    }

    let mut counts: BTreeMap<Decimal, u64> = BTreeMap::new();
    for pl in trades.iter().filter_map(|trade| trade.realized_pl()) {
        let lower_bound = (pl / bin_width).floor() * bin_width;
        *counts.entry(lower_bound).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(lower_bound, count)| DistributionBin {
            lower_bound,
            count,
            is_profit: lower_bound >= Decimal::ZERO,
        })
        .collect()
}
