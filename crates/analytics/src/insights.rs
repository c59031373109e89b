use crate::report::{Insight, InsightCategory, InsightSeverity, Stats};
use crate::streak::current_win_streak;
use chrono::{Datelike, Timelike};
use core_types::{Mistake, Trade, TradePattern, TradingSession};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::cmp::Ordering;
use std::collections::BTreeMap;

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// A stateless generator of qualitative observations about trading behaviour.
///
/// Each pass looks at the trade history from one angle (timing, risk,
/// performance) and either emits a single insight or stays silent. The pass
/// order is fixed, so identical inputs always produce the identical insight
/// sequence.
#[derive(Debug, Default)]
pub struct InsightEngine {}

impl InsightEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs every insight pass over the trade list and collects whatever they
    /// emit, in pass order.
    ///
    /// A pass that lacks the data it needs (an empty bucket, a missing
    /// optional field, a zero denominator) skips its emission instead of
    /// failing the run. An empty trade list yields an empty insight list.
    pub fn generate(&self, trades: &[Trade], stats: &Stats) -> Vec<Insight> {
        if trades.is_empty() {
            return Vec::new();
        }

        let passes = [
            self.best_entry_hour(trades),
            self.position_size_consistency(trades),
            self.win_rate_commentary(stats),
            self.hold_time_asymmetry(trades),
            self.best_weekday(trades),
            self.win_streak(trades),
            self.costliest_mistake(trades),
            self.focus_quality(trades),
            self.best_session(trades),
            self.pattern_edge(trades),
        ];

        let insights: Vec<Insight> = passes.into_iter().flatten().collect();
        tracing::debug!(count = insights.len(), "Generated insights");
        insights
    }

    /// Pass 1: the entry hour whose closed trades average the best P/L.
    fn best_entry_hour(&self, trades: &[Trade]) -> Option<Insight> {
        #[derive(Default)]
        struct HourBucket {
            wins: u64,
            losses: u64,
            total_pl: Decimal,
        }

        let mut hours: BTreeMap<u32, HourBucket> = BTreeMap::new();
        for trade in trades {
            let Some(pl) = trade.realized_pl() else { continue };
            let bucket = hours.entry(trade.entry_date.hour()).or_default();
            if pl > Decimal::ZERO {
                bucket.wins += 1;
            } else {
                bucket.losses += 1;
            }
            bucket.total_pl += pl;
        }

        // Rank descending by average P/L. The sort is stable and the buckets
        // arrive in ascending hour order, so the earliest hour wins ties.
        let mut ranked: Vec<(u32, Decimal, Decimal)> = hours
            .into_iter()
            .map(|(hour, bucket)| {
                let decided = Decimal::from(bucket.wins + bucket.losses);
                let win_rate = Decimal::from(bucket.wins) / decided * dec!(100);
                (hour, bucket.total_pl / decided, win_rate)
            })
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let (hour, avg_pl, win_rate) = *ranked.first()?;
        if avg_pl <= Decimal::ZERO {
            tracing::debug!("Best entry hour averages a loss, skipping timing insight");
            return None;
        }
        Some(Insight {
            category: InsightCategory::Timing,
            severity: InsightSeverity::Positive,
            message: format!(
                "Your most profitable entries happen around {:02}:00, averaging {} per trade with a {}% win rate.",
                hour,
                avg_pl.round_dp(2),
                win_rate.round_dp(2)
            ),
        })
    }

    /// Pass 2: flags erratic position sizing.
    ///
    /// Compares the population standard deviation of `shares` against half
    /// the mean; a wider spread than that suggests sizing by feel.
    fn position_size_consistency(&self, trades: &[Trade]) -> Option<Insight> {
        let n = Decimal::from(trades.len());
        let mean = trades.iter().map(|trade| trade.shares).sum::<Decimal>() / n;
        let variance = trades
            .iter()
            .map(|trade| (trade.shares - mean) * (trade.shares - mean))
            .sum::<Decimal>()
            / n;
        let std_dev = variance.sqrt()?;

        if std_dev <= mean * dec!(0.5) {
            return None;
        }
        Some(Insight {
            category: InsightCategory::Risk,
            severity: InsightSeverity::Warning,
            message: format!(
                "Your position sizes swing widely ({} shares stdev against a {} share average). Standardizing size would make results easier to read.",
                std_dev.round_dp(2),
                mean.round_dp(2)
            ),
        })
    }

    /// Pass 3: mutually exclusive commentary on the overall win rate.
    fn win_rate_commentary(&self, stats: &Stats) -> Option<Insight> {
        if stats.win_rate < dec!(50) {
            Some(Insight {
                category: InsightCategory::Performance,
                severity: InsightSeverity::Warning,
                message: format!(
                    "Your win rate of {}% sits below 50%. Tighten entry criteria before sizing up.",
                    stats.win_rate.round_dp(2)
                ),
            })
        } else if stats.win_rate > dec!(65) {
            Some(Insight {
                category: InsightCategory::Performance,
                severity: InsightSeverity::Positive,
                message: format!(
                    "Strong {}% win rate. Your trade selection is working.",
                    stats.win_rate.round_dp(2)
                ),
            })
        } else {
            None
        }
    }

    /// Pass 4: compares how long winners and losers stay open.
    fn hold_time_asymmetry(&self, trades: &[Trade]) -> Option<Insight> {
        let mut winner_minutes: Vec<i64> = Vec::new();
        let mut loser_minutes: Vec<i64> = Vec::new();
        for trade in trades {
            let Some(exit) = &trade.exit else { continue };
            let minutes = (exit.exit_date - trade.entry_date).num_minutes();
            if exit.realized_profit_loss > Decimal::ZERO {
                winner_minutes.push(minutes);
            } else {
                loser_minutes.push(minutes);
            }
        }
        if winner_minutes.is_empty() || loser_minutes.is_empty() {
            tracing::debug!("Hold-time comparison needs both winners and losers, skipping");
            return None;
        }

        let winner_avg = mean_minutes(&winner_minutes);
        let loser_avg = mean_minutes(&loser_minutes);
        if loser_avg <= winner_avg * dec!(1.5) {
            return None;
        }
        Some(Insight {
            category: InsightCategory::Timing,
            severity: InsightSeverity::Warning,
            message: format!(
                "You hold losing trades for {} minutes on average but winners for only {}. Cutting losers sooner would narrow the gap.",
                loser_avg.round_dp(2),
                winner_avg.round_dp(2)
            ),
        })
    }

    /// Pass 5: the weekday whose closed trades average the best P/L.
    fn best_weekday(&self, trades: &[Trade]) -> Option<Insight> {
        #[derive(Default)]
        struct DayBucket {
            closed: u64,
            total_pl: Decimal,
        }

        // Keyed Sun=0 .. Sat=6.
        let mut days: BTreeMap<u32, DayBucket> = BTreeMap::new();
        for trade in trades {
            let Some(pl) = trade.realized_pl() else { continue };
            let bucket = days
                .entry(trade.entry_date.weekday().num_days_from_sunday())
                .or_default();
            bucket.closed += 1;
            bucket.total_pl += pl;
        }

        let mut ranked: Vec<(u32, Decimal)> = days
            .into_iter()
            .map(|(day, bucket)| (day, bucket.total_pl / Decimal::from(bucket.closed)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let (day, avg_pl) = *ranked.first()?;
        Some(Insight {
            category: InsightCategory::Timing,
            severity: InsightSeverity::Info,
            message: format!(
                "{} is your strongest day, averaging {} per closed trade.",
                WEEKDAY_NAMES[day as usize],
                avg_pl.round_dp(2)
            ),
        })
    }

    /// Pass 6: celebrates a live run of profitable trades.
    fn win_streak(&self, trades: &[Trade]) -> Option<Insight> {
        let streak = current_win_streak(trades);
        if streak <= 3 {
            return None;
        }
        Some(Insight {
            category: InsightCategory::Performance,
            severity: InsightSeverity::Positive,
            message: format!(
                "You are riding a {}-trade winning streak. Protect it by sticking to the plan.",
                streak
            ),
        })
    }

    /// Pass 7: the mistake tag that has cost the most money.
    fn costliest_mistake(&self, trades: &[Trade]) -> Option<Insight> {
        #[derive(Default)]
        struct MistakeBucket {
            occurrences: u64,
            loss: Decimal,
        }

        let mut buckets: BTreeMap<Mistake, MistakeBucket> = BTreeMap::new();
        for trade in trades {
            let Some(pl) = trade.realized_pl() else { continue };
            for mistake in &trade.mistakes {
                let bucket = buckets.entry(*mistake).or_default();
                bucket.occurrences += 1;
                if pl < Decimal::ZERO {
                    bucket.loss += pl;
                }
            }
        }

        // The ascending tag walk keeps the first-declared tag on ties.
        let mut costliest: Option<(Mistake, u64, Decimal)> = None;
        for (mistake, bucket) in buckets {
            if bucket.loss >= Decimal::ZERO {
                continue; // tag never lost money
            }
            match costliest {
                Some((_, _, worst)) if bucket.loss >= worst => {}
                _ => costliest = Some((mistake, bucket.occurrences, bucket.loss)),
            }
        }

        let (mistake, occurrences, loss) = costliest?;
        Some(Insight {
            category: InsightCategory::Risk,
            severity: InsightSeverity::Warning,
            message: format!(
                "'{}' is your costliest mistake: tagged on {} closed trades for a total loss of {}.",
                mistake.label(),
                occurrences,
                loss.abs().round_dp(2)
            ),
        })
    }

    /// Pass 8: does recorded focus translate into better results?
    fn focus_quality(&self, trades: &[Trade]) -> Option<Insight> {
        let mut high_total = Decimal::ZERO;
        let mut high_count = 0u64;
        let mut low_total = Decimal::ZERO;
        let mut low_count = 0u64;

        for trade in trades {
            let (Some(pl), Some(state)) = (trade.realized_pl(), trade.mental_state) else {
                continue;
            };
            if state.focus >= 7 {
                high_total += pl;
                high_count += 1;
            } else {
                low_total += pl;
                low_count += 1;
            }
        }
        if high_count == 0 || low_count == 0 {
            tracing::debug!("Focus comparison needs trades on both sides of the split, skipping");
            return None;
        }

        let high_avg = high_total / Decimal::from(high_count);
        let low_avg = low_total / Decimal::from(low_count);
        match high_avg.cmp(&low_avg) {
            Ordering::Greater => Some(Insight {
                category: InsightCategory::Performance,
                severity: InsightSeverity::Positive,
                message: format!(
                    "Trades taken at focus 7 or higher average {} against {} otherwise. Your preparation shows up in the results.",
                    high_avg.round_dp(2),
                    low_avg.round_dp(2)
                ),
            }),
            Ordering::Less => Some(Insight {
                category: InsightCategory::Performance,
                severity: InsightSeverity::Warning,
                message: format!(
                    "Trades you rated focus 7 or higher average {} but lower-focus ones average {}. Your self-rated focus is not translating into results.",
                    high_avg.round_dp(2),
                    low_avg.round_dp(2)
                ),
            }),
            Ordering::Equal => None,
        }
    }

    /// Pass 9: the session whose closed trades average the best P/L, when
    /// there is another session to compare against.
    fn best_session(&self, trades: &[Trade]) -> Option<Insight> {
        #[derive(Default)]
        struct SessionBucket {
            closed: u64,
            total_pl: Decimal,
        }

        let mut sessions: BTreeMap<TradingSession, SessionBucket> = BTreeMap::new();
        for trade in trades {
            let Some(pl) = trade.realized_pl() else { continue };
            let bucket = sessions.entry(trade.session).or_default();
            bucket.closed += 1;
            bucket.total_pl += pl;
        }
        if sessions.len() < 2 {
            tracing::debug!("Only one session has closed trades, skipping session comparison");
            return None;
        }

        let mut ranked: Vec<(TradingSession, Decimal)> = sessions
            .into_iter()
            .map(|(session, bucket)| (session, bucket.total_pl / Decimal::from(bucket.closed)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let (session, avg_pl) = *ranked.first()?;
        Some(Insight {
            category: InsightCategory::Timing,
            severity: InsightSeverity::Info,
            message: format!(
                "The {} session is where you perform best, averaging {} per closed trade.",
                session.label(),
                avg_pl.round_dp(2)
            ),
        })
    }

    /// Pass 10: a setup pattern with a demonstrated positive edge.
    fn pattern_edge(&self, trades: &[Trade]) -> Option<Insight> {
        #[derive(Default)]
        struct PatternBucket {
            closed: u64,
            total_pl: Decimal,
        }

        let mut patterns: BTreeMap<TradePattern, PatternBucket> = BTreeMap::new();
        for trade in trades {
            let (Some(pl), Some(pattern)) = (trade.realized_pl(), trade.pattern) else {
                continue;
            };
            let bucket = patterns.entry(pattern).or_default();
            bucket.closed += 1;
            bucket.total_pl += pl;
        }

        let mut ranked: Vec<(TradePattern, Decimal, u64)> = patterns
            .into_iter()
            .map(|(pattern, bucket)| {
                (
                    pattern,
                    bucket.total_pl / Decimal::from(bucket.closed),
                    bucket.closed,
                )
            })
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let (pattern, avg_pl, closed) = *ranked.first()?;
        if avg_pl <= Decimal::ZERO || closed < 3 {
            return None;
        }
        Some(Insight {
            category: InsightCategory::Performance,
            severity: InsightSeverity::Positive,
            message: format!(
                "Your {} setups carry a real edge: {} average P/L across {} closed trades.",
                pattern.label(),
                avg_pl.round_dp(2),
                closed
            ),
        })
    }
}

fn mean_minutes(samples: &[i64]) -> Decimal {
    let total: i64 = samples.iter().sum();
    Decimal::from(total) / Decimal::from(samples.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::compute_stats;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use core_types::{Emotion, MentalState, TradeDirection, TradeExit};

    // 2024-03-04 is a Monday.
    fn entry_at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 4, hour, 0, 0).unwrap()
    }

    fn closed(pl: Decimal, entry: DateTime<Utc>, minutes_held: i64) -> Trade {
        Trade::open(
            "AAPL",
            TradeDirection::Long,
            dec!(100),
            dec!(100),
            entry,
            dec!(100),
            TradingSession::Regular,
        )
        .with_exit(TradeExit {
            exit_price: dec!(101),
            exit_quantity: dec!(100),
            exit_date: entry + Duration::minutes(minutes_held),
            realized_profit_loss: pl,
        })
    }

    fn neutral_stats() -> Stats {
        // Win rate between the two commentary thresholds keeps pass 3 quiet.
        Stats {
            total_trades: 10,
            profitable_trades: 6,
            losing_trades: 4,
            total_profit: dec!(100),
            win_rate: dec!(60),
            win_loss_ratio: dec!(1.5),
        }
    }

    fn find(
        insights: &[Insight],
        category: InsightCategory,
        severity: InsightSeverity,
    ) -> Option<&Insight> {
        insights
            .iter()
            .find(|i| i.category == category && i.severity == severity)
    }

    #[test]
    fn empty_trade_list_yields_no_insights() {
        let engine = InsightEngine::new();
        assert!(engine.generate(&[], &neutral_stats()).is_empty());
    }

    #[test]
    fn names_the_most_profitable_entry_hour() {
        // Hour 10 averages +50, hour 14 averages -20.
        let trades = vec![
            closed(dec!(60), entry_at(10), 60),
            closed(dec!(40), entry_at(10), 60),
            closed(dec!(-20), entry_at(14), 60),
        ];

        let insights = InsightEngine::new().generate(&trades, &neutral_stats());
        let timing = find(&insights, InsightCategory::Timing, InsightSeverity::Positive)
            .expect("hourly insight");
        assert!(timing.message.contains("10:00"), "{}", timing.message);
        assert!(timing.message.contains("50"), "{}", timing.message);
    }

    #[test]
    fn stays_silent_when_every_hour_loses() {
        let trades = vec![
            closed(dec!(-10), entry_at(10), 60),
            closed(dec!(-30), entry_at(14), 60),
        ];

        let insights = InsightEngine::new().generate(&trades, &neutral_stats());
        assert!(find(&insights, InsightCategory::Timing, InsightSeverity::Positive).is_none());
    }

    #[test]
    fn flags_erratic_position_sizing() {
        let mut small = closed(dec!(10), entry_at(10), 60);
        small.shares = dec!(10);
        let mut large = closed(dec!(10), entry_at(10), 60);
        large.shares = dec!(1000);

        let insights = InsightEngine::new().generate(&[small, large], &neutral_stats());
        let risk =
            find(&insights, InsightCategory::Risk, InsightSeverity::Warning).expect("size warning");
        assert!(risk.message.contains("position sizes"), "{}", risk.message);
    }

    #[test]
    fn consistent_sizing_stays_silent() {
        let trades = vec![
            closed(dec!(10), entry_at(10), 60),
            closed(dec!(20), entry_at(11), 60),
        ];

        let insights = InsightEngine::new().generate(&trades, &neutral_stats());
        assert!(find(&insights, InsightCategory::Risk, InsightSeverity::Warning).is_none());
    }

    #[test]
    fn win_rate_commentary_is_mutually_exclusive() {
        let engine = InsightEngine::new();
        let trades = vec![closed(dec!(10), entry_at(10), 60)];

        let mut low = neutral_stats();
        low.win_rate = dec!(40);
        let warnings = engine.generate(&trades, &low);
        assert!(
            find(&warnings, InsightCategory::Performance, InsightSeverity::Warning).is_some()
        );
        assert!(
            find(&warnings, InsightCategory::Performance, InsightSeverity::Positive).is_none()
        );

        let mut high = neutral_stats();
        high.win_rate = dec!(72);
        let praise = engine.generate(&trades, &high);
        assert!(
            find(&praise, InsightCategory::Performance, InsightSeverity::Positive).is_some()
        );

        let neither = engine.generate(&trades, &neutral_stats());
        assert!(
            find(&neither, InsightCategory::Performance, InsightSeverity::Warning).is_none()
        );
        assert!(
            find(&neither, InsightCategory::Performance, InsightSeverity::Positive).is_none()
        );
    }

    #[test]
    fn warns_when_losers_are_held_too_long() {
        let trades = vec![
            closed(dec!(50), entry_at(10), 60),
            closed(dec!(-50), entry_at(11), 200),
        ];

        let insights = InsightEngine::new().generate(&trades, &neutral_stats());
        let warning = find(&insights, InsightCategory::Timing, InsightSeverity::Warning)
            .expect("hold-time warning");
        assert!(warning.message.contains("200"), "{}", warning.message);
        assert!(warning.message.contains("60"), "{}", warning.message);
    }

    #[test]
    fn hold_time_pass_needs_both_groups() {
        // Winners only: no comparison possible, and 90 < 1.5x would not
        // matter anyway.
        let trades = vec![closed(dec!(10), entry_at(10), 600)];
        let insights = InsightEngine::new().generate(&trades, &neutral_stats());
        assert!(find(&insights, InsightCategory::Timing, InsightSeverity::Warning).is_none());
    }

    #[test]
    fn names_the_strongest_weekday() {
        // 2024-03-04 is a Monday; 2024-03-08 is a Friday.
        let monday = Utc.with_ymd_and_hms(2024, 3, 4, 10, 0, 0).unwrap();
        let friday = Utc.with_ymd_and_hms(2024, 3, 8, 10, 0, 0).unwrap();
        let trades = vec![
            closed(dec!(-10), monday, 60),
            closed(dec!(80), friday, 60),
        ];

        let insights = InsightEngine::new().generate(&trades, &neutral_stats());
        let info = find(&insights, InsightCategory::Timing, InsightSeverity::Info)
            .expect("weekday insight");
        assert!(info.message.starts_with("Friday"), "{}", info.message);
    }

    #[test]
    fn celebrates_streaks_longer_than_three() {
        let wins: Vec<Trade> = (0..4).map(|_| closed(dec!(10), entry_at(10), 60)).collect();
        let insights = InsightEngine::new().generate(&wins, &neutral_stats());
        let streak = find(&insights, InsightCategory::Performance, InsightSeverity::Positive)
            .expect("streak insight");
        assert!(streak.message.contains("4-trade"), "{}", streak.message);

        let three: Vec<Trade> = (0..3).map(|_| closed(dec!(10), entry_at(10), 60)).collect();
        let quiet = InsightEngine::new().generate(&three, &neutral_stats());
        assert!(
            find(&quiet, InsightCategory::Performance, InsightSeverity::Positive).is_none()
        );
    }

    #[test]
    fn names_the_costliest_mistake() {
        let mut cheap = closed(dec!(-20), entry_at(10), 60);
        cheap.mistakes = vec![Mistake::EarlyExit];
        let mut dear = closed(dec!(-120), entry_at(11), 60);
        dear.mistakes = vec![Mistake::MovedStop];
        let mut dear_again = closed(dec!(-30), entry_at(12), 60);
        dear_again.mistakes = vec![Mistake::MovedStop];

        let insights =
            InsightEngine::new().generate(&[cheap, dear, dear_again], &neutral_stats());
        let warning = find(&insights, InsightCategory::Risk, InsightSeverity::Warning)
            .expect("mistake warning");
        assert!(warning.message.contains("moved stop"), "{}", warning.message);
        assert!(warning.message.contains("150"), "{}", warning.message);
        assert!(warning.message.contains("2 closed trades"), "{}", warning.message);
    }

    #[test]
    fn mistakes_on_winners_alone_stay_silent() {
        let mut winner = closed(dec!(40), entry_at(10), 60);
        winner.mistakes = vec![Mistake::ChasedEntry];

        let insights = InsightEngine::new().generate(&[winner], &neutral_stats());
        assert!(find(&insights, InsightCategory::Risk, InsightSeverity::Warning).is_none());
    }

    #[test]
    fn compares_focus_groups_in_both_directions() {
        let focused_win = |pl| {
            let mut t = closed(pl, entry_at(10), 60);
            t.mental_state = Some(MentalState {
                focus: 8,
                emotion: Emotion::Calm,
            });
            t
        };
        let distracted = |pl| {
            let mut t = closed(pl, entry_at(11), 60);
            t.mental_state = Some(MentalState {
                focus: 3,
                emotion: Emotion::Anxious,
            });
            t
        };

        let better = vec![focused_win(dec!(50)), distracted(dec!(-20))];
        let insights = InsightEngine::new().generate(&better, &neutral_stats());
        let praise = find(&insights, InsightCategory::Performance, InsightSeverity::Positive)
            .expect("focus commendation");
        assert!(praise.message.contains("focus 7"), "{}", praise.message);

        let worse = vec![focused_win(dec!(-20)), distracted(dec!(50))];
        let insights = InsightEngine::new().generate(&worse, &neutral_stats());
        let warning = find(&insights, InsightCategory::Performance, InsightSeverity::Warning)
            .expect("focus warning");
        assert!(warning.message.contains("not translating"), "{}", warning.message);
    }

    #[test]
    fn session_comparison_needs_contrast() {
        let regular = closed(dec!(30), entry_at(10), 60);
        let insights = InsightEngine::new().generate(&[regular.clone()], &neutral_stats());
        assert!(
            find(&insights, InsightCategory::Timing, InsightSeverity::Info)
                .map(|i| !i.message.contains("session"))
                .unwrap_or(true)
        );

        let mut after_hours = closed(dec!(-10), entry_at(17), 60);
        after_hours.session = TradingSession::AfterHours;
        let insights = InsightEngine::new().generate(&[regular, after_hours], &neutral_stats());
        let session_insight = insights
            .iter()
            .find(|i| i.message.contains("session"))
            .expect("session insight");
        assert!(
            session_insight.message.contains("regular hours"),
            "{}",
            session_insight.message
        );
    }

    #[test]
    fn pattern_edge_needs_three_closed_trades_and_a_positive_average() {
        let breakout = |pl| {
            let mut t = closed(pl, entry_at(10), 60);
            t.pattern = Some(TradePattern::Breakout);
            t
        };

        let two = vec![breakout(dec!(50)), breakout(dec!(60))];
        let insights = InsightEngine::new().generate(&two, &neutral_stats());
        assert!(!insights.iter().any(|i| i.message.contains("setups")));

        let three = vec![breakout(dec!(50)), breakout(dec!(60)), breakout(dec!(40))];
        let insights = InsightEngine::new().generate(&three, &neutral_stats());
        let edge = insights
            .iter()
            .find(|i| i.message.contains("breakout setups"))
            .expect("pattern insight");
        assert_eq!(edge.severity, InsightSeverity::Positive);

        let losing = vec![breakout(dec!(-5)), breakout(dec!(-5)), breakout(dec!(-5))];
        let insights = InsightEngine::new().generate(&losing, &neutral_stats());
        assert!(!insights.iter().any(|i| i.message.contains("setups")));
    }

    #[test]
    fn passes_emit_in_a_fixed_order() {
        use InsightCategory::*;
        use InsightSeverity::*;

        // Three early losers then six trailing winners, built to trip every
        // pass at once.
        let mut trades: Vec<Trade> = Vec::new();
        for i in 0..3 {
            let mut t = closed(dec!(-50), entry_at(14) + Duration::days(i), 200);
            t.shares = dec!(1000);
            t.session = TradingSession::AfterHours;
            t.mistakes = vec![Mistake::MovedStop];
            t.mental_state = Some(MentalState {
                focus: 3,
                emotion: Emotion::Frustrated,
            });
            trades.push(t);
        }
        for i in 0..6 {
            let mut t = closed(dec!(100), entry_at(10) + Duration::days(i), 60);
            t.shares = dec!(100);
            t.pattern = Some(TradePattern::Breakout);
            t.mental_state = Some(MentalState {
                focus: 9,
                emotion: Emotion::Confident,
            });
            trades.push(t);
        }

        let stats = compute_stats(&trades);
        let insights = InsightEngine::new().generate(&trades, &stats);

        let emitted: Vec<(InsightCategory, InsightSeverity)> = insights
            .iter()
            .map(|i| (i.category, i.severity))
            .collect();
        assert_eq!(
            emitted,
            vec![
                (Timing, Positive),      // best entry hour
                (Risk, Warning),         // position sizing
                (Performance, Positive), // win-rate commendation (66.67%)
                (Timing, Warning),       // losers held too long
                (Timing, Info),          // strongest weekday
                (Performance, Positive), // six-trade streak
                (Risk, Warning),         // costliest mistake
                (Performance, Positive), // focus pays off
                (Timing, Info),          // best session
                (Performance, Positive), // breakout edge
            ]
        );

        // Identical immutable input must reproduce the identical output.
        assert_eq!(insights, InsightEngine::new().generate(&trades, &stats));
    }
}
