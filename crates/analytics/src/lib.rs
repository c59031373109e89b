//! # TradeLens Analytics Engine
//!
//! This crate turns a snapshot of journaled trade executions into derived
//! metrics: canonical statistics, a profit/loss histogram, win-streak
//! figures, a drawdown summary, and qualitative insights. It acts as the
//! "unbiased judge" of the journal.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** Every entry point is a synchronous function
//!   of its arguments. Nothing is cached or persisted, and identical inputs
//!   always produce identical outputs, so callers are free to memoize
//!   results keyed on the snapshot and parameters.
//! - **Absent data is not an error:** A trade missing an optional field
//!   drops out of the computations that need that field, and every division
//!   is guarded with a documented fallback. The entry points therefore
//!   return plain values rather than `Result`.
//!
//! ## Public API
//!
//! - [`normalize_stats`] / [`compute_stats`]: the canonical [`Stats`]
//!   aggregate, reconciled from a partial external one or derived from the
//!   trade list itself.
//! - [`profit_loss_distribution`]: fixed-width histogram of realized P/L.
//! - [`current_win_streak`] / [`win_streaks`]: trailing-run and summary
//!   streak figures.
//! - [`track_drawdown`]: equity-curve walk with peak and drawdown tracking.
//! - [`InsightEngine`]: ordered qualitative insights over the whole journal.

// Declare the modules that constitute this crate.
pub mod distribution;
pub mod drawdown;
pub mod insights;
pub mod report;
pub mod stats;
pub mod streak;

// Re-export the key components to create a clean, public-facing API.
pub use distribution::profit_loss_distribution;
pub use drawdown::track_drawdown;
pub use insights::InsightEngine;
pub use report::{
    DistributionBin, DrawdownSummary, Insight, InsightCategory, InsightSeverity, Stats,
    WinStreakSummary,
};
pub use stats::{compute_stats, normalize_stats, RawStats};
pub use streak::{current_win_streak, win_streaks};
