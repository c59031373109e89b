use analytics::{
    DistributionBin, DrawdownSummary, Insight, InsightEngine, RawStats, Stats, WinStreakSummary,
    compute_stats, normalize_stats, profit_loss_distribution, track_drawdown, win_streaks,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{Table, presets::UTF8_FULL};
use configuration::AnalyticsSettings;
use core_types::Trade;
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the TradeLens analytics application.
fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Report(args) => handle_report(args)?,
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Performance analytics over an exported trade-journal snapshot.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a trade snapshot and print the full performance report.
    Report(ReportArgs),
}

#[derive(Parser)]
struct ReportArgs {
    /// Path to the exported trade snapshot (a JSON array of trade records).
    #[arg(long)]
    trades: PathBuf,

    /// Optional pre-computed stats JSON; derived from the snapshot when absent.
    #[arg(long)]
    stats: Option<PathBuf>,

    /// Configuration file to read analytics settings from.
    #[arg(long, default_value = "config.toml")]
    config: String,

    /// Overrides the configured starting capital.
    #[arg(long)]
    starting_capital: Option<Decimal>,

    /// Overrides the configured histogram bin width.
    #[arg(long)]
    bin_width: Option<Decimal>,

    /// Print the report as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

// ==============================================================================
// Report Command Logic
// ==============================================================================

/// Everything the `report` command computes, in one serializable bundle.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportPayload {
    stats: Stats,
    drawdown: DrawdownSummary,
    streaks: WinStreakSummary,
    distribution: Vec<DistributionBin>,
    insights: Vec<Insight>,
}

/// Handles the orchestration of the report command: load, compute, print.
fn handle_report(args: ReportArgs) -> Result<()> {
    let settings = resolve_settings(&args)?;
    let mut trades = load_trades(&args.trades)?;

    let stats = match &args.stats {
        Some(path) => {
            let raw = load_raw_stats(path)?;
            normalize_stats(Some(&raw)).context("stats file contained no usable aggregate")?
        }
        None => compute_stats(&trades),
    };

    // The walk-based metrics need chronological order, and the snapshot makes
    // no ordering promise; sorting ascending also makes the trailing streak
    // the run ending at the most recent trade.
    trades.sort_by_key(|trade| trade.entry_date);

    let payload = ReportPayload {
        drawdown: track_drawdown(&trades, settings.starting_capital),
        streaks: win_streaks(&trades),
        distribution: profit_loss_distribution(&trades, settings.histogram_bin_width),
        insights: InsightEngine::new().generate(&trades, &stats),
        stats,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    print_stats(&payload.stats);
    print_drawdown(&payload.drawdown);
    print_streaks(&payload.streaks);
    print_distribution(&payload.distribution, settings.histogram_bin_width);
    print_insights(&payload.insights);

    Ok(())
}

/// Resolves the analytics settings: config file first, CLI flags on top.
fn resolve_settings(args: &ReportArgs) -> Result<AnalyticsSettings> {
    let config = configuration::load_config_from(&args.config)
        .with_context(|| format!("failed to load configuration from {}", args.config))?;

    let mut settings = config.analytics;
    if let Some(capital) = args.starting_capital {
        settings.starting_capital = capital;
    }
    if let Some(width) = args.bin_width {
        settings.histogram_bin_width = width;
    }
    // CLI overrides go through the same validation as file values.
    settings.validate()?;
    Ok(settings)
}

/// Reads and validates the snapshot. The analytics downstream assume every
/// record passed validation here.
fn load_trades(path: &Path) -> Result<Vec<Trade>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read trade snapshot {}", path.display()))?;
    let trades: Vec<Trade> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse trade snapshot {}", path.display()))?;

    for trade in &trades {
        trade
            .validate()
            .with_context(|| format!("invalid trade record for {}", trade.symbol))?;
    }

    tracing::info!(count = trades.len(), "Loaded trade snapshot");
    Ok(trades)
}

fn load_raw_stats(path: &Path) -> Result<RawStats> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read stats file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse stats file {}", path.display()))
}

// ==============================================================================
// Table Rendering
// ==============================================================================

fn print_stats(stats: &Stats) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(["Metric", "Value"]);
    table.add_row(vec![
        "Total trades".to_string(),
        stats.total_trades.to_string(),
    ]);
    table.add_row(vec![
        "Profitable trades".to_string(),
        stats.profitable_trades.to_string(),
    ]);
    table.add_row(vec![
        "Losing trades".to_string(),
        stats.losing_trades.to_string(),
    ]);
    table.add_row(vec![
        "Total profit".to_string(),
        stats.total_profit.round_dp(2).to_string(),
    ]);
    table.add_row(vec![
        "Win rate".to_string(),
        format!("{}%", stats.win_rate.round_dp(2)),
    ]);
    table.add_row(vec![
        "Win/loss ratio".to_string(),
        stats.win_loss_ratio.round_dp(2).to_string(),
    ]);

    println!("\nPerformance");
    println!("{table}");
}

fn print_drawdown(summary: &DrawdownSummary) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(["Metric", "Value"]);
    table.add_row(vec![
        "Current equity".to_string(),
        summary.current_equity.round_dp(2).to_string(),
    ]);
    table.add_row(vec![
        "Peak equity".to_string(),
        summary.peak_equity.round_dp(2).to_string(),
    ]);
    table.add_row(vec![
        "Current drawdown".to_string(),
        summary.current_drawdown.round_dp(2).to_string(),
    ]);
    table.add_row(vec![
        "Max drawdown".to_string(),
        format!(
            "{} ({}%)",
            summary.max_drawdown.round_dp(2),
            summary.max_drawdown_pct.round_dp(2)
        ),
    ]);
    table.add_row(vec![
        "Max consecutive losses".to_string(),
        summary.max_consecutive_losses.to_string(),
    ]);
    table.add_row(vec![
        "Biggest loss".to_string(),
        summary.biggest_loss.round_dp(2).to_string(),
    ]);

    println!("\nDrawdown");
    println!("{table}");
}

fn print_streaks(streaks: &WinStreakSummary) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(["Streak", "Value"]);
    table.add_row(vec!["Current".to_string(), streaks.current.to_string()]);
    table.add_row(vec!["Longest".to_string(), streaks.longest.to_string()]);
    table.add_row(vec![
        "Average".to_string(),
        streaks.average.round_dp(2).to_string(),
    ]);

    println!("\nWin streaks");
    println!("{table}");
}

fn print_distribution(bins: &[DistributionBin], bin_width: Decimal) {
    println!("\nP/L distribution (bin width {bin_width})");
    if bins.is_empty() {
        println!("No closed trades to bin.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(["Range", "Side", "Trades"]);
    for bin in bins {
        table.add_row(vec![
            format!("[{}, {})", bin.lower_bound, bin.lower_bound + bin_width),
            if bin.is_profit { "profit" } else { "loss" }.to_string(),
            bin.count.to_string(),
        ]);
    }
    println!("{table}");
}

fn print_insights(insights: &[Insight]) {
    println!("\nInsights");
    if insights.is_empty() {
        println!("Nothing stood out in this snapshot.");
        return;
    }
    for insight in insights {
        println!(
            "  [{}/{}] {}",
            insight.category.label(),
            insight.severity.label(),
            insight.message
        );
    }
}
