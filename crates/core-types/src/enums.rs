use serde::{Deserialize, Serialize};

/// Which way a trade was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeDirection {
    Long,
    Short,
}

/// Lifecycle state of a trade. Derived from the presence of the exit fill,
/// never stored independently, so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeStatus {
    Open,
    Closed,
}

/// The emotional state the trader recorded alongside a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Calm,
    Confident,
    Anxious,
    Fearful,
    Greedy,
    Frustrated,
    Neutral,
}

/// A mistake tag attached to a trade by the trader.
///
/// Kept as a closed enum rather than free-form strings so that downstream
/// aggregation never has to guess at spellings or casings of the same tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mistake {
    ChasedEntry,
    OversizedPosition,
    MovedStop,
    NoStopLoss,
    EarlyExit,
    LateExit,
    RevengeTrade,
    FomoEntry,
}

impl Mistake {
    /// Human-readable label for reports and messages.
    pub fn label(&self) -> &'static str {
        match self {
            Mistake::ChasedEntry => "chased entry",
            Mistake::OversizedPosition => "oversized position",
            Mistake::MovedStop => "moved stop",
            Mistake::NoStopLoss => "no stop loss",
            Mistake::EarlyExit => "early exit",
            Mistake::LateExit => "late exit",
            Mistake::RevengeTrade => "revenge trade",
            Mistake::FomoEntry => "FOMO entry",
        }
    }
}

/// The setup the trader classified the trade under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradePattern {
    Breakout,
    Reversal,
    Continuation,
    Range,
    News,
}

impl TradePattern {
    /// Human-readable label for reports and messages.
    pub fn label(&self) -> &'static str {
        match self {
            TradePattern::Breakout => "breakout",
            TradePattern::Reversal => "reversal",
            TradePattern::Continuation => "continuation",
            TradePattern::Range => "range",
            TradePattern::News => "news",
        }
    }
}

/// The market session a trade was entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradingSession {
    PreMarket,
    Regular,
    AfterHours,
    Overnight,
}

impl TradingSession {
    /// Human-readable label for reports and messages.
    pub fn label(&self) -> &'static str {
        match self {
            TradingSession::PreMarket => "pre-market",
            TradingSession::Regular => "regular hours",
            TradingSession::AfterHours => "after-hours",
            TradingSession::Overnight => "overnight",
        }
    }
}
