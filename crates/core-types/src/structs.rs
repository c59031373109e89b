use crate::enums::{Emotion, Mistake, TradeDirection, TradePattern, TradeStatus, TradingSession};
use crate::error::CoreError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The exit half of a trade, present only once the trade has been closed.
///
/// Folding the exit fields and the realized P/L into one optional struct makes
/// the journal's core invariant structural: a realized profit or loss exists
/// exactly when an exit exists, and neither can be recorded without the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeExit {
    pub exit_price: Decimal,
    pub exit_quantity: Decimal,
    pub exit_date: DateTime<Utc>,
    /// Settled profit (positive) or loss (negative) on the trade, as recorded
    /// by the journal. Taken as-is; it may include fees the prices do not show.
    pub realized_profit_loss: Decimal,
}

/// The trader's self-reported state of mind when the trade was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentalState {
    /// Self-rated focus on a 1-10 scale.
    pub focus: u8,
    pub emotion: Emotion,
}

/// A single journaled trade execution record.
///
/// Instances are transient: they are deserialized fresh from a snapshot on
/// every analytics invocation and never persisted by this workspace. The
/// trade store that produced the snapshot remains the owner of the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub symbol: String,
    pub direction: TradeDirection,
    pub entry_price: Decimal,
    pub entry_quantity: Decimal,
    pub entry_date: DateTime<Utc>,
    /// `None` while the trade is still open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit: Option<TradeExit>,
    /// Quantity traded, as the journal counts position size.
    pub shares: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mental_state: Option<MentalState>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mistakes: Vec<Mistake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<TradePattern>,
    pub session: TradingSession,
}

impl Trade {
    /// Creates an open trade with the required fields; the optional journal
    /// annotations start empty and can be attached with the `with_*` builders.
    pub fn open(
        symbol: impl Into<String>,
        direction: TradeDirection,
        entry_price: Decimal,
        entry_quantity: Decimal,
        entry_date: DateTime<Utc>,
        shares: Decimal,
        session: TradingSession,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            direction,
            entry_price,
            entry_quantity,
            entry_date,
            exit: None,
            shares,
            mental_state: None,
            mistakes: Vec::new(),
            pattern: None,
            session,
        }
    }

    /// Attaches the exit fill, closing the trade.
    pub fn with_exit(mut self, exit: TradeExit) -> Self {
        self.exit = Some(exit);
        self
    }

    pub fn with_mental_state(mut self, mental_state: MentalState) -> Self {
        self.mental_state = Some(mental_state);
        self
    }

    pub fn with_mistakes(mut self, mistakes: Vec<Mistake>) -> Self {
        self.mistakes = mistakes;
        self
    }

    pub fn with_pattern(mut self, pattern: TradePattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Lifecycle state, derived from the presence of the exit fill.
    pub fn status(&self) -> TradeStatus {
        if self.exit.is_some() {
            TradeStatus::Closed
        } else {
            TradeStatus::Open
        }
    }

    pub fn is_closed(&self) -> bool {
        self.exit.is_some()
    }

    /// The settled P/L, defined only for closed trades.
    pub fn realized_pl(&self) -> Option<Decimal> {
        self.exit.as_ref().map(|exit| exit.realized_profit_loss)
    }

    pub fn exit_date(&self) -> Option<DateTime<Utc>> {
        self.exit.as_ref().map(|exit| exit.exit_date)
    }

    /// How long the position was held. `None` while the trade is open.
    pub fn hold_time(&self) -> Option<chrono::Duration> {
        self.exit
            .as_ref()
            .map(|exit| exit.exit_date - self.entry_date)
    }

    /// Checks the record against the constraints the analytics relies on.
    ///
    /// Meant to be run once at the snapshot boundary, by whoever loaded the
    /// data, so the pure computations downstream never have to re-check.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.shares <= Decimal::ZERO {
            return Err(CoreError::InvalidInput(
                "shares".to_string(),
                format!("must be positive, got {}", self.shares),
            ));
        }
        if let Some(state) = &self.mental_state {
            if !(1..=10).contains(&state.focus) {
                return Err(CoreError::InvalidInput(
                    "mentalState.focus".to_string(),
                    format!("must be within 1-10, got {}", state.focus),
                ));
            }
        }
        if let Some(exit) = &self.exit {
            if exit.exit_date < self.entry_date {
                return Err(CoreError::ExitBeforeEntry {
                    symbol: self.symbol.clone(),
                    entry: self.entry_date.to_rfc3339(),
                    exit: exit.exit_date.to_rfc3339(),
                });
            }
        }
        Ok(())
    }
}
