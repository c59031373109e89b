use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),

    #[error("Trade {symbol} closed before it was opened: exit {exit} precedes entry {entry}")]
    ExitBeforeEntry {
        symbol: String,
        entry: String,
        exit: String,
    },
}
