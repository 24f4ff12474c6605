use thiserror::Error;

/// Errors surfaced by loading, configuration and session dispatch.
///
/// Everything past loading is recoverable: a refused event leaves the session
/// exactly as it was and the caller shows the message as a notice.
#[derive(Debug, Error)]
pub enum RangeError {
    #[error("could not read strategy data: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed strategy data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid frequencies for {hand} at {position}: {values:?}")]
    InvalidFrequency {
        hand: String,
        position: String,
        values: [f64; 3],
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("strategy data is unavailable: {0}")]
    DataUnavailable(String),

    #[error("no valid hands were entered")]
    NoValidHands,

    #[error("'{0}' is not a hand in the strategy table")]
    UnknownHand(String),

    #[error("{0} is already in the chart")]
    DuplicateHand(String),

    #[error("{0} is not in the chart")]
    HandNotCharted(String),

    #[error("the chart already holds the maximum of {max} hands")]
    SelectionFull { max: usize },

    #[error("generate a chart before starting practice")]
    EmptyPracticePool,

    #[error("'{event}' is not allowed while {state}")]
    InvalidTransition {
        event: &'static str,
        state: &'static str,
    },

    #[error("'{0}' is only available in the other view")]
    WrongView(&'static str),

    #[error("unknown action '{0}'")]
    UnknownAction(String),

    #[error("unknown position '{0}'")]
    UnknownPosition(String),
}

pub type Result<T> = std::result::Result<T, RangeError>;
