/// Result type for board engine operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Errors that can occur while setting up or running a simulation.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// The run configuration is not usable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A card or lookup referenced a square label that is not on the board.
    #[error("unknown square: {0}")]
    UnknownSquare(String),
}
