//! Error types for the engine core.

use thiserror::Error;

/// Errors surfaced by position setup and move application.
#[derive(Error, Debug)]
pub enum EngineError {
    /// FEN string rejected (wrong field count, rank overflow, bad piece char).
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A UCI move string that does not match any legal move.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// A square name outside a1..h8.
    #[error("invalid square: {0}")]
    InvalidSquare(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
