//! Errors used throughout the chess engine.
//!
//! `ChessErrors` is the single error type across the crate. Rules-engine
//! predicates (`is_legal_move`, `is_valid_castling`, ...) answer with plain
//! booleans; operations that can be refused or that consume external text
//! return `Result<_, ChessErrors>`.
//!
//! Every variant is a local, recoverable condition. Nothing in here indicates
//! a corrupted engine: a rejected request always leaves the game state exactly
//! as it was before the call.

use thiserror::Error;

use crate::game_state::chess_types::Move;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// The move failed the legality check. State is unchanged.
    #[error("illegal move: {0}")]
    IllegalMove(Move),

    /// Board-description text did not parse. The previously loaded position
    /// is kept.
    #[error("malformed position: {0}")]
    MalformedPosition(String),

    /// An AI was asked to move in a position with no legal moves
    /// (checkmate or stalemate upstream).
    #[error("no legal moves available")]
    NoLegalMoves,

    /// Puzzle lookup by id, or random selection over an empty difficulty filter.
    #[error("puzzle not found: {0}")]
    PuzzleNotFound(String),

    /// A square name such as `e4` could not be interpreted.
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    /// A move intent such as `e7e8q` could not be interpreted.
    #[error("invalid move text: {0}")]
    InvalidMoveText(String),

    /// `undo_last_move` was called with an empty history.
    #[error("no move to undo")]
    NothingToUndo,

    /// Configuration file or value rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
