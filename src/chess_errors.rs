//! Errors used by the outer layers of the crate.
//!
//! Search itself is total and never fails: a position without legal moves is
//! reported as `None`, not as an error. `ChessErrors` covers the code around
//! the search instead: parsing FEN and move text, configuring engines, and
//! validating engine output in the match harness.

use std::error::Error;
use std::fmt;

/// Unified error type for position setup, move parsing and engine plumbing.
///
/// Parsing variants carry the offending input so callers can show it back to
/// the user. `EngineReturnedIllegalMove` signals a bug in an engine rather
/// than bad input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// The rules library rejected a FEN string.
    ///
    /// Payload: (fen, reason)
    InvalidFen(String, String),

    /// A move string was not four or five characters of long algebraic
    /// notation (for example `e2e4` or `e7e8q`).
    InvalidMoveText(String),

    /// A well-formed move string names a move that is not legal in the
    /// current position.
    IllegalMove(String),

    /// An engine produced a move that is not in the legal-move list.
    EngineReturnedIllegalMove(String),

    /// A configuration option had an unknown name or an unparsable value.
    ///
    /// Payload: (name, value)
    InvalidOption(String, String),

    /// A move was requested while the game is already over.
    GameAlreadyOver,

    /// The human tried to move while it is the engine's turn.
    NotPlayersTurn,
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidFen(fen, reason) => write!(f, "invalid FEN '{fen}': {reason}"),
            ChessErrors::InvalidMoveText(text) => {
                write!(f, "invalid long algebraic move: '{text}'")
            }
            ChessErrors::IllegalMove(text) => write!(f, "illegal move in this position: {text}"),
            ChessErrors::EngineReturnedIllegalMove(text) => {
                write!(f, "engine returned illegal move: {text}")
            }
            ChessErrors::InvalidOption(name, value) => {
                write!(f, "invalid option {name}={value}")
            }
            ChessErrors::GameAlreadyOver => write!(f, "the game is already over"),
            ChessErrors::NotPlayersTurn => write!(f, "it is not the player's turn"),
        }
    }
}

impl Error for ChessErrors {}
