//! Slide rejection reasons.
//!
//! A rejected slide is not a failure for the caller: [`crate::try_move`]
//! turns it into a no-op. The reason is kept so it can be logged.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Why a clicked cell could not slide into the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum SlideError {
    /// The clicked index is not on the board.
    #[display("Index {} is outside the board", _0)]
    OutOfBounds(usize),

    /// The clicked cell is the blank itself.
    #[display("Position {} is the blank", _0)]
    BlankSelected(Position),

    /// The clicked cell does not touch the blank orthogonally.
    #[display("Position {} is not next to the blank at {}", clicked, blank)]
    NotAdjacent {
        /// The clicked cell.
        clicked: Position,
        /// Where the blank is.
        blank: Position,
    },
}

impl std::error::Error for SlideError {}
