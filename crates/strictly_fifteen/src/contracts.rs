//! Contract-based validation for slides.
//!
//! A slide's precondition is that the clicked cell is on the board, is not
//! the blank, and touches the blank orthogonally. The postcondition is that
//! the board invariants still hold.

use super::action::SlideError;
use super::invariants::{BoardInvariants, InvariantSet};
use super::position::Position;
use super::types::Board;
use tracing::{instrument, warn};

/// Precondition: the clicked cell is an orthogonal neighbour of the blank.
pub struct BlankNeighbor;

impl BlankNeighbor {
    /// Checks that `clicked` touches the blank.
    #[instrument(skip(board), fields(blank = %board.blank()))]
    pub fn check(clicked: Position, board: &Board) -> Result<(), SlideError> {
        let blank = board.blank();
        if clicked == blank {
            Err(SlideError::BlankSelected(clicked))
        } else if !clicked.is_adjacent(blank) {
            Err(SlideError::NotAdjacent { clicked, blank })
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a slide is legal if the index is on the board and
/// the cell touches the blank.
pub struct LegalSlide;

impl LegalSlide {
    /// Validates all preconditions, returning the resolved position.
    #[instrument(skip(board))]
    pub fn check(index: usize, board: &Board) -> Result<Position, SlideError> {
        let clicked = Position::from_index(index).ok_or(SlideError::OutOfBounds(index))?;
        BlankNeighbor::check(clicked, board)?;
        Ok(clicked)
    }
}

/// Asserts that the board invariants hold (panics on violation in debug builds).
#[instrument(skip(board))]
pub fn assert_invariants(board: &Board) {
    if cfg!(debug_assertions)
        && let Err(violations) = BoardInvariants::check_all(board.tiles())
    {
        warn!(?violations, "Board invariants violated");
        panic!("Board invariants violated: {:?}", violations);
    }
}
