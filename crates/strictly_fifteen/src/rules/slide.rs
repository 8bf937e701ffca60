//! Slide adjudication.

use super::super::contracts::{LegalSlide, assert_invariants};
use super::super::Board;
use tracing::{debug, instrument};

/// Slides the tile at `clicked` into the blank if the two cells are
/// orthogonal neighbours.
///
/// An illegal click is a no-op, not an error: the board comes back
/// unchanged and the reason is logged at debug level.
#[instrument(skip(board), fields(blank = %board.blank()))]
pub fn try_move(board: &Board, clicked: usize) -> Board {
    let clicked = match LegalSlide::check(clicked, board) {
        Ok(pos) => pos,
        Err(reason) => {
            debug!(%reason, "Slide ignored");
            return *board;
        }
    };

    let mut next = *board;
    next.slide_unchecked(clicked);

    // Postcondition: invariants survive the swap
    assert_invariants(&next);

    debug!(from = %clicked, "Tile slid into blank");
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Tile};

    #[test]
    fn test_adjacent_click_swaps_with_blank() {
        let board = Board::solved();
        let next = try_move(&board, 14);
        assert_eq!(next.blank().index(), 14);
        assert_eq!(next.get(Position::LAST), Tile::Numbered(15));
        // Everything else untouched
        for i in 0..14 {
            let pos = Position::from_index(i).unwrap();
            assert_eq!(next.get(pos), board.get(pos));
        }
    }

    #[test]
    fn test_vertical_click_swaps_with_blank() {
        let next = try_move(&Board::solved(), 11);
        assert_eq!(next.blank().index(), 11);
        assert_eq!(next.get(Position::LAST), Tile::Numbered(12));
    }

    #[test]
    fn test_illegal_clicks_are_noops() {
        let board = Board::solved();
        for index in [0, 10, 13, 15, 16, 100] {
            assert_eq!(try_move(&board, index), board, "index {index}");
        }
    }

    #[test]
    fn test_slide_back_restores_board() {
        let board = Board::solved();
        let moved = try_move(&board, 14);
        assert_eq!(try_move(&moved, 15), board);
    }
}
