//! Win detection for the 15-puzzle.

use super::super::{Board, Position, Tile};
use tracing::instrument;

/// Checks if the board is in canonical order: 1-15 ascending, blank last.
#[instrument(skip(board))]
pub fn is_solved(board: &Board) -> bool {
    board.blank() == Position::LAST
        && board
            .tiles()
            .iter()
            .enumerate()
            .all(|(index, tile)| match tile {
                Tile::Empty => index == Position::LAST.index(),
                Tile::Numbered(label) => usize::from(*label) == index + 1,
            })
}
