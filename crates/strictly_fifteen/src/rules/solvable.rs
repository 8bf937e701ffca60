//! Solvability parity for the 4x4 board.

use super::super::{Board, SIDE};
use tracing::{instrument, trace};

/// Counts pairs of numbered tiles that appear out of ascending order.
///
/// The blank is ignored.
#[instrument(skip(board))]
pub fn count_inversions(board: &Board) -> usize {
    let labels: Vec<u8> = board.tiles().iter().filter_map(|tile| tile.label()).collect();
    labels
        .iter()
        .enumerate()
        .map(|(i, &a)| labels[i + 1..].iter().filter(|&&b| a > b).count())
        .sum()
}

/// Checks if the board can be brought to the solved arrangement by slides.
///
/// The board width is even, so the blank's row matters: with the blank's
/// row counted from the top starting at 1, the board is solvable iff
/// `inversions + row` is even.
#[instrument(skip(board), fields(blank = %board.blank()))]
pub fn is_solvable(board: &Board) -> bool {
    let inversions = count_inversions(board);
    let blank_row = board.blank().row() + 1;

    // On an even-width board a vertical slide flips inversion parity, so
    // the blank's row enters the rule. Odd widths depend on inversions only.
    let solvable = if SIDE % 2 == 0 {
        (inversions + blank_row) % 2 == 0
    } else {
        inversions % 2 == 0
    };
    trace!(inversions, blank_row, solvable, "Checked solvability");
    solvable
}
