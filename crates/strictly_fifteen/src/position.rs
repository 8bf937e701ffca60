//! Board positions and orthogonal directions.

use super::types::{CELLS, SIDE};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A cell index on the board (0-15), row-major.
///
/// Positions can only be built through [`Position::from_index`], so every
/// value is in bounds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "usize", into = "usize")]
#[display("{}", _0)]
pub struct Position(usize);

/// Orthogonal step direction on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

impl Position {
    /// The bottom-right cell, where the blank sits when solved.
    pub const LAST: Position = Position(CELLS - 1);

    /// Creates a position from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELLS).then_some(Self(index))
    }

    /// Creates a position from an index the caller knows is in bounds.
    pub(crate) fn from_index_unchecked(index: usize) -> Self {
        debug_assert!(index < CELLS, "position {index} out of bounds");
        Self(index)
    }

    /// Creates a position from row and column.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        (row < SIDE && col < SIDE).then_some(Self(row * SIDE + col))
    }

    /// Converts position to board index (0-15).
    pub fn index(self) -> usize {
        self.0
    }

    /// Row counted from the top (0-3).
    pub fn row(self) -> usize {
        self.0 / SIDE
    }

    /// Column counted from the left (0-3).
    pub fn col(self) -> usize {
        self.0 % SIDE
    }

    /// Returns true if `other` shares a row or a column with this position
    /// and is exactly one step away.
    pub fn is_adjacent(self, other: Position) -> bool {
        (self.row() == other.row() && self.col().abs_diff(other.col()) == 1)
            || (self.col() == other.col() && self.row().abs_diff(other.row()) == 1)
    }

    /// Steps one cell in `direction`, or `None` at the board edge.
    pub fn step(self, direction: Direction) -> Option<Position> {
        let (row, col) = (self.row(), self.col());
        match direction {
            Direction::Up => row.checked_sub(1).and_then(|r| Self::from_row_col(r, col)),
            Direction::Down => Self::from_row_col(row + 1, col),
            Direction::Left => col.checked_sub(1).and_then(|c| Self::from_row_col(row, c)),
            Direction::Right => Self::from_row_col(row, col + 1),
        }
    }

    /// Iterates over the orthogonal neighbours of this position.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        Direction::iter().filter_map(move |direction| self.step(direction))
    }

    /// Iterates over every position in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELLS).map(Position)
    }
}

impl TryFrom<usize> for Position {
    type Error = String;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or_else(|| format!("Position {} out of bounds", index))
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(index: usize) -> Position {
        Position::from_index(index).unwrap()
    }

    #[test]
    fn test_from_index_bounds() {
        assert!(Position::from_index(0).is_some());
        assert!(Position::from_index(15).is_some());
        assert!(Position::from_index(16).is_none());
    }

    #[test]
    fn test_row_col() {
        assert_eq!((pos(0).row(), pos(0).col()), (0, 0));
        assert_eq!((pos(6).row(), pos(6).col()), (1, 2));
        assert_eq!((pos(15).row(), pos(15).col()), (3, 3));
    }

    #[test]
    fn test_adjacency_is_orthogonal_only() {
        assert!(pos(5).is_adjacent(pos(1)));
        assert!(pos(5).is_adjacent(pos(4)));
        assert!(pos(5).is_adjacent(pos(6)));
        assert!(pos(5).is_adjacent(pos(9)));
        assert!(!pos(5).is_adjacent(pos(0)));
        assert!(!pos(5).is_adjacent(pos(10)));
        assert!(!pos(5).is_adjacent(pos(5)));
    }

    #[test]
    fn test_adjacency_does_not_wrap_rows() {
        // 3 and 4 are consecutive indices on different rows
        assert!(!pos(3).is_adjacent(pos(4)));
        assert!(!pos(7).is_adjacent(pos(8)));
    }

    #[test]
    fn test_neighbors() {
        assert_eq!(pos(0).neighbors().count(), 2);
        assert_eq!(pos(1).neighbors().count(), 3);
        assert_eq!(pos(5).neighbors().count(), 4);
        assert!(pos(5).neighbors().all(|n| n.is_adjacent(pos(5))));
    }

    #[test]
    fn test_step_at_edges() {
        assert_eq!(pos(0).step(Direction::Up), None);
        assert_eq!(pos(0).step(Direction::Left), None);
        assert_eq!(pos(15).step(Direction::Down), None);
        assert_eq!(pos(15).step(Direction::Right), None);
        assert_eq!(pos(15).step(Direction::Up), Some(pos(11)));
    }

    #[test]
    fn test_serde_rejects_out_of_bounds() {
        assert!(serde_json::from_str::<Position>("16").is_err());
        assert_eq!(serde_json::from_str::<Position>("7").unwrap(), pos(7));
    }
}
