//! Core domain types for the 15-puzzle.

use super::contracts::assert_invariants;
use super::invariants::{BoardInvariants, InvariantSet, InvariantViolation};
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells along one side of the board.
pub const SIDE: usize = 4;

/// Number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// Highest tile label.
pub const MAX_LABEL: u8 = (CELLS - 1) as u8;

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// The blank cell tiles slide into.
    Empty,
    /// A numbered tile (1-15).
    Numbered(u8),
}

impl Tile {
    /// Returns the tile label, or `None` for the blank.
    pub fn label(self) -> Option<u8> {
        match self {
            Tile::Empty => None,
            Tile::Numbered(label) => Some(label),
        }
    }

    /// Returns true for the blank cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Tile::Empty)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tile::Empty => write!(f, "."),
            Tile::Numbered(label) => write!(f, "{}", label),
        }
    }
}

/// Error returned when a set of cells does not form a valid board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error)]
pub struct BoardError {
    violations: Vec<InvariantViolation>,
}

impl BoardError {
    /// Returns the violated invariants.
    pub fn violations(&self) -> &[InvariantViolation] {
        &self.violations
    }
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let descriptions = self
            .violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Invalid board: {}", descriptions)
    }
}

/// 4x4 sliding puzzle board.
///
/// Always holds exactly one blank and the labels 1-15 once each. The
/// invariant is checked on every construction path, including
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Tile; CELLS]", into = "[Tile; CELLS]")]
pub struct Board {
    /// Cells in row-major order (0-15).
    tiles: [Tile; CELLS],
    /// Cached location of the blank.
    blank: Position,
}

impl Board {
    /// Returns the canonical solved board: 1-15 ascending, blank last.
    pub fn solved() -> Self {
        let mut tiles = [Tile::Empty; CELLS];
        for (index, tile) in tiles.iter_mut().take(CELLS - 1).enumerate() {
            *tile = Tile::Numbered(index as u8 + 1);
        }
        Self {
            tiles,
            blank: Position::LAST,
        }
    }

    /// Builds a board from raw cells.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if the cells do not hold exactly one blank and
    /// a permutation of 1-15.
    #[instrument(skip(tiles))]
    pub fn from_tiles(tiles: [Tile; CELLS]) -> Result<Self, BoardError> {
        BoardInvariants::check_all(&tiles).map_err(|violations| BoardError { violations })?;
        let blank = tiles
            .iter()
            .position(|tile| tile.is_empty())
            .and_then(Position::from_index)
            .ok_or_else(|| BoardError {
                violations: vec![InvariantViolation::new("Board has no blank cell")],
            })?;
        Ok(Self { tiles, blank })
    }

    /// Builds a board from labels, with `0` standing for the blank.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if the labels are not a valid board.
    pub fn from_labels(labels: [u8; CELLS]) -> Result<Self, BoardError> {
        let tiles = labels.map(|label| match label {
            0 => Tile::Empty,
            n => Tile::Numbered(n),
        });
        Self::from_tiles(tiles)
    }

    /// Gets the tile at the given position.
    pub fn get(&self, pos: Position) -> Tile {
        self.tiles[pos.index()]
    }

    /// Returns all cells in row-major order.
    pub fn tiles(&self) -> &[Tile; CELLS] {
        &self.tiles
    }

    /// Returns the position of the blank.
    pub fn blank(&self) -> Position {
        self.blank
    }

    /// Returns the position holding `label`, if it is a valid label.
    pub fn position_of(&self, label: u8) -> Option<Position> {
        self.tiles
            .iter()
            .position(|tile| tile.label() == Some(label))
            .and_then(Position::from_index)
    }

    /// Returns the positions whose tiles can currently slide into the blank.
    pub fn movable_positions(&self) -> Vec<Position> {
        self.blank.neighbors().collect()
    }

    /// Wraps a permutation of the solved cells whose blank is already known.
    ///
    /// Invariants are asserted in debug builds only.
    pub(crate) fn from_permutation(tiles: [Tile; CELLS], blank: Position) -> Self {
        debug_assert!(tiles[blank.index()].is_empty(), "blank not at {blank}");
        let board = Self { tiles, blank };
        assert_invariants(&board);
        board
    }

    /// Slides the tile at `pos` into the blank (unchecked - use
    /// [`crate::try_move`] for validation).
    pub(crate) fn slide_unchecked(&mut self, pos: Position) {
        self.tiles.swap(pos.index(), self.blank.index());
        self.blank = pos;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::solved()
    }
}

impl TryFrom<[Tile; CELLS]> for Board {
    type Error = BoardError;

    fn try_from(tiles: [Tile; CELLS]) -> Result<Self, Self::Error> {
        Self::from_tiles(tiles)
    }
}

impl From<Board> for [Tile; CELLS] {
    fn from(board: Board) -> Self {
        board.tiles
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.tiles.chunks(SIDE).enumerate() {
            let line = cells
                .iter()
                .map(|tile| format!("{:>2}", tile.to_string()))
                .collect::<Vec<_>>()
                .join(" ");
            write!(f, "{}", line)?;
            if row < SIDE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
