//! Pure 15-puzzle logic.
//!
//! This crate contains the board engine behind Strictly Fifteen with no
//! persistence or presentation concerns:
//!
//! - **Types**: [`Board`], [`Tile`], [`Position`]
//! - **Shuffling**: [`generate`] and [`make_solvable_board`] over an
//!   injectable [`RandomSource`]
//! - **Rules**: [`is_solvable`], [`is_solved`], [`try_move`]
//! - **Contracts**: [`LegalSlide`] precondition and board [`Invariant`]s
//!
//! # Example
//!
//! ```
//! use strictly_fifteen::{Board, is_solved, try_move};
//!
//! let board = Board::from_labels([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 0, 15])?;
//! let board = try_move(&board, 15);
//! assert!(is_solved(&board));
//! # Ok::<(), strictly_fifteen::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod invariants;
mod position;
mod rules;
mod shuffle;
mod types;

pub use action::SlideError;
pub use contracts::{BlankNeighbor, LegalSlide, assert_invariants};
pub use invariants::{
    BoardInvariants, Invariant, InvariantSet, InvariantViolation, SingleBlank, TilePermutation,
};
pub use position::{Direction, Position};
pub use rules::{count_inversions, is_solvable, is_solved, try_move};
pub use shuffle::{
    DEFAULT_MAX_ATTEMPTS, RandomSource, ScriptedSource, ShuffleError, generate,
    make_solvable_board,
};
#[cfg(feature = "shuffle")]
pub use shuffle::RngSource;
pub use types::{Board, BoardError, CELLS, MAX_LABEL, SIDE, Tile};
