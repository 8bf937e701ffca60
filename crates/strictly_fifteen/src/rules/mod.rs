//! Game rules for the 15-puzzle.
//!
//! Pure functions over [`crate::Board`]: solvability parity, win detection
//! and slide adjudication.

pub mod slide;
pub mod solvable;
pub mod solved;

pub use slide::try_move;
pub use solvable::{count_inversions, is_solvable};
pub use solved::is_solved;
