//! First-class board invariants.
//!
//! Invariants are logical properties every board must satisfy. They are
//! checked when a board is built from raw cells and asserted after each
//! slide in debug builds.

use super::types::{CELLS, MAX_LABEL, Tile};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S: ?Sized> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S: ?Sized> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    S: ?Sized,
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: exactly one cell is blank.
pub struct SingleBlank;

impl Invariant<[Tile; CELLS]> for SingleBlank {
    fn holds(tiles: &[Tile; CELLS]) -> bool {
        let blanks = tiles.iter().filter(|tile| tile.is_empty()).count();
        let valid = blanks == 1;
        if !valid {
            warn!(blanks, "Single blank violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Board must have exactly one blank cell"
    }
}

/// Invariant: the numbered tiles are a permutation of 1-15.
pub struct TilePermutation;

impl Invariant<[Tile; CELLS]> for TilePermutation {
    fn holds(tiles: &[Tile; CELLS]) -> bool {
        let mut seen = [false; CELLS];
        for label in tiles.iter().filter_map(|tile| tile.label()) {
            if label == 0 || label > MAX_LABEL {
                warn!(label, "Tile label out of range");
                return false;
            }
            let slot = &mut seen[usize::from(label)];
            if *slot {
                warn!(label, "Duplicate tile label");
                return false;
            }
            *slot = true;
        }
        seen.iter().skip(1).all(|present| *present)
    }

    fn description() -> &'static str {
        "Numbered tiles must be a permutation of 1-15"
    }
}

/// All invariants a board must satisfy.
pub type BoardInvariants = (SingleBlank, TilePermutation);
