//! Board generation with a solvability guarantee.
//!
//! Randomness is injected through [`RandomSource`] so tests can replay a
//! fixed sequence and assert exact boards.

use super::position::Position;
use super::rules::is_solvable;
use super::types::{Board, CELLS};
use std::collections::VecDeque;
use tracing::{debug, info, instrument, warn};

/// Attempts [`make_solvable_board`] makes before giving up.
///
/// About half of all permutations are solvable, so a sane source needs two
/// attempts on average.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Source of uniformly distributed indices for shuffling.
pub trait RandomSource {
    /// Returns an index in `0..=max`.
    fn pick_index(&mut self, max: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn pick_index(&mut self, max: usize) -> usize {
        (**self).pick_index(max)
    }
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`].
#[cfg(feature = "shuffle")]
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

#[cfg(feature = "shuffle")]
impl<R: rand::Rng> RngSource<R> {
    /// Wraps a generator.
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

#[cfg(feature = "shuffle")]
impl RngSource<rand::rngs::StdRng> {
    /// Creates a source seeded from the operating system.
    pub fn from_os_rng() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_os_rng())
    }

    /// Creates a reproducible source from a seed.
    pub fn seeded(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

#[cfg(feature = "shuffle")]
impl<R: rand::Rng> RandomSource for RngSource<R> {
    fn pick_index(&mut self, max: usize) -> usize {
        self.0.random_range(0..=max)
    }
}

/// Replays a fixed sequence of picks, cycling when exhausted.
///
/// Each scripted value is reduced modulo `max + 1`, so any script yields
/// in-range picks. An empty script always picks 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: VecDeque<usize>,
}

impl ScriptedSource {
    /// Creates a source from a sequence of picks.
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Script that leaves the board in canonical order: every index swaps
    /// with itself.
    pub fn identity() -> Self {
        Self::new((1..CELLS).rev())
    }
}

impl RandomSource for ScriptedSource {
    fn pick_index(&mut self, max: usize) -> usize {
        match self.script.pop_front() {
            Some(value) => {
                self.script.push_back(value);
                value % (max + 1)
            }
            None => 0,
        }
    }
}

/// Error returned when no solvable board could be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ShuffleError {
    /// Every attempt produced an unsolvable board.
    #[display("No solvable board after {} attempts", attempts)]
    AttemptsExhausted {
        /// How many boards were generated.
        attempts: usize,
    },
}

/// Generates a uniformly shuffled board.
///
/// Starts from `[1, 2, ..., 15, blank]` and applies a Fisher-Yates shuffle:
/// for each index from the last down to 1, swap with a pick in `0..=index`.
/// The result may be unsolvable.
#[instrument(skip(rng))]
pub fn generate(rng: &mut impl RandomSource) -> Board {
    let mut tiles = *Board::solved().tiles();
    let mut blank = Position::LAST.index();
    for i in (1..CELLS).rev() {
        let j = rng.pick_index(i);
        tiles.swap(i, j);
        if blank == i {
            blank = j;
        } else if blank == j {
            blank = i;
        }
    }

    Board::from_permutation(tiles, Position::from_index_unchecked(blank))
}

/// Generates boards until one is solvable.
///
/// # Errors
///
/// Returns [`ShuffleError::AttemptsExhausted`] after `max_attempts`
/// unsolvable boards, instead of spinning forever on a broken source.
#[instrument(skip(rng))]
pub fn make_solvable_board(
    rng: &mut impl RandomSource,
    max_attempts: usize,
) -> Result<Board, ShuffleError> {
    for attempt in 1..=max_attempts {
        let board = generate(rng);
        if is_solvable(&board) {
            info!(attempt, "Generated solvable board");
            return Ok(board);
        }
        debug!(attempt, "Discarding unsolvable board");
    }

    warn!(max_attempts, "Gave up generating a solvable board");
    Err(ShuffleError::AttemptsExhausted {
        attempts: max_attempts,
    })
}
