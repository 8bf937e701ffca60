//! Game session: the operations a front end drives.
//!
//! A session owns the board, the player name and the tick timer. The
//! record store is passed in by reference where a solve needs to be
//! recorded.

mod timer;

pub use timer::TickTimer;

use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use strictly_fifteen::{
    Board, DEFAULT_MAX_ATTEMPTS, RandomSource, ShuffleError, is_solved, make_solvable_board,
    try_move,
};
use tokio::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::records::{KeyValueStorage, Record, RecordError, RecordStore};

/// Errors surfaced to the front end.
#[derive(Debug, Clone, Display, Error, From)]
pub enum SessionError {
    /// No player name was given; the game does not start.
    #[display("Please fill your name.")]
    EmptyName,

    /// The random source never produced a solvable board.
    #[display("{}", _0)]
    #[from]
    Shuffle(ShuffleError),

    /// The tick timer needs a tokio runtime.
    #[display("Session timer requires a tokio runtime")]
    NoRuntime,
}

/// Whether a game is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum SessionPhase {
    /// Waiting for a player to start.
    Idle,
    /// Board live, timer ticking.
    Running,
}

/// Tunables for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct SessionSettings {
    /// Boards generated before giving up on finding a solvable one.
    pub max_shuffle_attempts: usize,
    /// Time between timer ticks.
    pub tick_period: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            max_shuffle_attempts: DEFAULT_MAX_ATTEMPTS,
            tick_period: Duration::from_secs(1),
        }
    }
}

/// Result of clicking a tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileClick {
    /// Board after the click (unchanged if the click was illegal).
    pub board: Board,
    /// True if the click solved the puzzle.
    pub solved: bool,
    /// The completed game, present on a solve.
    pub record: Option<Record>,
    /// Why the completed game could not be saved to the leaderboard.
    pub record_error: Option<RecordError>,
}

impl TileClick {
    /// Completion notice for a solve, e.g.
    /// `Congratulations, Bob! You won in 42 seconds.`
    pub fn notice(&self) -> Option<String> {
        self.record.as_ref().map(|record| {
            format!(
                "Congratulations, {}! You won in {} seconds.",
                record.name(),
                record.time()
            )
        })
    }
}

/// A single player's game.
///
/// Dropping the session cancels its timer.
#[derive(Debug)]
pub struct GameSession<R> {
    rng: R,
    settings: SessionSettings,
    board: Board,
    player: Option<String>,
    phase: SessionPhase,
    timer: Option<TickTimer>,
    /// Elapsed seconds while no timer is running.
    frozen_elapsed: u64,
}

impl<R: RandomSource> GameSession<R> {
    /// Creates an idle session showing the solved board.
    #[instrument(skip(rng))]
    pub fn new(rng: R, settings: SessionSettings) -> Self {
        info!("Creating game session");
        Self {
            rng,
            settings,
            board: Board::solved(),
            player: None,
            phase: SessionPhase::Idle,
            timer: None,
            frozen_elapsed: 0,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player's name while a game runs.
    pub fn player(&self) -> Option<&str> {
        self.player.as_deref()
    }

    /// Returns the session phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Returns true while a game is being played.
    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    /// Seconds elapsed in the current (or just finished) game.
    pub fn elapsed(&self) -> u64 {
        self.timer
            .as_ref()
            .map_or(self.frozen_elapsed, TickTimer::elapsed)
    }

    /// Starts a new game for `player_name` on a fresh solvable board.
    ///
    /// Restarting mid-game abandons the old game without recording it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyName`] for a blank name. On any error
    /// the session is left untouched; a [`SessionError::Shuffle`] failure
    /// still consumes draws from the random source.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn start_new_game(&mut self, player_name: &str) -> Result<&Board, SessionError> {
        let name = player_name.trim();
        if name.is_empty() {
            warn!("Start rejected: empty player name");
            return Err(SessionError::EmptyName);
        }

        // Dropped unused if shuffling fails
        let timer = TickTimer::start(self.settings.tick_period)?;
        let board = make_solvable_board(&mut self.rng, self.settings.max_shuffle_attempts)?;

        self.board = board;
        self.player = Some(name.to_string());
        // Replacing the guard aborts the previous game's clock
        self.timer = Some(timer);
        self.frozen_elapsed = 0;
        self.phase = SessionPhase::Running;

        info!(player = %name, "Game started");
        Ok(&self.board)
    }

    /// Clicks the cell at `index`.
    ///
    /// Illegal clicks and clicks while idle leave the board unchanged. The
    /// win check runs after every click while a game is running. A solve
    /// stops the clock, appends the result to `records` and ends the game.
    /// A failed leaderboard write does not undo the win: it is reported in
    /// [`TileClick::record_error`].
    #[instrument(skip(self, records), fields(phase = %self.phase))]
    pub fn click_tile<S: KeyValueStorage>(
        &mut self,
        index: usize,
        records: &mut RecordStore<S>,
    ) -> TileClick {
        if !self.is_running() {
            debug!("Click ignored: no game running");
            return self.unsolved_click();
        }

        self.board = try_move(&self.board, index);

        if !is_solved(&self.board) {
            return self.unsolved_click();
        }

        let elapsed = self.stop_clock();
        let name = self.player.take().unwrap_or_default();
        self.phase = SessionPhase::Idle;
        info!(player = %name, elapsed, "Puzzle solved");

        let (record, record_error) = match Record::new(name, elapsed) {
            Ok(record) => match records.append(record.name(), elapsed) {
                Ok(_) => (Some(record), None),
                Err(e) => {
                    warn!(error = %e, "Failed to save record");
                    (Some(record), Some(e))
                }
            },
            Err(e) => (None, Some(e)),
        };

        TileClick {
            board: self.board,
            solved: true,
            record,
            record_error,
        }
    }

    fn unsolved_click(&self) -> TileClick {
        TileClick {
            board: self.board,
            solved: false,
            record: None,
            record_error: None,
        }
    }

    /// Ends the current game without recording it, resetting the name and
    /// the clock.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn end_game(&mut self) {
        self.stop_clock();
        self.frozen_elapsed = 0;
        self.player = None;
        self.phase = SessionPhase::Idle;
        info!("Game ended");
    }

    fn stop_clock(&mut self) -> u64 {
        if let Some(timer) = self.timer.take() {
            self.frozen_elapsed = timer.stop();
        }
        self.frozen_elapsed
    }
}
