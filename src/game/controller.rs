//! The game controller: round lifecycle, turn resolution, scoring.
//!
//! A single controller instance owns all mutable game state. Input
//! acceptance is state-gated here, independent of whatever the UI
//! layer disables: moves into occupied cells, moves after a round has
//! ended, and computer moves scheduled under a stale round are all
//! silent no-ops.

use super::position::Position;
use super::rules::{check_winner, is_full};
use super::types::{Board, Cell, Mark, Outcome};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Opponent configuration for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Two humans sharing the input surface.
    TwoPlayer,
    /// Human as X versus a random computer opponent as O.
    VsComputer,
}

/// Identifies one round within a session.
///
/// Every round start and every restart mints a new id; a delayed
/// computer move carries the id it was scheduled under and is dropped
/// if the id no longer matches.
pub type RoundId = u64;

/// Per-round lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No round running; mode selection is open.
    Idle,
    /// Round accepting moves.
    InProgress,
    /// Round ended; absorbing until the next round start.
    Terminal(Outcome),
}

/// Win counters, keyed by mark and persistent across rounds.
///
/// The X-side counter is displayed as "Player" and the O-side counter
/// as "Computer" in both modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    x_wins: u32,
    o_wins: u32,
}

impl Scores {
    /// Wins for the X side.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Wins for the O side.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    fn record(&mut self, winner: Mark) {
        match winner {
            Mark::X => self.x_wins += 1,
            Mark::O => self.o_wins += 1,
        }
    }
}

/// Result of submitting a move to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Mark placed; the round continues with the other side to move.
    Placed {
        /// The mark that was placed.
        mark: Mark,
        /// Where it was placed.
        position: Position,
    },
    /// Mark placed and the round ended.
    Ended {
        /// The mark that was placed.
        mark: Mark,
        /// Where it was placed.
        position: Position,
        /// How the round ended.
        outcome: Outcome,
    },
    /// Precondition not met; nothing changed.
    Ignored,
}

/// Errors produced by the index-based entry point.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ControllerError {
    /// Cell index outside 0-8.
    #[display("cell index {_0} is out of range (expected 0-8)")]
    InvalidCell(#[error(not(source))] usize),
}

/// Owns all game state and orchestrates the turn cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameController {
    board: Board,
    turn: Mark,
    mode: Mode,
    phase: Phase,
    scores: Scores,
    round: RoundId,
}

impl GameController {
    /// Creates a controller with no round running and zeroed scores.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            mode: Mode::TwoPlayer,
            phase: Phase::Idle,
            scores: Scores::default(),
            round: 0,
        }
    }

    /// Starts a round: empty board, X to move, scores untouched.
    ///
    /// Returns the new round id. X is always the human side and always
    /// moves first, so no computer move fires at round start.
    #[instrument(skip(self))]
    pub fn start_round(&mut self, mode: Mode) -> RoundId {
        self.board = Board::new();
        self.turn = Mark::X;
        self.mode = mode;
        self.phase = Phase::InProgress;
        self.round += 1;
        info!(round = self.round, ?mode, "round started");
        self.round
    }

    /// Restarts the session: scores zeroed, any pending computer move
    /// invalidated, back to mode selection.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.reset_scores();
        self.board = Board::new();
        self.turn = Mark::X;
        self.phase = Phase::Idle;
        self.round += 1;
        info!(round = self.round, "session restarted");
    }

    /// Zeroes both score counters.
    pub fn reset_scores(&mut self) {
        self.scores = Scores::default();
    }

    /// Submits a move for the side currently to move.
    ///
    /// A move into an occupied cell, or while no round is in progress,
    /// is silently ignored.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, position: Position) -> MoveOutcome {
        if self.phase != Phase::InProgress || !self.board.is_empty(position) {
            debug!(?position, phase = ?self.phase, "move ignored");
            return MoveOutcome::Ignored;
        }
        self.place(position)
    }

    /// Index-based entry point for the external surface.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::InvalidCell`] for an index outside
    /// 0-8. All other precondition violations remain silent no-ops.
    pub fn submit_index(&mut self, index: usize) -> Result<MoveOutcome, ControllerError> {
        let position = Position::from_index(index).ok_or(ControllerError::InvalidCell(index))?;
        Ok(self.submit_move(position))
    }

    /// Applies the delayed computer move scheduled under `round`.
    ///
    /// No-op unless the round id still matches, a vs-computer round is
    /// in progress, it is O's turn, and an empty cell exists. The
    /// injected RNG is the only source of non-determinism.
    #[instrument(skip(self, rng))]
    pub fn computer_move<R: Rng>(&mut self, round: RoundId, rng: &mut R) -> MoveOutcome {
        if round != self.round {
            debug!(scheduled = round, current = self.round, "stale computer move dropped");
            return MoveOutcome::Ignored;
        }
        if !self.computer_to_move() {
            debug!(phase = ?self.phase, turn = ?self.turn, "computer move suppressed");
            return MoveOutcome::Ignored;
        }

        let open = Position::valid_moves(&self.board);
        if open.is_empty() {
            return MoveOutcome::Ignored;
        }
        let position = open[rng.gen_range(0..open.len())];
        debug!(position = %position, candidates = open.len(), "computer chose cell");
        self.place(position)
    }

    /// True when a computer move should be scheduled: vs-computer
    /// round in progress with O to move.
    pub fn computer_to_move(&self) -> bool {
        self.phase == Phase::InProgress && self.mode == Mode::VsComputer && self.turn == Mark::O
    }

    /// Places the current turn's mark and evaluates termination.
    /// Callers have already checked the phase and the target cell.
    fn place(&mut self, position: Position) -> MoveOutcome {
        let mark = self.turn;
        self.board.set(position, Cell::Occupied(mark));

        if let Some(winner) = check_winner(&self.board) {
            let outcome = Outcome::Winner(winner);
            self.end_round(outcome);
            return MoveOutcome::Ended {
                mark,
                position,
                outcome,
            };
        }

        if is_full(&self.board) {
            self.end_round(Outcome::Draw);
            return MoveOutcome::Ended {
                mark,
                position,
                outcome: Outcome::Draw,
            };
        }

        self.turn = mark.opponent();
        MoveOutcome::Placed { mark, position }
    }

    /// Terminal transition: records the outcome and updates scores.
    /// Draws change no counter.
    fn end_round(&mut self, outcome: Outcome) {
        if let Some(winner) = outcome.winner() {
            self.scores.record(winner);
        }
        self.phase = Phase::Terminal(outcome);
        info!(round = self.round, %outcome, board = %self.board.display(), "round ended");
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that will be placed next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the mode of the current or most recent round.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the session scores.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Returns the current round id.
    pub fn round(&self) -> RoundId {
        self.round
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
