//! Terminal tic-tac-toe.
//!
//! Two humans sharing one keyboard, or a human (X) against a computer
//! opponent (O) that picks uniformly at random among open cells after
//! a short deliberation delay. A single [`game::GameController`] owns
//! all state; the [`tui`] module is a thin event surface over it.

#![warn(missing_docs)]

pub mod cli;
pub mod game;
pub mod tui;

pub use game::{
    Board, Cell, ControllerError, GameController, Mark, Mode, MoveOutcome, Outcome, Phase,
    Position, RoundId, Scores, Snapshot, WINNING_LINES,
};
