//! Game logic: board, rules, and the controller that owns all state.

mod controller;
mod position;
mod rules;
mod snapshot;
mod types;

pub use controller::{
    ControllerError, GameController, Mode, MoveOutcome, Phase, RoundId, Scores,
};
pub use position::Position;
pub use rules::{check_winner, is_draw, is_full, WINNING_LINES};
pub use snapshot::Snapshot;
pub use types::{Board, Cell, Mark, Outcome};
