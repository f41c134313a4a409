//! Render-contract snapshot for the UI layer.
//!
//! After every state-affecting operation the UI queries one of these
//! instead of poking at controller internals. Visibility flags:
//! message and scores hidden while a round runs, shown when it ends;
//! mode selection visible only between sessions.

use super::controller::{GameController, Phase};
use super::types::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Point-in-time view of everything the UI renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board cells for per-cell mark rendering.
    pub board: Board,
    /// Mark that will be placed next (cursor affordance).
    pub turn: Mark,
    /// True once the round has ended.
    pub terminal: bool,
    /// Terminal message ("Draw!" or "<Mark> Wins!"), present only
    /// when the round has ended.
    pub message: Option<String>,
    /// X-side score display string.
    pub player_score: String,
    /// O-side score display string.
    pub computer_score: String,
    /// Board visible (any round started or ended).
    pub show_board: bool,
    /// Terminal message visible.
    pub show_message: bool,
    /// Score displays visible.
    pub show_scores: bool,
    /// Mode-selection controls visible.
    pub show_mode_select: bool,
}

impl GameController {
    /// Builds the render snapshot for the current state.
    pub fn snapshot(&self) -> Snapshot {
        let phase = self.phase();
        let scores = self.scores();
        let (terminal, message) = match phase {
            Phase::Terminal(outcome) => (true, Some(outcome.to_string())),
            _ => (false, None),
        };

        Snapshot {
            board: self.board().clone(),
            turn: self.turn(),
            terminal,
            message,
            player_score: format!("Player: {}", scores.x_wins()),
            computer_score: format!("Computer: {}", scores.o_wins()),
            show_board: phase != Phase::Idle,
            show_message: terminal,
            show_scores: terminal,
            show_mode_select: phase == Phase::Idle,
        }
    }
}
