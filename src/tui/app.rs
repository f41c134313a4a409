//! Application state between the event loop and the controller.

use crate::game::{GameController, Mode, Phase, Position, RoundId, Snapshot};
use crossterm::event::KeyCode;
use rand::Rng;
use tracing::debug;

use super::input::move_cursor;

/// Event delivered back to the event loop by a scheduled task.
#[derive(Debug, Clone, Copy)]
pub enum AppEvent {
    /// The computer's deliberation delay elapsed for the given round.
    ComputerTurn {
        /// Round the move was scheduled under.
        round: RoundId,
    },
}

/// Per-session application state: the controller plus UI concerns
/// (cursor, quit flag, one pending computer-move request at a time).
pub struct App {
    controller: GameController,
    cursor: Position,
    should_quit: bool,
    pending_computer: Option<RoundId>,
}

impl App {
    /// Creates the application in mode selection.
    pub fn new() -> Self {
        Self {
            controller: GameController::new(),
            cursor: Position::Center,
            should_quit: false,
            pending_computer: None,
        }
    }

    /// Current render snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.controller.snapshot()
    }

    /// Current cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Takes the round id for which a computer move should be
    /// scheduled, if one was requested since the last call.
    pub fn take_pending_computer(&mut self) -> Option<RoundId> {
        self.pending_computer.take()
    }

    /// Routes a key press to the controller or the cursor.
    pub fn handle_key(&mut self, key: KeyCode) {
        debug!(?key, "key pressed");

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') => {
                self.controller.restart();
                self.pending_computer = None;
            }
            KeyCode::Char('h') if self.controller.phase() == Phase::Idle => {
                self.controller.start_round(Mode::TwoPlayer);
            }
            KeyCode::Char('c') if self.controller.phase() == Phase::Idle => {
                self.controller.start_round(Mode::VsComputer);
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(digit) = c.to_digit(10) {
                    if (1..=9).contains(&digit) {
                        // In range by construction, so the index entry
                        // point cannot fail here.
                        let _ = self.controller.submit_index(digit as usize - 1);
                        self.request_computer_if_due();
                    }
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.controller.submit_move(self.cursor);
                self.request_computer_if_due();
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
    }

    /// Applies a scheduled computer turn. The controller drops it if
    /// the round id is stale or the round is no longer in progress.
    pub fn apply_event<R: Rng>(&mut self, event: AppEvent, rng: &mut R) {
        match event {
            AppEvent::ComputerTurn { round } => {
                self.controller.computer_move(round, rng);
            }
        }
    }

    fn request_computer_if_due(&mut self) {
        if self.controller.computer_to_move() {
            self.pending_computer = Some(self.controller.round());
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
