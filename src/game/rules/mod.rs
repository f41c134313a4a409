//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating board state. Rules are separated
//! from board storage so the controller and the tests share one
//! implementation of win and draw detection.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, WINNING_LINES};
