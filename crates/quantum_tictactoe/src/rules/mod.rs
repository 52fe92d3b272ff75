//! Board evaluation rules for quantum tic-tac-toe.
//!
//! This module contains pure functions over a match's recorded placements.
//! Each board is evaluated by the same functions, so line order and
//! tie-break behavior are identical across A, B and C.

pub mod draw;
pub mod score;
pub mod win;

pub use draw::{is_exhausted, is_full, is_settled};
pub use score::{BOARDS_TO_WIN, Scoreboard, tally};
pub use win::{board_winner, check_winner};
