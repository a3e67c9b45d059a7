//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a [`GameState`](super::GameState). Rules are
//! kept apart from the engine so they can be checked in isolation.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};
