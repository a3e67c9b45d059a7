//! Board exhaustion for tic-tac-toe.

use super::super::GameState;
use tracing::instrument;

/// Checks if every position has been claimed.
///
/// A full board with no winner is a draw.
#[instrument(skip(state))]
pub fn is_full(state: &GameState) -> bool {
    state.move_count() >= 9
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&GameState::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut state = GameState::new();
        state.push(Player::X, Position::Center);
        assert!(!is_full(&state));
    }

    #[test]
    fn test_draw_detection() {
        // X X O / O O X / X O X
        let mut state = GameState::new();
        let x = [1, 2, 6, 7, 9];
        let o = [3, 4, 5, 8];
        for n in x {
            state.push(Player::X, Position::from_number(n).unwrap());
        }
        for n in o {
            state.push(Player::O, Position::from_number(n).unwrap());
        }

        assert!(is_full(&state));
        assert_eq!(check_winner(&state), None);
    }
}
