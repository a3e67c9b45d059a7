//! Win detection logic for tic-tac-toe.

use super::super::{GameState, Player, Position};
use tracing::instrument;

/// The eight winning lines, in evaluation order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if either player holds a complete line.
///
/// Lines are walked in [`LINES`] order and X is tested before O on each
/// line, so the result is deterministic even for states that alternating
/// play could never reach.
#[instrument(skip(state))]
pub fn check_winner(state: &GameState) -> Option<Player> {
    LINES.iter().find_map(|line| {
        [Player::X, Player::O]
            .into_iter()
            .find(|player| holds_line(state.moves(*player), line))
    })
}

fn holds_line(moves: &[Position], line: &[Position; 3]) -> bool {
    line.iter().all(|pos| moves.contains(pos))
}
