//! Moves and the ways registering one can fail.

use super::{Player, Position};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move was rejected.
///
/// Checks run in declaration order and the first failure wins, so a move by
/// an unknown player on a finished game reports [`MoveError::GameOver`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game has already concluded.
    #[display("The game is already over")]
    GameOver,

    /// The mover is neither X nor O.
    #[display("Only players X and O are permitted")]
    InvalidPlayer,

    /// It is the other player's turn.
    #[display("The current available turn is for player: {}", _0)]
    IncorrectPlayer(Player),

    /// The position is outside 1-9.
    #[display("Only positions between 1 and 9 are valid")]
    InvalidPosition,

    /// The position is already taken; carries the positions still free.
    #[display(
        "The position is unavailable, available positions are: {}",
        join_positions(_0)
    )]
    PositionUnavailable(Vec<Position>),
}

impl std::error::Error for MoveError {}

/// Broad category of a [`MoveError`], for callers that map errors onto
/// their own response codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveErrorClass {
    /// The request itself was malformed or out of turn.
    InvalidInput,
    /// The request was well formed but the board does not allow it.
    NotAllowed,
}

impl MoveError {
    /// Returns the category of this error.
    pub fn class(&self) -> MoveErrorClass {
        match self {
            MoveError::InvalidPlayer
            | MoveError::InvalidPosition
            | MoveError::IncorrectPlayer(_) => MoveErrorClass::InvalidInput,
            MoveError::GameOver | MoveError::PositionUnavailable(_) => MoveErrorClass::NotAllowed,
        }
    }
}

// Lets typed `Player`/`Position` arguments flow through the same
// `TryInto` bounds as symbols and raw numbers.
impl From<Infallible> for MoveError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

fn join_positions(positions: &[Position]) -> String {
    positions
        .iter()
        .map(Position::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
