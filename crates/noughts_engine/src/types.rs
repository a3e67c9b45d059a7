//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl TryFrom<&str> for Player {
    type Error = MoveError;

    fn try_from(symbol: &str) -> Result<Self, Self::Error> {
        match symbol {
            "X" => Ok(Player::X),
            "O" => Ok(Player::O),
            _ => Err(MoveError::InvalidPlayer),
        }
    }
}

impl TryFrom<&String> for Player {
    type Error = MoveError;

    fn try_from(symbol: &String) -> Result<Self, Self::Error> {
        Player::try_from(symbol.as_str())
    }
}

impl TryFrom<char> for Player {
    type Error = MoveError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'X' => Ok(Player::X),
            'O' => Ok(Player::O),
            _ => Err(MoveError::InvalidPlayer),
        }
    }
}

/// Whether moves can still be made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameStatus {
    /// Another move can be made.
    Ongoing,
    /// The game has concluded; no more moves can be made.
    Over,
}

/// The moves each player has claimed, in the order that player made them.
///
/// Everything else about a game (whose turn it is, which squares are free,
/// who has won) is derived from these two sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    x: Vec<Position>,
    o: Vec<Position>,
}

impl GameState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the positions claimed by `player`.
    pub fn moves(&self, player: Player) -> &[Position] {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }

    /// Determines whose turn it is from the move counts.
    ///
    /// X always starts, so O is to move exactly when X has made more moves.
    pub fn current_player(&self) -> Player {
        if self.x.len() > self.o.len() {
            Player::O
        } else {
            Player::X
        }
    }

    /// Lists all unclaimed positions in ascending order.
    ///
    /// No consideration is made of whether someone has already won.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| self.owner(*pos).is_none())
            .collect()
    }

    /// Maps each claimed position to the player holding it.
    pub fn occupied_positions(&self) -> BTreeMap<Position, Player> {
        self.x
            .iter()
            .map(|pos| (*pos, Player::X))
            .chain(self.o.iter().map(|pos| (*pos, Player::O)))
            .collect()
    }

    /// Returns the player holding `pos`, if any.
    pub fn owner(&self, pos: Position) -> Option<Player> {
        if self.x.contains(&pos) {
            Some(Player::X)
        } else if self.o.contains(&pos) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Total number of moves made by both players.
    pub fn move_count(&self) -> usize {
        self.x.len() + self.o.len()
    }

    /// Appends a move (unchecked - use `Game::register_move` for validation).
    pub(crate) fn push(&mut self, player: Player, pos: Position) {
        match player {
            Player::X => self.x.push(pos),
            Player::O => self.o.push(pos),
        }
    }
}
