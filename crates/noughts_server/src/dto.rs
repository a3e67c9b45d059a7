//! JSON bodies exchanged over the HTTP API.

use noughts_engine::{Game, Player, Tiles};
use serde::{Deserialize, Serialize};

/// Response to starting a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGameResponse {
    /// Identifier to use for later requests.
    pub id: String,
    /// The (empty) board.
    pub tiles: Tiles,
}

/// Current view of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Game identifier.
    pub id: String,
    /// The board.
    pub tiles: Tiles,
    /// Winner, `null` while ongoing or after a draw.
    pub winner: Option<Player>,
}

impl GameSummary {
    /// Summarizes `game` under `id`.
    pub fn new(id: impl Into<String>, game: &Game) -> Self {
        Self {
            id: id.into(),
            tiles: game.tiles(),
            winner: game.winner(),
        }
    }

    /// Whether the board has no free squares left.
    pub fn is_full(&self) -> bool {
        self.tiles.empty_positions().is_empty()
    }
}

/// A move submitted by the human player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Position to claim (1-9). Kept wide so out-of-range numbers reach
    /// the rules engine and are reported as such.
    #[serde(rename = "tileId")]
    pub tile_id: i64,
}

/// Error body returned with every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
}
