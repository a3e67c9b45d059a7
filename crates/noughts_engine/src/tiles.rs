//! Positional board summary for transport and rendering.
//!
//! The engine stores moves per player; clients want a board. [`project`]
//! turns one into the other:
//!
//! ```
//! use noughts_engine::{Game, Player};
//!
//! let mut game = Game::new();
//! game.register_move(Player::X, 1)?
//!     .register_move(Player::O, 2)?
//!     .register_move(Player::X, 9)?;
//!
//! let tiles = game.tiles();
//! assert_eq!(tiles[0].value, Some(Player::X));
//! assert_eq!(tiles[2].value, None);
//! assert_eq!(tiles[8].value, Some(Player::X));
//! # Ok::<(), noughts_engine::MoveError>(())
//! ```

use super::{Player, Position};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Index;

/// One square of the summary: its position and, if claimed, its owner.
///
/// Serializes as `{"id": 1, "value": "X"}`, or `{"id": 1}` when empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Position of this tile.
    pub id: Position,
    /// Occupying player, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Player>,
}

/// All nine tiles in ascending position order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tile>", into = "Vec<Tile>")]
pub struct Tiles([Tile; 9]);

/// Projects occupied positions onto the ordered nine-tile board.
pub fn project(occupied: &BTreeMap<Position, Player>) -> Tiles {
    Tiles(Position::ALL.map(|id| Tile {
        id,
        value: occupied.get(&id).copied(),
    }))
}

impl Tiles {
    /// Iterates over the tiles in position order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.0.iter()
    }

    /// Positions with no occupant.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.iter()
            .filter(|tile| tile.value.is_none())
            .map(|tile| tile.id)
            .collect()
    }

    /// Returns the tile for `pos`.
    pub fn get(&self, pos: Position) -> &Tile {
        &self.0[usize::from(pos.number()) - 1]
    }
}

impl Index<usize> for Tiles {
    type Output = Tile;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Tiles {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Tiles> for Vec<Tile> {
    fn from(tiles: Tiles) -> Self {
        tiles.0.to_vec()
    }
}

/// A tile list that is not exactly positions 1-9 in order.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Expected nine tiles in position order, got {}", count)]
pub struct MalformedTiles {
    /// Number of tiles received.
    pub count: usize,
}

impl TryFrom<Vec<Tile>> for Tiles {
    type Error = MalformedTiles;

    fn try_from(tiles: Vec<Tile>) -> Result<Self, Self::Error> {
        let count = tiles.len();
        let tiles: [Tile; 9] = tiles.try_into().map_err(|_| MalformedTiles { count })?;
        if tiles.iter().zip(Position::ALL).any(|(tile, pos)| tile.id != pos) {
            return Err(MalformedTiles { count });
        }
        Ok(Self(tiles))
    }
}

/// Formats the board as a human-readable grid, free squares showing
/// their number.
impl std::fmt::Display for Tiles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.0.chunks(3).enumerate() {
            let cells: Vec<String> = chunk
                .iter()
                .map(|tile| match tile.value {
                    Some(player) => player.to_string(),
                    None => tile.id.to_string(),
                })
                .collect();
            write!(f, "{}", cells.join("|"))?;
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
