//! Noughts engine - tic-tac-toe rules, storage and a computer opponent
//!
//! # Architecture
//!
//! - **Game**: enforces the rules for one game (turns, legality, outcome)
//! - **Tiles**: the nine-square board summary sent to clients
//! - **Store**: keeps many independent games addressable by id
//! - **Opponent**: plays the automated side
//!
//! # Example
//!
//! ```
//! use noughts_engine::{GameStore, Opponent, Player, RandomOpponent, lock};
//!
//! let store = GameStore::new();
//! let (id, game) = store.create();
//!
//! {
//!     let mut game = lock(&game);
//!     game.register_move(Player::X, 5)?;
//!     RandomOpponent.play(&mut game)?;
//! }
//!
//! let again = store.get(&id.to_string()).expect("stored");
//! assert_eq!(lock(&again).state().move_count(), 2);
//! # Ok::<(), noughts_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod opponent;
mod position;
pub mod rules;
mod store;
pub mod tiles;
mod types;

pub use action::{Move, MoveError, MoveErrorClass};
pub use game::Game;
pub use opponent::{FirstAvailable, Opponent, RandomOpponent};
pub use position::Position;
pub use store::{GameId, GameStore, SharedGame, lock, share};
pub use tiles::{MalformedTiles, Tile, Tiles};
pub use types::{GameState, GameStatus, Player};
