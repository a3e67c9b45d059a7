//! In-memory store of live games.
//!
//! Games are stored by reference: [`GameStore::get`] hands back the same
//! [`SharedGame`] that was put in, so moves registered through any handle
//! are visible through all of them.

use super::game::Game;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// A game shared between the store and its callers.
///
/// The mutex serializes moves against one game.
pub type SharedGame = Arc<Mutex<Game>>;

/// Wraps a game for storage.
pub fn share(game: Game) -> SharedGame {
    Arc::new(Mutex::new(game))
}

/// Locks a shared game, recovering it if a previous holder panicked.
///
/// `Game` validates before it mutates, so a poisoned game is still
/// consistent.
pub fn lock(game: &SharedGame) -> MutexGuard<'_, Game> {
    game.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Opaque identifier of a stored game: a random 128-bit UUID.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct GameId(Uuid);

impl GameId {
    /// Generates a fresh random identifier.
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Keyed container of independent games.
///
/// Cloning yields another handle onto the same games.
#[derive(Debug, Clone, Default)]
pub struct GameStore {
    games: Arc<Mutex<HashMap<GameId, SharedGame>>>,
}

impl GameStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game store");
        Self::default()
    }

    fn games(&self) -> MutexGuard<'_, HashMap<GameId, SharedGame>> {
        self.games.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores a game under a fresh identifier and returns the identifier.
    #[instrument(skip(self, game))]
    pub fn put(&self, game: SharedGame) -> GameId {
        let mut games = self.games();
        let mut id = GameId::new_v4();
        while games.contains_key(&id) {
            id = GameId::new_v4();
        }
        games.insert(id, game);
        info!(game_id = %id, "Stored game");
        id
    }

    /// Starts a new game, stores it and returns both handles.
    #[instrument(skip(self))]
    pub fn create(&self) -> (GameId, SharedGame) {
        let game = share(Game::new());
        let id = self.put(Arc::clone(&game));
        (id, game)
    }

    /// Looks up a game. Unknown or malformed identifiers yield `None`.
    ///
    /// Only the exact string [`put`](Self::put) returned matches; other
    /// spellings of the same UUID (uppercase, simple, braced, URN) do not.
    #[instrument(skip(self))]
    pub fn get(&self, id: &str) -> Option<SharedGame> {
        let game = id
            .parse::<GameId>()
            .ok()
            .filter(|parsed| parsed.to_string() == id)
            .and_then(|id| self.games().get(&id).cloned());

        if game.is_none() {
            debug!(game_id = id, "Game not found");
        }

        game
    }

    /// Removes every game.
    #[instrument(skip(self))]
    pub fn flush_all(&self) {
        let mut games = self.games();
        let count = games.len();
        games.clear();
        info!(count, "Flushed all games");
    }

    /// Number of stored games.
    pub fn len(&self) -> usize {
        self.games().len()
    }

    /// Whether the store holds no games.
    pub fn is_empty(&self) -> bool {
        self.games().is_empty()
    }
}
