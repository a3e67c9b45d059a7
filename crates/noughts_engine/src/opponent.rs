//! Computer opponents.

use super::action::MoveError;
use super::game::Game;
use super::position::Position;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Chooses and plays moves for the automated side of a game.
///
/// An opponent never decides which symbol it plays: it always moves as
/// the game's current player.
pub trait Opponent: std::fmt::Debug + Send + Sync {
    /// Picks a position from the game's available moves, or `None` if
    /// there are none.
    fn choose(&self, game: &Game) -> Option<Position>;

    /// Plays one move as the current player and returns the position
    /// taken. Does nothing once the game is over.
    ///
    /// # Errors
    ///
    /// Propagates [`MoveError`] from [`Game::register_move`]; an opponent
    /// choosing from [`Game::available_moves`] never triggers one.
    fn play(&self, game: &mut Game) -> Result<Option<Position>, MoveError> {
        let Some(player) = game.current_player() else {
            return Ok(None);
        };
        let Some(position) = self.choose(game) else {
            return Ok(None);
        };
        game.register_move(player, position)?;
        debug!(opponent = ?self, %player, %position, "Opponent moved");
        Ok(Some(position))
    }
}

/// Picks uniformly among the available moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomOpponent;

impl RandomOpponent {
    /// Chooses with the supplied random source.
    #[instrument(skip(game, rng))]
    pub fn choose_with<R: Rng + ?Sized>(game: &Game, rng: &mut R) -> Option<Position> {
        game.available_moves().choose(rng).copied()
    }
}

impl Opponent for RandomOpponent {
    fn choose(&self, game: &Game) -> Option<Position> {
        Self::choose_with(game, &mut rand::rng())
    }
}

/// Always takes the lowest-numbered available position.
///
/// Deterministic, which makes whole games reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAvailable;

impl Opponent for FirstAvailable {
    fn choose(&self, game: &Game) -> Option<Position> {
        game.available_moves().first().copied()
    }
}
