//! The rules enforcer for a single game of tic-tac-toe.

use super::action::{Move, MoveError};
use super::position::Position;
use super::rules::{check_winner, is_full};
use super::tiles::{self, Tiles};
use super::types::{GameState, GameStatus, Player};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine. X starts every game.
///
/// A game only changes through [`Game::register_move`], which either
/// applies the move or rejects it without touching the board. Once the
/// game is [`GameStatus::Over`] every further move is rejected.
///
/// ```
/// use noughts_engine::{Game, GameStatus, Player};
///
/// let mut game = Game::new();
/// game.register_move(Player::X, 1)?
///     .register_move(Player::O, 5)?
///     .register_move(Player::X, 2)?;
///
/// assert_eq!(game.current_player(), Some(Player::O));
/// assert_eq!(game.status(), GameStatus::Ongoing);
/// # Ok::<(), noughts_engine::MoveError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    state: GameState,
    status: GameStatus,
    winner: Option<Player>,
    current_player: Option<Player>,
    available_moves: Vec<Position>,
}

impl Game {
    /// Creates a new game: nothing claimed, X to move.
    #[instrument]
    pub fn new() -> Self {
        let state = GameState::new();
        let available_moves = state.empty_positions();
        Self {
            current_player: Some(state.current_player()),
            state,
            status: GameStatus::Ongoing,
            winner: None,
            available_moves,
        }
    }

    /// Rebuilds a game by registering `moves` in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] any move triggers.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for mv in moves {
            game.register_move(mv.player, mv.position)?;
        }
        Ok(game)
    }

    /// Attempts to apply one player's move and returns the game to allow
    /// chaining.
    ///
    /// `player` may be a [`Player`] or a symbol (`"X"`, `'O'`); `position`
    /// may be a [`Position`] or its number.
    ///
    /// # Errors
    ///
    /// Checked in this order, first failure wins; the game is left
    /// untouched on error:
    ///
    /// 1. [`MoveError::GameOver`] if no moves remain.
    /// 2. [`MoveError::InvalidPlayer`] if `player` is not X or O.
    /// 3. [`MoveError::IncorrectPlayer`] if it is the other player's turn.
    /// 4. [`MoveError::InvalidPosition`] if `position` is outside 1-9.
    /// 5. [`MoveError::PositionUnavailable`] if `position` is taken.
    #[instrument(skip_all, fields(move_count = self.state.move_count()))]
    pub fn register_move<P, Q>(&mut self, player: P, position: Q) -> Result<&mut Self, MoveError>
    where
        P: TryInto<Player>,
        Q: TryInto<Position>,
        MoveError: From<P::Error> + From<Q::Error>,
    {
        if self.available_moves.is_empty() {
            warn!("Move attempted after game over");
            return Err(MoveError::GameOver);
        }

        let player: Player = player.try_into()?;

        let expected = self.state.current_player();
        if player != expected {
            warn!(%player, %expected, "Move attempted out of turn");
            return Err(MoveError::IncorrectPlayer(expected));
        }

        let position: Position = position.try_into()?;

        let empty = self.state.empty_positions();
        if !empty.contains(&position) {
            warn!(%player, %position, "Move attempted on unavailable position");
            return Err(MoveError::PositionUnavailable(empty));
        }

        self.state.push(player, position);
        debug!(%player, %position, "Move registered");
        self.update_status();

        Ok(self)
    }

    /// Re-derives winner, turn and free positions after a move.
    fn update_status(&mut self) {
        self.winner = check_winner(&self.state);

        if self.winner.is_none() && !is_full(&self.state) {
            self.available_moves = self.state.empty_positions();
            self.current_player = Some(self.state.current_player());
        } else {
            self.available_moves.clear();
            self.current_player = None;
            self.status = GameStatus::Over;
            info!(winner = ?self.winner, "Game over");
        }
    }

    /// Whether another move can be made.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the game has concluded.
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    /// The winner, or `None` while ongoing or after a draw.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Whose turn it is, or `None` once the game is over.
    pub fn current_player(&self) -> Option<Player> {
        self.current_player
    }

    /// Positions still open for play, ascending. Empty once the game is
    /// over, even if squares remain unclaimed.
    pub fn available_moves(&self) -> &[Position] {
        &self.available_moves
    }

    /// Claimed positions and who holds them.
    pub fn occupied_moves(&self) -> BTreeMap<Position, Player> {
        self.state.occupied_positions()
    }

    /// The positions `player` has claimed, in the order claimed.
    pub fn moves(&self, player: Player) -> &[Position] {
        self.state.moves(player)
    }

    /// The underlying per-player move record.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Reconstructs the overall move order.
    ///
    /// Play strictly alternates starting with X, so interleaving the two
    /// per-player sequences recovers it.
    pub fn history(&self) -> Vec<Move> {
        let x = self.state.moves(Player::X);
        let o = self.state.moves(Player::O);
        let mut history = Vec::with_capacity(x.len() + o.len());
        for (i, pos) in x.iter().enumerate() {
            history.push(Move::new(Player::X, *pos));
            if let Some(reply) = o.get(i) {
                history.push(Move::new(Player::O, *reply));
            }
        }
        history
    }

    /// The positional board summary.
    pub fn tiles(&self) -> Tiles {
        tiles::project(&self.occupied_moves())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
