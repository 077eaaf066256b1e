//! Request-level flows: load a game, apply a move, let the automated side
//! reply, persist, and report.

use rand::Rng;
use tracing::{info, instrument};

use crate::board::Board;
use crate::config::EngineConfig;
use crate::direction::Direction;
use crate::error::GameError;
use crate::game::Game;
use crate::game_type::GameType;
use crate::player::{encode_active, Player};
use crate::store::{GameId, GameStore};

/// What a caller gets back after every request.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub id: GameId,
    /// `1`, `-1`, or `0` once the game is over.
    #[cfg_attr(feature = "serde", serde(rename = "activePlayer"))]
    pub active_player: i8,
    #[cfg_attr(feature = "serde", serde(rename = "gameType"))]
    pub game_type: GameType,
    pub board: Board,
    #[cfg_attr(feature = "serde", serde(rename = "player1Points"))]
    pub player_one_points: usize,
    #[cfg_attr(feature = "serde", serde(rename = "player2Points"))]
    pub player_two_points: usize,
}

impl GameSnapshot {
    pub fn new(id: GameId, game: &Game) -> Self {
        let points = game.points();
        GameSnapshot {
            id,
            active_player: encode_active(game.active()),
            game_type: game.game_type(),
            board: game.board().clone(),
            player_one_points: points.player_one,
            player_two_points: points.player_two,
        }
    }
}

fn load_existing<S: GameStore + ?Sized>(store: &S, id: GameId) -> Result<Game, GameError> {
    store.load(id)?.ok_or(GameError::GameNotFound(id))
}

/// Fetch a game, creating a default one when `id` is `None`.
///
/// Loading an existing game gives the automated side a chance to play; the
/// game is only written back if that changed whose turn it is.
#[instrument(skip(store, config, rng))]
pub fn load_game<S, R>(
    store: &mut S,
    config: &EngineConfig,
    id: Option<GameId>,
    rng: &mut R,
) -> Result<GameSnapshot, GameError>
where
    S: GameStore + ?Sized,
    R: Rng + ?Sized,
{
    let Some(id) = id else {
        let game = config.default_game()?;
        let id = store.create(game.clone())?;
        info!(id, game_type = %game.game_type(), "created game");
        return Ok(GameSnapshot::new(id, &game));
    };

    let mut game = load_existing(store, id)?;
    let before = game.active();
    if game.automatic_move(rng)? != before {
        store.save(id, &game)?;
    }
    Ok(GameSnapshot::new(id, &game))
}

/// Apply `player`'s move to game `id`, then let the automated side reply.
/// Nothing is persisted if the move is rejected.
#[instrument(skip(store, rng))]
pub fn play_move<S, R>(
    store: &mut S,
    id: GameId,
    direction: Direction,
    player: Player,
    rng: &mut R,
) -> Result<GameSnapshot, GameError>
where
    S: GameStore + ?Sized,
    R: Rng + ?Sized,
{
    let mut game = load_existing(store, id)?;
    game.make_move(direction, player)?;
    game.automatic_move(rng)?;
    store.save(id, &game)?;
    Ok(GameSnapshot::new(id, &game))
}

/// Like [`play_move`], taking the raw direction token and player number a
/// request carries.
pub fn play_move_str<S, R>(
    store: &mut S,
    id: GameId,
    direction: &str,
    player: i8,
    rng: &mut R,
) -> Result<GameSnapshot, GameError>
where
    S: GameStore + ?Sized,
    R: Rng + ?Sized,
{
    let direction: Direction = direction.parse()?;
    let player = Player::from_int(player).ok_or(GameError::InvalidPlayer(player))?;
    play_move(store, id, direction, player, rng)
}
