//! Storage seam for games, keyed by id.

use std::collections::HashMap;

use crate::error::GameError;
use crate::game::Game;

pub type GameId = u64;

/// Loads and persists whole games. Implementations must round-trip board cell
/// values exactly.
pub trait GameStore {
    /// Persist a new game and return its id.
    fn create(&mut self, game: Game) -> Result<GameId, GameError>;

    fn load(&self, id: GameId) -> Result<Option<Game>, GameError>;

    /// Overwrite an existing game. Fails with `GameNotFound` for an unknown id.
    fn save(&mut self, id: GameId, game: &Game) -> Result<(), GameError>;
}

/// In-process store. Ids start at 1 and are never reused.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    games: HashMap<GameId, Game>,
    last_id: GameId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl GameStore for MemoryStore {
    fn create(&mut self, game: Game) -> Result<GameId, GameError> {
        self.last_id += 1;
        self.games.insert(self.last_id, game);
        Ok(self.last_id)
    }

    fn load(&self, id: GameId) -> Result<Option<Game>, GameError> {
        Ok(self.games.get(&id).cloned())
    }

    fn save(&mut self, id: GameId, game: &Game) -> Result<(), GameError> {
        match self.games.get_mut(&id) {
            Some(slot) => {
                *slot = game.clone();
                Ok(())
            }
            None => Err(GameError::GameNotFound(id)),
        }
    }
}
