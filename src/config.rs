//! Engine settings.

use crate::board::{DEFAULT_DIMENSION, MAX_DIMENSION};
use crate::error::GameError;
use crate::game::Game;
use crate::game_type::GameType;

/// Limits and defaults for new games.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Largest board side accepted. Capped at [`MAX_DIMENSION`].
    pub max_dimension: usize,
    /// Side of a game created without an explicit size.
    pub default_dimension: usize,
    pub default_game_type: GameType,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_dimension: MAX_DIMENSION,
            default_dimension: DEFAULT_DIMENSION,
            default_game_type: GameType::HumanVsAi,
        }
    }
}

impl EngineConfig {
    #[cfg(feature = "serde")]
    pub fn from_toml_str(s: &str) -> Result<Self, GameError> {
        let config: EngineConfig =
            toml::from_str(s).map_err(|e| GameError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if !(1..=MAX_DIMENSION).contains(&self.max_dimension) {
            return Err(GameError::Config(format!(
                "max_dimension must be between 1 and {}",
                MAX_DIMENSION
            )));
        }
        if !(1..=self.max_dimension).contains(&self.default_dimension) {
            return Err(GameError::Config(format!(
                "default_dimension must be between 1 and {}",
                self.max_dimension
            )));
        }
        Ok(())
    }

    /// New game of side `dimension`, checked against this config's limit.
    pub fn new_game(&self, dimension: usize, game_type: GameType) -> Result<Game, GameError> {
        if dimension > self.max_dimension.min(MAX_DIMENSION) {
            return Err(GameError::InvalidDimension(dimension));
        }
        Game::new(dimension, game_type)
    }

    pub fn default_game(&self) -> Result<Game, GameError> {
        self.new_game(self.default_dimension, self.default_game_type)
    }
}
