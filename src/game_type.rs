use std::str::FromStr;

use crate::error::GameError;
use crate::player::Player;

/// Which sides of a game are driven by the computer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GameType {
    HumanVsHuman,
    #[default]
    HumanVsAi,
    AiVsAi,
}

impl GameType {
    pub const ALL: [GameType; 3] = [GameType::HumanVsHuman, GameType::HumanVsAi, GameType::AiVsAi];

    pub fn name(&self) -> &'static str {
        match self {
            GameType::HumanVsHuman => "HUMAN_VS_HUMAN",
            GameType::HumanVsAi => "HUMAN_VS_AI",
            GameType::AiVsAi => "AI_VS_AI",
        }
    }

    /// True if `player`'s moves are chosen automatically. Only player two of a
    /// `HUMAN_VS_AI` game is automated.
    pub fn is_automated(&self, player: Player) -> bool {
        matches!((self, player), (GameType::HumanVsAi, Player::Two))
    }
}

impl FromStr for GameType {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| GameError::ParseGameType(s.to_string()))
    }
}

impl std::fmt::Display for GameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
