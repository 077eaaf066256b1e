use rand::Rng;

use crate::auto_move::automatic_move;
use crate::board::Board;
use crate::direction::Direction;
use crate::error::GameError;
use crate::game_type::GameType;
use crate::outcome::{compute_points, is_game_over, GameOutcome, Points};
use crate::player::Player;
use crate::rules::{apply_move, possible_directions};

/// One game: its board, whose turn it is, and which sides are automated.
///
/// `active` is `None` once the game has ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    active: Option<Player>,
    game_type: GameType,
}

impl Game {
    pub fn new(dimension: usize, game_type: GameType) -> Result<Self, GameError> {
        Ok(Game {
            board: Board::new(dimension)?,
            active: Some(Player::One),
            game_type,
        })
    }

    /// Reassemble a game from stored parts.
    pub fn from_parts(board: Board, active: Option<Player>, game_type: GameType) -> Self {
        Game {
            board,
            active,
            game_type,
        }
    }

    pub fn into_parts(self) -> (Board, Option<Player>, GameType) {
        (self.board, self.active, self.game_type)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Player> {
        self.active
    }

    pub fn game_type(&self) -> GameType {
        self.game_type
    }

    pub fn points(&self) -> Points {
        compute_points(&self.board)
    }

    pub fn is_over(&self) -> bool {
        is_game_over(&self.board)
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        GameOutcome::of(&self.board)
    }

    pub fn possible_directions(&self, player: Player) -> Vec<Direction> {
        possible_directions(&self.board, player)
    }

    /// Move `player`'s marker. See [`apply_move`].
    pub fn make_move(
        &mut self,
        direction: Direction,
        player: Player,
    ) -> Result<Option<Player>, GameError> {
        self.active = apply_move(&mut self.board, self.active, direction, player)?;
        Ok(self.active)
    }

    /// Let the automated side play, if it is its turn. See [`automatic_move`].
    pub fn automatic_move<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<Player>, GameError> {
        self.active = automatic_move(&mut self.board, self.active, self.game_type, rng)?;
        Ok(self.active)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game {
            board: Board::default(),
            active: Some(Player::One),
            game_type: GameType::default(),
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let turn = match self.active {
            Some(player) => player.to_string(),
            None => "none".to_string(),
        };
        write!(
            f,
            "Game(type: {}, turn: {}, outcome: {:?})\n{}",
            self.game_type,
            turn,
            self.outcome(),
            self.board
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_game() {
        let game = Game::new(5, GameType::HumanVsHuman).unwrap();
        assert_eq!(game.active(), Some(Player::One));
        assert!(!game.is_over());
        assert!(game.outcome().is_none());
        assert_eq!(game.points(), Points { player_one: 1, player_two: 1 });
    }

    #[test]
    fn test_new_game_invalid_dimension() {
        assert_eq!(
            Game::new(200, GameType::HumanVsAi),
            Err(GameError::InvalidDimension(200))
        );
    }

    #[test]
    fn test_default() {
        let game = Game::default();
        assert_eq!(game.board().size(), 5);
        assert_eq!(game.game_type(), GameType::HumanVsAi);
        assert_eq!(game.active(), Some(Player::One));
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(5, GameType::HumanVsHuman).unwrap();
        assert_eq!(game.make_move(Direction::Right, Player::One), Ok(Some(Player::Two)));
        assert_eq!(game.make_move(Direction::Left, Player::Two), Ok(Some(Player::One)));
        assert_eq!(
            game.make_move(Direction::Down, Player::Two),
            Err(GameError::NotActivePlayer {
                requested: Player::Two,
                active: Player::One
            })
        );
        assert_eq!(game.active(), Some(Player::One));
    }

    #[test]
    fn test_rejected_move_keeps_state() {
        let mut game = Game::new(5, GameType::HumanVsHuman).unwrap();
        let before = game.clone();
        assert!(game.make_move(Direction::Left, Player::One).is_err());
        assert_eq!(game, before);
    }

    #[test]
    fn test_human_then_ai() {
        let mut game = Game::new(5, GameType::HumanVsAi).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        game.make_move(Direction::Down, Player::One).unwrap();
        assert_eq!(game.automatic_move(&mut rng), Ok(Some(Player::One)));
        assert_eq!(game.board().get(&Position::new(4, 4)), Some(-1));

        // Not the automated side's turn: nothing happens.
        let before = game.clone();
        assert_eq!(game.automatic_move(&mut rng), Ok(Some(Player::One)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_play_to_completion() {
        // Player one's last step walls player two out of the top row.
        let mut game = Game::new(3, GameType::HumanVsHuman).unwrap();
        let script = [
            (Direction::Down, Player::One, Some(Player::Two)),
            (Direction::Left, Player::Two, Some(Player::One)),
            (Direction::Right, Player::One, Some(Player::Two)),
            (Direction::Left, Player::Two, Some(Player::One)),
            (Direction::Right, Player::One, None),
        ];

        for (dir, player, expected) in script {
            assert_eq!(game.make_move(dir, player), Ok(expected));
        }

        assert_eq!(
            game.board().to_rows(),
            vec![vec![1, 1, 1], vec![1, 1, 2], vec![-2, -1, -1]]
        );
        assert!(game.is_over());
        assert_eq!(game.active(), None);
        assert_eq!(game.points(), Points { player_one: 6, player_two: 3 });
        assert_eq!(game.outcome(), Some(GameOutcome::PlayerOneWin));

        let finished = game.clone();
        for dir in Direction::ALL {
            assert_eq!(game.make_move(dir, Player::One), Ok(None));
            assert_eq!(game.make_move(dir, Player::Two), Ok(None));
        }
        assert_eq!(game, finished);
    }

    #[test]
    fn test_parts_roundtrip() {
        let game = Game::new(4, GameType::AiVsAi).unwrap();
        let (board, active, game_type) = game.clone().into_parts();
        assert_eq!(Game::from_parts(board, active, game_type), game);
    }
}
