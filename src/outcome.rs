use crate::board::Board;
use crate::player::Player;

/// Cells owned by each player, markers included.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Points {
    pub player_one: usize,
    pub player_two: usize,
}

impl Points {
    pub fn total(&self) -> usize {
        self.player_one + self.player_two
    }

    pub fn for_player(&self, player: Player) -> usize {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }
}

/// Count claimed cells: positive values for player one, negative for player two.
pub fn compute_points(board: &Board) -> Points {
    board
        .cells()
        .iter()
        .fold(Points::default(), |mut points, &value| {
            if value > 0 {
                points.player_one += 1;
            } else if value < 0 {
                points.player_two += 1;
            }
            points
        })
}

/// True once no neutral cell remains.
pub fn is_game_over(board: &Board) -> bool {
    compute_points(board).total() == board.area()
}

/// Final result of a terminal board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

impl GameOutcome {
    /// Outcome of `board`, or `None` while neutral cells remain.
    pub fn of(board: &Board) -> Option<GameOutcome> {
        let points = compute_points(board);
        if points.total() != board.area() {
            return None;
        }
        Some(Self::from_points(points))
    }

    pub fn from_points(points: Points) -> GameOutcome {
        use std::cmp::Ordering;
        match points.player_one.cmp(&points.player_two) {
            Ordering::Greater => GameOutcome::PlayerOneWin,
            Ordering::Less => GameOutcome::PlayerTwoWin,
            Ordering::Equal => GameOutcome::Draw,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::PlayerOneWin => Some(Player::One),
            GameOutcome::PlayerTwoWin => Some(Player::Two),
            GameOutcome::Draw => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, GameOutcome::Draw)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::PlayerOneWin => write!(f, "Player 1 wins"),
            GameOutcome::PlayerTwoWin => write!(f, "Player 2 wins"),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}
