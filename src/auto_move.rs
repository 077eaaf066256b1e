//! Random move policy for computer-controlled sides.

use rand::prelude::IndexedRandom;
use rand::Rng;
use tracing::{debug, instrument, warn};

use crate::board::Board;
use crate::direction::Direction;
use crate::error::GameError;
use crate::game_type::GameType;
use crate::player::Player;
use crate::rules::{apply_move, possible_directions};

/// Pick one of `player`'s legal directions uniformly at random.
pub fn choose_direction<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    rng: &mut R,
) -> Option<Direction> {
    possible_directions(board, player).choose(rng).copied()
}

/// Play the automated side's turn, if it is its turn.
///
/// Does nothing unless `active` is an automated player for `game_type`. A
/// stuck automated side also does nothing: the turn does not pass. Otherwise
/// returns the next active player from [`apply_move`].
#[instrument(skip(board, rng), fields(size = board.size()))]
pub fn automatic_move<R: Rng + ?Sized>(
    board: &mut Board,
    active: Option<Player>,
    game_type: GameType,
    rng: &mut R,
) -> Result<Option<Player>, GameError> {
    let Some(player) = active.filter(|p| game_type.is_automated(*p)) else {
        return Ok(active);
    };

    match choose_direction(board, player, rng) {
        Some(direction) => {
            debug!(%direction, "automatic move");
            apply_move(board, active, direction, player)
        }
        None => {
            warn!(%player, "automated player has no legal move");
            Ok(active)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_noop_for_human_turn() {
        let mut board = Board::new(5).unwrap();
        let before = board.clone();
        let mut rng = StdRng::seed_from_u64(7);

        let active = automatic_move(&mut board, Some(Player::One), GameType::HumanVsAi, &mut rng);
        assert_eq!(active, Ok(Some(Player::One)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_noop_outside_human_vs_ai() {
        let mut board = Board::new(5).unwrap();
        let before = board.clone();
        let mut rng = StdRng::seed_from_u64(7);

        for game_type in [GameType::HumanVsHuman, GameType::AiVsAi] {
            let active = automatic_move(&mut board, Some(Player::Two), game_type, &mut rng);
            assert_eq!(active, Ok(Some(Player::Two)));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_noop_when_finished() {
        let mut board = Board::from_rows(vec![vec![2, 1], vec![-1, -2]]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            automatic_move(&mut board, None, GameType::HumanVsAi, &mut rng),
            Ok(None)
        );
    }

    #[test]
    fn test_plays_for_player_two() {
        let mut board = Board::new(5).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let active = automatic_move(&mut board, Some(Player::Two), GameType::HumanVsAi, &mut rng);
        assert_eq!(active, Ok(Some(Player::One)));
        assert_eq!(board.get(&Position::new(4, 4)), Some(-1));

        let marker = board.marker_position(Player::Two).unwrap();
        assert!(marker == Position::new(3, 4) || marker == Position::new(4, 3));
    }

    #[test]
    fn test_seeded_choice_is_reproducible() {
        let board = Board::new(5).unwrap();
        let legal = possible_directions(&board, Player::Two);
        assert_eq!(legal.len(), 2);

        for seed in 0..20u64 {
            let mut first = board.clone();
            let mut second = board.clone();
            let mut rng_a = StdRng::seed_from_u64(seed);
            let mut rng_b = StdRng::seed_from_u64(seed);

            automatic_move(&mut first, Some(Player::Two), GameType::HumanVsAi, &mut rng_a).unwrap();
            automatic_move(&mut second, Some(Player::Two), GameType::HumanVsAi, &mut rng_b).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_choice_covers_exactly_the_legal_set() {
        let board = Board::new(5).unwrap();
        let legal = possible_directions(&board, Player::Two);
        let mut seen = Vec::new();

        for seed in 0..200u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let dir = choose_direction(&board, Player::Two, &mut rng).unwrap();
            assert!(legal.contains(&dir));
            if !seen.contains(&dir) {
                seen.push(dir);
            }
        }
        assert_eq!(seen.len(), legal.len());
    }

    #[test]
    fn test_stuck_player_keeps_turn() {
        let mut board = Board::from_rows(vec![
            vec![2, 0, 0],
            vec![0, 0, 1],
            vec![0, 1, -2],
        ])
        .unwrap();
        let before = board.clone();
        let mut rng = StdRng::seed_from_u64(1);

        let active = automatic_move(&mut board, Some(Player::Two), GameType::HumanVsAi, &mut rng);
        assert_eq!(active, Ok(Some(Player::Two)));
        assert_eq!(board, before);
    }
}
