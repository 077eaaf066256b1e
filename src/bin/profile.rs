//! Seeded random self-play for profiling. Build with `--features hotpath` to
//! get per-function timings.

use enclosure::board::Board;
use enclosure::outcome::{compute_points, GameOutcome};
use enclosure::player::Player;
use enclosure::rules::{apply_move, possible_directions};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const GAMES: u64 = 200;
const MAX_TURNS: usize = 2_000;
const SIZES: [usize; 3] = [5, 10, 25];

/// Random self-play until the board fills, a side is boxed in, or the turn
/// limit is hit.
#[hotpath::measure]
fn playout(size: usize, seed: u64) -> Option<(Board, usize)> {
    let mut board = Board::new(size).ok()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut active = Some(Player::One);
    let mut turns = 0;

    while let Some(player) = active {
        if turns >= MAX_TURNS {
            break;
        }
        let directions = possible_directions(&board, player);
        let Some(&dir) = directions.choose(&mut rng) else {
            break;
        };
        match apply_move(&mut board, active, dir, player) {
            Ok(next) => active = next,
            Err(err) => {
                warn!(%err, "legal direction was rejected");
                break;
            }
        }
        turns += 1;
    }

    Some((board, turns))
}

#[hotpath::main]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    for size in SIZES {
        let mut finished = 0;
        let mut wins = [0usize; 3];
        let mut total_turns = 0;

        for seed in 0..GAMES {
            let Some((board, turns)) = playout(size, seed) else {
                continue;
            };
            total_turns += turns;

            if let Some(outcome) = GameOutcome::of(&board) {
                finished += 1;
                let slot = match outcome {
                    GameOutcome::PlayerOneWin => 0,
                    GameOutcome::PlayerTwoWin => 1,
                    GameOutcome::Draw => 2,
                };
                wins[slot] += 1;
            } else {
                let points = compute_points(&board);
                info!(size, seed, turns, ?points, "playout stopped before the end");
            }
        }

        info!(
            size,
            games = GAMES,
            finished,
            player_one_wins = wins[0],
            player_two_wins = wins[1],
            draws = wins[2],
            avg_turns = total_turns as f64 / GAMES as f64,
            "random playouts"
        );
    }
}
