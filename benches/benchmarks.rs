use criterion::{criterion_group, criterion_main, Criterion};
use enclosure::board::Board;
use enclosure::outcome::compute_points;
use enclosure::player::Player;
use enclosure::rules::{apply_move, possible_directions};
use enclosure::territory::update_territory;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

/// Play random moves on a fresh board to reach a mid-game position.
/// Uses a fixed seed for reproducibility across benchmark runs.
fn setup_midgame(size: usize, moves: usize) -> (Board, Option<Player>) {
    let mut board = Board::new(size).unwrap();
    let mut active = Some(Player::One);
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..moves {
        let Some(player) = active else {
            break;
        };
        let directions = possible_directions(&board, player);
        let Some(&dir) = directions.choose(&mut rng) else {
            break;
        };
        active = apply_move(&mut board, active, dir, player).unwrap();
    }
    (board, active)
}

fn random_playout(size: usize, seed: u64) -> Board {
    let mut board = Board::new(size).unwrap();
    let mut active = Some(Player::One);
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..size * size * 4 {
        let Some(player) = active else {
            break;
        };
        let directions = possible_directions(&board, player);
        let Some(&dir) = directions.choose(&mut rng) else {
            break;
        };
        active = apply_move(&mut board, active, dir, player).unwrap();
    }
    board
}

macro_rules! size_benches {
    ($($n:literal),*) => {
        paste::paste! {
            $(
                fn [<bench_update_territory_ $n x $n>](c: &mut Criterion) {
                    let (board, _) = setup_midgame($n, $n * 4);
                    c.bench_function(concat!("update_territory_", $n, "x", $n), |b| {
                        b.iter_batched(
                            || board.clone(),
                            |mut board| black_box(update_territory(&mut board)),
                            criterion::BatchSize::SmallInput,
                        )
                    });
                }

                fn [<bench_random_playout_ $n x $n>](c: &mut Criterion) {
                    c.bench_function(concat!("random_playout_", $n, "x", $n), |b| {
                        b.iter(|| black_box(compute_points(&random_playout($n, 123))))
                    });
                }
            )*

            criterion_group!(
                size_benches,
                $(
                    [<bench_update_territory_ $n x $n>],
                    [<bench_random_playout_ $n x $n>],
                )*
            );
        }
    };
}

size_benches!(5, 10, 25);

// ---------------------------------------------------------------------------
// Microbenchmarks
// ---------------------------------------------------------------------------

fn bench_possible_directions(c: &mut Criterion) {
    let (board, active) = setup_midgame(25, 100);
    let player = active.unwrap_or(Player::One);
    c.bench_function("possible_directions", |b| {
        b.iter(|| black_box(possible_directions(&board, player)))
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let (board, active) = setup_midgame(25, 100);
    let player = active.unwrap_or(Player::One);
    let dir = possible_directions(&board, player)[0];
    c.bench_function("apply_move", |b| {
        b.iter_batched(
            || board.clone(),
            |mut g| {
                black_box(apply_move(&mut g, active, dir, player).ok());
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_compute_points(c: &mut Criterion) {
    let (board, _) = setup_midgame(100, 500);
    c.bench_function("compute_points", |b| {
        b.iter(|| black_box(compute_points(&board)))
    });
}

criterion_group!(
    benches,
    bench_possible_directions,
    bench_apply_move,
    bench_compute_points,
);
criterion_main!(benches, size_benches);
