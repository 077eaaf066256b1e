//! Enclosure: neutral cells that only one player can still reach become that
//! player's territory.

use std::collections::VecDeque;

use tracing::{debug, instrument};

use crate::bitmask::Bitmask;
use crate::board::{Board, NEUTRAL};
use crate::direction::Direction;
use crate::player::Player;
use crate::position::Position;

fn neighbors_on_board(idx: usize, size: usize) -> impl Iterator<Item = usize> {
    let pos = Position::from_index(idx, size);
    Direction::ALL
        .into_iter()
        .map(move |dir| dir.next_position(pos))
        .filter(move |next| next.is_valid(size))
        .map(move |next| next.to_index(size))
}

/// Cells reachable from `player`'s marker through neutral cells and cells
/// the player already owns. Empty if the player has no marker.
pub fn reachable_from(board: &Board, player: Player) -> Bitmask {
    let size = board.size();
    let mut reach = Bitmask::new(board.area());

    let Some(start) = board.marker_position(player) else {
        return reach;
    };

    let start = start.to_index(size);
    reach.set(start);
    let mut queue = VecDeque::from([start]);

    while let Some(idx) = queue.pop_front() {
        for neighbor in neighbors_on_board(idx, size) {
            let value = board.cell(neighbor);
            if (value == NEUTRAL || player.owns(value)) && reach.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    reach
}

/// Convert every neutral cell reachable by exactly one player into that
/// player's territory. Markers and claimed cells are never touched.
///
/// Returns the number of cells converted.
#[instrument(skip(board), fields(size = board.size()))]
pub fn update_territory(board: &mut Board) -> usize {
    let reach_one = reachable_from(board, Player::One);
    let reach_two = reachable_from(board, Player::Two);

    let mut converted = 0;
    for (player, exclusive) in [
        (Player::One, reach_one.difference(&reach_two)),
        (Player::Two, reach_two.difference(&reach_one)),
    ] {
        for idx in exclusive.iter_ones() {
            if board.cell(idx) == NEUTRAL {
                board.set_index(idx, player.territory());
                converted += 1;
            }
        }
    }

    debug!(
        converted,
        contested = (&reach_one & &reach_two).count(),
        "enclosure applied"
    );
    converted
}
