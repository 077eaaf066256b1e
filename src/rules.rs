//! Move legality and marker movement.

use tracing::{debug, instrument, warn};

use crate::board::Board;
use crate::direction::Direction;
use crate::error::GameError;
use crate::outcome::is_game_over;
use crate::player::Player;
use crate::position::Position;
use crate::territory::update_territory;

/// A target cell is available if it is on the board and not owned by the
/// opponent (territory or marker).
fn is_cell_available(board: &Board, pos: &Position, player: Player) -> bool {
    board.in_bounds(pos) && !board.owned_by_opponent(pos, player)
}

/// Directions `player`'s marker may move in. Empty if the player has no
/// marker or is boxed in.
pub fn possible_directions(board: &Board, player: Player) -> Vec<Direction> {
    let Some(current) = board.marker_position(player) else {
        return Vec::new();
    };

    Direction::ALL
        .into_iter()
        .filter(|dir| is_cell_available(board, &dir.next_position(current), player))
        .collect()
}

/// Check a step without touching the board. Returns the marker's current and
/// target positions.
pub fn validate_move(
    board: &Board,
    direction: Direction,
    player: Player,
) -> Result<(Position, Position), GameError> {
    let current = board
        .marker_position(player)
        .ok_or(GameError::MarkerNotFound(player))?;
    let target = direction.next_position(current);

    if !board.in_bounds(&target) {
        return Err(GameError::OutOfBounds {
            from: current,
            direction,
        });
    }
    if board.owned_by_opponent(&target, player) {
        return Err(GameError::CellOccupiedByOpponent(target));
    }

    Ok((current, target))
}

/// Move `player`'s marker one step and resolve enclosures.
///
/// `active` is the side whose turn it is, `None` once the game is over. On
/// success returns the next active player: `None` if the move filled the
/// board, otherwise the opponent. A finished game is a no-op returning `None`.
/// On error the board is left unchanged.
#[instrument(skip(board), fields(size = board.size()))]
pub fn apply_move(
    board: &mut Board,
    active: Option<Player>,
    direction: Direction,
    player: Player,
) -> Result<Option<Player>, GameError> {
    let Some(active) = active else {
        return Ok(None);
    };
    if player != active {
        warn!(%player, %active, "move requested out of turn");
        return Err(GameError::NotActivePlayer {
            requested: player,
            active,
        });
    }
    if is_game_over(board) {
        return Ok(None);
    }

    let (current, target) = validate_move(board, direction, player).inspect_err(|err| {
        warn!(%err, "move rejected");
    })?;

    board.set(&current, player.territory());
    board.set(&target, player.marker());
    debug!("after move\n{}", board);

    update_territory(board);
    debug!("after enclosure\n{}", board);

    if is_game_over(board) {
        Ok(None)
    } else {
        Ok(Some(active.opposite()))
    }
}
