//! Errors raised by the engine and its collaborators.
//!
//! Every variant is detected synchronously and leaves the board untouched.

use crate::direction::Direction;
use crate::player::Player;
use crate::position::Position;
use crate::store::GameId;

/// Error returned by board construction, move validation and the session flows.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Board dimension outside `1..=max`.
    #[display("Invalid board dimension {}", _0)]
    InvalidDimension(usize),

    /// The requesting player is not the one whose turn it is.
    #[display("{} is not the active player ({} is)", requested, active)]
    NotActivePlayer { requested: Player, active: Player },

    /// The step would leave the grid.
    #[display("Moving {} from {} leaves the board", direction, from)]
    OutOfBounds { from: Position, direction: Direction },

    /// The target cell is opponent territory or the opponent's marker.
    #[display("Cell {} is occupied by the opponent", _0)]
    CellOccupiedByOpponent(Position),

    /// The player has no marker on the board. Indicates a corrupted board.
    #[display("Unable to find the marker of {}", _0)]
    MarkerNotFound(Player),

    /// A stored cell value outside `-2..=2`.
    #[display("Invalid cell value {}", _0)]
    InvalidCell(i8),

    /// A stored board with the wrong shape or marker count.
    #[display("Malformed board: {}", _0)]
    MalformedBoard(String),

    #[display("Unknown direction {:?}", _0)]
    ParseDirection(String),

    #[display("Unknown game type {:?}", _0)]
    ParseGameType(String),

    #[display("Invalid player number {}", _0)]
    InvalidPlayer(i8),

    #[display("No game found with id {}", _0)]
    GameNotFound(GameId),

    #[display("Invalid configuration: {}", _0)]
    Config(String),
}

impl std::error::Error for GameError {}
