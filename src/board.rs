use std::fmt;

use crate::error::GameError;
use crate::player::Player;
use crate::position::Position;

/// Largest supported board side.
pub const MAX_DIMENSION: usize = 100;

/// Side of a board created without an explicit dimension.
pub const DEFAULT_DIMENSION: usize = 5;

/// Neutral cell value.
pub const NEUTRAL: i8 = 0;

/// An N×N grid stored row-major.
///
/// Cell values: `0` neutral, `±1` territory of player one / two, `±2` the
/// marker of player one / two. Markers also count as their owner's territory.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<i8>,
}

impl Board {
    /// Fresh board with player one's marker at `(0, 0)` and player two's at
    /// `(N-1, N-1)`.
    pub fn new(dimension: usize) -> Result<Self, GameError> {
        if !(1..=MAX_DIMENSION).contains(&dimension) {
            return Err(GameError::InvalidDimension(dimension));
        }
        let mut cells = vec![NEUTRAL; dimension * dimension];
        // On a 1×1 board both corners coincide; player one keeps it.
        cells[dimension * dimension - 1] = Player::Two.marker();
        cells[0] = Player::One.marker();
        Ok(Board {
            size: dimension,
            cells,
        })
    }

    /// Rebuild a board from its row-major rows, e.g. after loading it from
    /// storage. Rejects anything that is not square, out of range, or has more
    /// than one marker per player.
    pub fn from_rows(rows: Vec<Vec<i8>>) -> Result<Self, GameError> {
        let size = rows.len();
        if !(1..=MAX_DIMENSION).contains(&size) {
            return Err(GameError::InvalidDimension(size));
        }

        let mut cells = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(GameError::MalformedBoard(format!(
                    "row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    size
                )));
            }
            cells.extend(row);
        }

        if let Some(&bad) = cells.iter().find(|v| !(-2..=2).contains(*v)) {
            return Err(GameError::InvalidCell(bad));
        }

        for player in [Player::One, Player::Two] {
            let markers = cells.iter().filter(|&&v| v == player.marker()).count();
            if markers > 1 {
                return Err(GameError::MalformedBoard(format!(
                    "{} has {} markers",
                    player, markers
                )));
            }
        }

        Ok(Board { size, cells })
    }

    /// Row-major rows, the inverse of [`Board::from_rows`].
    pub fn to_rows(&self) -> Vec<Vec<i8>> {
        self.cells.chunks(self.size).map(|row| row.to_vec()).collect()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells, `N*N`.
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[i8] {
        &self.cells
    }

    #[inline]
    pub fn in_bounds(&self, pos: &Position) -> bool {
        pos.is_valid(self.size)
    }

    pub fn get(&self, pos: &Position) -> Option<i8> {
        if self.in_bounds(pos) {
            Some(self.cells[pos.to_index(self.size)])
        } else {
            None
        }
    }

    /// True iff the cell holds the opponent's territory or the opponent's
    /// marker. Off-board positions are not owned by anyone.
    pub fn owned_by_opponent(&self, pos: &Position, player: Player) -> bool {
        self.get(pos)
            .is_some_and(|value| player.opposite().owns(value))
    }

    /// Location of `player`'s marker, if the board has one.
    pub fn marker_position(&self, player: Player) -> Option<Position> {
        let marker = player.marker();
        self.cells
            .iter()
            .position(|&v| v == marker)
            .map(|idx| Position::from_index(idx, self.size))
    }

    #[inline]
    pub(crate) fn cell(&self, idx: usize) -> i8 {
        self.cells[idx]
    }

    /// Write a single cell. Caller guarantees `pos` is in bounds.
    #[inline]
    pub(crate) fn set(&mut self, pos: &Position, value: i8) {
        let idx = pos.to_index(self.size);
        self.cells[idx] = value;
    }

    #[inline]
    pub(crate) fn set_index(&mut self, idx: usize, value: i8) {
        self.cells[idx] = value;
    }
}

impl Default for Board {
    fn default() -> Self {
        let mut cells = vec![NEUTRAL; DEFAULT_DIMENSION * DEFAULT_DIMENSION];
        cells[0] = Player::One.marker();
        cells[DEFAULT_DIMENSION * DEFAULT_DIMENSION - 1] = Player::Two.marker();
        Board {
            size: DEFAULT_DIMENSION,
            cells,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            write!(f, "|")?;

            for &value in row {
                let c = match value {
                    2 => Player::One.to_char(),
                    -2 => Player::Two.to_char(),
                    1 => 'x',
                    -1 => 'o',
                    _ => '.',
                };

                write!(f, "{}", c)?;
                write!(f, "|")?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
