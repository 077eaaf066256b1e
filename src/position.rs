/// A grid coordinate. Signed so that a step off the top or left edge is still
/// representable and can be rejected by a bounds check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i16,
    pub col: i16,
}

impl Position {
    pub fn new(row: i16, col: i16) -> Self {
        Position { row, col }
    }

    pub fn from_index(index: usize, size: usize) -> Self {
        Position {
            row: (index / size) as i16,
            col: (index % size) as i16,
        }
    }

    /// Row-major index. Only meaningful for a position that `is_valid`.
    pub fn to_index(&self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    pub fn is_valid(&self, size: usize) -> bool {
        self.row >= 0 && self.col >= 0 && (self.row as usize) < size && (self.col as usize) < size
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
