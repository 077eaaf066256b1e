/// One of the two sides. The discriminant is the player's identity on the
/// board: territory cells hold the discriminant, the marker holds twice it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Player {
    One = 1,
    Two = -1,
}

impl Player {
    pub fn opposite(&self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Cell value of a territory cell owned by this player.
    #[inline]
    pub fn territory(&self) -> i8 {
        *self as i8
    }

    /// Cell value of this player's marker.
    #[inline]
    pub fn marker(&self) -> i8 {
        2 * (*self as i8)
    }

    /// True if `value` is owned by this player, marker included.
    #[inline]
    pub fn owns(&self, value: i8) -> bool {
        value == self.territory() || value == self.marker()
    }

    pub fn to_char(&self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }

    pub fn from_int(i: i8) -> Option<Player> {
        match i {
            1 => Some(Player::One),
            -1 => Some(Player::Two),
            _ => None,
        }
    }
}

/// Wire encoding of the active player: `1`, `-1`, or `0` once the game is over.
pub fn encode_active(active: Option<Player>) -> i8 {
    active.map_or(0, |p| p as i8)
}

/// Inverse of [`encode_active`]. Returns `Err(value)` for anything other than
/// `1`, `-1`, or `0`.
pub fn decode_active(value: i8) -> Result<Option<Player>, i8> {
    match value {
        0 => Ok(None),
        other => Player::from_int(other).map(Some).ok_or(other),
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let player_str = match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        };
        write!(f, "{}", player_str)
    }
}
