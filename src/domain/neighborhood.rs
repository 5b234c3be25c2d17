use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::Cell;

/// Ordered (left, center, right) triple of cells used as a rule lookup key.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Neighborhood {
    pub left: Cell,
    pub center: Cell,
    pub right: Cell,
}

/// Error returned when a neighborhood key such as `"011"` is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseNeighborhoodError {
    #[error("neighborhood key must be exactly 3 characters, got {0:?}")]
    Length(String),
    #[error("invalid character {0:?} in neighborhood key, expected '0' or '1'")]
    Character(char),
}

impl Neighborhood {
    pub const fn new(left: Cell, center: Cell, right: Cell) -> Self {
        Self { left, center, right }
    }

    /// Build from the key bits written left to right, e.g. `from_bits(0, 1, 1)` is "011".
    pub const fn from_bits(left: u8, center: u8, right: u8) -> Self {
        Self::new(
            Cell::from_bool(left != 0),
            Cell::from_bool(center != 0),
            Cell::from_bool(right != 0),
        )
    }

    /// Index in 0..8 with the left cell as the most significant bit
    pub const fn index(self) -> usize {
        ((self.left.bit() << 2) | (self.center.bit() << 1) | self.right.bit()) as usize
    }

    /// Inverse of [`Neighborhood::index`]. Only the low three bits are used.
    pub const fn from_index(index: usize) -> Self {
        Self::from_bits(
            ((index >> 2) & 1) as u8,
            ((index >> 1) & 1) as u8,
            (index & 1) as u8,
        )
    }

    /// All eight neighborhoods in index order ("000" first)
    pub fn all() -> [Neighborhood; 8] {
        std::array::from_fn(Neighborhood::from_index)
    }
}

impl fmt::Display for Neighborhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.left.bit(), self.center.bit(), self.right.bit())
    }
}

impl FromStr for Neighborhood {
    type Err = ParseNeighborhoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        let &[l, c, r] = chars.as_slice() else {
            return Err(ParseNeighborhoodError::Length(s.to_owned()));
        };

        let cell = |ch: char| match ch {
            '0' => Ok(Cell::Dead),
            '1' => Ok(Cell::Alive),
            other => Err(ParseNeighborhoodError::Character(other)),
        };

        Ok(Self::new(cell(l)?, cell(c)?, cell(r)?))
    }
}
