/// Identifies one color of the palette. Colors are compared by identity only.
pub type ColorId = usize;

/// One cell of a token grid.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// A token of the given color sits here.
    Token {
        /// Palette index of the token.
        color: ColorId,
    },
    /// Nothing here.
    #[default]
    Empty,
}

impl Cell {
    /// The color of the token here, if any.
    pub fn color(&self) -> Option<ColorId> {
        match self {
            Cell::Token { color } => Some(*color),
            Cell::Empty => None,
        }
    }

    /// Whether no token sits here.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Option<ColorId>> for Cell {
    fn from(value: Option<ColorId>) -> Self {
        match value {
            Some(color) => Cell::Token { color },
            None => Cell::Empty,
        }
    }
}

/// One cell of an occupancy grid, as consumed by the pathfinder.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupancy {
    /// A token or wall; the search cannot enter.
    Blocked,
    /// Free to pass through.
    #[default]
    Empty,
}

impl From<&Cell> for Occupancy {
    fn from(value: &Cell) -> Self {
        match value {
            Cell::Token { .. } => Occupancy::Blocked,
            Cell::Empty => Occupancy::Empty,
        }
    }
}

impl From<bool> for Occupancy {
    /// `true` means blocked.
    fn from(blocked: bool) -> Self {
        if blocked { Occupancy::Blocked } else { Occupancy::Empty }
    }
}
