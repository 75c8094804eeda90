use std::num::NonZero;

use ndarray::Ix;

pub(crate) type Coord = usize;
/// A grid extent along one axis. Grids are never empty.
pub type Dimension = NonZero<Coord>;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// A location `(x, y)` on a grid. The top left corner is `Location(0, 0)`; `x` grows to the right and `y` grows downward.
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// The `(row, column)` index of this location in an [`ndarray::Array2`].
    pub fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    /// Offset this location, wrapping on underflow.
    ///
    /// A wrapped coordinate is huge and so always falls outside the grid; lookups treat it like any other out-of-bounds cell.
    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    /// Whether `self` and `other` differ by exactly one unit along exactly one axis.
    pub fn is_orthogonally_adjacent(&self, other: &Location) -> bool {
        self.0.abs_diff(other.0) + self.1.abs_diff(other.1) == 1
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1, value.0)
    }
}
