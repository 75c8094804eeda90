use std::hash::Hash;

use strum::VariantArray;

use crate::location::Location;

/// A unit move on the grid.
pub trait Step: Sized + Copy + VariantArray + PartialEq + Eq + Hash {
    /// The `(dx, dy)` offset this step applies.
    fn offset(&self) -> (isize, isize);

    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// The result may lie outside the grid; callers check bounds on lookup.
    fn attempt_from(&self, location: Location) -> Location {
        location.offset_by(self.offset())
    }
}

/// The four orthogonal steps between 4-adjacent cells.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum SquareStep {
    /// Toward row 0.
    Up,
    /// Away from row 0.
    Down,
    /// Toward column 0.
    Left,
    /// Away from column 0.
    Right,
}

impl Step for SquareStep {
    fn offset(&self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

impl SquareStep {
    /// Neighbor order used while the search expands its frontier.
    pub const EXPANSION_ORDER: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];
    /// Neighbor order used while walking back from the destination.
    ///
    /// Where several shortest paths exist, this order alone decides which one is returned.
    pub const RECONSTRUCTION_ORDER: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// All neighbors of `location` in "theory", in the order given, whether or not they lie on the grid.
    pub fn neighbors_of(order: &[Self], location: Location) -> impl Iterator<Item = (Self, Location)> + '_ {
        order.iter().map(move |dir| (*dir, dir.attempt_from(location)))
    }
}

/// A line through the grid along which a run of tokens may form.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// `—`
    Horizontal,
    /// `|`
    Vertical,
    /// `\`, top left to bottom right.
    MainDiagonal,
    /// `/`, top right to bottom left.
    AntiDiagonal,
}

impl Orientation {
    /// The two opposite `(dx, dy)` offsets of this line, negative first.
    ///
    /// Walking the negative offset moves toward the start of a run, the positive one toward its end.
    pub fn directions(&self) -> [(isize, isize); 2] {
        let (dx, dy) = match self {
            Self::Horizontal => (-1, 0),
            Self::Vertical => (0, -1),
            Self::MainDiagonal => (-1, -1),
            Self::AntiDiagonal => (1, -1),
        };
        [(dx, dy), (-dx, -dy)]
    }
}
