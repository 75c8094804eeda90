use crate::cell::ColorId;
use crate::location::Location;

/// Precondition violations. The core fails fast on these and never attempts recovery.
///
/// An unreachable destination or a scan that finds no runs is a normal outcome, not an error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    /// A grid was given with no rows or no columns.
    #[error("grid has no cells")]
    EmptyGrid,
    /// Rows of a nested grid differ in length.
    #[error("grid is ragged: row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        /// Index of the first offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A flattened grid cannot be split into rows of the stated width.
    #[error("{len} cells cannot be split into rows of width {width}")]
    BadFlatLength {
        /// Number of cells given.
        len: usize,
        /// Requested row width.
        width: usize,
    },
    /// A coordinate lies outside the grid.
    #[error("{location:?} is outside the {width}x{height} grid")]
    OutOfBounds {
        /// The offending coordinate.
        location: Location,
        /// Width of the grid.
        width: usize,
        /// Height of the grid.
        height: usize,
    },
    /// A move was requested from a cell holding no token.
    #[error("no token at {location:?}")]
    NoToken {
        /// The empty source cell.
        location: Location,
    },
    /// A token was placed or moved onto a cell that already holds one.
    #[error("{location:?} is already occupied")]
    Occupied {
        /// The occupied cell.
        location: Location,
    },
    /// A color id has no entry in the palette.
    #[error("color {color} is not in the palette")]
    UnknownColor {
        /// The unknown color id.
        color: ColorId,
    },
    /// A configuration value is out of range.
    #[error("bad configuration: {reason}")]
    BadConfig {
        /// What is wrong with it.
        reason: &'static str,
    },
    /// The backward walk of the pathfinder found no neighbor with a smaller depth.
    ///
    /// This should never happen for labels produced by a breadth-first search.
    #[error("search labels are inconsistent around {location:?}")]
    InconsistentLabels {
        /// Where the walk stalled.
        location: Location,
    },
}
