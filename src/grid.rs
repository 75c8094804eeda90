//! Construction and validation of the rectangular grids the core reads.
//!
//! Grids are [`ndarray::Array2`]s indexed `(row, column)`, so a well-formed grid can never be ragged.
//! Ragged input can only come from nested rows or flattened buffers, and is rejected here.

use itertools::Itertools;
use ndarray::Array2;

use crate::cell::{Cell, Occupancy};
use crate::error::InvalidInput;
use crate::location::Location;

/// A grid marking each cell [`Occupancy::Empty`] or [`Occupancy::Blocked`].
pub type OccupancyGrid = Array2<Occupancy>;
/// A grid holding an optional colored token per cell.
pub type TokenGrid = Array2<Cell>;

/// `(width, height)` of `grid`.
pub fn dims_of<T>(grid: &Array2<T>) -> (usize, usize) {
    (grid.ncols(), grid.nrows())
}

/// Fail with [`InvalidInput::OutOfBounds`] unless `location` lies on `grid`.
pub fn ensure_within<T>(grid: &Array2<T>, location: Location) -> Result<(), InvalidInput> {
    match grid.get(location.as_index()) {
        Some(_) => Ok(()),
        None => {
            let (width, height) = dims_of(grid);
            Err(InvalidInput::OutOfBounds { location, width, height })
        }
    }
}

/// Build a grid from rows, top row first.
pub fn grid_from_rows<T>(rows: Vec<Vec<T>>) -> Result<Array2<T>, InvalidInput> {
    let expected = rows.first().map(Vec::len).unwrap_or(0);
    if expected == 0 {
        return Err(InvalidInput::EmptyGrid);
    }

    if let Some((row, found)) = rows.iter()
        .map(Vec::len)
        .find_position(|len| *len != expected) {
        return Err(InvalidInput::RaggedGrid { row, expected, found });
    }

    grid_from_flat(rows.into_iter().flatten().collect_vec(), expected)
}

/// Build a grid from a row-major buffer of rows `width` cells wide.
pub fn grid_from_flat<T>(cells: Vec<T>, width: usize) -> Result<Array2<T>, InvalidInput> {
    if width == 0 || cells.is_empty() {
        return Err(InvalidInput::EmptyGrid);
    }
    if cells.len() % width != 0 {
        return Err(InvalidInput::BadFlatLength { len: cells.len(), width });
    }

    let height = cells.len() / width;
    // shape and length agree, so this cannot fail
    Array2::from_shape_vec((height, width), cells)
        .map_err(|_| InvalidInput::BadFlatLength { len: height * width, width })
}

/// The occupancy grid of a token grid: any token blocks its cell.
pub fn occupancy_of(tokens: &TokenGrid) -> OccupancyGrid {
    tokens.map(Occupancy::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_rows_are_rejected() {
        let rows = vec![vec![0u8; 4], vec![0u8; 4], vec![0u8; 3]];
        assert_eq!(grid_from_rows(rows), Err(InvalidInput::RaggedGrid { row: 2, expected: 4, found: 3 }));
    }

    #[test]
    fn empty_rows_are_rejected() {
        assert_eq!(grid_from_rows::<u8>(vec![]), Err(InvalidInput::EmptyGrid));
        assert_eq!(grid_from_rows::<u8>(vec![vec![]]), Err(InvalidInput::EmptyGrid));
    }

    #[test]
    fn rows_keep_their_orientation() {
        let grid = grid_from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(dims_of(&grid), (3, 2));
        assert_eq!(grid[Location(2, 0).as_index()], 3);
        assert_eq!(grid[Location(0, 1).as_index()], 4);
    }

    #[test]
    fn flat_buffer_must_divide_by_width() {
        assert_eq!(grid_from_flat(vec![0u8; 10], 3), Err(InvalidInput::BadFlatLength { len: 10, width: 3 }));
        assert_eq!(grid_from_flat(vec![0u8; 9], 0), Err(InvalidInput::EmptyGrid));
        assert_eq!(dims_of(&grid_from_flat(vec![0u8; 12], 3).unwrap()), (3, 4));
    }

    #[test]
    fn bounds_check_reports_dims() {
        let grid = grid_from_flat(vec![0u8; 6], 3).unwrap();
        assert!(ensure_within(&grid, Location(2, 1)).is_ok());
        assert_eq!(
            ensure_within(&grid, Location(3, 0)),
            Err(InvalidInput::OutOfBounds { location: Location(3, 0), width: 3, height: 2 }),
        );
    }

    #[test]
    fn tokens_block_their_cells() {
        let tokens = grid_from_rows(vec![vec![Cell::Empty, Cell::Token { color: 2 }]]).unwrap();
        let occupancy = occupancy_of(&tokens);
        assert_eq!(occupancy[(0, 0)], Occupancy::Empty);
        assert_eq!(occupancy[(0, 1)], Occupancy::Blocked);
    }
}
