//! Detection of runs of same-colored tokens.
//!
//! Two policies exist and a caller picks one explicitly through [`MatchPolicy`]:
//! - [`MatchPolicy::Anchored`] looks only at lines through the cell that just changed, in all four [`Orientation`]s, diagonals included.
//!   Only that cell can have completed a run, so this is all a move or placement needs.
//! - [`MatchPolicy::FullScan`] sweeps every row and column of the grid, ignoring any anchor. It never sees diagonal runs.
//!
//! Neither touches the grid; [`clear_runs`] does the removal.

use std::collections::HashSet;

use itertools::Itertools;
use log::debug;
use strum::VariantArray;

use crate::cell::{Cell, ColorId};
use crate::error::InvalidInput;
use crate::grid::{ensure_within, TokenGrid};
use crate::location::Location;
use crate::shape::Orientation;

/// Runs shorter than this are ignored unless configured otherwise.
pub const DEFAULT_MIN_RUN_LENGTH: usize = 5;

/// Which cells a detection pass examines.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchPolicy {
    /// Horizontal, vertical and both diagonal lines through the anchor.
    #[default]
    Anchored,
    /// Every row and every column, diagonals excluded.
    FullScan,
}

/// A contiguous line of same-colored tokens long enough to be removed.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Run {
    orientation: Orientation,
    color: ColorId,
    // ordered from the negative end of the orientation to the positive end
    cells: Vec<Location>,
}

impl Run {
    /// The line this run lies along.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The color shared by every token of the run.
    pub fn color(&self) -> ColorId {
        self.color
    }

    /// The cells of the run, in order along its [`Orientation`].
    pub fn cells(&self) -> &[Location] {
        &self.cells
    }

    /// Number of tokens in the run.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false` for detected runs.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `location` is part of the run.
    pub fn contains(&self, location: &Location) -> bool {
        self.cells.contains(location)
    }
}

/// Finds runs of at least [`min_run_length`](LineMatcher::min_run_length) tokens.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LineMatcher {
    min_run_length: usize,
}

impl Default for LineMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_RUN_LENGTH)
    }
}

impl LineMatcher {
    /// A matcher keeping runs of at least `min_run_length` tokens.
    ///
    /// A single token is never a run, so lengths below 2 are raised to 2.
    pub fn new(min_run_length: usize) -> Self {
        Self { min_run_length: min_run_length.max(2) }
    }

    /// The shortest run this matcher reports.
    pub fn min_run_length(&self) -> usize {
        self.min_run_length
    }

    /// Detect runs according to `policy`, anchored at `anchor` where the policy uses one.
    ///
    /// `anchor` is bounds-checked under both policies.
    pub fn detect(&self, grid: &TokenGrid, anchor: Location, policy: MatchPolicy) -> Result<Vec<Run>, InvalidInput> {
        match policy {
            MatchPolicy::Anchored => self.find_runs(grid, anchor),
            MatchPolicy::FullScan => {
                ensure_within(grid, anchor)?;
                Ok(self.scan_runs(grid))
            }
        }
    }

    /// Find the runs passing through `anchor`, at most one per [`Orientation`], in [`Orientation::VARIANTS`] order.
    ///
    /// Each run extends from `anchor` in both directions of its orientation until a cell of another color, an empty cell or the edge of the grid.
    /// Runs of different orientations all contain `anchor` and so overlap there.
    /// An empty anchor yields no runs.
    pub fn find_runs(&self, grid: &TokenGrid, anchor: Location) -> Result<Vec<Run>, InvalidInput> {
        ensure_within(grid, anchor)?;

        let Some(color) = grid[anchor.as_index()].color() else {
            return Ok(Vec::new());
        };

        let runs = Orientation::VARIANTS.iter()
            .filter_map(|orientation| {
                let [negative, positive] = orientation.directions();

                let mut cells = walk(grid, anchor, negative, color);
                cells.reverse();
                cells.push(anchor);
                cells.extend(walk(grid, anchor, positive, color));

                (cells.len() >= self.min_run_length).then_some(Run {
                    orientation: *orientation,
                    color,
                    cells,
                })
            })
            .collect_vec();

        debug!("{} run(s) through {anchor:?}", runs.len());
        Ok(runs)
    }

    /// Find every maximal horizontal and vertical run on the grid: rows top to bottom, then columns left to right.
    pub fn scan_runs(&self, grid: &TokenGrid) -> Vec<Run> {
        let mut runs = Vec::new();

        for (y, row) in grid.rows().into_iter().enumerate() {
            let lane = row.into_iter().enumerate().map(|(x, cell)| (Location(x, y), cell));
            runs.extend(self.runs_along(lane, Orientation::Horizontal));
        }
        for (x, column) in grid.columns().into_iter().enumerate() {
            let lane = column.into_iter().enumerate().map(|(y, cell)| (Location(x, y), cell));
            runs.extend(self.runs_along(lane, Orientation::Vertical));
        }

        debug!("{} run(s) on the whole grid", runs.len());
        runs
    }

    fn runs_along<'a>(&self, lane: impl Iterator<Item = (Location, &'a Cell)>, orientation: Orientation) -> Vec<Run> {
        let mut runs = Vec::new();

        for (color, group) in &lane.chunk_by(|(_, cell)| cell.color()) {
            let Some(color) = color else {
                continue;
            };

            let cells = group.map(|(location, _)| location).collect_vec();
            if cells.len() >= self.min_run_length {
                runs.push(Run { orientation, color, cells });
            }
        }

        runs
    }
}

/// Cells of `color` met walking from `from` (exclusive) by `offset`, nearest first.
fn walk(grid: &TokenGrid, from: Location, offset: (isize, isize), color: ColorId) -> Vec<Location> {
    let mut cells = Vec::new();
    let mut current = from;

    loop {
        current = current.offset_by(offset);
        match grid.get(current.as_index()) {
            Some(Cell::Token { color: other }) if *other == color => cells.push(current),
            _ => break,
        }
    }

    cells
}

/// Empty every cell of every run in `runs`, returning how many distinct cells were emptied.
pub fn clear_runs(grid: &mut TokenGrid, runs: &[Run]) -> usize {
    let cells = runs.iter()
        .flat_map(|run| run.cells.iter().copied())
        .collect::<HashSet<Location>>();

    for location in &cells {
        if let Some(cell) = grid.get_mut(location.as_index()) {
            *cell = Cell::Empty;
        }
    }

    cells.len()
}
