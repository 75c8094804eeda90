//! Breadth-first reachability search over an [`OccupancyGrid`], with shortest path reconstruction.
//!
//! The search runs in two phases over a scratch grid of [`Label`]s that lives only as long as one call:
//! 1. Expansion labels every reached empty cell with its distance from the source, stopping as soon as the destination is labeled.
//! 2. Reconstruction walks back from the destination, always stepping to the first neighbor (in [`SquareStep::RECONSTRUCTION_ORDER`]) with a smaller distance, until it reaches the source.
//!
//! Both phases visit neighbors in a fixed order, so the same grid always yields the same path.
//! Which of several equally short paths that is depends only on those orders.

use std::collections::VecDeque;
use std::num::NonZero;

use log::{debug, trace};
use ndarray::Array2;

use crate::cell::Occupancy;
use crate::error::InvalidInput;
use crate::grid::{ensure_within, OccupancyGrid};
use crate::location::Location;
use crate::shape::SquareStep;

/// Per-cell search state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Label {
    Wall,
    Unvisited,
    // kept apart from the depths so the backward walk can recognize it
    Source,
    Depth(NonZero<usize>),
}

impl Label {
    fn depth(&self) -> Option<usize> {
        match self {
            Label::Source => Some(0),
            Label::Depth(depth) => Some(depth.get()),
            Label::Wall | Label::Unvisited => None,
        }
    }

    fn after(depth: usize) -> Self {
        Label::Depth(NonZero::<usize>::MIN.saturating_add(depth))
    }
}

/// A shortest route between two cells: source first, destination last, each consecutive pair 4-adjacent.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: Vec<Location>,
}

impl Path {
    /// Every cell on the path, in travel order.
    pub fn cells(&self) -> &[Location] {
        &self.cells
    }

    /// Where the path starts.
    pub fn source(&self) -> Location {
        self.cells[0]
    }

    /// Where the path ends.
    pub fn destination(&self) -> Location {
        self.cells[self.cells.len() - 1]
    }

    /// The number of cells on the path, endpoints included. Always at least 2.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a path holds at least its two endpoints.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The number of single-cell moves along the path, i.e. its grid distance.
    pub fn steps(&self) -> usize {
        self.cells.len() - 1
    }

    /// Consecutive `(from, to)` pairs along the path.
    pub fn moves(&self) -> impl Iterator<Item = (Location, Location)> + '_ {
        self.cells.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

impl From<Path> for Vec<Location> {
    fn from(value: Path) -> Self {
        value.cells
    }
}

/// The result of [`find_path`]. Reachability is never signaled by an empty path.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PathOutcome {
    /// The destination can be reached; here is a shortest way there.
    Found(Path),
    /// No chain of empty cells joins the source to the destination, or the two are the same cell.
    Unreachable,
}

impl PathOutcome {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&Path> {
        match self {
            PathOutcome::Found(path) => Some(path),
            PathOutcome::Unreachable => None,
        }
    }

    /// Consume `self`, yielding the path if one was found.
    pub fn into_path(self) -> Option<Path> {
        match self {
            PathOutcome::Found(path) => Some(path),
            PathOutcome::Unreachable => None,
        }
    }

    /// Whether a path was found.
    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }
}

/// Find a shortest 4-connected path of empty cells from `source` to `destination` on `grid`.
///
/// The occupancy of `source` itself is ignored, as its token is the one being moved.
/// Cells off the grid act as walls.
///
/// Returns [`PathOutcome::Unreachable`] if `source == destination`, if `destination` is blocked, or if no chain of empty cells joins the two.
/// Fails with [`InvalidInput::OutOfBounds`] if either endpoint is off the grid.
pub fn find_path(grid: &OccupancyGrid, source: Location, destination: Location) -> Result<PathOutcome, InvalidInput> {
    ensure_within(grid, source)?;
    ensure_within(grid, destination)?;

    if source == destination {
        debug!("no move: source and destination are both {source:?}");
        return Ok(PathOutcome::Unreachable);
    }
    if grid[destination.as_index()] == Occupancy::Blocked {
        debug!("destination {destination:?} is blocked");
        return Ok(PathOutcome::Unreachable);
    }

    let mut labels = grid.map(|cell| match cell {
        Occupancy::Blocked => Label::Wall,
        Occupancy::Empty => Label::Unvisited,
    });
    labels[source.as_index()] = Label::Source;

    if !expand(&mut labels, source, destination) {
        debug!("{destination:?} is unreachable from {source:?}");
        return Ok(PathOutcome::Unreachable);
    }

    let path = reconstruct(&labels, destination)?;
    debug!("found {}-step path from {source:?} to {destination:?}", path.steps());
    Ok(PathOutcome::Found(path))
}

/// Label cells outward from `source` until `destination` is labeled. Returns whether it was.
fn expand(labels: &mut Array2<Label>, source: Location, destination: Location) -> bool {
    let mut frontier = VecDeque::from([source]);

    while let Some(current) = frontier.pop_front() {
        // only labeled cells are ever queued
        let Some(depth) = labels[current.as_index()].depth() else {
            continue;
        };
        let next = Label::after(depth);

        for (_, neighbor) in SquareStep::neighbors_of(&SquareStep::EXPANSION_ORDER, current) {
            if neighbor == destination {
                labels[neighbor.as_index()] = next;
                trace!("reached {destination:?} at depth {}", depth + 1);
                return true;
            }

            match labels.get_mut(neighbor.as_index()) {
                Some(label) if *label == Label::Unvisited => {
                    *label = next;
                    frontier.push_back(neighbor);
                }
                // walls, visited cells and cells off the grid
                _ => {}
            }
        }
    }

    false
}

/// Walk back from a labeled `destination` to the source, returning the path source first.
fn reconstruct(labels: &Array2<Label>, destination: Location) -> Result<Path, InvalidInput> {
    let mut backway = vec![destination];
    let mut current = destination;

    loop {
        let depth = labels[current.as_index()].depth()
            .ok_or(InvalidInput::InconsistentLabels { location: current })?;

        let mut previous = None;
        for (_, neighbor) in SquareStep::neighbors_of(&SquareStep::RECONSTRUCTION_ORDER, current) {
            match labels.get(neighbor.as_index()) {
                Some(Label::Source) => {
                    backway.push(neighbor);
                    backway.reverse();
                    return Ok(Path { cells: backway });
                }
                Some(Label::Depth(neighbor_depth)) if neighbor_depth.get() < depth => {
                    previous = Some(neighbor);
                    break;
                }
                _ => {}
            }
        }

        // depth strictly decreases each step, so failing to find a smaller neighbor is the only way this can stall
        current = previous.ok_or(InvalidInput::InconsistentLabels { location: current })?;
        trace!("stepped back to {current:?} from depth {depth}");
        backway.push(current);
    }
}
