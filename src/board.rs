use std::fmt::{Display, Formatter};

use itertools::Itertools;
use log::debug;

use crate::cell::{Cell, ColorId, Occupancy};
use crate::config::GameConfig;
use crate::error::InvalidInput;
use crate::grid::{dims_of, ensure_within, occupancy_of, OccupancyGrid, TokenGrid};
use crate::location::Location;
use crate::matcher::{clear_runs, LineMatcher, Run};
use crate::pathfinder::{find_path, Path, PathOutcome};

/// What became of a requested move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MoveOutcome {
    /// No path of empty cells leads to the destination; the board is unchanged.
    Rejected,
    /// The token travelled along `path`. Any runs it completed were removed and `points` were added to the score.
    Moved {
        /// The route taken, source first.
        path: Path,
        /// Runs removed at the destination.
        cleared: Vec<Run>,
        /// Points added by this move.
        points: u32,
    },
}

impl MoveOutcome {
    /// Whether the host should now place new tokens, i.e. the move went through but completed no run.
    pub fn needs_new_tokens(&self) -> bool {
        matches!(self, MoveOutcome::Moved { cleared, .. } if cleared.is_empty())
    }
}

/// The state of one game: a grid of colored tokens, the palette used to display them, and the score.
///
/// [`Board`]s should be built using a [`BoardBuilder`](crate::builder::BoardBuilder) or [`Board::new`].
/// The board decides legality and removes runs; choosing where new tokens appear is left to the host.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) cells: TokenGrid,
    pub(crate) color_displays: Vec<char>,
    pub(crate) config: GameConfig,
    pub(crate) score: u32,
}

impl Board {
    /// An empty board shaped by `config`, whose color `i` displays as `color_displays[i]`.
    pub fn new(config: GameConfig, color_displays: Vec<char>) -> Result<Self, InvalidInput> {
        config.validate()?;

        Ok(Self {
            cells: TokenGrid::from_shape_simple_fn((config.dims.1.get(), config.dims.0.get()), Cell::default),
            color_displays,
            config,
            score: 0,
        })
    }

    /// The rules this board plays by.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// `(width, height)` of the grid.
    pub fn dims(&self) -> (usize, usize) {
        dims_of(&self.cells)
    }

    /// Points scored so far. Stops at [`u32::MAX`].
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The token grid, for rendering.
    pub fn cells(&self) -> &TokenGrid {
        &self.cells
    }

    /// The display characters of the palette, indexed by [`ColorId`].
    pub fn palette(&self) -> &[char] {
        &self.color_displays
    }

    /// The color of the token at `location`, if any.
    pub fn token_at(&self, location: Location) -> Result<Option<ColorId>, InvalidInput> {
        ensure_within(&self.cells, location)?;
        Ok(self.cells[location.as_index()].color())
    }

    /// Every cell holding a token is blocked.
    pub fn occupancy(&self) -> OccupancyGrid {
        occupancy_of(&self.cells)
    }

    /// Empty cells in row-major order, where the host may place new tokens.
    pub fn empty_cells(&self) -> Vec<Location> {
        self.cells.indexed_iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| Location::from(index))
            .collect_vec()
    }

    /// Whether no empty cell remains, which ends the game.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    fn matcher(&self) -> LineMatcher {
        LineMatcher::new(self.config.min_run_length)
    }

    /// Detect runs at `anchor` per the configured policy and remove them.
    fn clear_from(&mut self, anchor: Location) -> Result<Vec<Run>, InvalidInput> {
        let runs = self.matcher().detect(&self.cells, anchor, self.config.policy)?;
        if !runs.is_empty() {
            let removed = clear_runs(&mut self.cells, &runs);
            debug!("cleared {} run(s), {removed} token(s), around {anchor:?}", runs.len());
        }

        Ok(runs)
    }

    /// Move the token at `source` to `destination` if a path of empty cells joins them.
    ///
    /// On success, runs completed by the arriving token are removed and, if there were any, [`GameConfig::revenue`] is added to the score once.
    /// A move onto an occupied cell or onto `source` itself is [`Rejected`](MoveOutcome::Rejected).
    /// Fails if either location is off the grid or `source` holds no token.
    pub fn try_move(&mut self, source: Location, destination: Location) -> Result<MoveOutcome, InvalidInput> {
        ensure_within(&self.cells, source)?;
        ensure_within(&self.cells, destination)?;
        let Some(color) = self.cells[source.as_index()].color() else {
            return Err(InvalidInput::NoToken { location: source });
        };

        // the moving token does not block itself
        let mut occupancy = self.occupancy();
        occupancy[source.as_index()] = Occupancy::Empty;

        let path = match find_path(&occupancy, source, destination)? {
            PathOutcome::Found(path) => path,
            PathOutcome::Unreachable => return Ok(MoveOutcome::Rejected),
        };

        self.cells[source.as_index()] = Cell::Empty;
        self.cells[destination.as_index()] = Cell::Token { color };

        let cleared = self.clear_from(destination)?;
        let points = if cleared.is_empty() { 0 } else { self.config.revenue };
        self.score = self.score.saturating_add(points);
        if points > 0 {
            debug!("score is now {}", self.score);
        }

        Ok(MoveOutcome::Moved { path, cleared, points })
    }

    /// Place new tokens, in order, at host-chosen empty cells.
    ///
    /// Runs completed by each token are removed right after it lands, but award no points.
    /// All placements are validated before any is made, so a failing call leaves the board untouched.
    pub fn place_tokens(&mut self, placements: &[(Location, ColorId)]) -> Result<Vec<Run>, InvalidInput> {
        for (i, (location, color)) in placements.iter().enumerate() {
            ensure_within(&self.cells, *location)?;
            if *color >= self.color_displays.len() {
                return Err(InvalidInput::UnknownColor { color: *color });
            }
            let taken_earlier = placements[..i].iter().any(|(other, _)| other == location);
            if taken_earlier || !self.cells[location.as_index()].is_empty() {
                return Err(InvalidInput::Occupied { location: *location });
            }
        }

        let mut cleared = Vec::new();
        for (location, color) in placements {
            self.cells[location.as_index()] = Cell::Token { color: *color };
            cleared.extend(self.clear_from(*location)?);
        }

        Ok(cleared)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.cells.nrows() * (self.cells.ncols() + 1));

        for row in self.cells.rows() {
            for cell in row {
                out.push(match cell {
                    Cell::Token { color } => self.color_displays.get(*color).copied().unwrap_or('?'),
                    Cell::Empty => '.',
                });
            }
            out.push('\n');
        }

        write!(f, "{out}")
    }
}
