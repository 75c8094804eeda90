//! Bindings for a browser host.
//!
//! Grids cross the boundary as flat row-major byte buffers plus a width.
//! Locations come back as `[x, y]` arrays. Invalid input throws.

use std::num::NonZero;

use itertools::Itertools;
use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::board::{Board, MoveOutcome};
use crate::cell::{Cell, ColorId, Occupancy};
use crate::config::GameConfig;
use crate::error::InvalidInput;
use crate::grid::grid_from_flat;
use crate::location::Location;
use crate::matcher::LineMatcher;
use crate::pathfinder;

fn pair(location: &Location) -> Array {
    Array::of2(&JsValue::from(location.0 as u32), &JsValue::from(location.1 as u32))
}

fn pairs(locations: &[Location]) -> Array {
    locations.iter().map(pair).collect()
}

/// Find a shortest path over `cells`, where any non-zero byte is blocked.
///
/// Returns an array of `[x, y]` pairs, source first, or `null` when the destination cannot be reached.
#[wasm_bindgen(js_name = findPath)]
pub fn find_path(cells: &[u8], width: usize, sx: usize, sy: usize, dx: usize, dy: usize) -> Result<Option<Array>, JsError> {
    let grid = grid_from_flat(cells.iter().map(|cell| Occupancy::from(*cell != 0)).collect_vec(), width)?;
    let outcome = pathfinder::find_path(&grid, Location(sx, sy), Location(dx, dy))?;

    Ok(outcome.path().map(|path| pairs(path.cells())))
}

/// Find the runs through `(ax, ay)` over `cells`, where 0 is empty and any other byte is a color.
///
/// Returns an array of runs, each an array of `[x, y]` pairs.
#[wasm_bindgen(js_name = findRuns)]
pub fn find_runs(cells: &[u8], width: usize, ax: usize, ay: usize, min_run_length: usize) -> Result<Array, JsError> {
    let grid = grid_from_flat(
        cells.iter().map(|cell| Cell::from((*cell != 0).then_some(*cell as ColorId))).collect_vec(),
        width,
    )?;
    let runs = LineMatcher::new(min_run_length).find_runs(&grid, Location(ax, ay))?;

    Ok(runs.iter().map(|run| pairs(run.cells())).collect())
}

const PALETTE: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Display characters for `colors` colors; there are only as many as [`PALETTE`] has letters.
fn palette(colors: usize) -> Result<Vec<char>, InvalidInput> {
    if colors > PALETTE.len() {
        return Err(InvalidInput::BadConfig { reason: "at most 52 colors are supported" });
    }

    Ok(PALETTE.chars().take(colors).collect_vec())
}

/// The result of a move that went through.
#[wasm_bindgen]
pub struct MoveReport {
    path: Vec<Location>,
    cleared: usize,
    points: u32,
}

#[wasm_bindgen]
impl MoveReport {
    /// The cells the token travelled through, as `[x, y]` pairs.
    #[wasm_bindgen(getter)]
    pub fn path(&self) -> Array {
        pairs(&self.path)
    }

    /// How many runs the move completed.
    #[wasm_bindgen(getter)]
    pub fn cleared(&self) -> usize {
        self.cleared
    }

    /// Points the move added to the score.
    #[wasm_bindgen(getter)]
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Whether the host should now place new tokens.
    #[wasm_bindgen(getter, js_name = needsNewTokens)]
    pub fn needs_new_tokens(&self) -> bool {
        self.cleared == 0
    }
}

/// A [`Board`] driven from JavaScript. Colors are numbered from 0.
#[wasm_bindgen]
pub struct WasmGame {
    board: Board,
}

#[wasm_bindgen]
impl WasmGame {
    /// An empty `width` by `height` game with `colors` colors.
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize, min_run_length: usize, colors: usize) -> Result<WasmGame, JsError> {
        let dims = (
            NonZero::new(width).ok_or(InvalidInput::EmptyGrid)?,
            NonZero::new(height).ok_or(InvalidInput::EmptyGrid)?,
        );
        let config = GameConfig { dims, min_run_length, ..Default::default() };

        Ok(Self { board: Board::new(config, palette(colors)?)? })
    }

    /// Place a token of `color` at `(x, y)`, returning how many runs it completed and so removed.
    pub fn place(&mut self, x: usize, y: usize, color: usize) -> Result<usize, JsError> {
        Ok(self.board.place_tokens(&[(Location(x, y), color)])?.len())
    }

    /// Move the token at `(sx, sy)` to `(dx, dy)`. Returns `undefined` if no path leads there.
    #[wasm_bindgen(js_name = tryMove)]
    pub fn try_move(&mut self, sx: usize, sy: usize, dx: usize, dy: usize) -> Result<Option<MoveReport>, JsError> {
        Ok(match self.board.try_move(Location(sx, sy), Location(dx, dy))? {
            MoveOutcome::Rejected => None,
            MoveOutcome::Moved { path, cleared, points } => Some(MoveReport {
                path: path.into(),
                cleared: cleared.len(),
                points,
            }),
        })
    }

    /// Points scored so far.
    pub fn score(&self) -> u32 {
        self.board.score()
    }

    /// The grid, row-major: 0 for an empty cell, otherwise the color plus 1.
    pub fn cells(&self) -> Vec<u8> {
        self.board.cells().iter()
            .map(|cell| match cell.color() {
                Some(color) => u8::try_from(color + 1).unwrap_or(u8::MAX),
                None => 0,
            })
            .collect_vec()
    }

    /// Empty cells as `[x, y]` pairs, where new tokens may go.
    #[wasm_bindgen(js_name = emptyCells)]
    pub fn empty_cells(&self) -> Array {
        pairs(&self.board.empty_cells())
    }

    /// Whether the board is full and the game is over.
    #[wasm_bindgen(js_name = isFull)]
    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }
}
