#![warn(missing_docs)]

//! # `colorlines`
//!
//! The decision core of [Color Lines](https://en.wikipedia.org/wiki/Color_Lines)-style puzzle games, played by moving colored tokens around a grid.
//! It answers two questions:
//! 1. Can the token at one cell travel to another empty cell through empty cells, and if so along which shortest path? See [`find_path`].
//! 2. Which runs of same-colored tokens has a change completed, and so must be removed? See [`LineMatcher`].
//!
//! Both work on plain [`ndarray::Array2`] grids the caller owns and never retain them between calls.
//! [`Board`] strings them together the way a game does: check a move, make it, clear runs, keep score.
//! Rendering, input, timing and the choice of where new tokens appear are left to the host.
//!
//! # Internals
//! The pathfinder is a breadth-first search that labels every reached cell with its distance from the source, then walks back from the destination along strictly decreasing labels.
//! Labels live in a scratch grid allocated per call.
//!
//! The line matcher walks outward from the cell that just changed, in both directions of each of four orientations (horizontal, vertical and both diagonals).
//! A full row-and-column sweep is available as an alternative [`MatchPolicy`]; it never finds diagonal runs.
//!
//! Neighbors are always visited in fixed orders (see [`SquareStep`](shape::SquareStep)), so results are deterministic.

pub use board::{Board, MoveOutcome};
pub use builder::BoardBuilder;
pub use cell::{Cell, ColorId, Occupancy};
pub use config::GameConfig;
pub use error::InvalidInput;
pub use location::{Dimension, Location};
pub use matcher::{LineMatcher, MatchPolicy, Run};
pub use pathfinder::{find_path, Path, PathOutcome};

pub(crate) mod board;
mod tests;
pub(crate) mod cell;
pub(crate) mod error;
pub(crate) mod location;
pub mod builder;
pub mod config;
pub mod grid;
pub mod matcher;
pub mod pathfinder;
pub mod shape;
#[cfg(feature = "wasm")]
pub mod wasm;
