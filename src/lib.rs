//! # `hexoscope`
//!
//! An engine for a hexagonal connector puzzle. The board is a grid of hex tiles, each with some of its six edges ("ports") open.
//! The player swaps pairs of tiles, trying to lay a continuous path of matching ports from the start tile to the end tile
//! within a limited number of swaps.
//!
//! Begin by loading [`LevelData`] with [`Engine::load`] (or [`Engine::from_json`]), or assemble a level with a [`LevelBuilder`].
//! Then call [`Engine::swap`] and [`Engine::undo`], and read the board back with [`Engine::snapshot`].
//!
//! # Internals
//! Odd rows of the board are offset half a tile to the right, so each tile touches up to six neighbors.
//! Two neighbors are connected when the port of the first facing the second and the port of the second facing the first are both open.
//!
//! After every swap, connection states are reset and recomputed from scratch by flooding outward from the start tile.
//! The end tile being reached wins the game; spending the swap budget without reaching it loses.
//! Undo restores a full copy of the board taken before the swap rather than recomputing anything.

pub use board::Board;
pub use builder::{BuildError, BuilderInvalidReason, LevelBuilder};
pub use cell::{Connection, Tile};
pub use engine::{Engine, GameState};
pub use error::{LoadError, Rejection, TileCodeError};
pub use level::LevelData;
pub use location::Location;
pub use port::{Port, PortSet};
pub use propagate::propagate;
pub use shape::HexStep;

pub(crate) mod board;
mod tests;
pub(crate) mod cell;
pub(crate) mod engine;
pub(crate) mod error;
pub(crate) mod history;
pub(crate) mod level;
pub(crate) mod location;
pub(crate) mod port;
pub mod shape;
pub mod builder;
pub(crate) mod propagate;
#[cfg(feature = "wasm")]
pub mod wasm;
