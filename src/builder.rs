use std::num::NonZero;

use itertools::Itertools;
use ndarray::{Array2, AssignElem};
use thiserror::Error;

use crate::cell::Tile;
use crate::engine::{Engine, GameState};
use crate::error::LoadError;
use crate::level::LevelData;
use crate::location::{Dimension, Location};
use crate::port::PortSet;

/// Placement mistakes a [`LevelBuilder`] records instead of panicking.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// A tile was placed outside the bounds specified by `dims` on the builder.
    TileOutOfBounds,
    /// A tile was placed with no open ports.
    NoPorts,
}

/// Assemble a level tile by tile, then [`build`](Self::build) it into an [`Engine`].
///
/// Any location never given a tile stays a hole. Cloning a half-finished builder gives a second level to vary independently.
#[derive(Clone)]
pub struct LevelBuilder {
    // rows, columns
    dims: (Dimension, Dimension),
    cells: Array2<Tile>,
    max_swaps: usize,
    swaps: usize,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for LevelBuilder {
    fn default() -> Self {
        Self::with_dims((NonZero::<usize>::MIN, NonZero::<usize>::MIN))
    }
}

impl LevelBuilder {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(rows, columns)` order.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            cells: Array2::from_shape_simple_fn((dims.0.get(), dims.1.get()), Tile::default),
            max_swaps: 1,
            swaps: 0,
            invalid_reasons: Default::default(),
        }
    }

    /// Place `tile` at `location`, replacing whatever was there.
    ///
    /// A `location` off the board records [`TileOutOfBounds`](BuilderInvalidReason::TileOutOfBounds),
    /// and a start, end or regular tile without ports records [`NoPorts`](BuilderInvalidReason::NoPorts).
    /// Once a mistake is recorded, later placements are ignored so the first one is what [`build`](Self::build) reports.
    pub fn place(&mut self, location: Location, tile: Tile) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !tile.is_empty() && tile.ports().is_empty() {
            self.invalid_reasons.push(BuilderInvalidReason::NoPorts);
            return self;
        }

        match self.cells.get_mut(location.as_index()) {
            Some(cell) => cell.assign_elem(tile),
            None => self.invalid_reasons.push(BuilderInvalidReason::TileOutOfBounds),
        }

        self
    }

    /// Shorthand for [`Self::place`] with a start tile.
    pub fn start(&mut self, location: Location, ports: impl Into<PortSet>) -> &mut Self {
        self.place(location, Tile::Start { ports: ports.into() })
    }

    /// Shorthand for [`Self::place`] with an end tile.
    pub fn end(&mut self, location: Location, ports: impl Into<PortSet>) -> &mut Self {
        self.place(location, Tile::End { ports: ports.into() })
    }

    /// Shorthand for [`Self::place`] with a regular tile not yet connected to anything.
    pub fn regular(&mut self, location: Location, ports: impl Into<PortSet>) -> &mut Self {
        self.place(location, Tile::regular(ports))
    }

    pub fn max_swaps(&mut self, max_swaps: usize) -> &mut Self {
        self.max_swaps = max_swaps;
        self
    }

    /// Start the game as if `swaps` swaps had already been made.
    pub fn swaps_made(&mut self, swaps: usize) -> &mut Self {
        self.swaps = swaps;
        self
    }

    /// The placement mistakes recorded so far, or `None` if every tile landed.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// The level as placed so far.
    pub fn level(&self) -> LevelData {
        LevelData {
            rows: self.dims.0.get(),
            columns: self.dims.1.get(),
            state: GameState::Playing,
            number_of_swaps: self.swaps,
            max_number_of_swaps: self.max_swaps,
            connectors: self.cells.iter().map(Tile::to_string).collect_vec(),
        }
    }

    /// Convert the state of this builder into an [`Engine`].
    ///
    /// Placement problems are reported as they were recorded; level problems such as a missing end tile come from [`Engine::load`].
    pub fn build(&self) -> Result<Engine, BuildError<'_>> {
        if !self.invalid_reasons.is_empty() {
            return Err(BuildError::Invalid(&self.invalid_reasons));
        }

        Engine::load(self.level()).map_err(BuildError::Load)
    }
}

/// Why a [`LevelBuilder`] could not produce an [`Engine`].
#[derive(Debug, Error)]
pub enum BuildError<'a> {
    #[error("tiles were misplaced: {0:?}")]
    Invalid(&'a Vec<BuilderInvalidReason>),
    #[error(transparent)]
    Load(LoadError),
}
