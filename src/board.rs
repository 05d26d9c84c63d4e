use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::Array2;

use crate::cell::Tile;
use crate::location::{Dimension, Location};
use crate::shape::{BoardShape, HexStep};

/// A rectangular board of hexagonal [`Tile`]s, stored row-major.
///
/// Tiles can be addressed either by [`Location`] or by linear index `row * columns + col`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    pub(crate) cells: Array2<Tile>,
    // rows, columns
    pub(crate) dims: (Dimension, Dimension),
}

impl Board {
    /// Lay `tiles` out row by row. Returns `None` if the count does not match `dims`.
    pub(crate) fn from_tiles(dims: (Dimension, Dimension), tiles: Vec<Tile>) -> Option<Self> {
        Array2::from_shape_vec((dims.0.get(), dims.1.get()), tiles)
            .ok()
            .map(|cells| Self { cells, dims })
    }

    pub fn rows(&self) -> usize {
        self.dims.0.get()
    }

    pub fn columns(&self) -> usize {
        self.dims.1.get()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn in_bounds(&self, location: Location) -> bool {
        location.0 < self.rows() && location.1 < self.columns()
    }

    pub fn index_of(&self, location: Location) -> usize {
        location.0 * self.columns() + location.1
    }

    pub fn location_of(&self, index: usize) -> Location {
        Location(index / self.columns(), index % self.columns())
    }

    pub fn get(&self, location: Location) -> Option<&Tile> {
        self.cells.get(location.as_index())
    }

    pub(crate) fn get_mut(&mut self, location: Location) -> Option<&mut Tile> {
        self.cells.get_mut(location.as_index())
    }

    /// The tile at linear `index`, if there is one.
    pub fn tile(&self, index: usize) -> Option<&Tile> {
        if index < self.len() {
            self.get(self.location_of(index))
        } else {
            None
        }
    }

    /// Tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.cells.iter()
    }

    /// The in-bounds neighbors of `location`, in propagation order.
    pub fn neighbors_of(&self, location: Location) -> Vec<(HexStep, Location)> {
        HexStep::neighbors_of(location).into_iter()
            .filter(|(_, neighbor)| self.in_bounds(*neighbor))
            .collect_vec()
    }

    fn find(&self, predicate: impl Fn(&Tile) -> bool) -> Option<Location> {
        self.cells.indexed_iter()
            .find(|(_, tile)| predicate(tile))
            .map(|(index, _)| Location::from(index))
    }

    pub fn start_location(&self) -> Option<Location> {
        self.find(Tile::is_start)
    }

    pub fn end_location(&self) -> Option<Location> {
        self.find(Tile::is_end)
    }

    /// Forget every connection found by an earlier propagation.
    pub fn reset_to_potential(&mut self) {
        self.cells.map_inplace(Tile::reset_to_potential);
    }

    /// Exchange the tiles at two linear indices. Both must be in range.
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        let (a, b) = (self.location_of(a), self.location_of(b));
        self.cells.swap(a.as_index(), b.as_index());
    }

    /// Tile codes in row-major order, as found in level data.
    pub fn codes(&self) -> Vec<String> {
        self.cells.iter().map(Tile::to_string).collect_vec()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows() {
            for tile in row {
                match tile {
                    Tile::Empty => write!(f, "x-x-x ")?,
                    tile => write!(f, "{} ", tile)?,
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
