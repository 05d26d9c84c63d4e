use std::hash::Hash;

use itertools::Itertools;
use strum::VariantArray;

use crate::cell::Tile;
use crate::location::Location;
use crate::port::Port;

/// Geometry of a cell shape: how to step from one location to an adjacent one.
pub trait Step: Sized + Copy + VariantArray + PartialEq + Eq + Hash {
    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// The result may lie outside the board; bounds are the board's concern.
    fn attempt_from(&self, location: Location) -> Location;
    /// Invert the direction specified by `self`.
    fn invert(&self) -> Self;
}

// NB: odd rows are shifted half a cell to the right:
// 0   1   2   3
//   0   1   2   3
// 0   1   2   3
//   0   1   2   3
/// The six directions out of a hexagonal tile.
///
/// Declaration order is the order in which propagation visits neighbors.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum HexStep {
    Left,
    Right,
    DownLeft,
    DownRight,
    UpLeft,
    UpRight,
}

impl Step for HexStep {
    fn attempt_from(&self, location: Location) -> Location {
        let even = location.is_even_row();
        match self {
            Self::Left => location.offset_by((0, -1)),
            Self::Right => location.offset_by((0, 1)),
            // diagonals depend on the parity of the row
            Self::DownLeft => location.offset_by((1, if even { -1 } else { 0 })),
            Self::DownRight => location.offset_by((1, if even { 0 } else { 1 })),
            Self::UpLeft => location.offset_by((-1, if even { -1 } else { 0 })),
            Self::UpRight => location.offset_by((-1, if even { 0 } else { 1 })),
        }
    }

    fn invert(&self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::DownLeft => Self::UpRight,
            Self::DownRight => Self::UpLeft,
            Self::UpLeft => Self::DownRight,
            Self::UpRight => Self::DownLeft,
        }
    }
}

impl HexStep {
    /// The port a tile must have open to connect in this direction.
    pub fn port(&self) -> Port {
        match self {
            Self::Left => Port::Five,
            Self::Right => Port::Two,
            Self::DownLeft => Port::Four,
            Self::DownRight => Port::Three,
            Self::UpLeft => Port::Six,
            Self::UpRight => Port::One,
        }
    }

    /// Whether `from` connects to `to`, its neighbor in this direction.
    ///
    /// `from` needs the port facing `to` and `to` needs the port facing back.
    /// Swapping the operands and inverting the direction gives the same answer.
    pub fn connects(&self, from: &Tile, to: &Tile) -> bool {
        from.has_port(self.port()) && to.has_port(self.invert().port())
    }
}

/// Functionality on top of [`Step`] with identical implementation across all shapes.
pub trait BoardShape: Step {
    /// Get all neighbors of a [`Location`] in "theory", by attempting every step direction in `Self::VARIANTS`.
    fn neighbors_of(location: Location) -> Vec<(Self, Location)>;
}

impl<Sh> BoardShape for Sh
where
    Sh: Step,
{
    fn neighbors_of(location: Location) -> Vec<(Self, Location)> {
        Self::VARIANTS.iter()
            .map(|dir| (*dir, dir.attempt_from(location)))
            .collect_vec()
    }
}
