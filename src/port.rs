use std::fmt::{Display, Formatter};

use itertools::Itertools;
use strum::{FromRepr, VariantArray};

/// One of the six labeled edges of a hexagonal tile.
///
/// Which compass direction a port faces is decided by [`HexStep::port`](crate::shape::HexStep::port).
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, FromRepr, Hash, Ord, PartialEq, PartialOrd, VariantArray)]
pub enum Port {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
}

impl Port {
    /// The digit used for this port in tile codes.
    pub fn digit(&self) -> char {
        (b'0' + *self as u8) as char
    }

    /// Parse a single tile code digit, `'1'` through `'6'`.
    pub fn from_digit(digit: char) -> Option<Self> {
        digit.to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .and_then(Self::from_repr)
    }

    #[inline]
    fn bit(&self) -> u8 {
        1 << (*self as u8 - 1)
    }
}

/// The set of open ports on a tile, stored as a bitmask.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct PortSet(u8);

impl PortSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, port: Port) -> &mut Self {
        self.0 |= port.bit();
        self
    }

    pub fn contains(&self, port: Port) -> bool {
        self.0 & port.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Open ports in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Port> + '_ {
        Port::VARIANTS.iter().copied().filter(|port| self.contains(*port))
    }
}

impl FromIterator<Port> for PortSet {
    fn from_iter<T: IntoIterator<Item = Port>>(iter: T) -> Self {
        let mut set = Self::new();
        for port in iter {
            set.insert(port);
        }
        set
    }
}

impl<const N: usize> From<[Port; N]> for PortSet {
    fn from(value: [Port; N]) -> Self {
        value.into_iter().collect()
    }
}

impl Display for PortSet {
    // dashed form used by level files, e.g. `2-5`
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iter().map(|port| port.digit()).join("-"))
    }
}
