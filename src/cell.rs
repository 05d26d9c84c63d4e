use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TileCodeError;
use crate::port::{Port, PortSet};

/// Whether a regular tile has been proven reachable from the start tile by the most recent propagation.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Connection {
    #[default]
    Potential,
    Active,
}

/// One cell of a board.
///
/// Swapping moves a whole [`Tile`] between two positions; only the [`Connection`] of a regular tile ever changes in place.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Tile {
    Start { ports: PortSet },
    End { ports: PortSet },
    Regular { ports: PortSet, connection: Connection },
    /// A hole in the board, written as an empty tile code.
    #[default]
    Empty,
}

impl Tile {
    pub fn regular(ports: impl Into<PortSet>) -> Self {
        Self::Regular { ports: ports.into(), connection: Connection::Potential }
    }

    pub fn ports(&self) -> PortSet {
        match self {
            Self::Start { ports } | Self::End { ports } | Self::Regular { ports, .. } => *ports,
            Self::Empty => PortSet::default(),
        }
    }

    pub fn has_port(&self, port: Port) -> bool {
        self.ports().contains(port)
    }

    pub fn is_start(&self) -> bool {
        matches!(self, Self::Start { .. })
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Self::End { .. })
    }

    /// Start and end tiles anchor the puzzle and may never be swapped.
    pub fn is_anchor(&self) -> bool {
        self.is_start() || self.is_end()
    }

    /// Endpoints of a path have no connection state of their own.
    pub fn is_endpoint(&self) -> bool {
        self.is_anchor()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn connection(&self) -> Option<Connection> {
        match self {
            Self::Regular { connection, .. } => Some(*connection),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.connection() == Some(Connection::Active)
    }

    pub fn reset_to_potential(&mut self) {
        if let Self::Regular { connection, .. } = self {
            *connection = Connection::Potential;
        }
    }

    pub fn mark_active(&mut self) {
        if let Self::Regular { connection, .. } = self {
            if *connection == Connection::Potential {
                *connection = Connection::Active;
            }
        }
    }
}

/// Tile codes look like `sc-2`, `rc-2-5` or `cc-36`: a role prefix, a dash, then port digits with optional dashes.
/// The empty string is a hole.
impl FromStr for Tile {
    type Err = TileCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::Empty);
        }

        let (prefix, rest) = s.split_once('-').ok_or(TileCodeError::MissingSeparator)?;

        let mut ports = PortSet::new();
        for c in rest.chars().filter(|c| *c != '-') {
            ports.insert(Port::from_digit(c).ok_or(TileCodeError::BadPort(c))?);
        }
        if ports.is_empty() {
            return Err(TileCodeError::NoPorts);
        }

        match prefix {
            "sc" => Ok(Self::Start { ports }),
            "ec" => Ok(Self::End { ports }),
            "rc" => Ok(Self::Regular { ports, connection: Connection::Potential }),
            "cc" => Ok(Self::Regular { ports, connection: Connection::Active }),
            other => Err(TileCodeError::UnknownRole(other.to_owned())),
        }
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let prefix = match self {
            Self::Start { .. } => "sc",
            Self::End { .. } => "ec",
            Self::Regular { connection: Connection::Potential, .. } => "rc",
            Self::Regular { connection: Connection::Active, .. } => "cc",
            Self::Empty => return Ok(()),
        };

        write!(f, "{}-{}", prefix, self.ports())
    }
}
