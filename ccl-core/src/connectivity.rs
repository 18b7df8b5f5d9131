//! Neighbour topologies used to decide pixel adjacency.

use std::{fmt, str::FromStr};

const FOUR_WAY_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const EIGHT_WAY_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (1, 1),
    (-1, 1),
];

/// Which neighbours count as adjacent to a pixel.
///
/// # Examples
/// ```
/// use ccl_core::Connectivity;
///
/// assert_eq!(Connectivity::FourWay.offsets().len(), 4);
/// assert_eq!(Connectivity::EightWay.offsets().len(), 8);
/// assert_eq!("eight-way".parse::<Connectivity>(), Ok(Connectivity::EightWay));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Connectivity {
    /// Edge-adjacent neighbours only: left, right, up and down.
    #[default]
    FourWay,
    /// Edge- and corner-adjacent neighbours.
    EightWay,
}

impl Connectivity {
    /// Returns the `(dx, dy)` offsets of every neighbour under this topology.
    #[must_use]
    pub const fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Self::FourWay => &FOUR_WAY_OFFSETS,
            Self::EightWay => &EIGHT_WAY_OFFSETS,
        }
    }

    /// Stable name used in diagnostics and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FourWay => "four-way",
            Self::EightWay => "eight-way",
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown connectivity name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported connectivity `{provided}`; expected `four-way` or `eight-way`")]
pub struct ParseConnectivityError {
    provided: String,
}

impl FromStr for Connectivity {
    type Err = ParseConnectivityError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "four-way" | "4" => Ok(Self::FourWay),
            "eight-way" | "8" => Ok(Self::EightWay),
            other => Err(ParseConnectivityError {
                provided: other.to_owned(),
            }),
        }
    }
}
