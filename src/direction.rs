//! Move codes and the direction table used to prune the search.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single step of a placement path.
///
/// Every path starts with [`Move::Start`]; each following code is one of
/// the eight compass directions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move {
    Start,
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

use Move::{Start, E, N, NE, NW, S, SE, SW, W};

impl Default for Move {
    fn default() -> Self {
        Start
    }
}

/// The compass directions in search order.
pub const DIRECTIONS: [Move; 8] = [N, NE, E, SE, S, SW, W, NW];

type Successors = [Move; 7];

// One row per direction in `DIRECTIONS` order, each omitting its opposite.
const SUCCESSORS: [Successors; 8] = [
    [N, NE, E, SE, SW, W, NW],
    [N, NE, E, SE, S, W, NW],
    [N, NE, E, SE, S, SW, NW],
    [N, NE, E, SE, S, SW, W],
    [NE, E, SE, S, SW, W, NW],
    [N, E, SE, S, SW, W, NW],
    [N, NE, SE, S, SW, W, NW],
    [N, NE, E, S, SW, W, NW],
];

impl Move {
    /// The direction pointing back where we came from, `None` for `Start`.
    pub fn opposite(self) -> Option<Move> {
        match self {
            Start => None,
            N => Some(S),
            NE => Some(SW),
            E => Some(W),
            SE => Some(NW),
            S => Some(N),
            SW => Some(NE),
            W => Some(E),
            NW => Some(SE),
        }
    }

    /// The directions that may be taken after `self`.
    ///
    /// After `Start` all eight directions are allowed, after any other
    /// direction all except its opposite.
    ///
    /// ## Examples
    /// ```
    /// use wordhunt_solver::Move;
    /// assert_eq!(Move::Start.successors().len(), 8);
    /// assert!(!Move::E.successors().contains(&Move::W));
    /// ```
    pub fn successors(self) -> &'static [Move] {
        match self {
            Start => &DIRECTIONS,
            N => &SUCCESSORS[0],
            NE => &SUCCESSORS[1],
            E => &SUCCESSORS[2],
            SE => &SUCCESSORS[3],
            S => &SUCCESSORS[4],
            SW => &SUCCESSORS[5],
            W => &SUCCESSORS[6],
            NW => &SUCCESSORS[7],
        }
    }

    /// Unit step as (row, col) offset. North is up, so it decreases the row.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Start => (0, 0),
            N => (-1, 0),
            NE => (-1, 1),
            E => (0, 1),
            SE => (1, 1),
            S => (1, 0),
            SW => (1, -1),
            W => (0, -1),
            NW => (-1, -1),
        }
    }

    pub fn is_start(self) -> bool {
        self == Start
    }

    /// Compass label, empty for `Start`.
    pub fn label(self) -> &'static str {
        match self {
            Start => "",
            N => "N",
            NE => "NE",
            E => "E",
            SE => "SE",
            S => "S",
            SW => "SW",
            W => "W",
            NW => "NW",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
