//! The placement record and how to present its path.
use crate::direction::Move;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use tinyvec::TinyVec;

/// Move codes of a placement, the first one is always `Start`.
pub type Moves = TinyVec<[Move; 8]>;

/// Grid positions visited by a placement, one per letter.
pub type Path = TinyVec<[Coord; 8]>;

/// A position on the grid.
///
/// Ordered by row, then column.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// Position one step in direction `mv`.
    /// Only valid for steps that stay on the grid.
    pub fn offset(self, mv: Move) -> Coord {
        let (dr, dc) = mv.delta();
        Coord {
            row: (self.row as isize + dr) as usize,
            col: (self.col as isize + dc) as usize,
        }
    }

    /// Check if `other` is one of the 8 neighbours of `self`.
    pub fn is_adjacent(self, other: Coord) -> bool {
        let dr = (self.row as isize - other.row as isize).abs();
        let dc = (self.col as isize - other.col as isize).abs();
        dr <= 1 && dc <= 1 && (dr, dc) != (0, 0)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "row {} col {}", self.row, self.col)
    }
}

/// One occurrence of a dictionary word on the grid.
///
/// `moves`, `path` and `word` always have the same length: the first move
/// is `Start` at `path[0] == start`, every following move leads to the next
/// position in `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    pub word: String,
    pub start: Coord,
    pub moves: Moves,
    pub path: Path,
    /// Tile-reuse validity, `None` when tile-reuse checking is off.
    pub valid: Option<bool>,
}

impl Placement {
    /// Word length, which is also the length of `moves` and `path`.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The directions taken, without the leading `Start`.
    pub fn directions(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves.iter().copied().filter(|mv| !mv.is_start())
    }

    /// Rebuild the path by replaying the moves from the start position.
    pub fn replay(&self) -> Path {
        let mut pos = self.start;
        let mut path = Path::new();
        path.push(pos);
        for mv in self.directions() {
            pos = pos.offset(mv);
            path.push(pos);
        }
        path
    }

    /// True if all directions are the same, so the word lies on a straight line.
    /// Words of one or two letters are always linear.
    ///
    /// ## Examples
    /// ```
    /// # use wordhunt_solver::{Coord, Move, Placement};
    /// let placement = Placement {
    ///     word: String::from("CAT"),
    ///     start: Coord::new(0, 0),
    ///     moves: [Move::Start, Move::E, Move::E].iter().copied().collect(),
    ///     path: [(0, 0), (0, 1), (0, 2)].iter().map(|&(r, c)| Coord::new(r, c)).collect(),
    ///     valid: None,
    /// };
    /// assert!(placement.is_linear());
    /// assert_eq!(placement.direction_trace(), "Start at row 0 col 0, go E E");
    /// ```
    pub fn is_linear(&self) -> bool {
        let mut directions = self.directions();
        match directions.next() {
            Some(first) => directions.all(|mv| mv == first),
            None => true,
        }
    }

    /// The compass directions taken from the start position, e.g.
    /// `Start at row 0 col 0, go E SE`.
    pub fn direction_trace(&self) -> String {
        let labels: Vec<&str> = self.directions().map(Move::label).collect();
        format!("Start at {}, go {}", self.start, labels.join(" "))
    }

    /// The positions visited after the start position, e.g.
    /// `Start at row 0 col 0, go to row 0 col 1, row 1 col 2`.
    pub fn coordinate_trace(&self) -> String {
        let positions: Vec<String> = self.replay().iter().skip(1).map(Coord::to_string).collect();
        format!("Start at {}, go to {}", self.start, positions.join(", "))
    }
}
