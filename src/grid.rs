use crate::Error;
use std::fmt;
use std::fs::read_to_string;
use std::str::FromStr;

/// Word hunt letter grid, `width` x `height` cells.
///
/// Every cell holds an uppercase ASCII letter. Letters are case-folded when
/// the grid is built, and the grid can not be modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

/// Display the grid as in the solver summary: a header with the column
/// indices, then one line per row prefixed by the row index.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let header: String = (0..self.width).map(|col| format!("{:<3}", col)).collect();
        write!(f, "{:3}{}", "", header.trim_end())?;
        for (row, letters) in self.to_strings().iter().enumerate() {
            let cells: String = letters.chars().map(|ch| format!("{:<3}", ch)).collect();
            write!(f, "\n{:<3}{}", row, cells.trim_end())?;
        }
        Ok(())
    }
}

/// Case-fold `ch` to an uppercase letter, `None` if it is not a letter.
fn fold(ch: char) -> Option<u8> {
    if ch.is_ascii_alphabetic() {
        Some(ch.to_ascii_uppercase() as u8)
    } else {
        None
    }
}

/// Parse a grid from its source text: the width and height, followed by
/// `width * height` letters in row-major order. Whitespace between the
/// letters is ignored.
impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let mut dimension = || -> Result<usize, Error> {
            let token = tokens.next().unwrap_or("");
            match token.parse::<usize>() {
                Ok(n) if n > 0 => Ok(n),
                _ => Err(Error::GridHeaderError(String::from(token))),
            }
        };
        let width = dimension()?;
        let height = dimension()?;
        let expected = width
            .checked_mul(height)
            .ok_or_else(|| Error::GridHeaderError(format!("{} {}", width, height)))?;
        let letters: Vec<char> = tokens.flat_map(str::chars).collect();
        if letters.len() != expected {
            return Err(Error::GridSizeMismatch {
                expected,
                found: letters.len(),
            });
        }
        let cells = letters
            .iter()
            .enumerate()
            .map(|(i, &ch)| {
                fold(ch).ok_or(Error::InvalidCharacter {
                    row: i / width,
                    col: i % width,
                    ch,
                })
            })
            .collect::<Result<Vec<u8>, Error>>()?;
        Ok(Grid {
            width,
            height,
            cells,
        })
    }
}

impl Grid {
    /// Read the grid from `path`. See [`Grid::from_str`] for the format.
    /// ## Errors
    /// If the file can not be read or does not hold a valid grid.
    pub fn from_file(path: &str) -> Result<Grid, Error> {
        let grid: Grid = read_to_string(path)
            .map_err(|source| Error::ReadError {
                path: String::from(path),
                source,
            })?
            .parse()?;
        log::info!(
            "Read {}x{} grid from \"{}\"",
            grid.width,
            grid.height,
            path
        );
        Ok(grid)
    }

    /// Create a `Grid` from a list of rows, one letter per cell.
    /// All rows must have the same length.
    ///
    /// ## Errors
    /// If there are no rows, the rows differ in length, or a cell is not a letter.
    /// ## Examples
    /// ```
    /// # use wordhunt_solver::{Grid, Error};
    /// let grid = Grid::from_rows(&["cat", "xyz"])?;
    /// assert_eq!(grid.width(), 3);
    /// assert_eq!(grid.height(), 2);
    /// assert_eq!(grid.letter_at(0, 1), b'A');
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Grid, Error> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        if height == 0 || width == 0 {
            return Err(Error::GridHeaderError(format!("{} {}", width, height)));
        }
        let mut cells = Vec::with_capacity(width * height);
        for (row, letters) in rows.iter().enumerate() {
            let letters = letters.as_ref();
            let len = letters.chars().count();
            if len != width {
                return Err(Error::InvalidRowLength {
                    row,
                    len,
                    expected: width,
                });
            }
            for (col, ch) in letters.chars().enumerate() {
                cells.push(fold(ch).ok_or(Error::InvalidCharacter { row, col, ch })?);
            }
        }
        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if `row`, `col` lies on the grid.
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Letter at `row`, `col`.
    ///
    /// # Panics
    /// If the position is outside the grid. Check with [`in_bounds`](Grid::in_bounds) first.
    pub fn letter_at(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.width + col]
    }

    /// Letter at `row`, `col`, or None when outside the grid.
    pub fn get(&self, row: isize, col: isize) -> Option<u8> {
        if self.in_bounds(row, col) {
            Some(self.letter_at(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Get grid rows as strings
    pub fn to_strings(&self) -> Vec<String> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|&c| c as char).collect())
            .collect()
    }
}
