use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading a dictionary or grid file
    #[error("File \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// A grid cell is not a letter
    #[error("Invalid character '{ch}' at row {row} col {col}")]
    InvalidCharacter { row: usize, col: usize, ch: char },

    /// The grid source does not start with a valid width and height
    #[error("Invalid grid header: \"{0}\" (expect positive width and height)")]
    GridHeaderError(String),

    /// The grid source holds the wrong number of letters
    #[error("Grid has {found} letters, expect {expected}")]
    GridSizeMismatch { expected: usize, found: usize },

    /// Rows passed to `Grid::from_rows` must all have the same length
    #[error("Invalid row {row}: length {len}, expect {expected}")]
    InvalidRowLength {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// The search depth must be at least 1
    #[error("Invalid search depth {0}")]
    InvalidDepth(usize),

    /// The specified word length must be at least 1
    #[error("Invalid word length {0}")]
    InvalidLength(usize),

    /// Only the letters a..z and A..Z can be used as first letters
    #[error("Invalid letter '{0}'")]
    InvalidLetter(char),
}
