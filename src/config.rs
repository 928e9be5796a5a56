use crate::{Error, LetterSet};
use std::convert::TryFrom;

/// Default maximum path length searched.
pub const DEFAULT_DEPTH: usize = 6;

/// Search and output settings for a [`Solver`](crate::Solver).
///
/// ## Examples
/// ```
/// # use wordhunt_solver::{Config, Error};
/// let config = Config::default()
///     .with_depth(8)?
///     .with_first_letters("st")?
///     .with_rank_by_length(true)
///     .with_tile_reuse(true);
/// assert_eq!(config.depth, 8);
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Maximum path length. Longer words are never searched.
    pub depth: usize,
    /// Only search words of exactly this length.
    pub exact_length: Option<usize>,
    /// Only search words starting with one of these letters.
    pub first_letters: Option<LetterSet>,
    /// Output the compass directions of each placement.
    pub directions: bool,
    /// Output the grid positions of each placement.
    pub coordinates: bool,
    /// Order results by length (longest first), then alphabetically.
    pub rank_by_length: bool,
    /// Order results alphabetically.
    pub rank_alphabetical: bool,
    /// Only output placements along a single straight direction.
    pub linear_only: bool,
    /// Mark placements that use a grid cell twice as invalid, and do not output them.
    pub tile_reuse: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            depth: DEFAULT_DEPTH,
            exact_length: None,
            first_letters: None,
            directions: false,
            coordinates: false,
            rank_by_length: false,
            rank_alphabetical: false,
            linear_only: false,
            tile_reuse: false,
        }
    }
}

impl Config {
    /// Set the search depth.
    /// ## Errors
    /// If `depth` is 0.
    pub fn with_depth(mut self, depth: usize) -> Result<Config, Error> {
        if depth == 0 {
            return Err(Error::InvalidDepth(depth));
        }
        self.depth = depth;
        Ok(self)
    }

    /// Only search words of `len` letters.
    /// ## Errors
    /// If `len` is 0.
    pub fn with_exact_length(mut self, len: usize) -> Result<Config, Error> {
        if len == 0 {
            return Err(Error::InvalidLength(len));
        }
        self.exact_length = Some(len);
        Ok(self)
    }

    /// Only search words that start with one of `letters` (case insensitive).
    /// ## Errors
    /// If `letters` holds a character that is not a letter.
    pub fn with_first_letters(mut self, letters: &str) -> Result<Config, Error> {
        self.first_letters = Some(LetterSet::try_from(letters)?);
        Ok(self)
    }

    pub fn with_directions(mut self, on: bool) -> Config {
        self.directions = on;
        self
    }

    pub fn with_coordinates(mut self, on: bool) -> Config {
        self.coordinates = on;
        self
    }

    pub fn with_rank_by_length(mut self, on: bool) -> Config {
        self.rank_by_length = on;
        self
    }

    pub fn with_rank_alphabetical(mut self, on: bool) -> Config {
        self.rank_alphabetical = on;
        self
    }

    pub fn with_linear_only(mut self, on: bool) -> Config {
        self.linear_only = on;
        self
    }

    pub fn with_tile_reuse(mut self, on: bool) -> Config {
        self.tile_reuse = on;
        self
    }

    /// Check if `word` passes the length and first letter filters, and fits
    /// within the search depth.
    pub fn accepts(&self, word: &str) -> bool {
        let len = word.len();
        if len == 0 || len > self.depth {
            return false;
        }
        if let Some(n) = self.exact_length {
            if len != n {
                return false;
            }
        }
        match self.first_letters {
            Some(letters) => letters.contains(word.as_bytes()[0]),
            None => true,
        }
    }
}
