use crate::search::{search, PlacementSink, SearchStats};
use crate::{Config, Error, Grid, Results, Wordlist};
use std::fmt;

/// A word hunt puzzle: the letter grid, the wordlist, and the search settings.
///
/// ## Examples
/// ```
/// # use wordhunt_solver::{Config, Grid, Solver, Error};
/// let grid = Grid::from_rows(&["cat", "xxx", "xxx"])?;
/// let config = Config::default().with_rank_alphabetical(true);
/// let solver = Solver::new(grid)
///     .with_wordlist_from_words(&["tax", "cat", "act"])
///     .with_config(config);
/// let mut results = solver.solve();
/// let words: Vec<String> = results.drain_alphabetical().map(|p| p.word).collect();
/// assert_eq!(words, ["CAT", "TAX", "TAX", "TAX"]);
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    grid: Grid,
    wordlist: Wordlist,
    config: Config,
}

impl fmt::Display for Solver {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

impl Solver {
    /// Create a solver for `grid` with an empty wordlist and default settings.
    pub fn new(grid: Grid) -> Solver {
        Solver {
            grid,
            wordlist: Wordlist::default(),
            config: Config::default(),
        }
    }

    /// Read the grid from `path` and create a solver for it.
    /// ## Errors
    /// If the grid file can not be read or parsed.
    pub fn from_grid_file(path: &str) -> Result<Solver, Error> {
        Ok(Solver::new(Grid::from_file(path)?))
    }

    /// Set the wordlist.
    pub fn with_wordlist(mut self, wordlist: Wordlist) -> Solver {
        self.wordlist = wordlist;
        self
    }

    /// Read the wordlist from `wordfile`, see [`Wordlist::from_file`].
    /// ## Errors
    /// If the `wordfile` can not be read.
    pub fn with_wordlist_from_file(
        mut self,
        wordfile: &str,
        skip_header: bool,
    ) -> Result<Solver, Error> {
        self.wordlist = Wordlist::from_file(wordfile, skip_header)?;
        Ok(self)
    }

    /// Set the wordlist from a list of words.
    pub fn with_wordlist_from_words<S: AsRef<str>>(mut self, words: &[S]) -> Solver {
        self.wordlist = Wordlist::from_words(words);
        self
    }

    /// Set the search and output settings.
    pub fn with_config(mut self, config: Config) -> Solver {
        self.config = config;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Search all words, collecting the placements with the rankings
    /// enabled in the config.
    pub fn solve(&self) -> Results {
        let mut results = Results::for_config(&self.config);
        self.solve_into(&mut results);
        results
    }

    /// Search all words, handing each placement to `sink`.
    pub fn solve_into<S: PlacementSink + ?Sized>(&self, sink: &mut S) -> SearchStats {
        search(&self.grid, &self.wordlist, &self.config, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    type Result<T> = std::result::Result<T, Error>;

    #[test]
    fn test_solve_discovery_order() -> Result<()> {
        let grid = Grid::from_rows(&["dog", "xxx", "cat"])?;
        let solver = Solver::new(grid).with_wordlist_from_words(&["cat", "dog", "god"]);
        let results = solver.solve();
        let words: Vec<&str> = results.found().iter().map(|p| p.word.as_str()).collect();
        assert_eq!(words, ["CAT", "DOG", "GOD"]);
        assert!(!results.is_ranked_by_length());
        Ok(())
    }

    #[test]
    fn test_solve_with_tile_reuse() -> Result<()> {
        let grid = Grid::from_rows(&["ab", "bx"])?;
        let config = Config::default().with_tile_reuse(true);
        let solver = Solver::new(grid)
            .with_wordlist_from_words(&["abba", "ab"])
            .with_config(config);
        let results = solver.solve();
        let valid: Vec<(&str, Option<bool>)> = results
            .found()
            .iter()
            .map(|p| (p.word.as_str(), p.valid))
            .collect();
        assert_eq!(
            valid,
            [
                ("ABBA", Some(false)),
                ("ABBA", Some(false)),
                ("AB", Some(true)),
                ("AB", Some(true))
            ]
        );
        Ok(())
    }

    #[test]
    fn test_from_files() -> Result<()> {
        let dir = std::env::temp_dir();
        let board = dir.join("wordhunt-solver-board.txt");
        let words = dir.join("wordhunt-solver-words.txt");
        fs::write(&board, "3 3\nc a t\nx x x\nx x x\n").unwrap();
        fs::write(&words, "WORDS\ncat\nact\n").unwrap();
        let solver = Solver::from_grid_file(&board.to_string_lossy())?
            .with_wordlist_from_file(&words.to_string_lossy(), true)?;
        assert_eq!(solver.wordlist().len(), 2);
        assert_eq!(solver.solve().len(), 1);
        Ok(())
    }
}
