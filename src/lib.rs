//! A word hunt solver library for Rust.
//! <br>
//! This crate finds every placement of dictionary words on a rectangular
//! letter grid. A word is placed by starting on a cell with its first letter
//! and stepping to one of the 8 neighbouring cells for every next letter.
//! A step never goes straight back in the direction it came from.
//! It can use the `rayon` crate to search the words in parallel.
//!
//! # How to use `wordhunt_solver`
//! Start by creating a [`Grid`], either from its rows or from a board file,
//! then specify the wordlist to be used and the search settings.
//! The wordlist contains whitespace separated words, typically one word per line.
//! Words with characters other than letters are dropped.
//!
//! # Basic usage
//!  ```
//! use wordhunt_solver::{Config, Grid, Solver};
//!
//! let grid = Grid::from_rows(&["cats", "oxex", "gxsx"])?;
//! let config = Config::default().with_rank_by_length(true).with_directions(true);
//! let solver = Solver::new(grid)
//!     .with_wordlist_from_words(&["cat", "cats", "cog", "set", "dog"])
//!     .with_config(config);
//! let mut results = solver.solve();
//! // SET is found twice
//! assert_eq!(results.len(), 5);
//! for placement in results.drain_by_length() {
//!     println!("{} {}", placement.word, placement.direction_trace());
//! }
//! # Ok::<(), wordhunt_solver::Error>(())
//! ```
//!
//! # About implementation
//! The search is a depth first walk per word, pruned on the first letter
//! mismatch. Placements are handed to a [`PlacementSink`] as soon as they are
//! found; [`Results`] keeps them in discovery order and optionally in priority
//! queues ranked by length or alphabetically.
mod config;
mod direction;
mod error;
mod grid;
mod letterset;
mod placement;
mod ranking;
mod report;
mod search;
mod solver;
mod validate;
mod wordlist;

pub use config::{Config, DEFAULT_DEPTH};
pub use direction::{Move, DIRECTIONS};
pub use error::Error;
pub use grid::Grid;
pub use letterset::LetterSet;
pub use placement::{Coord, Moves, Path, Placement};
pub use ranking::Results;
pub use report::Report;
pub use search::{find_word, search, PlacementSink, SearchStats};
pub use solver::Solver;
pub use validate::is_tile_reuse_valid;
pub use wordlist::Wordlist;
