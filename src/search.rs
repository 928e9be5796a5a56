//! The placement search: a backtracking walk over the grid for every word.
use crate::direction::Move;
use crate::placement::{Coord, Moves, Path, Placement};
use crate::validate::is_tile_reuse_valid;
use crate::{Config, Grid, Wordlist};

#[cfg(feature = "flame_it")]
use flamer::flame;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Receives placements as soon as the search finds them.
pub trait PlacementSink {
    fn record(&mut self, placement: Placement);
}

impl PlacementSink for Vec<Placement> {
    fn record(&mut self, placement: Placement) {
        self.push(placement);
    }
}

/// Counters for one search run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Words walked on the grid.
    pub searched: usize,
    /// Words rejected by the depth, length or first letter filters.
    pub skipped: usize,
    /// Placements recorded.
    pub placements: usize,
}

/// State of the walk for a single word.
struct Walk<'a> {
    grid: &'a Grid,
    word: &'a str,
    letters: &'a [u8],
    max_depth: usize,
    tile_reuse: bool,
    moves: Moves,
    path: Path,
}

impl<'a> Walk<'a> {
    fn new(grid: &'a Grid, word: &'a str, max_depth: usize, tile_reuse: bool) -> Walk<'a> {
        Walk {
            grid,
            word,
            letters: word.as_bytes(),
            max_depth,
            tile_reuse,
            moves: Moves::new(),
            path: Path::new(),
        }
    }

    fn placement(&self) -> Placement {
        let mut placement = Placement {
            word: String::from(self.word),
            start: self.path[0],
            moves: self.moves.clone(),
            path: self.path.clone(),
            valid: None,
        };
        if self.tile_reuse {
            placement.valid = Some(is_tile_reuse_valid(&placement));
        }
        placement
    }

    /// Step onto `row`, `col` as letter number `depth`, arriving in direction `prev`.
    /// Returns the number of placements recorded below this step.
    fn step<S: PlacementSink + ?Sized>(
        &mut self,
        row: isize,
        col: isize,
        depth: usize,
        prev: Move,
        sink: &mut S,
    ) -> usize {
        if depth >= self.max_depth || self.grid.get(row, col) != Some(self.letters[depth]) {
            return 0;
        }
        let pos = Coord::new(row as usize, col as usize);
        self.moves.push(prev);
        self.path.push(pos);
        let found = if depth == self.letters.len() - 1 {
            sink.record(self.placement());
            1
        } else {
            let mut found = 0;
            for &next in prev.successors() {
                let (dr, dc) = next.delta();
                found += self.step(row + dr, col + dc, depth + 1, next, sink);
            }
            found
        };
        self.moves.pop();
        self.path.pop();
        found
    }
}

/// Find every placement of `word` on `grid` and hand them to `sink`.
///
/// Start cells are tried in row-major order, directions in the order
/// N, NE, E, SE, S, SW, W, NW. A step never goes straight back in the
/// direction it came from. Paths longer than `max_depth` are not followed.
/// When `tile_reuse` is true every placement gets its validity flag set.
///
/// Returns the number of placements found.
///
/// ## Examples
/// ```
/// # use wordhunt_solver::{find_word, Grid, Error, Placement};
/// let grid = Grid::from_rows(&["cat", "xxx", "xxx"])?;
/// let mut found: Vec<Placement> = Vec::new();
/// assert_eq!(find_word(&grid, "CAT", 6, false, &mut found), 1);
/// assert_eq!(found[0].direction_trace(), "Start at row 0 col 0, go E E");
/// # Ok::<(), Error>(())
/// ```
pub fn find_word<S: PlacementSink + ?Sized>(
    grid: &Grid,
    word: &str,
    max_depth: usize,
    tile_reuse: bool,
    sink: &mut S,
) -> usize {
    let first = match word.as_bytes().first() {
        Some(&first) => first,
        None => return 0,
    };
    if word.len() > max_depth {
        return 0;
    }
    let mut walk = Walk::new(grid, word, max_depth, tile_reuse);
    let mut found = 0;
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            if grid.letter_at(row, col) == first {
                found += walk.step(row as isize, col as isize, 0, Move::Start, sink);
            }
        }
    }
    found
}

/// Search all words of `wordlist` that pass the `config` filters, in
/// wordlist order, and hand every placement to `sink` as it is found.
#[cfg(not(feature = "rayon"))]
#[cfg_attr(feature = "flame_it", flame)]
pub fn search<S: PlacementSink + ?Sized>(
    grid: &Grid,
    wordlist: &Wordlist,
    config: &Config,
    sink: &mut S,
) -> SearchStats {
    let mut stats = SearchStats::default();
    for word in wordlist.iter() {
        if !config.accepts(word) {
            stats.skipped += 1;
            continue;
        }
        stats.searched += 1;
        stats.placements += find_word(grid, word, config.depth, config.tile_reuse, sink);
    }
    log::debug!("{:?}", stats);
    stats
}

/// Search all words of `wordlist` that pass the `config` filters, and hand
/// every placement to `sink`.
///
/// Words are searched in parallel. The placements reach `sink` after all
/// words have been searched, in the same order as a sequential search would
/// produce them.
#[cfg(feature = "rayon")]
#[cfg_attr(feature = "flame_it", flame)]
pub fn search<S: PlacementSink + ?Sized>(
    grid: &Grid,
    wordlist: &Wordlist,
    config: &Config,
    sink: &mut S,
) -> SearchStats {
    let words: Vec<&String> = wordlist.iter().filter(|w| config.accepts(w)).collect();
    let found: Vec<Vec<Placement>> = words
        .par_iter()
        .map(|word| {
            let mut placements: Vec<Placement> = Vec::new();
            find_word(grid, word, config.depth, config.tile_reuse, &mut placements);
            placements
        })
        .collect();
    let mut stats = SearchStats {
        searched: words.len(),
        skipped: wordlist.len() - words.len(),
        placements: 0,
    };
    for placement in found.into_iter().flatten() {
        stats.placements += 1;
        sink.record(placement);
    }
    log::debug!("{:?}", stats);
    stats
}
