//! Collects placements during a search, and ranks them by length or alphabetically.
use crate::placement::Placement;
use crate::search::PlacementSink;
use crate::Config;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry: longest word first, then alphabetical, then in order of discovery.
#[derive(Debug)]
struct ByLength {
    seq: usize,
    placement: Placement,
}

impl Ord for ByLength {
    fn cmp(&self, other: &Self) -> Ordering {
        self.placement
            .len()
            .cmp(&other.placement.len())
            .then_with(|| other.placement.word.cmp(&self.placement.word))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for ByLength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ByLength {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ByLength {}

/// Heap entry: alphabetical, then in order of discovery.
#[derive(Debug)]
struct Alphabetical {
    seq: usize,
    placement: Placement,
}

impl Ord for Alphabetical {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .placement
            .word
            .cmp(&self.placement.word)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Alphabetical {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Alphabetical {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Alphabetical {}

/// The placements found in a search run.
///
/// All placements are kept in discovery order. When requested, each recorded
/// placement is also inserted in one or two priority queues:
/// - by length: longest words first, equal lengths in alphabetical order
/// - alphabetical: in alphabetical order regardless of length
///
/// The sequential search records placements while it walks the grid. With
/// the `rayon` feature they are recorded once all words have been searched.
///
/// ## Examples
/// ```
/// # use wordhunt_solver::{search, Config, Grid, Results, Wordlist, Error};
/// let grid = Grid::from_rows(&["cats", "xxxx"])?;
/// let wordlist = Wordlist::from_words(&["at", "cat", "cats", "as"]);
/// let mut results = Results::new(true, false);
/// search(&grid, &wordlist, &Config::default(), &mut results);
/// let words: Vec<String> = results.drain_by_length().map(|p| p.word).collect();
/// assert_eq!(words, ["CATS", "CAT", "AT"]);
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Default)]
pub struct Results {
    found: Vec<Placement>,
    by_length: Option<BinaryHeap<ByLength>>,
    alphabetical: Option<BinaryHeap<Alphabetical>>,
}

impl PlacementSink for Results {
    fn record(&mut self, placement: Placement) {
        let seq = self.found.len();
        if let Some(heap) = &mut self.by_length {
            heap.push(ByLength {
                seq,
                placement: placement.clone(),
            });
        }
        if let Some(heap) = &mut self.alphabetical {
            heap.push(Alphabetical {
                seq,
                placement: placement.clone(),
            });
        }
        self.found.push(placement);
    }
}

impl Results {
    /// Create an empty result set, with the requested rankings.
    pub fn new(rank_by_length: bool, rank_alphabetical: bool) -> Results {
        Results {
            found: Vec::new(),
            by_length: if rank_by_length {
                Some(BinaryHeap::new())
            } else {
                None
            },
            alphabetical: if rank_alphabetical {
                Some(BinaryHeap::new())
            } else {
                None
            },
        }
    }

    /// Create an empty result set with the rankings enabled in `config`.
    pub fn for_config(config: &Config) -> Results {
        Results::new(config.rank_by_length, config.rank_alphabetical)
    }

    /// All placements in discovery order.
    pub fn found(&self) -> &[Placement] {
        &self.found
    }

    /// Number of placements found.
    pub fn len(&self) -> usize {
        self.found.len()
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    pub fn is_ranked_by_length(&self) -> bool {
        self.by_length.is_some()
    }

    pub fn is_ranked_alphabetical(&self) -> bool {
        self.alphabetical.is_some()
    }

    /// Remove and return the next placement by length, or None when the
    /// queue is empty or ranking by length is off.
    pub fn pop_by_length(&mut self) -> Option<Placement> {
        self.by_length
            .as_mut()
            .and_then(BinaryHeap::pop)
            .map(|entry| entry.placement)
    }

    /// Remove and return the next placement alphabetically, or None when
    /// the queue is empty or alphabetical ranking is off.
    pub fn pop_alphabetical(&mut self) -> Option<Placement> {
        self.alphabetical
            .as_mut()
            .and_then(BinaryHeap::pop)
            .map(|entry| entry.placement)
    }

    /// Take all placements ranked by length.
    pub fn drain_by_length(&mut self) -> impl Iterator<Item = Placement> + '_ {
        std::iter::from_fn(move || self.pop_by_length())
    }

    /// Take all placements ranked alphabetically.
    pub fn drain_alphabetical(&mut self) -> impl Iterator<Item = Placement> + '_ {
        std::iter::from_fn(move || self.pop_alphabetical())
    }

    /// Consume the results, returning the placements in discovery order.
    pub fn into_found(self) -> Vec<Placement> {
        self.found
    }
}
