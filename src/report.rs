//! Plain text output of a solver run.
use crate::{Config, Grid, Placement, Results};
use std::io::{self, Write};

const LINEAR_ONLY: &str = "--Outputting Linear Solutions Only--";

/// Writes the board, the settings, and the ranked placements.
///
/// Placements that use a cell twice (when tile reuse is checked), or that
/// are not straight (when only linear solutions are asked for) are skipped.
pub struct Report<'a> {
    grid: &'a Grid,
    config: &'a Config,
}

impl<'a> Report<'a> {
    pub fn new(grid: &'a Grid, config: &'a Config) -> Report<'a> {
        Report { grid, config }
    }

    /// Check if `placement` passes the tile-reuse and linear filters.
    pub fn keep(&self, placement: &Placement) -> bool {
        if self.config.tile_reuse && placement.valid == Some(false) {
            return false;
        }
        !self.config.linear_only || placement.is_linear()
    }

    /// Write the board and the search settings.
    pub fn write_header<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "---Word Hunt Puzzle Board Inputted---")?;
        writeln!(out, "{}", self.grid)?;
        writeln!(out)?;
        writeln!(out, "--Search Depth: {}--", self.config.depth)?;
        if let Some(len) = self.config.exact_length {
            writeln!(out, "--Specified Length: {}--", len)?;
        }
        if let Some(letters) = self.config.first_letters {
            writeln!(out, "--Specified First Letters: {}--", letters)?;
        }
        writeln!(out)
    }

    /// Write the word, followed by the traces enabled in the config.
    fn write_placement<W: Write>(&self, out: &mut W, placement: &Placement) -> io::Result<()> {
        writeln!(out, "{}", placement.word)?;
        if self.config.directions {
            writeln!(out, "{}", placement.direction_trace())?;
        }
        if self.config.coordinates {
            writeln!(out, "{}", placement.coordinate_trace())?;
        }
        Ok(())
    }

    /// Write the placements, emptying the ranking queues of `results`.
    ///
    /// Ranked by length, ranked alphabetically, or both; in discovery order
    /// if no ranking is enabled. Returns the number of placements written.
    pub fn write_summary<W: Write>(&self, out: &mut W, results: &mut Results) -> io::Result<usize> {
        let mut written = 0;
        writeln!(out, "---Summary---")?;
        writeln!(out)?;
        if results.is_ranked_by_length() {
            writeln!(out, "---Sorted by Word Length---")?;
            if self.config.linear_only {
                writeln!(out, "{}", LINEAR_ONLY)?;
            }
            let mut current_len = 0;
            while let Some(placement) = results.pop_by_length() {
                if !self.keep(&placement) {
                    continue;
                }
                if placement.len() != current_len {
                    current_len = placement.len();
                    writeln!(out)?;
                    writeln!(out, "--Length: {}--", current_len)?;
                    writeln!(out)?;
                }
                self.write_placement(out, &placement)?;
                written += 1;
            }
            writeln!(out)?;
        }
        if results.is_ranked_alphabetical() {
            writeln!(out, "---Sorted Alphabetically---")?;
            writeln!(out)?;
            if self.config.linear_only {
                writeln!(out, "{}", LINEAR_ONLY)?;
            }
            while let Some(placement) = results.pop_alphabetical() {
                if self.keep(&placement) {
                    self.write_placement(out, &placement)?;
                    written += 1;
                }
            }
            writeln!(out)?;
        }
        if !results.is_ranked_by_length() && !results.is_ranked_alphabetical() {
            if self.config.linear_only {
                writeln!(out, "{}", LINEAR_ONLY)?;
            }
            for placement in results.found() {
                if self.keep(placement) {
                    self.write_placement(out, placement)?;
                    written += 1;
                }
            }
            writeln!(out)?;
        }
        Ok(written)
    }
}
