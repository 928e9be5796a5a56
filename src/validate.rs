//! Tile-reuse check for word hunt games, where a grid cell may be used at
//! most once per word.
use crate::placement::{Path, Placement};

/// Returns true if no grid cell is visited twice by `placement`.
///
/// Two letter words are always valid: both steps are on different,
/// adjacent cells.
pub fn is_tile_reuse_valid(placement: &Placement) -> bool {
    if placement.len() == 2 {
        return true;
    }
    let mut path: Path = placement.path.clone();
    path.sort_unstable();
    path.windows(2).all(|pair| pair[0] != pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Move::{self, Start, E, N, NE, S, SW, W};
    use crate::placement::Coord;

    fn placement(start: (usize, usize), moves: &[Move]) -> Placement {
        let mut placement = Placement {
            word: "X".repeat(moves.len()),
            start: Coord::new(start.0, start.1),
            moves: moves.iter().copied().collect(),
            path: Path::new(),
            valid: None,
        };
        placement.path = placement.replay();
        placement
    }

    #[test]
    fn test_two_letters_always_valid() {
        assert!(is_tile_reuse_valid(&placement((0, 0), &[Start, E])));
        assert!(is_tile_reuse_valid(&placement((1, 1), &[Start, SW])));
    }

    #[test]
    fn test_distinct_cells() {
        assert!(is_tile_reuse_valid(&placement((0, 0), &[Start, E, E])));
        assert!(is_tile_reuse_valid(&placement((1, 0), &[Start, E, NE, S])));
        assert!(is_tile_reuse_valid(&placement((0, 0), &[Start])));
    }

    #[test]
    fn test_loop_back_to_start() {
        // E, S, W, N returns to the start cell
        assert!(!is_tile_reuse_valid(&placement((0, 0), &[Start, E, S, W, N])));
        // E, SW, N revisits the start cell after three steps
        assert!(!is_tile_reuse_valid(&placement((0, 0), &[Start, E, SW, N])));
    }

    #[test]
    fn test_revisit_in_the_middle() {
        // (1,0) (1,1) (0,1) (0,2) (1,1)
        let p = placement((1, 0), &[Start, E, N, E, SW]);
        assert!(!is_tile_reuse_valid(&p));
        // the same shape one step shorter never comes back
        let p = placement((1, 0), &[Start, E, N, E]);
        assert!(is_tile_reuse_valid(&p));
    }
}
