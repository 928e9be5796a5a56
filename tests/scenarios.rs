use wordhunt_solver::{
    find_word, is_tile_reuse_valid, search, Config, Coord, Error, Grid, Move, Placement,
    Report, Results, Solver, Wordlist,
};
use Move::{Start, E};

type Result<T> = std::result::Result<T, Error>;

fn cat_grid() -> Result<Grid> {
    Grid::from_rows(&["cat", "xyz", "xyz"])
}

fn solve(grid: Grid, words: &[&str], config: Config) -> Results {
    Solver::new(grid)
        .with_wordlist_from_words(words)
        .with_config(config)
        .solve()
}

#[test]
fn test_single_straight_placement() -> Result<()> {
    let results = solve(cat_grid()?, &["CAT"], Config::default().with_depth(3)?);
    assert_eq!(results.len(), 1);
    let p = &results.found()[0];
    assert_eq!(p.start, Coord::new(0, 0));
    assert_eq!(p.moves.as_slice(), &[Start, E, E]);
    let path: Vec<Coord> = p.path.to_vec();
    assert_eq!(path, [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]);
    Ok(())
}

#[test]
fn test_two_letter_word_is_valid() -> Result<()> {
    let config = Config::default().with_tile_reuse(true);
    let results = solve(cat_grid()?, &["AT"], config);
    assert_eq!(results.len(), 1);
    assert_eq!(results.found()[0].valid, Some(true));
    Ok(())
}

#[test]
fn test_depth_cap_boundary() -> Result<()> {
    let grid = Grid::from_rows(&["abcdefg", "hijklmn"])?;
    let config = Config::default().with_depth(6)?;
    let results = solve(grid.clone(), &["abcdefg"], config.clone());
    assert!(results.is_empty());
    // a word as long as the cap is still found
    let results = solve(grid, &["abcdef", "nmlkji"], config);
    let words: Vec<&str> = results.found().iter().map(|p| p.word.as_str()).collect();
    assert_eq!(words, ["ABCDEF", "NMLKJI"]);
    Ok(())
}

#[test]
fn test_no_east_then_west() -> Result<()> {
    let grid = Grid::from_rows(&["tot", "xxx"])?;
    let results = solve(grid, &["oto", "tot"], Config::default());
    // OTO would need E then W (or W then E) from the middle cell
    let words: Vec<&str> = results.found().iter().map(|p| p.word.as_str()).collect();
    assert_eq!(words, ["TOT", "TOT"]);
    for p in results.found() {
        for pair in p.moves.windows(2) {
            assert_ne!(pair[0].opposite(), Some(pair[1]));
        }
    }
    Ok(())
}

#[test]
fn test_tile_reuse_excluded_from_filtered_output() -> Result<()> {
    // ABBA can only be spelled by returning to the first cell
    let grid = Grid::from_rows(&["ab", "bx"])?;
    let config = Config::default().with_tile_reuse(true);
    let solver = Solver::new(grid)
        .with_wordlist_from_words(&["abba"])
        .with_config(config);
    let mut results = solver.solve();
    assert_eq!(results.len(), 2);
    assert!(results.found().iter().all(|p| p.valid == Some(false)));

    let report = Report::new(solver.grid(), solver.config());
    let mut out = Vec::new();
    let written = report.write_summary(&mut out, &mut results).unwrap();
    assert_eq!(written, 0);
    assert!(!String::from_utf8(out).unwrap().contains("ABBA"));
    Ok(())
}

#[test]
fn test_placement_properties() -> Result<()> {
    let grid = Grid::from_rows(&["stea", "etas", "aset", "tase"])?;
    let wordlist = Wordlist::from_words(&["seat", "eats", "teas", "tea", "sets", "east", "tests"]);
    let mut found: Vec<Placement> = Vec::new();
    search(&grid, &wordlist, &Config::default(), &mut found);
    assert!(!found.is_empty());
    for p in &found {
        assert_eq!(p.path.len(), p.word.len());
        assert_eq!(p.path[0], p.start);
        for pair in p.path.windows(2) {
            assert!(pair[0].is_adjacent(pair[1]));
        }
        for pair in p.moves.windows(2) {
            assert_ne!(pair[0].opposite(), Some(pair[1]));
        }
        let mut cells = p.path.to_vec();
        cells.sort();
        cells.dedup();
        assert_eq!(is_tile_reuse_valid(p), p.len() == 2 || cells.len() == p.len());
    }
    Ok(())
}

#[test]
fn test_ranking_order() -> Result<()> {
    let grid = Grid::from_rows(&["stea", "etas", "aset", "tase"])?;
    let words = ["tea", "seat", "at", "eats", "sat", "teas", "set"];
    let config = Config::default()
        .with_rank_by_length(true)
        .with_rank_alphabetical(true);
    let mut results = solve(grid, &words, config);
    let by_length: Vec<Placement> = results.drain_by_length().collect();
    assert_eq!(by_length.len(), results.len());
    for pair in by_length.windows(2) {
        assert!(pair[0].len() >= pair[1].len());
        if pair[0].len() == pair[1].len() {
            assert!(pair[0].word <= pair[1].word);
        }
    }
    let alphabetical: Vec<Placement> = results.drain_alphabetical().collect();
    assert_eq!(alphabetical.len(), results.len());
    for pair in alphabetical.windows(2) {
        assert!(pair[0].word <= pair[1].word);
    }
    Ok(())
}

#[test]
fn test_deterministic() -> Result<()> {
    let grid = Grid::from_rows(&["stea", "etas", "aset", "tase"])?;
    let wordlist = Wordlist::from_words(&["seat", "eats", "teas", "tea", "sets", "east"]);
    let config = Config::default().with_tile_reuse(true);
    let mut first: Vec<Placement> = Vec::new();
    let mut second: Vec<Placement> = Vec::new();
    search(&grid, &wordlist, &config, &mut first);
    search(&grid, &wordlist, &config, &mut second);
    assert_eq!(first, second);
    // the same placements as searching word by word
    let mut sequential: Vec<Placement> = Vec::new();
    for word in wordlist.iter() {
        find_word(&grid, word, config.depth, config.tile_reuse, &mut sequential);
    }
    assert_eq!(first, sequential);
    Ok(())
}
