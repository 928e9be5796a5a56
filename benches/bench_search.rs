use criterion::{criterion_group, criterion_main, Criterion};
use wordhunt_solver::{Config, Grid, Solver};

const BOARD: &[&str] = &["serp", "aten", "ldio", "sfar"];

// Words along the board plus some that are not on it
const WORDS: &[&str] = &[
    "sat", "seat", "tea", "teas", "eat", "eats", "ate", "ten", "tens", "net", "nets", "rip",
    "ripe", "pen", "pens", "lad", "lads", "dal", "dial", "dials", "far", "fad", "fads", "rad",
    "raid", "radio", "ion", "ions", "din", "dine", "diner", "tide", "tied", "sold", "slate",
    "stale", "tales", "steal", "least", "paten", "zebra", "quiz", "jazz", "oxygen", "lynx",
];

/// Repeat `WORDS` to get a dictionary of about `size` words.
fn wordlist(size: usize) -> Vec<&'static str> {
    WORDS.iter().copied().cycle().take(size).collect()
}

fn bench_solve(c: &mut Criterion, name: &str, size: usize, config: Config) {
    let grid = Grid::from_rows(BOARD).unwrap();
    let solver = Solver::new(grid)
        .with_wordlist_from_words(&wordlist(size))
        .with_config(config);
    c.bench_function(&format!("solver.{}", name), |b| {
        b.iter(|| {
            let results = solver.solve();
            results.len()
        })
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_solve(c, "discovery", 1_000, Config::default());
    let ranked = Config::default()
        .with_rank_by_length(true)
        .with_rank_alphabetical(true)
        .with_tile_reuse(true);
    bench_solve(c, "ranked", 1_000, ranked);
}

fn slow_benchmarks(c: &mut Criterion) {
    let deep = Config::default().with_depth(10).unwrap();
    bench_solve(c, "deep", 50_000, deep);
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(60);
    targets = criterion_benchmark
}

criterion_group! {
    name = slow;
    config = Criterion::default()
        .sample_size(10);
    targets = slow_benchmarks
}

criterion_main!(benches, slow);
