use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::time::Instant;
use wordhunt_solver::{Config, Report, Solver, DEFAULT_DEPTH};

const DEFAULT_DICTIONARY: &str = "Collins_Scrabble_Words_(2019).txt";

/// Find all dictionary words on a word hunt board
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board file: width and height, followed by the letters row by row
    #[arg(short, long, default_value = "board.txt")]
    board: String,

    /// Dictionary file with whitespace separated words
    #[arg(short, long, default_value = DEFAULT_DICTIONARY)]
    dictionary: String,

    /// Ignore the first line of the dictionary file.
    /// Always on for the default dictionary, which starts with a title line
    #[arg(long)]
    skip_header: bool,

    /// Maximum word length searched
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    search_depth: usize,

    /// Only search words of this length
    #[arg(short = 'x', long)]
    specify_length: Option<usize>,

    /// Only search words starting with one of these letters
    #[arg(short = 'y', long)]
    specify_first_letter: Option<String>,

    /// Print the compass directions of each word
    #[arg(short, long)]
    cardinal: bool,

    /// Print the grid positions of each word
    #[arg(short, long)]
    index: bool,

    /// Sort the words by length, longest first
    #[arg(short, long)]
    point: bool,

    /// Sort the words alphabetically
    #[arg(short, long)]
    alpha: bool,

    /// Only print words on a straight line
    #[arg(short, long)]
    linear: bool,

    /// Skip words that use a tile more than once
    #[arg(short, long)]
    word_hunt: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn skip_header(&self) -> bool {
        self.skip_header || self.dictionary == DEFAULT_DICTIONARY
    }

    fn config(&self) -> anyhow::Result<Config> {
        let mut config = Config::default()
            .with_depth(self.search_depth)?
            .with_directions(self.cardinal)
            .with_coordinates(self.index)
            .with_rank_by_length(self.point)
            .with_rank_alphabetical(self.alpha)
            .with_linear_only(self.linear)
            .with_tile_reuse(self.word_hunt);
        if let Some(len) = self.specify_length {
            config = config.with_exact_length(len)?;
        }
        if let Some(letters) = &self.specify_first_letter {
            config = config.with_first_letters(letters)?;
        }
        Ok(config)
    }
}

/// Log to stderr, at `Debug` level when `verbose` is set and `Warn` otherwise.
/// `RUST_LOG` overrides the level when it is set.
fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    builder.init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.config().context("Invalid search settings")?;
    let solver = Solver::from_grid_file(&cli.board)
        .with_context(|| format!("Failed to load board \"{}\"", cli.board))?
        .with_wordlist_from_file(&cli.dictionary, cli.skip_header())
        .with_context(|| format!("Failed to load dictionary \"{}\"", cli.dictionary))?
        .with_config(config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let report = Report::new(solver.grid(), solver.config());
    report.write_header(&mut out)?;

    let t_solve = Instant::now();
    let mut results = solver.solve();
    log::debug!(
        "Found {} placements in {:.3}s",
        results.len(),
        t_solve.elapsed().as_secs_f64()
    );

    let written = report.write_summary(&mut out, &mut results)?;
    out.flush()?;
    log::info!("Printed {} of {} placements", written, results.len());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::FAILURE
        }
    }
}
