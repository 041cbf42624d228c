//! Runs A*, best-first, breadth-first and depth-first search on the same
//! random boards and prints each result.
//!
//! Run: cargo run --bin pathfind -- --help

use clap::Parser;
use log::info;
use tracing_subscriber::{EnvFilter, fmt};

use gridpath_core::Point;
use gridpath_demos::{DemoConfig, DemoError, PathFinder, RunMode};
use gridpath_search::{AlgorithmKind, Heuristic};
use gridpath_term::{Charset, RenderOptions};

/// Compare grid searches on random obstacle boards.
#[derive(Parser)]
#[command(name = "pathfind")]
#[command(version)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Board width
    #[arg(long, default_value_t = 25)]
    width: i32,

    /// Board height
    #[arg(long, default_value_t = 5)]
    height: i32,

    /// Start cell as `x,y` (default: one in from the left, middle row)
    #[arg(long, value_parser = parse_point)]
    start: Option<Point>,

    /// Goal cell as `x,y` (default: one in from the right, middle row)
    #[arg(long, value_parser = parse_point)]
    goal: Option<Point>,

    /// timer, stop (Enter between steps) or auto (500ms between steps)
    #[arg(short, long, default_value_t = RunMode::Timer)]
    mode: RunMode,

    /// manhattan, diagonal or euclidean
    #[arg(long, default_value_t = Heuristic::Manhattan)]
    heuristic: Heuristic,

    /// Only allow horizontal and vertical moves
    #[arg(long)]
    no_diagonals: bool,

    /// Forbid diagonal moves past an obstacle
    #[arg(long)]
    no_cut_corners: bool,

    /// Algorithms to run, in order (default: all)
    #[arg(short, long = "algorithm")]
    algorithms: Vec<AlgorithmKind>,

    /// Number of random boards; 0 runs until interrupted
    #[arg(short, long, default_value_t = 1)]
    rounds: u32,

    /// Seed for the obstacle layout
    #[arg(long)]
    seed: Option<u64>,

    /// unicode or ascii box drawing
    #[arg(long, default_value_t = Charset::Unicode)]
    charset: Charset,

    /// Do not wait for Enter after each search
    #[arg(long)]
    no_pause: bool,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y, got {s}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in {s}: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in {s}: {e}"))?;
    Ok(Point::new(x, y))
}

impl From<Cli> for DemoConfig {
    fn from(cli: Cli) -> Self {
        let mut c = DemoConfig::with_size(Point::new(cli.width, cli.height));
        if let Some(start) = cli.start {
            c.start = start;
        }
        if let Some(goal) = cli.goal {
            c.goal = goal;
        }
        c.mode = cli.mode;
        c.search = c
            .search
            .with_heuristic(cli.heuristic)
            .with_diagonals(!cli.no_diagonals)
            .with_cut_corners(!cli.no_cut_corners);
        if !cli.algorithms.is_empty() {
            c.algorithms = cli.algorithms;
        }
        c.rounds = cli.rounds;
        c.seed = cli.seed;
        c.charset = cli.charset;
        c.pause = !cli.no_pause;
        c
    }
}

fn run(config: DemoConfig) -> Result<(), DemoError> {
    let first = config.algorithms.first().copied().unwrap_or_default();
    let mut finder = PathFinder::new(first, config.size, config.start, config.goal)?
        .with_render(RenderOptions::default().with_charset(config.charset))
        .with_pause(config.pause);
    config.search.validate()?;

    let mut rng = config.rng();

    let mut round = 0;
    while config.rounds == 0 || round < config.rounds {
        round += 1;
        info!("round {round}");
        finder.set_random_obstacles(&mut rng, true);
        for &kind in &config.algorithms {
            finder.set_algorithm(kind);
            finder.run(config.mode, config.search)?;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli.into()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
