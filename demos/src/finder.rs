use std::fmt;
use std::io;
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use indexmap::IndexMap;
use log::debug;
use rand::{Rng, RngExt};

use gridpath_core::Point;
use gridpath_search::{AlgorithmKind, ParseError, SearchAlgorithm, SearchConfig, SearchError};
use gridpath_term::RenderOptions;

use crate::timer::Timer;

/// Pause between steps in [`RunMode::AutoStepByStep`].
pub const AUTO_STEP_DELAY: Duration = Duration::from_millis(500);

/// How [`PathFinder::run`] drives the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Run to completion and log the elapsed time.
    #[default]
    Timer,
    /// Render after every step and wait for Enter.
    StopStepByStep,
    /// Render after every step, pausing [`AUTO_STEP_DELAY`] in between.
    AutoStepByStep,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Timer => f.write_str("timer"),
            RunMode::StopStepByStep => f.write_str("stop"),
            RunMode::AutoStepByStep => f.write_str("auto"),
        }
    }
}

impl FromStr for RunMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "timer" => Ok(RunMode::Timer),
            "stop" | "step" => Ok(RunMode::StopStepByStep),
            "auto" => Ok(RunMode::AutoStepByStep),
            _ => Err(ParseError::new("run mode", s)),
        }
    }
}

/// Errors from driving a search in the terminal.
#[derive(Debug)]
pub enum DemoError {
    Search(SearchError),
    Io(io::Error),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search(e) => write!(f, "search error: {e}"),
            Self::Io(e) => write!(f, "terminal error: {e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Search(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<SearchError> for DemoError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<io::Error> for DemoError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Runs searches on one board layout and keeps the obstacles across
/// algorithm switches.
pub struct PathFinder {
    kind: AlgorithmKind,
    algorithm: Box<dyn SearchAlgorithm>,
    // insertion order keeps replays deterministic
    obstacles: IndexMap<Point, bool>,
    render: RenderOptions,
    pause: bool,
}

impl PathFinder {
    /// Create a driver for a `kind` search. Fails when start or goal is off
    /// the board.
    pub fn new(
        kind: AlgorithmKind,
        size: Point,
        start: Point,
        goal: Point,
    ) -> Result<Self, SearchError> {
        Ok(Self {
            kind,
            algorithm: kind.try_build(size, start, goal)?,
            obstacles: IndexMap::new(),
            render: RenderOptions::default(),
            pause: false,
        })
    }

    /// Renderer settings for the boards printed by [`run`](Self::run).
    pub fn with_render(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }

    /// Wait for Enter after printing each final board.
    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    pub fn kind(&self) -> AlgorithmKind {
        self.kind
    }

    pub fn algorithm(&self) -> &dyn SearchAlgorithm {
        self.algorithm.as_ref()
    }

    pub fn obstacles(&self) -> &IndexMap<Point, bool> {
        &self.obstacles
    }

    /// Switch to a fresh `kind` search on the same board and replay the
    /// stored obstacles onto it.
    pub fn set_algorithm(&mut self, kind: AlgorithmKind) {
        let (size, start, goal) = (
            self.algorithm.size(),
            self.algorithm.start(),
            self.algorithm.goal(),
        );
        self.kind = kind;
        self.algorithm = kind.build(size, start, goal);
        for (&p, &obstacle) in &self.obstacles {
            self.algorithm.set_obstacle(p, obstacle);
        }
        debug!("switched to {kind}, replayed {} obstacles", self.obstacles.len());
    }

    pub fn set_obstacle(&mut self, p: Point, obstacle: bool) {
        self.algorithm.set_obstacle(p, obstacle);
        self.obstacles.insert(p, obstacle);
    }

    pub fn set_obstacles(&mut self, ps: &[Point], obstacle: bool) {
        for &p in ps {
            self.set_obstacle(p, obstacle);
        }
    }

    /// Draw a random obstacle layout: `n` uniform positions with `n` drawn
    /// from `[0, total / 2)`. Positions may repeat.
    pub fn random_obstacles<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Point> {
        let size = self.algorithm.size();
        let half = self.algorithm.total_size() / 2;
        if half == 0 || size.x <= 0 || size.y <= 0 {
            return Vec::new();
        }
        let n = rng.random_range(0..half);
        (0..n)
            .map(|_| Point::new(rng.random_range(0..size.x), rng.random_range(0..size.y)))
            .collect()
    }

    /// Place a random obstacle layout, first clearing the board and the
    /// stored obstacles when `reset_before` is set.
    pub fn set_random_obstacles<R: Rng + ?Sized>(&mut self, rng: &mut R, reset_before: bool) {
        if reset_before {
            self.algorithm.reset();
            self.obstacles.clear();
        }
        let ps = self.random_obstacles(rng);
        self.set_obstacles(&ps, true);
        debug!("placed {} random obstacles", ps.len());
    }

    /// Initialise the current algorithm with `config` and run it in `mode`,
    /// printing the final board at the end.
    pub fn run(&mut self, mode: RunMode, config: SearchConfig) -> Result<(), DemoError> {
        self.algorithm.init(config)?;
        match mode {
            RunMode::Timer => {
                let _timer = Timer::new(self.algorithm.name());
                self.algorithm.complete();
            }
            RunMode::StopStepByStep => {
                while !self.algorithm.next_step() {
                    gridpath_term::print(self.algorithm.as_ref(), &self.render)?;
                    gridpath_term::wait_for_enter(true)?;
                }
            }
            RunMode::AutoStepByStep => {
                while !self.algorithm.next_step() {
                    gridpath_term::clear_screen()?;
                    gridpath_term::print(self.algorithm.as_ref(), &self.render)?;
                    thread::sleep(AUTO_STEP_DELAY);
                }
            }
        }

        gridpath_term::print(self.algorithm.as_ref(), &self.render)?;
        if self.pause {
            gridpath_term::wait_for_enter(true)?;
        }
        Ok(())
    }
}
