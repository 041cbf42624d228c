//! Terminal driver for comparing the gridpath searches.
//!
//! [`PathFinder`] owns one search plus the canonical obstacle layout, so the
//! same random board can be run through every algorithm in turn. The
//! `pathfind` binary wires it to the command line.

mod finder;
mod timer;

pub use finder::{AUTO_STEP_DELAY, DemoError, PathFinder, RunMode};
pub use timer::Timer;

use rand::SeedableRng;
use rand::rngs::StdRng;

use gridpath_core::Point;
use gridpath_search::{AlgorithmKind, SearchConfig};
use gridpath_term::Charset;

/// Everything a demo session needs.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub size: Point,
    pub start: Point,
    pub goal: Point,
    pub mode: RunMode,
    pub search: SearchConfig,
    pub algorithms: Vec<AlgorithmKind>,
    /// Number of random boards; 0 runs until interrupted.
    pub rounds: u32,
    /// Seed for the obstacle RNG; `None` seeds from the OS.
    pub seed: Option<u64>,
    pub charset: Charset,
    /// Wait for Enter after each finished search.
    pub pause: bool,
}

impl DemoConfig {
    /// Defaults for a `size` board, with start and goal one cell in from the
    /// left and right edges on the middle row.
    pub fn with_size(size: Point) -> Self {
        Self {
            size,
            start: Point::new(1, size.y / 2),
            goal: Point::new(size.x - 2, size.y / 2),
            mode: RunMode::default(),
            search: SearchConfig::default(),
            algorithms: AlgorithmKind::ALL.to_vec(),
            rounds: 1,
            seed: None,
            charset: Charset::default(),
            pause: true,
        }
    }

    /// Obstacle RNG: seeded from `seed` when set, otherwise from the thread
    /// RNG.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::with_size(Point::new(25, 5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let c = DemoConfig::default();
        assert_eq!(c.size, Point::new(25, 5));
        assert_eq!(c.start, Point::new(1, 2));
        assert_eq!(c.goal, Point::new(23, 2));
        assert_eq!(c.algorithms, AlgorithmKind::ALL.to_vec());
        assert_eq!(c.mode, RunMode::Timer);
    }

    #[test]
    fn obstacle_rng_follows_seed() {
        let mut c = DemoConfig::default();
        let f = PathFinder::new(AlgorithmKind::AStar, c.size, c.start, c.goal).unwrap();

        c.seed = Some(9);
        let a = f.random_obstacles(&mut c.rng());
        let b = f.random_obstacles(&mut c.rng());
        assert_eq!(a, b);

        c.seed = None;
        for p in f.random_obstacles(&mut c.rng()) {
            assert!((0..25).contains(&p.x) && (0..5).contains(&p.y));
        }
    }
}
