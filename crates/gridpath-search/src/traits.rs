use gridpath_core::Point;

use crate::config::SearchConfig;
use crate::distance;
use crate::error::SearchError;
use crate::run::{Status, Step};
use crate::steps::Steps;

/// A step-driven search bound to its own board.
///
/// This is the capability set renderers and drivers program against; they
/// never need the concrete variant.
pub trait SearchAlgorithm {
    /// Display name of the algorithm.
    fn name(&self) -> &'static str;

    // --- board queries ---

    /// Total number of nodes on the board.
    fn total_size(&self) -> usize;
    /// Board dimensions as `(width, height)`.
    fn size(&self) -> Point;
    fn start(&self) -> Point;
    fn goal(&self) -> Point;
    /// Obstacle flag at `p`; `false` when out of bounds.
    fn is_obstacle(&self, p: Point) -> bool;
    /// Two algorithm-specific numbers describing the node at `p`, for
    /// display. `(0, 0)` when out of bounds or untouched.
    fn display_values(&self, p: Point) -> (f64, f64);

    // --- board mutation ---

    /// Set or clear an obstacle. No-op on the start, the goal, or out of
    /// bounds.
    fn set_obstacle(&mut self, p: Point, obstacle: bool);

    // --- run control ---

    /// Start a new run: reset counters and solution, clear search metadata
    /// (keeping obstacles) and open the start node.
    fn init(&mut self, config: SearchConfig) -> Result<(), SearchError>;
    /// Stop the run and clear counters, solution, metadata and obstacles.
    fn reset(&mut self);
    /// Perform one unit of work and report what it did.
    fn step(&mut self) -> Step;

    // --- run queries ---

    fn status(&self) -> Status;
    /// Solution in goal-to-start order; empty until the goal is reached.
    fn solution(&self) -> &[Point];
    fn nodes_opened(&self) -> u64;
    fn nodes_closed(&self) -> u64;
    /// Number of nodes currently waiting in the frontier.
    fn frontier_len(&self) -> usize;

    /// Perform one unit of work. Returns `true` once the run is finished,
    /// and keeps returning `true` without doing anything after that.
    fn next_step(&mut self) -> bool {
        self.step().finished
    }

    /// Step until the run is finished.
    fn complete(&mut self) {
        while !self.next_step() {}
    }

    /// Length of the solution: 1 per straight step, 1.414 per diagonal.
    fn solution_distance(&self) -> f64 {
        distance::path_length(self.solution())
    }
}

impl<'a> dyn SearchAlgorithm + 'a {
    /// Iterate over the remaining steps of the run.
    pub fn steps(&mut self) -> Steps<'_, dyn SearchAlgorithm + 'a> {
        Steps::new(self)
    }
}
