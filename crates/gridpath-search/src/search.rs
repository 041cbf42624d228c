//! The shared search state machine.
//!
//! [`Search`] owns a board and the run state and implements
//! [`SearchAlgorithm`]. Everything that differs between algorithms (frontier
//! data structure, node payload, expansion policy) lives in a [`Strategy`].

use log::{debug, trace};

use gridpath_core::{Board, Node, NodeData, NodeId, Point};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::run::{RunState, Status, Step};
use crate::traits::SearchAlgorithm;

/// Frontier and expansion policy of one search algorithm.
pub trait Strategy: Default {
    /// Per-node payload.
    type Data: NodeData;

    const NAME: &'static str;

    /// Number of nodes in the frontier.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every node from the frontier.
    fn clear(&mut self);

    /// Open `id` (reached from `parent`) and add it to the frontier.
    fn open(
        &mut self,
        board: &mut Board<Self::Data>,
        run: &mut RunState,
        id: NodeId,
        parent: Option<NodeId>,
        step: &mut Step,
    ) {
        run.open(board, id, parent, step);
        self.push(id);
    }

    /// Add an already-opened node to the frontier.
    fn push(&mut self, id: NodeId);

    /// Do one unit of work. Returns `true` when the goal was reached or the
    /// frontier is empty.
    fn expand(
        &mut self,
        board: &mut Board<Self::Data>,
        run: &mut RunState,
        step: &mut Step,
    ) -> bool;

    /// The two display values for `node`.
    fn display_values(node: &Node<Self::Data>) -> (f64, f64);
}

/// A search algorithm: a board, a run and a strategy.
#[derive(Debug, Clone)]
pub struct Search<S: Strategy> {
    board: Board<S::Data>,
    run: RunState,
    frontier: S,
}

impl<S: Strategy> Search<S> {
    /// Create a search on a fresh `size` board. Call
    /// [`init`](SearchAlgorithm::init) before stepping.
    pub fn new(size: Point, start: Point, goal: Point) -> Self {
        Self {
            board: Board::new(size, start, goal),
            run: RunState::default(),
            frontier: S::default(),
        }
    }

    pub fn board(&self) -> &Board<S::Data> {
        &self.board
    }

    pub fn config(&self) -> SearchConfig {
        self.run.config()
    }

    /// Iterate over the remaining steps of the run.
    pub fn steps(&mut self) -> crate::Steps<'_, Self> {
        crate::Steps::new(self)
    }

    fn finish(&mut self) {
        self.frontier.clear();
        self.run.status = if self.run.solution.is_empty() {
            Status::Exhausted
        } else {
            Status::Found
        };
        debug!(
            "{}: {:?} after opening {} and closing {} nodes",
            S::NAME,
            self.run.status,
            self.run.nodes_opened,
            self.run.nodes_closed
        );
    }
}

impl<S: Strategy> SearchAlgorithm for Search<S> {
    fn name(&self) -> &'static str {
        S::NAME
    }

    fn total_size(&self) -> usize {
        self.board.len()
    }

    fn size(&self) -> Point {
        self.board.size()
    }

    fn start(&self) -> Point {
        self.board.start()
    }

    fn goal(&self) -> Point {
        self.board.goal()
    }

    fn is_obstacle(&self, p: Point) -> bool {
        self.board.is_obstacle(p)
    }

    fn display_values(&self, p: Point) -> (f64, f64) {
        self.board.node(p).map_or((0.0, 0.0), S::display_values)
    }

    fn set_obstacle(&mut self, p: Point, obstacle: bool) {
        self.board.set_obstacle(p, obstacle);
    }

    fn init(&mut self, config: SearchConfig) -> Result<(), SearchError> {
        let metric = config.validate()?;
        self.run.start(config, metric);
        self.frontier.clear();
        self.board.init();
        debug!("{}: init with {:?}", S::NAME, config);

        if let Some(start) = self.board.start_id() {
            let mut step = Step::default();
            self.frontier
                .open(&mut self.board, &mut self.run, start, None, &mut step);
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.run.clear();
        self.frontier.clear();
        self.board.reset();
        debug!("{}: reset", S::NAME);
    }

    fn step(&mut self) -> Step {
        if self.run.status.is_finished() {
            return Step::finished();
        }

        let mut step = Step::default();
        let done = self
            .frontier
            .expand(&mut self.board, &mut self.run, &mut step);
        trace!(
            "{}: closed {:?}, opened {}",
            S::NAME,
            step.closed,
            step.opened.len()
        );

        if done {
            self.finish();
            step.finished = true;
        }
        step
    }

    fn status(&self) -> Status {
        self.run.status
    }

    fn solution(&self) -> &[Point] {
        &self.run.solution
    }

    fn nodes_opened(&self) -> u64 {
        self.run.nodes_opened
    }

    fn nodes_closed(&self) -> u64 {
        self.run.nodes_closed
    }

    fn frontier_len(&self) -> usize {
        self.frontier.len()
    }
}
