//! Per-run bookkeeping shared by every strategy.

use gridpath_core::{Board, NodeData, NodeId, Point};

use crate::config::SearchConfig;
use crate::heuristic::Metric;

/// Where a search run stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Not initialised since construction or the last reset.
    #[default]
    Idle,
    Running,
    /// The goal was reached and the solution is stored.
    Found,
    /// The frontier emptied without reaching the goal.
    Exhausted,
}

impl Status {
    /// Whether stepping has no more work to do.
    #[inline]
    pub fn is_finished(self) -> bool {
        self != Status::Running
    }
}

/// What a single call to `step` did.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    /// The node closed by this step, if any.
    pub closed: Option<Point>,
    /// Nodes that entered the frontier during this step, in order.
    pub opened: Vec<Point>,
    /// Whether the run is over after this step.
    pub finished: bool,
}

impl Step {
    pub(crate) fn finished() -> Self {
        Self {
            finished: true,
            ..Self::default()
        }
    }
}

/// Run state: configuration, counters, status and solution.
///
/// Strategies use it to open and close nodes so that the counters and the
/// goal check stay consistent across variants.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    pub(crate) config: SearchConfig,
    pub(crate) metric: Metric,
    pub(crate) status: Status,
    pub(crate) solution: Vec<Point>,
    pub(crate) nodes_opened: u64,
    pub(crate) nodes_closed: u64,
    // shared scratch buffer for neighbour queries
    nbuf: Vec<NodeId>,
}

impl RunState {
    pub(crate) fn start(&mut self, config: SearchConfig, metric: Metric) {
        self.clear();
        self.config = config;
        self.metric = metric;
        self.status = Status::Running;
    }

    pub(crate) fn clear(&mut self) {
        self.status = Status::Idle;
        self.solution.clear();
        self.nodes_opened = 0;
        self.nodes_closed = 0;
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Distance under the configured heuristic.
    #[inline]
    pub fn distance(&self, a: Point, b: Point) -> f64 {
        self.metric.distance(a, b)
    }

    /// Mark `id` as opened from `parent` and record it in `step`.
    pub fn open<D: NodeData>(
        &mut self,
        board: &mut Board<D>,
        id: NodeId,
        parent: Option<NodeId>,
        step: &mut Step,
    ) {
        self.nodes_opened += 1;
        let node = &mut board[id];
        node.parent = parent;
        node.opened = true;
        step.opened.push(node.position());
    }

    /// Count `id` as closed and record it in `step`.
    pub fn close<D: NodeData>(&mut self, board: &Board<D>, id: NodeId, step: &mut Step) {
        self.nodes_closed += 1;
        step.closed = Some(board[id].position());
    }

    /// If `id` is the goal, store the solution and return `true`.
    ///
    /// The solution is stored goal first, start last.
    pub fn check_goal<D: NodeData>(&mut self, board: &Board<D>, id: NodeId) -> bool {
        if board[id].position() != board.goal() {
            return false;
        }
        self.solution = board.path_to(id);
        true
    }

    /// Accessible neighbours of `id` under the configured movement rules.
    ///
    /// The returned buffer should be handed back with
    /// [`recycle`](Self::recycle) once the caller is done with it.
    pub fn neighbors<D: NodeData>(&mut self, board: &Board<D>, id: NodeId) -> Vec<NodeId> {
        let mut buf = std::mem::take(&mut self.nbuf);
        buf.clear();
        board.neighbors(id, self.config.diagonals, self.config.cut_corners, &mut buf);
        buf
    }

    pub fn recycle(&mut self, buf: Vec<NodeId>) {
        self.nbuf = buf;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_close_counts() {
        let mut board: Board<()> = Board::new(Point::new(3, 1), Point::new(0, 0), Point::new(2, 0));
        let mut run = RunState::default();
        run.start(SearchConfig::default(), Metric::Manhattan);
        let mut step = Step::default();

        run.open(&mut board, 0, None, &mut step);
        run.open(&mut board, 1, Some(0), &mut step);
        run.close(&board, 0, &mut step);
        assert_eq!(run.nodes_opened, 2);
        assert_eq!(run.nodes_closed, 1);
        assert_eq!(step.opened, vec![Point::new(0, 0), Point::new(1, 0)]);
        assert_eq!(step.closed, Some(Point::new(0, 0)));
        assert!(board[1].opened);
        assert_eq!(board[1].parent, Some(0));
    }

    #[test]
    fn goal_check_stores_reversed_path() {
        let mut board: Board<()> = Board::new(Point::new(3, 1), Point::new(0, 0), Point::new(2, 0));
        let mut run = RunState::default();
        board[1].parent = Some(0);
        board[2].parent = Some(1);

        assert!(!run.check_goal(&board, 1));
        assert!(run.solution.is_empty());
        assert!(run.check_goal(&board, 2));
        assert_eq!(
            run.solution,
            vec![Point::new(2, 0), Point::new(1, 0), Point::new(0, 0)]
        );
    }

    #[test]
    fn status_finished() {
        assert!(Status::Idle.is_finished());
        assert!(!Status::Running.is_finished());
        assert!(Status::Found.is_finished());
        assert!(Status::Exhausted.is_finished());
    }
}
