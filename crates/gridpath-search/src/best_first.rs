use gridpath_core::{Board, Node, NodeData, NodeId};

use crate::run::{RunState, Step};
use crate::search::{Search, Strategy};

/// Per-node greedy estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestFirstData {
    /// Distance to the goal, fixed when the node is opened.
    pub h: f64,
}

impl Default for BestFirstData {
    fn default() -> Self {
        Self { h: f64::INFINITY }
    }
}

impl NodeData for BestFirstData {}

/// Greedy best-first frontier, always expanding the node closest to the
/// goal by the configured heuristic.
#[derive(Debug, Clone, Default)]
pub struct BestFirst {
    nodes: Vec<NodeId>,
}

/// Greedy best-first search.
pub type BestFirstSearch = Search<BestFirst>;

impl BestFirst {
    fn sort(&mut self, board: &Board<BestFirstData>) {
        self.nodes
            .sort_by(|&a, &b| board[b].data.h.total_cmp(&board[a].data.h));
    }
}

impl Strategy for BestFirst {
    type Data = BestFirstData;

    const NAME: &'static str = "Best First Search";

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }

    fn open(
        &mut self,
        board: &mut Board<BestFirstData>,
        run: &mut RunState,
        id: NodeId,
        parent: Option<NodeId>,
        step: &mut Step,
    ) {
        run.open(board, id, parent, step);
        board[id].data.h = run.distance(board[id].position(), board.goal());
        self.push(id);
    }

    fn push(&mut self, id: NodeId) {
        self.nodes.push(id);
    }

    fn expand(
        &mut self,
        board: &mut Board<BestFirstData>,
        run: &mut RunState,
        step: &mut Step,
    ) -> bool {
        self.sort(board);
        let Some(current) = self.nodes.pop() else {
            return true;
        };
        run.close(board, current, step);

        if run.check_goal(board, current) {
            return true;
        }

        let nbuf = run.neighbors(board, current);
        let mut found = false;
        for &n in nbuf.iter() {
            if board[n].opened {
                continue;
            }
            self.open(board, run, n, Some(current), step);
            if run.check_goal(board, n) {
                found = true;
                break;
            }
        }
        run.recycle(nbuf);
        found
    }

    fn display_values(node: &Node<BestFirstData>) -> (f64, f64) {
        if node.opened && node.data.h.is_finite() {
            (node.data.h, 0.0)
        } else {
            (0.0, 0.0)
        }
    }
}
