use gridpath_core::{Board, Node, NodeId};

use crate::bfs::OPENED_MARK;
use crate::run::{RunState, Step};
use crate::search::{Search, Strategy};

/// Last-in first-out frontier.
///
/// The top of the stack stays in place while it still has unopened
/// neighbours; it is only popped, and counted as closed, on a step that
/// opens nothing.
#[derive(Debug, Clone, Default)]
pub struct DepthFirst {
    stack: Vec<NodeId>,
}

/// Depth-first search.
pub type DepthFirstSearch = Search<DepthFirst>;

impl Strategy for DepthFirst {
    type Data = ();

    const NAME: &'static str = "Depth First Search";

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn clear(&mut self) {
        self.stack.clear();
    }

    fn push(&mut self, id: NodeId) {
        self.stack.push(id);
    }

    fn expand(&mut self, board: &mut Board<()>, run: &mut RunState, step: &mut Step) -> bool {
        let Some(&current) = self.stack.last() else {
            return true;
        };
        if run.check_goal(board, current) {
            return true;
        }

        let nbuf = run.neighbors(board, current);
        let mut changed = false;
        let mut found = false;
        for &n in nbuf.iter() {
            if board[n].opened {
                continue;
            }
            self.open(board, run, n, Some(current), step);
            changed = true;
            if run.check_goal(board, n) {
                found = true;
                break;
            }
        }
        run.recycle(nbuf);

        if !changed {
            self.stack.pop();
            run.close(board, current, step);
        }
        found
    }

    fn display_values(node: &Node<()>) -> (f64, f64) {
        (if node.opened { OPENED_MARK } else { 0.0 }, 0.0)
    }
}
