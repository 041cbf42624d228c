use std::collections::VecDeque;

use gridpath_core::{Board, Node, NodeId};

use crate::run::{RunState, Step};
use crate::search::{Search, Strategy};

/// Value shown for every node a blind search has opened.
pub(crate) const OPENED_MARK: f64 = 111.0;

/// First-in first-out frontier.
#[derive(Debug, Clone, Default)]
pub struct BreadthFirst {
    queue: VecDeque<NodeId>,
}

/// Breadth-first search.
pub type BreadthFirstSearch = Search<BreadthFirst>;

impl Strategy for BreadthFirst {
    type Data = ();

    const NAME: &'static str = "Breadth First Search";

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }

    fn push(&mut self, id: NodeId) {
        self.queue.push_back(id);
    }

    fn expand(&mut self, board: &mut Board<()>, run: &mut RunState, step: &mut Step) -> bool {
        let Some(current) = self.queue.pop_front() else {
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

    fn display_values(node: &Node<()>) -> (f64, f64) {
        (if node.opened { OPENED_MARK } else { 0.0 }, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SearchAlgorithm, SearchConfig, Status};
    use gridpath_core::Point;

    #[test]
    fn expands_in_layers() {
        let mut s = BreadthFirstSearch::new(Point::new(5, 5), Point::new(2, 2), Point::new(4, 4));
        s.init(SearchConfig::default().with_diagonals(false))
            .unwrap();

        let first = s.step();
        assert_eq!(first.closed, Some(Point::new(2, 2)));
        assert_eq!(
            first.opened,
            vec![
                Point::new(2, 1),
                Point::new(3, 2),
                Point::new(2, 3),
                Point::new(1, 2)
            ]
        );
        // The next step expands the oldest entry.
        assert_eq!(s.step().closed, Some(Point::new(2, 1)));
    }

    #[test]
    fn shortest_in_moves_without_diagonals() {
        let mut s = BreadthFirstSearch::new(Point::new(6, 4), Point::new(0, 0), Point::new(5, 3));
        s.set_obstacle(Point::new(2, 0), true);
        s.set_obstacle(Point::new(2, 1), true);
        s.set_obstacle(Point::new(2, 2), true);
        s.init(SearchConfig::default().with_diagonals(false))
            .unwrap();
        s.complete();

        assert_eq!(s.status(), Status::Found);
        assert_eq!(s.solution().len(), 9);
        assert_eq!(s.solution().first(), Some(&Point::new(5, 3)));
        assert_eq!(s.solution().last(), Some(&Point::new(0, 0)));
        assert!(s.solution().iter().all(|&p| !s.is_obstacle(p)));
    }

    #[test]
    fn marks_opened_nodes() {
        let mut s = BreadthFirstSearch::new(Point::new(3, 3), Point::new(0, 0), Point::new(2, 2));
        s.init(SearchConfig::default()).unwrap();
        assert_eq!(s.display_values(Point::new(0, 0)), (111.0, 0.0));
        assert_eq!(s.display_values(Point::new(1, 1)), (0.0, 0.0));
        s.next_step();
        assert_eq!(s.display_values(Point::new(1, 1)), (111.0, 0.0));
    }
}
