use gridpath_core::{Board, Node, NodeData, NodeId};

use crate::run::{RunState, Step};
use crate::search::{Search, Strategy};

/// Per-node A* scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AStarData {
    /// Whether the node has been expanded.
    pub closed: bool,
    /// Cost of the best known path from the start.
    pub g: f64,
    /// Estimated distance to the goal. `+∞` until first relaxed.
    pub h: f64,
}

impl AStarData {
    #[inline]
    pub fn f(&self) -> f64 {
        self.g + self.h
    }
}

impl Default for AStarData {
    fn default() -> Self {
        Self {
            closed: false,
            g: 0.0,
            h: f64::INFINITY,
        }
    }
}

impl NodeData for AStarData {}

/// A* frontier: re-sorted before every pop so that the node with the
/// smallest `g + h` (ties: smallest `h`) sits at the back.
#[derive(Debug, Clone, Default)]
pub struct AStar {
    nodes: Vec<NodeId>,
}

/// A* search.
pub type AStarSearch = Search<AStar>;

impl AStar {
    fn sort(&mut self, board: &Board<AStarData>) {
        // Stable, so among equal keys the latest insertion is popped first.
        self.nodes.sort_by(|&a, &b| {
            let (a, b) = (&board[a].data, &board[b].data);
            b.f().total_cmp(&a.f()).then(b.h.total_cmp(&a.h))
        });
    }

    /// Re-score `id` as reached from `parent`, keeping the better path.
    fn relax(board: &mut Board<AStarData>, run: &RunState, id: NodeId, parent: NodeId) {
        let pos = board[id].position();
        let h = run.distance(pos, board.goal());
        let g = board[parent].data.g + run.distance(board[parent].position(), pos);

        let node = &mut board[id];
        if h + g < node.data.f() {
            node.parent = Some(parent);
            node.data.h = h;
            node.data.g = g;
        }
    }
}

impl Strategy for AStar {
    type Data = AStarData;

    const NAME: &'static str = "A*";

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }

    fn push(&mut self, id: NodeId) {
        self.nodes.push(id);
    }

    fn expand(
        &mut self,
        board: &mut Board<AStarData>,
        run: &mut RunState,
        step: &mut Step,
    ) -> bool {
        self.sort(board);
        let Some(current) = self.nodes.pop() else {
            return true;
        };
        board[current].data.closed = true;
        run.close(board, current, step);

        if run.check_goal(board, current) {
            return true;
        }

        let nbuf = run.neighbors(board, current);
        let mut found = false;
        for &n in nbuf.iter() {
            if board[n].data.closed {
                continue;
            }
            Self::relax(board, run, n, current);
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

    fn display_values(node: &Node<AStarData>) -> (f64, f64) {
        let h = if node.data.h.is_finite() { node.data.h } else { 0.0 };
        (h, node.data.g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Heuristic, SearchAlgorithm, SearchConfig, Status};
    use gridpath_core::Point;

    const EPS: f64 = 1e-3;

    fn search(w: i32, h: i32, start: (i32, i32), goal: (i32, i32)) -> AStarSearch {
        AStarSearch::new(Point::new(w, h), start.into(), goal.into())
    }

    fn run(s: &mut AStarSearch, config: SearchConfig) {
        s.init(config).unwrap();
        s.complete();
    }

    #[test]
    fn open_diagonal_board() {
        let mut s = search(5, 5, (0, 0), (4, 4));
        run(&mut s, SearchConfig::new(Heuristic::Euclidean, true, true));

        assert_eq!(s.status(), Status::Found);
        assert_eq!(
            s.solution(),
            &[
                Point::new(4, 4),
                Point::new(3, 3),
                Point::new(2, 2),
                Point::new(1, 1),
                Point::new(0, 0)
            ]
        );
        assert!((s.solution_distance() - 5.656).abs() < EPS);
    }

    #[test]
    fn open_board_without_diagonals() {
        let mut s = search(5, 5, (0, 0), (4, 4));
        run(&mut s, SearchConfig::new(Heuristic::Euclidean, false, true));

        assert_eq!(s.solution().len(), 9);
        assert!((s.solution_distance() - 8.0).abs() < EPS);
        assert_eq!(s.solution().first(), Some(&Point::new(4, 4)));
        assert_eq!(s.solution().last(), Some(&Point::new(0, 0)));
        for w in s.solution().windows(2) {
            assert!(!w[0].is_diagonal_to(w[1]));
        }
    }

    #[test]
    fn straight_line_is_optimal() {
        for h in [Heuristic::Manhattan, Heuristic::Diagonal, Heuristic::Euclidean] {
            for diagonals in [false, true] {
                let mut s = search(10, 3, (0, 1), (9, 1));
                run(&mut s, SearchConfig::new(h, diagonals, true));
                assert_eq!(s.solution().len(), 10, "{h} diagonals={diagonals}");
                assert!((s.solution_distance() - 9.0).abs() < EPS);
            }
        }
    }

    #[test]
    fn octile_optimum_with_diagonals() {
        let mut s = search(8, 8, (0, 0), (6, 3));
        run(&mut s, SearchConfig::new(Heuristic::Diagonal, true, true));
        // 3 diagonal moves and 3 straight moves.
        assert!((s.solution_distance() - (3.0 * 1.414 + 3.0)).abs() < EPS);
    }

    #[test]
    fn cuts_corner_around_center_obstacle() {
        let mut s = search(3, 3, (0, 0), (2, 2));
        s.set_obstacle(Point::new(1, 1), true);
        s.init(SearchConfig::new(Heuristic::Euclidean, true, true))
            .unwrap();

        let steps: Vec<_> = s.steps().collect();
        assert_eq!(steps.len(), 4);
        assert!(steps[3].finished);
        assert_eq!(
            s.solution(),
            &[
                Point::new(2, 2),
                Point::new(2, 1),
                Point::new(1, 0),
                Point::new(0, 0)
            ]
        );
        // (1,0) -> (2,1) passes the blocked centre.
        assert!(s.solution()[1].is_diagonal_to(s.solution()[2]));
        assert!((s.solution_distance() - 3.414).abs() < EPS);
    }

    #[test]
    fn relaxation_keeps_cheaper_parent() {
        let mut board: Board<AStarData> =
            Board::new(Point::new(3, 3), Point::new(0, 0), Point::new(2, 2));
        let mut state = RunState::default();
        state.start(SearchConfig::default(), crate::Metric::Manhattan);

        let start = board.id(Point::new(0, 0)).unwrap();
        let far = board.id(Point::new(1, 1)).unwrap();
        let n = board.id(Point::new(1, 0)).unwrap();
        board[far].data.g = 10.0;

        AStar::relax(&mut board, &state, n, far);
        assert_eq!(board[n].parent, Some(far));
        assert_eq!(board[n].data.g, 11.0);

        AStar::relax(&mut board, &state, n, start);
        assert_eq!(board[n].parent, Some(start));
        assert_eq!(board[n].data.g, 1.0);
        assert_eq!(board[n].data.h, 3.0);

        AStar::relax(&mut board, &state, n, far);
        assert_eq!(board[n].parent, Some(start));
    }

    #[test]
    fn frontier_pops_smallest_f_then_smallest_h() {
        let mut board: Board<AStarData> =
            Board::new(Point::new(4, 1), Point::new(0, 0), Point::new(3, 0));
        let mut frontier = AStar::default();
        let scores = [(1.0, 5.0), (2.0, 3.0), (3.0, 2.0), (0.0, f64::INFINITY)];
        for (id, (g, h)) in scores.into_iter().enumerate() {
            board[id].data.g = g;
            board[id].data.h = h;
            frontier.push(id);
        }
        frontier.sort(&board);
        // f: 6, 5, 5, inf. Ties on f=5 go to the smaller h.
        assert_eq!(frontier.nodes, vec![3, 0, 1, 2]);
    }

    #[test]
    fn display_values_hide_unset_estimate() {
        let mut s = search(3, 1, (0, 0), (2, 0));
        s.init(SearchConfig::default()).unwrap();
        assert_eq!(s.display_values(Point::new(0, 0)), (0.0, 0.0));
        s.next_step();
        assert_eq!(s.display_values(Point::new(1, 0)), (1.0, 1.0));
        assert_eq!(s.display_values(Point::new(7, 7)), (0.0, 0.0));
    }
}
