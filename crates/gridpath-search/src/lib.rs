//! Step-by-step search algorithms on obstacle boards.
//!
//! Every algorithm is a [`Search`] over its own [`Board`](gridpath_core::Board)
//! and shares one state machine: [`init`](SearchAlgorithm::init) opens the
//! start node, each [`step`](SearchAlgorithm::step) does one unit of work and
//! reports what it opened and closed, and the run ends with
//! [`Status::Found`] or [`Status::Exhausted`]. Stepping after that is a no-op.
//!
//! | Algorithm | Frontier | Display values |
//! |---|---|---|
//! | [`AStarSearch`] | sorted by `g + h`, then `h` | `(h, g)` |
//! | [`BestFirstSearch`] | sorted by `h` | `(h, 0)` |
//! | [`BreadthFirstSearch`] | FIFO queue | `(111, 0)` once opened |
//! | [`DepthFirstSearch`] | LIFO stack | `(111, 0)` once opened |
//!
//! Drivers normally pick an algorithm through [`AlgorithmKind`] and hold it
//! as a `Box<dyn SearchAlgorithm>`.

mod astar;
mod best_first;
mod bfs;
mod config;
mod dfs;
pub mod distance;
mod error;
mod heuristic;
mod kind;
mod run;
mod search;
mod steps;
mod traits;

pub use astar::{AStar, AStarData, AStarSearch};
pub use best_first::{BestFirst, BestFirstData, BestFirstSearch};
pub use bfs::{BreadthFirst, BreadthFirstSearch};
pub use config::SearchConfig;
pub use dfs::{DepthFirst, DepthFirstSearch};
pub use error::{Endpoint, ParseError, SearchError};
pub use heuristic::{Heuristic, Metric};
pub use kind::AlgorithmKind;
pub use run::{RunState, Status, Step};
pub use search::{Search, Strategy};
pub use steps::Steps;
pub use traits::SearchAlgorithm;


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use gridpath_core::Point;

    #[test]
    fn config_round_trip() {
        let c = SearchConfig::new(Heuristic::Euclidean, false, true);
        let json = serde_json::to_string(&c).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn kind_and_status_round_trip() {
        for kind in AlgorithmKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(serde_json::from_str::<AlgorithmKind>(&json).unwrap(), kind);
        }
        let json = serde_json::to_string(&Status::Exhausted).unwrap();
        assert_eq!(serde_json::from_str::<Status>(&json).unwrap(), Status::Exhausted);
    }

    #[test]
    fn step_round_trip() {
        let step = Step {
            closed: Some(Point::new(1, 2)),
            opened: vec![Point::new(2, 2), Point::new(1, 3)],
            finished: false,
        };
        let json = serde_json::to_string(&step).unwrap();
        let back: Step = serde_json::from_str(&json).unwrap();
        assert_eq!(step, back);
    }
}
