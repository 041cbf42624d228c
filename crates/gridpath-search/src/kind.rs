use std::fmt;
use std::str::FromStr;

use gridpath_core::Point;

use crate::astar::AStarSearch;
use crate::best_first::BestFirstSearch;
use crate::bfs::BreadthFirstSearch;
use crate::config::SearchConfig;
use crate::dfs::DepthFirstSearch;
use crate::error::{ParseError, SearchError};
use crate::traits::SearchAlgorithm;

/// The available search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlgorithmKind {
    #[default]
    AStar,
    BestFirst,
    BreadthFirst,
    DepthFirst,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 4] = [
        AlgorithmKind::AStar,
        AlgorithmKind::BestFirst,
        AlgorithmKind::BreadthFirst,
        AlgorithmKind::DepthFirst,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::AStar => "A*",
            AlgorithmKind::BestFirst => "Best First Search",
            AlgorithmKind::BreadthFirst => "Breadth First Search",
            AlgorithmKind::DepthFirst => "Depth First Search",
        }
    }

    /// Build a fresh, uninitialised search of this kind.
    pub fn build(self, size: Point, start: Point, goal: Point) -> Box<dyn SearchAlgorithm> {
        match self {
            AlgorithmKind::AStar => Box::new(AStarSearch::new(size, start, goal)),
            AlgorithmKind::BestFirst => Box::new(BestFirstSearch::new(size, start, goal)),
            AlgorithmKind::BreadthFirst => Box::new(BreadthFirstSearch::new(size, start, goal)),
            AlgorithmKind::DepthFirst => Box::new(DepthFirstSearch::new(size, start, goal)),
        }
    }

    /// Like [`build`](Self::build), but fails when start or goal is off the
    /// board.
    pub fn try_build(
        self,
        size: Point,
        start: Point,
        goal: Point,
    ) -> Result<Box<dyn SearchAlgorithm>, SearchError> {
        SearchConfig::check_endpoints(size, start, goal)?;
        Ok(self.build(size, start, goal))
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = ParseError;

    /// Accepts the display names as well as short forms such as `astar`,
    /// `best-first`, `bfs` and `dfs`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '*')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "a*" | "astar" => Ok(AlgorithmKind::AStar),
            "bestfirst" | "bestfirstsearch" | "greedy" => Ok(AlgorithmKind::BestFirst),
            "bfs" | "breadthfirst" | "breadthfirstsearch" => Ok(AlgorithmKind::BreadthFirst),
            "dfs" | "depthfirst" | "depthfirstsearch" => Ok(AlgorithmKind::DepthFirst),
            _ => Err(ParseError::new("algorithm", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Endpoint;

    #[test]
    fn names_round_trip() {
        for kind in AlgorithmKind::ALL {
            assert_eq!(kind.to_string().parse::<AlgorithmKind>(), Ok(kind));
        }
    }

    #[test]
    fn short_names() {
        assert_eq!("astar".parse(), Ok(AlgorithmKind::AStar));
        assert_eq!("Best-First".parse(), Ok(AlgorithmKind::BestFirst));
        assert_eq!(" BFS ".parse(), Ok(AlgorithmKind::BreadthFirst));
        assert_eq!("depth_first".parse(), Ok(AlgorithmKind::DepthFirst));
        assert!("dijkstra".parse::<AlgorithmKind>().is_err());
    }

    #[test]
    fn build_matches_name() {
        let size = Point::new(4, 3);
        for kind in AlgorithmKind::ALL {
            let s = kind.build(size, Point::new(0, 0), Point::new(3, 2));
            assert_eq!(s.name(), kind.name());
            assert_eq!(s.size(), size);
            assert_eq!(s.total_size(), 12);
        }
    }

    #[test]
    fn try_build_rejects_off_board_goal() {
        let err = AlgorithmKind::AStar
            .try_build(Point::new(4, 3), Point::new(0, 0), Point::new(4, 0))
            .err();
        assert_eq!(
            err,
            Some(SearchError::InvalidEndpoint {
                which: Endpoint::Goal,
                pos: Point::new(4, 0),
                size: Point::new(4, 3),
            })
        );
    }
}
