use gridpath_core::{Point, Range};

use crate::error::{Endpoint, SearchError};
use crate::heuristic::{Heuristic, Metric};

/// Movement rules and heuristic for one search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub heuristic: Heuristic,
    /// Allow moves to the four diagonal neighbours.
    pub diagonals: bool,
    /// Allow a diagonal move past an obstacle as long as one of the two
    /// flanking cells is free.
    pub cut_corners: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::Manhattan,
            diagonals: true,
            cut_corners: true,
        }
    }
}

impl SearchConfig {
    pub fn new(heuristic: Heuristic, diagonals: bool, cut_corners: bool) -> Self {
        Self {
            heuristic,
            diagonals,
            cut_corners,
        }
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_diagonals(mut self, diagonals: bool) -> Self {
        self.diagonals = diagonals;
        self
    }

    pub fn with_cut_corners(mut self, cut_corners: bool) -> Self {
        self.cut_corners = cut_corners;
        self
    }

    /// Check that a search can run with this configuration, returning the
    /// metric it will use.
    pub fn validate(&self) -> Result<Metric, SearchError> {
        self.heuristic.metric()
    }

    /// Check that `start` and `goal` both lie on a `size` board.
    ///
    /// Searches accept endpoints anywhere, an off-board start simply never
    /// gets opened, so this is for callers that would rather fail early.
    pub fn check_endpoints(size: Point, start: Point, goal: Point) -> Result<(), SearchError> {
        let bounds = Range::with_size(size);
        for (which, pos) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
            if !bounds.contains(pos) {
                return Err(SearchError::InvalidEndpoint { which, pos, size });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = SearchConfig::default();
        assert_eq!(c.heuristic, Heuristic::Manhattan);
        assert!(c.diagonals);
        assert!(c.cut_corners);
        assert_eq!(c.validate(), Ok(Metric::Manhattan));
    }

    #[test]
    fn builder() {
        let c = SearchConfig::default()
            .with_heuristic(Heuristic::Euclidean)
            .with_diagonals(false)
            .with_cut_corners(false);
        assert_eq!(c, SearchConfig::new(Heuristic::Euclidean, false, false));
    }

    #[test]
    fn chebyshev_fails_validation() {
        let c = SearchConfig::default().with_heuristic(Heuristic::Chebyshev);
        assert_eq!(
            c.validate(),
            Err(SearchError::UnsupportedHeuristic(Heuristic::Chebyshev))
        );
    }

    #[test]
    fn endpoints_on_board() {
        let size = Point::new(5, 3);
        assert!(SearchConfig::check_endpoints(size, Point::new(0, 0), Point::new(4, 2)).is_ok());
        assert_eq!(
            SearchConfig::check_endpoints(size, Point::new(-1, 0), Point::new(9, 9)),
            Err(SearchError::InvalidEndpoint {
                which: Endpoint::Start,
                pos: Point::new(-1, 0),
                size,
            })
        );
        assert!(matches!(
            SearchConfig::check_endpoints(size, Point::new(0, 0), Point::new(5, 2)),
            Err(SearchError::InvalidEndpoint { which: Endpoint::Goal, .. })
        ));
    }
}
