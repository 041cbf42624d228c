//! Distance heuristics selectable at `init` time.

use std::fmt;
use std::str::FromStr;

use gridpath_core::Point;

use crate::distance;
use crate::error::{ParseError, SearchError};

/// Heuristic used both to estimate the remaining distance to the goal and
/// to price each move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    #[default]
    Manhattan,
    /// Octile distance.
    Diagonal,
    Euclidean,
    /// Not supported by the search engine; see [`Heuristic::metric`].
    Chebyshev,
}

impl Heuristic {
    pub const ALL: [Heuristic; 4] = [
        Heuristic::Manhattan,
        Heuristic::Diagonal,
        Heuristic::Euclidean,
        Heuristic::Chebyshev,
    ];

    /// The metric a search can run with.
    ///
    /// Fails with [`SearchError::UnsupportedHeuristic`] for
    /// [`Heuristic::Chebyshev`].
    pub fn metric(self) -> Result<Metric, SearchError> {
        match self {
            Heuristic::Manhattan => Ok(Metric::Manhattan),
            Heuristic::Diagonal => Ok(Metric::Diagonal),
            Heuristic::Euclidean => Ok(Metric::Euclidean),
            Heuristic::Chebyshev => Err(SearchError::UnsupportedHeuristic(self)),
        }
    }

    pub fn is_supported(self) -> bool {
        self.metric().is_ok()
    }

    /// Distance between `a` and `b` under this heuristic.
    pub fn distance(self, a: Point, b: Point) -> Result<f64, SearchError> {
        self.metric().map(|m| m.distance(a, b))
    }

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::Diagonal => "diagonal",
            Heuristic::Euclidean => "euclidean",
            Heuristic::Chebyshev => "chebyshev",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "manhattan" => Ok(Heuristic::Manhattan),
            "diagonal" | "octile" => Ok(Heuristic::Diagonal),
            "euclidean" => Ok(Heuristic::Euclidean),
            "chebyshev" => Ok(Heuristic::Chebyshev),
            _ => Err(ParseError::new("heuristic", s)),
        }
    }
}

/// A validated distance function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    #[default]
    Manhattan,
    Diagonal,
    Euclidean,
}

impl Metric {
    #[inline]
    pub fn distance(self, a: Point, b: Point) -> f64 {
        match self {
            Metric::Manhattan => distance::manhattan(a, b),
            Metric::Diagonal => distance::octile(a, b),
            Metric::Euclidean => distance::euclidean(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chebyshev_is_rejected() {
        let err = Heuristic::Chebyshev.metric().unwrap_err();
        assert_eq!(err, SearchError::UnsupportedHeuristic(Heuristic::Chebyshev));
        assert!(!Heuristic::Chebyshev.is_supported());
        assert!(
            Heuristic::Chebyshev
                .distance(Point::new(0, 0), Point::new(2, 3))
                .is_err()
        );
    }

    #[test]
    fn supported_heuristics_compute() {
        let a = Point::new(0, 0);
        let b = Point::new(2, 3);
        assert_eq!(Heuristic::Manhattan.distance(a, b), Ok(5.0));
        let d = Heuristic::Euclidean.distance(a, b).unwrap();
        assert!((d - 13f64.sqrt()).abs() < 1e-9);
        let d = Heuristic::Diagonal.distance(a, b).unwrap();
        assert!((d - (2.0 * distance::DIAGONAL_COST + 1.0)).abs() < 1e-9);
    }

    #[test]
    fn parse_and_display() {
        for h in Heuristic::ALL {
            assert_eq!(h.to_string().parse::<Heuristic>(), Ok(h));
        }
        assert_eq!(" Octile ".parse::<Heuristic>(), Ok(Heuristic::Diagonal));
        assert!("taxicab".parse::<Heuristic>().is_err());
    }
}
