use std::fmt;

use gridpath_core::Point;

use crate::heuristic::Heuristic;

/// Which end of a search an endpoint error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::Goal => f.write_str("goal"),
        }
    }
}

/// Errors raised when configuring a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The heuristic has no implementation the engine can search with.
    UnsupportedHeuristic(Heuristic),
    /// Start or goal lies outside the board.
    InvalidEndpoint {
        which: Endpoint,
        pos: Point,
        size: Point,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedHeuristic(h) => {
                write!(f, "heuristic \u{201c}{h}\u{201d} is not supported")
            }
            Self::InvalidEndpoint { which, pos, size } => write!(
                f,
                "{which} {pos} is outside the {}x{} board",
                size.x, size.y
            ),
        }
    }
}

impl std::error::Error for SearchError {}

/// A name that did not match any known option of its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: &'static str,
    input: String,
}

impl ParseError {
    /// `kind` names what was being parsed, e.g. `"algorithm"`.
    pub fn new(kind: &'static str, input: &str) -> Self {
        Self {
            kind,
            input: input.to_owned(),
        }
    }
}

impl ParseError {
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: \u{201c}{}\u{201d}", self.kind, self.input)
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = SearchError::UnsupportedHeuristic(Heuristic::Chebyshev);
        assert_eq!(e.to_string(), "heuristic \u{201c}chebyshev\u{201d} is not supported");

        let e = SearchError::InvalidEndpoint {
            which: Endpoint::Goal,
            pos: Point::new(9, 1),
            size: Point::new(5, 5),
        };
        assert_eq!(e.to_string(), "goal (9, 1) is outside the 5x5 board");

        let e = ParseError::new("algorithm", "dijkstra");
        assert_eq!(e.to_string(), "unknown algorithm: \u{201c}dijkstra\u{201d}");
    }
}
