//! **gridpath-core** — core types for grid pathfinding.
//!
//! This crate provides the geometry primitives and the obstacle [`Board`]
//! that every search in `gridpath-search` runs on:
//!
//! - [`Point`] / [`Range`]: board coordinates and bounds.
//! - [`Node`]: one cell, with the flags every search shares plus a
//!   search-specific [`NodeData`] payload.
//! - [`Board`]: the node arena, obstacle rules and neighbour generation.

pub mod board;
pub mod geom;
pub mod node;

pub use board::Board;
pub use geom::{Point, Range};
pub use node::{Node, NodeData, NodeId};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_round_trip() {
        let p = Point::new(3, 7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn range_round_trip() {
        let r = Range::new(1, 2, 10, 20);
        let json = serde_json::to_string(&r).unwrap();
        let back: Range = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
