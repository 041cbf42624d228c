//! Board nodes: the state shared by every search, plus a per-search payload.

use crate::geom::Point;

/// Index of a node inside its [`Board`](crate::Board) arena.
pub type NodeId = usize;

/// Per-search metadata carried by each node.
///
/// `clear` puts the payload back in the state it has before a search
/// touches it. The default implementation resets to `Default::default()`.
pub trait NodeData: Default {
    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Searches that keep all their ordering in the frontier need no payload.
impl NodeData for () {
    fn clear(&mut self) {}
}

/// One board cell.
#[derive(Debug, Clone)]
pub struct Node<P> {
    position: Point,
    obstacle: bool,
    /// Whether the node has ever entered the frontier during this run.
    pub opened: bool,
    /// The node this one was reached from.
    pub parent: Option<NodeId>,
    /// Search-specific scoring fields.
    pub data: P,
}

impl<P: NodeData> Node<P> {
    pub(crate) fn new(position: Point) -> Self {
        Self {
            position,
            obstacle: false,
            opened: false,
            parent: None,
            data: P::default(),
        }
    }

    /// Board coordinate of this node. Fixed at creation.
    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    #[inline]
    pub fn is_obstacle(&self) -> bool {
        self.obstacle
    }

    pub(crate) fn set_obstacle(&mut self, obstacle: bool) {
        self.obstacle = obstacle;
    }

    /// Clear search metadata, keeping the obstacle flag.
    pub fn init(&mut self) {
        self.opened = false;
        self.parent = None;
        self.data.clear();
    }

    /// Clear search metadata and the obstacle flag.
    pub fn reset(&mut self) {
        self.init();
        self.obstacle = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Score {
        h: i32,
    }

    impl NodeData for Score {}

    #[test]
    fn init_keeps_obstacle() {
        let mut n: Node<Score> = Node::new(Point::new(1, 2));
        n.set_obstacle(true);
        n.opened = true;
        n.parent = Some(3);
        n.data.h = 9;

        n.init();
        assert!(n.is_obstacle());
        assert!(!n.opened);
        assert_eq!(n.parent, None);
        assert_eq!(n.data, Score::default());
        assert_eq!(n.position(), Point::new(1, 2));
    }

    #[test]
    fn reset_clears_obstacle() {
        let mut n: Node<()> = Node::new(Point::new(0, 0));
        n.set_obstacle(true);
        n.opened = true;
        n.reset();
        assert!(!n.is_obstacle());
        assert!(!n.opened);
    }
}
