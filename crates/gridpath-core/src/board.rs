//! The obstacle board searched by every algorithm.
//!
//! A [`Board`] owns one [`Node`] per cell in a flat row-major arena. Parent
//! links are arena indices ([`NodeId`]), so a board can never hold a dangling
//! back-reference.

use std::ops::{Index, IndexMut};

use crate::geom::{Point, Range};
use crate::node::{Node, NodeData, NodeId};

/// A fixed-size grid of nodes with a start and a goal.
#[derive(Debug, Clone)]
pub struct Board<P> {
    bounds: Range,
    width: usize,
    start: Point,
    goal: Point,
    nodes: Vec<Node<P>>,
}

impl<P: NodeData> Board<P> {
    /// Create a `size.x` × `size.y` board. Negative sizes yield an empty
    /// board.
    pub fn new(size: Point, start: Point, goal: Point) -> Self {
        let bounds = Range::new(0, 0, size.x.max(0), size.y.max(0));
        let nodes = bounds.iter().map(Node::new).collect();
        Self {
            bounds,
            width: bounds.size().x as usize,
            start,
            goal,
            nodes,
        }
    }

    /// Total number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Board dimensions as `(width, height)`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Whether `p` lies within `[0, width) × [0, height)`.
    #[inline]
    pub fn is_valid(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Convert a `Point` to a node id. Returns `None` if out of bounds.
    #[inline]
    pub fn id(&self, p: Point) -> Option<NodeId> {
        if !self.is_valid(p) {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }

    /// Convert a node id back to its `Point`.
    #[inline]
    pub fn point(&self, id: NodeId) -> Point {
        Point::new((id % self.width) as i32, (id / self.width) as i32)
    }

    #[inline]
    pub fn start_id(&self) -> Option<NodeId> {
        self.id(self.start)
    }

    #[inline]
    pub fn goal_id(&self) -> Option<NodeId> {
        self.id(self.goal)
    }

    pub fn node(&self, p: Point) -> Option<&Node<P>> {
        self.id(p).map(|id| &self.nodes[id])
    }

    pub fn node_mut(&mut self, p: Point) -> Option<&mut Node<P>> {
        self.id(p).map(|id| &mut self.nodes[id])
    }

    /// Iterate over all nodes in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<P>> {
        self.nodes.iter()
    }

    // -----------------------------------------------------------------------
    // Obstacles
    // -----------------------------------------------------------------------

    /// Obstacle flag at `p`. Out-of-bounds coordinates are never obstacles.
    #[inline]
    pub fn is_obstacle(&self, p: Point) -> bool {
        self.node(p).is_some_and(Node::is_obstacle)
    }

    /// Set or clear the obstacle at `p`.
    ///
    /// Ignored for out-of-bounds coordinates and for the start and goal.
    pub fn set_obstacle(&mut self, p: Point, obstacle: bool) {
        if p == self.start || p == self.goal {
            return;
        }
        if let Some(node) = self.node_mut(p) {
            node.set_obstacle(obstacle);
        }
    }

    /// Positions of every obstacle, in row-major order.
    pub fn obstacles(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes
            .iter()
            .filter(|n| n.is_obstacle())
            .map(Node::position)
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Clear per-run search metadata on every node, keeping obstacles.
    pub fn init(&mut self) {
        self.nodes.iter_mut().for_each(Node::init);
    }

    /// Clear search metadata and obstacles on every node.
    pub fn reset(&mut self) {
        self.nodes.iter_mut().for_each(Node::reset);
    }

    // -----------------------------------------------------------------------
    // Movement
    // -----------------------------------------------------------------------

    /// Whether a single move from `from` to `to` is allowed.
    ///
    /// `to` must be in bounds and free. A diagonal move additionally needs
    /// `diagonals`, and then both flanking cells `(from.x, to.y)` and
    /// `(to.x, from.y)` free, or one of them free when `cut_corners` is set.
    pub fn is_accessible(
        &self,
        from: Point,
        to: Point,
        diagonals: bool,
        cut_corners: bool,
    ) -> bool {
        if !self.is_valid(from) || !self.is_valid(to) || self.is_obstacle(to) {
            return false;
        }
        if !from.is_diagonal_to(to) {
            return true;
        }
        if !diagonals {
            return false;
        }
        let flank1 = !self.is_obstacle(Point::new(from.x, to.y));
        let flank2 = !self.is_obstacle(Point::new(to.x, from.y));
        (flank1 && flank2) || (cut_corners && (flank1 || flank2))
    }

    /// Append the accessible neighbours of `id` into `buf`. The caller clears
    /// `buf` before calling.
    ///
    /// Order:
    ///
    /// ```text
    /// +---+---+---+
    /// | 5 | 1 | 6 |
    /// +---+---+---+
    /// | 4 |   | 2 |
    /// +---+---+---+
    /// | 8 | 3 | 7 |
    /// +---+---+---+
    /// ```
    ///
    /// Diagonals (5-8) are only considered when `diagonals` is set.
    pub fn neighbors(
        &self,
        id: NodeId,
        diagonals: bool,
        cut_corners: bool,
        buf: &mut Vec<NodeId>,
    ) {
        let from = self.point(id);
        for to in from.neighbors_4() {
            self.push_if_accessible(from, to, diagonals, cut_corners, buf);
        }
        if diagonals {
            for to in from.diagonals() {
                self.push_if_accessible(from, to, diagonals, cut_corners, buf);
            }
        }
    }

    fn push_if_accessible(
        &self,
        from: Point,
        to: Point,
        diagonals: bool,
        cut_corners: bool,
        buf: &mut Vec<NodeId>,
    ) {
        if !self.is_accessible(from, to, diagonals, cut_corners) {
            return;
        }
        if let Some(id) = self.id(to) {
            buf.push(id);
        }
    }

    /// Follow parent links from `id` back to a node without a parent.
    ///
    /// Positions are returned in walk order: `id` first, the root last.
    pub fn path_to(&self, id: NodeId) -> Vec<Point> {
        std::iter::successors(Some(id), |&i| self.nodes[i].parent)
            .take(self.nodes.len())
            .map(|i| self.nodes[i].position())
            .collect()
    }
}

impl<P> Index<NodeId> for Board<P> {
    type Output = Node<P>;

    #[inline]
    fn index(&self, id: NodeId) -> &Node<P> {
        &self.nodes[id]
    }
}

impl<P> IndexMut<NodeId> for Board<P> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Node<P> {
        &mut self.nodes[id]
    }
}
