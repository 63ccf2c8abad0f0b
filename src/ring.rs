use smallvec::SmallVec;

use crate::{graph::Node, idx::Idx};

/// The neighbors of one vertex in counterclockwise order.
///
/// Position 0 is the anchor ("first"). The successor of position `i` is `i + 1` and the
/// predecessor `i - 1`, both wrapping around.
#[derive(Debug, Clone, Default)]
pub(crate) struct Ring {
    neighbors: SmallVec<[Idx<Node>; 8]>,
}

impl Ring {
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    pub fn first(&self) -> Option<Idx<Node>> {
        self.neighbors.first().copied()
    }

    /// The neighbor at `position`, counted counterclockwise from the anchor
    pub fn get(&self, position: usize) -> Idx<Node> {
        self.neighbors[position]
    }

    pub fn position(&self, v: Idx<Node>) -> Option<usize> {
        self.neighbors.iter().position(|n| *n == v)
    }

    pub fn contains(&self, v: Idx<Node>) -> bool {
        self.neighbors.contains(&v)
    }

    /// The neighbor clockwise-adjacent to `w`, or [None] if `w` is not in the ring
    pub fn pred(&self, w: Idx<Node>) -> Option<Idx<Node>> {
        let len = self.len();
        self.position(w).map(|pos| self.neighbors[(pos + len - 1) % len])
    }

    /// The neighbor counterclockwise-adjacent to `w`, or [None] if `w` is not in the ring
    pub fn succ(&self, w: Idx<Node>) -> Option<Idx<Node>> {
        let len = self.len();
        self.position(w).map(|pos| self.neighbors[(pos + 1) % len])
    }

    /// Splices `v` in at `position`. Inserting at 0 makes `v` the new anchor, with the old anchor as its successor.
    pub fn insert(&mut self, position: usize, v: Idx<Node>) {
        self.neighbors.insert(position, v);
    }

    /// Unlinks `v`. If `v` was the anchor, its successor becomes the anchor.
    pub fn remove(&mut self, v: Idx<Node>) -> bool {
        match self.position(v) {
            Some(pos) => {
                self.neighbors.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Iterates counterclockwise, starting at the anchor
    pub fn iter(&self) -> impl Iterator<Item=Idx<Node>> + '_ {
        self.neighbors.iter().copied()
    }

    /// Every pair of counterclockwise-consecutive neighbors, including the pair that wraps back to the anchor.
    /// Empty if the ring has fewer than 2 neighbors.
    pub fn consecutive_pairs(&self) -> impl Iterator<Item=(Idx<Node>, Idx<Node>)> + '_ {
        let len = if self.len() < 2 { 0 } else { self.len() };
        (0..len).map(move |i| (self.neighbors[i], self.neighbors[(i + 1) % len]))
    }
}
