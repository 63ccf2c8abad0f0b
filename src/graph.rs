use std::{collections::TryReserveError, fmt, marker::PhantomData, mem};

use crate::{Coords, Predicates, Sign, idx::{Idx, IdxDisplay}, ring::Ring};

/// A vertex of the triangulation and its counterclockwise ring of neighbors
#[derive(Debug, Clone)]
pub(crate) struct Node {
    coords: Coords,
    ring: Ring,
}

impl Node {
    #[cfg(feature = "debugging")]
    pub fn coords(&self) -> &Coords {
        &self.coords
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }
}

impl IdxDisplay for Node {
    fn fmt(f: &mut fmt::Formatter<'_>, idx: usize) -> fmt::Result {
        write!(f, "v{}", idx)
    }
}

/// Undirected graph over the sorted points, stored as one neighbor ring per vertex.
///
/// `Idx<Node>` values are sorted positions, so `Idx::new(i)` is the `i`th point in x-then-y order.
pub(crate) struct AdjacencyGraph<K: Predicates> {
    nodes: Vec<Node>,
    _predicates: PhantomData<K>,
}

impl<K: Predicates> AdjacencyGraph<K> {
    pub fn new(coords: &[Coords]) -> Result<Self, TryReserveError> {
        let mut nodes = Vec::new();
        nodes.try_reserve_exact(coords.len())?;
        nodes.extend(coords.iter().map(|c| Node { coords: *c, ring: Ring::default() }));
        Ok(Self {
            nodes,
            _predicates: PhantomData,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, v: Idx<Node>) -> &Node {
        &self.nodes[v]
    }

    fn xy(&self, v: Idx<Node>) -> [f64; 2] {
        self.nodes[v].coords.to_array()
    }

    pub fn orientation(&self, a: Idx<Node>, b: Idx<Node>, c: Idx<Node>) -> Sign {
        K::orientation(self.xy(a), self.xy(b), self.xy(c))
    }

    /// `d` lies strictly inside the circle through `a, b, c`, which must turn counterclockwise
    pub fn in_circle(&self, a: Idx<Node>, b: Idx<Node>, c: Idx<Node>, d: Idx<Node>) -> bool {
        K::in_circle(self.xy(a), self.xy(b), self.xy(c), self.xy(d)).is_positive()
    }

    pub fn right_of(&self, x: Idx<Node>, e1: Idx<Node>, e2: Idx<Node>) -> bool {
        K::right_of(self.xy(x), self.xy(e1), self.xy(e2))
    }

    pub fn left_of(&self, x: Idx<Node>, e1: Idx<Node>, e2: Idx<Node>) -> bool {
        K::left_of(self.xy(x), self.xy(e1), self.xy(e2))
    }

    /// The anchor neighbor of `v`. Once `v` is on the hull of its sub-triangulation, this is its
    /// counterclockwise hull successor.
    pub fn first(&self, v: Idx<Node>) -> Option<Idx<Node>> {
        self.nodes[v].ring.first()
    }

    /// The neighbor of `v` clockwise from `w`
    pub fn pred(&self, v: Idx<Node>, w: Idx<Node>) -> Option<Idx<Node>> {
        self.nodes[v].ring.pred(w)
    }

    /// The neighbor of `v` counterclockwise from `w`
    pub fn succ(&self, v: Idx<Node>, w: Idx<Node>) -> Option<Idx<Node>> {
        self.nodes[v].ring.succ(w)
    }

    pub fn is_connected(&self, a: Idx<Node>, b: Idx<Node>) -> bool {
        self.nodes[a].ring.contains(b)
    }

    /// Adds the edge `a - b` to both rings. Does nothing for a self-loop or an existing edge.
    pub fn connect(&mut self, a: Idx<Node>, b: Idx<Node>) {
        if a == b || self.is_connected(a, b) {
            return;
        }
        self.insert_neighbor(a, b);
        self.insert_neighbor(b, a);
    }

    /// Removes the edge `a - b` from both rings
    pub fn disconnect(&mut self, a: Idx<Node>, b: Idx<Node>) {
        self.nodes[a].ring.remove(b);
        self.nodes[b].ring.remove(a);
    }

    /// Places `v` in the ring of `parent` so the ring stays in counterclockwise order.
    ///
    /// If `v` is right of `parent -> anchor`, it is walked clockwise from the anchor. Getting all the way
    /// back to the anchor means `v` is the new hull successor of `parent`, and it becomes the anchor.
    /// Otherwise it is walked counterclockwise from the anchor's successor.
    fn insert_neighbor(&mut self, parent: Idx<Node>, v: Idx<Node>) {
        let ring = &self.nodes[parent].ring;
        let position = match ring.first() {
            None => 0,
            Some(anchor) if self.right_of(v, parent, anchor) => {
                let mut pos = ring.len() - 1;
                while pos != 0 && self.right_of(v, parent, ring.get(pos)) {
                    pos -= 1;
                }
                if pos == 0 { 0 } else { pos + 1 }
            }
            Some(_) => {
                let mut pos = 1;
                while pos < ring.len() && self.left_of(v, parent, ring.get(pos)) {
                    pos += 1;
                }
                pos
            }
        };
        self.nodes[parent].ring.insert(position, v);
    }

    /// Empties the ring of `v`, handing it back to the caller
    pub fn take_ring(&mut self, v: Idx<Node>) -> Ring {
        mem::take(&mut self.nodes[v].ring)
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.ring.len()).sum::<usize>() / 2
    }
}
