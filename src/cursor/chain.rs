//! Chain-based flattening cursor
//!
//! Nodes form a chain head → ... → tail through owning `inner` links.
//! Each node remembers its `outer` node by index only, so the back link
//! can be followed to resume but never keeps anything alive.
//!
//! All nodes live in one arena owned by the cursor:
//!   - the head is slot 0
//!   - a node's `inner`, when present, is the next slot
//!   - replacing an `inner` truncates the arena, releasing the stale sub-chain
//!
//! Unlike the stack cursor, the active level is not tracked: every call
//! re-walks the chain from the head, O(depth) per leaf.

use std::iter::FusedIterator;

use tracing::trace;

use crate::nested::{Container, Element, Frame};

/// Index of a node in the chain arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    const HEAD: NodeId = NodeId(0);

    /// Arena slot
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
struct ChainNode<'a, V> {
    /// Enclosing level (lookup only)
    outer: Option<NodeId>,

    /// Nested level currently or last traversed (owned)
    inner: Option<NodeId>,

    frame: Frame<'a, V>,
}

/// Flattening cursor built from a chain of per-level nodes
#[derive(Debug)]
pub struct ChainCursor<'a, V> {
    nodes: Vec<ChainNode<'a, V>>,
}

impl<'a, V> ChainCursor<'a, V> {
    /// Cursor with a single head node wrapping `root`
    pub fn new(root: &'a Container<V>) -> Self {
        Self {
            nodes: vec![ChainNode {
                outer: None,
                inner: None,
                frame: Frame::new(root),
            }],
        }
    }

    /// Nodes currently allocated, including exhausted ones still linked
    pub fn live_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Nodes on the chain from the head to the tail, following `inner`
    pub fn depth(&self) -> usize {
        let mut count = 1;
        let mut current = NodeId::HEAD;
        while let Some(inner) = self.nodes[current.0].inner {
            count += 1;
            current = inner;
        }
        count
    }

    /// Follow `inner` links from the head to the last node
    fn tail(&self) -> NodeId {
        let mut current = NodeId::HEAD;
        while let Some(inner) = self.nodes[current.0].inner {
            debug_assert_eq!(inner.0, current.0 + 1, "chain link out of order");
            current = inner;
        }
        current
    }

    /// Attach a fresh node for `container` as `outer`'s inner level
    fn attach_inner(&mut self, outer: NodeId, container: &'a Container<V>) -> NodeId {
        // Everything after `outer` is its previous inner sub-chain
        self.nodes.truncate(outer.0 + 1);

        let id = NodeId(self.nodes.len());
        self.nodes.push(ChainNode {
            outer: Some(outer),
            inner: None,
            frame: Frame::new(container),
        });
        self.nodes[outer.0].inner = Some(id);
        id
    }
}

impl<'a, V> Iterator for ChainCursor<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        let mut current = self.tail();

        loop {
            let node = &mut self.nodes[current.0];

            if node.frame.is_exhausted() {
                match node.outer {
                    Some(outer) => {
                        trace!(from = current.0, to = outer.0, "chain cursor step back");
                        current = outer;
                        continue;
                    }
                    None => return None,
                }
            }

            match node.frame.read_and_advance() {
                Element::Nested(inner) => {
                    current = self.attach_inner(current, inner);
                    trace!(node = current.0, "chain cursor descend");
                }
                Element::Leaf(value) => return Some(value),
            }
        }
    }
}

impl<V> FusedIterator for ChainCursor<'_, V> {}
