//! Stack-based flattening cursor
//!
//! Explicit LIFO of frames, innermost level on top.
//! Stack empty ⟺ traversal finished.
//! Cost: O(1) amortized per leaf, O(max depth) frames.

use std::iter::FusedIterator;

use tracing::trace;

use crate::nested::{Container, Element, Frame};

/// Flattening cursor holding one frame per active nesting level
#[derive(Debug)]
pub struct StackCursor<'a, V> {
    /// Frames from root (bottom) to innermost level (top)
    stack: Vec<Frame<'a, V>>,
}

impl<'a, V> StackCursor<'a, V> {
    /// Cursor positioned before the first leaf of `root`
    pub fn new(root: &'a Container<V>) -> Self {
        Self {
            stack: vec![Frame::new(root)],
        }
    }

    /// Number of frames currently held
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Check if the end of the sequence has been reached
    pub fn is_finished(&self) -> bool {
        self.stack.is_empty()
    }
}

impl<'a, V> Iterator for StackCursor<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        loop {
            let top = self.stack.last_mut()?;

            // Exhausted level: pop and resume in the enclosing one
            if top.is_exhausted() {
                self.stack.pop();
                trace!(depth = self.stack.len(), "stack cursor ascend");
                continue;
            }

            match top.read_and_advance() {
                Element::Nested(inner) => {
                    self.stack.push(Frame::new(inner));
                    trace!(depth = self.stack.len(), "stack cursor descend");
                }
                Element::Leaf(value) => return Some(value),
            }
        }
    }
}

impl<V> FusedIterator for StackCursor<'_, V> {}
