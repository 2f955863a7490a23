//! Flattening cursors
//!
//! Two representations of the same traversal:
//!   - [`StackCursor`]: explicit stack of frames (canonical)
//!   - [`ChainCursor`]: chain of nodes with owning forward links and
//!     index back links
//!
//! Both yield identical leaves in identical order and report the end of
//! the sequence on the same call.

mod chain;
mod stack;

pub use chain::{ChainCursor, NodeId};
pub use stack::StackCursor;

use std::fmt;
use std::iter::FusedIterator;

use crate::nested::Container;

/// Cursor representation to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorKind {
    /// Explicit stack of frames
    #[default]
    Stack,

    /// Chain of linked nodes
    Chain,
}

impl CursorKind {
    /// Both representations, canonical first
    pub const ALL: [CursorKind; 2] = [CursorKind::Stack, CursorKind::Chain];
}

impl fmt::Display for CursorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CursorKind::Stack => f.write_str("stack"),
            CursorKind::Chain => f.write_str("chain"),
        }
    }
}

/// A cursor of either representation
#[derive(Debug)]
pub enum Cursor<'a, V> {
    /// Stack-based cursor
    Stack(StackCursor<'a, V>),

    /// Chain-based cursor
    Chain(ChainCursor<'a, V>),
}

impl<'a, V> Cursor<'a, V> {
    /// Fresh cursor of the requested kind over `root`
    pub fn new(kind: CursorKind, root: &'a Container<V>) -> Self {
        match kind {
            CursorKind::Stack => Cursor::Stack(StackCursor::new(root)),
            CursorKind::Chain => Cursor::Chain(ChainCursor::new(root)),
        }
    }

    /// Representation of this cursor
    pub fn kind(&self) -> CursorKind {
        match self {
            Cursor::Stack(_) => CursorKind::Stack,
            Cursor::Chain(_) => CursorKind::Chain,
        }
    }
}

impl<'a, V> Iterator for Cursor<'a, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<&'a V> {
        match self {
            Cursor::Stack(cursor) => cursor.next(),
            Cursor::Chain(cursor) => cursor.next(),
        }
    }
}

impl<V> FusedIterator for Cursor<'_, V> {}
