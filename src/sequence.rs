//! Lazy recursively-flattened view of a container

use crate::cursor::{ChainCursor, Cursor, CursorKind, StackCursor};
use crate::nested::Container;

/// Sequence presenting the leaves of a container and all its sub-containers
///
/// Creating the view does no traversal. Each cursor made from it is
/// independent and starts from the beginning, so the view itself can be
/// walked any number of times.
#[derive(Debug)]
pub struct RecursiveFlatten<'a, V> {
    base: &'a Container<V>,
}

impl<'a, V> RecursiveFlatten<'a, V> {
    /// Wrap `base`, O(1)
    pub fn new(base: &'a Container<V>) -> Self {
        Self { base }
    }

    /// Underlying container
    pub fn base(&self) -> &'a Container<V> {
        self.base
    }

    /// Fresh cursor of the requested representation, O(1)
    pub fn make_cursor(&self, kind: CursorKind) -> Cursor<'a, V> {
        Cursor::new(kind, self.base)
    }

    /// Fresh stack-based cursor
    pub fn stack_cursor(&self) -> StackCursor<'a, V> {
        StackCursor::new(self.base)
    }

    /// Fresh chain-based cursor
    pub fn chain_cursor(&self) -> ChainCursor<'a, V> {
        ChainCursor::new(self.base)
    }
}

impl<V> Clone for RecursiveFlatten<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for RecursiveFlatten<'_, V> {}

impl<'a, V> IntoIterator for RecursiveFlatten<'a, V> {
    type Item = &'a V;
    type IntoIter = StackCursor<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.stack_cursor()
    }
}

impl<'a, V> IntoIterator for &RecursiveFlatten<'a, V> {
    type Item = &'a V;
    type IntoIter = StackCursor<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.stack_cursor()
    }
}

/// Lazily flatten `container` to its leaves
pub fn flatten<V>(container: &Container<V>) -> RecursiveFlatten<'_, V> {
    RecursiveFlatten::new(container)
}

impl<V> Container<V> {
    /// Lazily flatten this container to its leaves
    pub fn recursive_flatten(&self) -> RecursiveFlatten<'_, V> {
        RecursiveFlatten::new(self)
    }
}
