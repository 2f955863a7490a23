//! Traversal state for a single nesting level
//!
//! Frame = (container, position), position ∈ [start, end]
//! position == end means the level is exhausted

use super::{Container, Element};

/// Position inside one borrowed container
#[derive(Debug)]
pub struct Frame<'a, V> {
    /// Traversed container (borrowed, never mutated)
    container: &'a Container<V>,

    /// Next position to read
    position: usize,
}

impl<'a, V> Frame<'a, V> {
    /// Frame positioned at the container's start
    #[inline]
    pub fn new(container: &'a Container<V>) -> Self {
        Self {
            container,
            position: container.start(),
        }
    }

    /// Container this frame walks
    #[inline]
    pub fn container(&self) -> &'a Container<V> {
        self.container
    }

    /// Current position
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Check if every element of this level has been read
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.position == self.container.end()
    }

    /// Return the element at the current position and step past it
    ///
    /// Calling this on an exhausted frame is a traversal bug and panics.
    #[inline]
    pub fn read_and_advance(&mut self) -> &'a Element<V> {
        assert!(
            !self.is_exhausted(),
            "read past end of frame (position {})",
            self.position
        );

        let container: &'a Container<V> = self.container;
        let element = &container.elements()[self.position];
        self.position += 1;
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_and_advance_steps_by_one() {
        let container: Container<i32> = crate::nested![1, [2], 3];
        let mut frame = Frame::new(&container);

        assert_eq!(frame.position(), 0);
        assert_eq!(frame.read_and_advance().as_leaf(), Some(&1));
        assert_eq!(frame.position(), 1);
        assert!(frame.read_and_advance().is_nested());
        assert_eq!(frame.read_and_advance().as_leaf(), Some(&3));
        assert!(frame.is_exhausted());
        assert_eq!(frame.position(), container.end());
    }

    #[test]
    fn test_empty_container_starts_exhausted() {
        let container: Container<i32> = crate::nested![];
        let frame = Frame::new(&container);
        assert!(frame.is_exhausted());
    }

    #[test]
    #[should_panic(expected = "read past end of frame")]
    fn test_read_past_end_panics() {
        let container: Container<i32> = crate::nested![];
        let mut frame = Frame::new(&container);
        frame.read_and_advance();
    }
}
