//! Nested container model
//!
//! An element is either a leaf payload or another container of the same
//! element type. The distinction is a closed enum fixed when the container
//! is built, so traversal never has to inspect types at runtime.

mod frame;
mod parse;

pub use frame::Frame;
pub use parse::ParseError;

use std::fmt;

/// One position of a nested container
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Element<V> {
    /// Sub-sequence to be expanded in place
    Nested(Container<V>),

    /// Terminal payload value
    Leaf(V),
}

impl<V> Element<V> {
    /// Check if this element is a leaf
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Element::Leaf(_))
    }

    /// Check if this element is a nested container
    #[inline]
    pub fn is_nested(&self) -> bool {
        matches!(self, Element::Nested(_))
    }

    /// Leaf payload, if any
    #[inline]
    pub fn as_leaf(&self) -> Option<&V> {
        match self {
            Element::Leaf(value) => Some(value),
            Element::Nested(_) => None,
        }
    }

    /// Nested container, if any
    #[inline]
    pub fn as_nested(&self) -> Option<&Container<V>> {
        match self {
            Element::Nested(container) => Some(container),
            Element::Leaf(_) => None,
        }
    }
}

impl<V> From<Container<V>> for Element<V> {
    fn from(container: Container<V>) -> Self {
        Element::Nested(container)
    }
}

/// Ordered, finite sequence of elements
///
/// Positions run from [`start`](Self::start) (always 0) up to
/// [`end`](Self::end), one past the last element. Cursors only ever hold a
/// shared borrow, so a container cannot change under an active traversal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Container<V> {
    elements: Vec<Element<V>>,
}

impl<V> Container<V> {
    /// Create an empty container
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Wrap an existing list of elements
    pub fn from_elements(elements: Vec<Element<V>>) -> Self {
        Self { elements }
    }

    /// Append a leaf value
    pub fn push_leaf(&mut self, value: V) {
        self.elements.push(Element::Leaf(value));
    }

    /// Append a nested container
    pub fn push_nested(&mut self, container: Container<V>) {
        self.elements.push(Element::Nested(container));
    }

    /// First valid position
    #[inline]
    pub fn start(&self) -> usize {
        0
    }

    /// One past the last valid position
    #[inline]
    pub fn end(&self) -> usize {
        self.elements.len()
    }

    /// Number of direct elements (nested containers count as one)
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if there are no direct elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at `position`, if in bounds
    #[inline]
    pub fn get(&self, position: usize) -> Option<&Element<V>> {
        self.elements.get(position)
    }

    /// Direct elements as a slice
    pub fn elements(&self) -> &[Element<V>] {
        &self.elements
    }

    /// Iterate over direct elements without descending
    pub fn iter(&self) -> std::slice::Iter<'_, Element<V>> {
        self.elements.iter()
    }

    /// Take the direct elements out, leaving this container empty
    pub fn into_elements(mut self) -> Vec<Element<V>> {
        std::mem::take(&mut self.elements)
    }

    /// Maximum nesting depth; the container itself is level 1
    ///
    /// This is also the largest number of frames a stack cursor will hold
    /// while walking the container.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut pending = vec![(self, 1usize)];

        while let Some((container, level)) = pending.pop() {
            max_depth = max_depth.max(level);
            for element in &container.elements {
                if let Element::Nested(inner) = element {
                    pending.push((inner, level + 1));
                }
            }
        }

        max_depth
    }

    /// Total number of leaves at every depth
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];

        while let Some(container) = pending.pop() {
            for element in &container.elements {
                match element {
                    Element::Leaf(_) => count += 1,
                    Element::Nested(inner) => pending.push(inner),
                }
            }
        }

        count
    }
}

impl<V: Clone> Container<V> {
    /// Concatenate the direct elements of `self` and `other`
    pub fn concat(&self, other: &Container<V>) -> Container<V> {
        self.elements
            .iter()
            .chain(other.elements.iter())
            .cloned()
            .collect()
    }
}

impl<V> Default for Container<V> {
    fn default() -> Self {
        Self::new()
    }
}

// Dropping a deeply nested container through the derived glue recurses once
// per level. Unlink children onto a heap worklist instead.
impl<V> Drop for Container<V> {
    fn drop(&mut self) {
        let mut pending: Vec<Container<V>> = Vec::new();
        for element in self.elements.drain(..) {
            if let Element::Nested(inner) = element {
                pending.push(inner);
            }
        }

        while let Some(mut container) = pending.pop() {
            for element in container.elements.drain(..) {
                if let Element::Nested(inner) = element {
                    pending.push(inner);
                }
            }
        }
    }
}

impl<V> From<Vec<Element<V>>> for Container<V> {
    fn from(elements: Vec<Element<V>>) -> Self {
        Self::from_elements(elements)
    }
}

impl<V> FromIterator<Element<V>> for Container<V> {
    fn from_iter<I: IntoIterator<Item = Element<V>>>(iter: I) -> Self {
        Self::from_elements(iter.into_iter().collect())
    }
}

impl<'c, V> IntoIterator for &'c Container<V> {
    type Item = &'c Element<V>;
    type IntoIter = std::slice::Iter<'c, Element<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<V: fmt::Display> fmt::Display for Element<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Leaf(value) => write!(f, "{}", value),
            Element::Nested(container) => write!(f, "{}", container),
        }
    }
}

impl<V: fmt::Display> fmt::Display for Container<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, element) in self.elements.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", element)?;
        }
        f.write_str("]")
    }
}
