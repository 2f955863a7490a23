//! # Recursive flattening of irregularly nested sequences
//!
//! A [`Container`] holds [`Element`]s, each either a leaf value or another
//! container, nested to any depth. [`flatten`] presents every leaf in
//! left-to-right depth-first order, lazily: nothing is traversed until a
//! cursor is driven.
//!
//! ## Two cursor representations
//!
//! 1. **Stack cursor**: an explicit stack of `(container, position)` frames.
//!    O(1) access to the active level, O(depth) frames, nothing to leak.
//! 2. **Chain cursor**: one node per level, linked forward by owning `inner`
//!    links and backward by non-owning `outer` indices. Re-walks the chain
//!    from its head on every call.
//!
//! Both produce the same leaves and end on the same call.
//!
//! ## Usage Example
//!
//! ```
//! use recursive_flatten::{flatten, nested, Container, CursorKind};
//!
//! let input: Container<i32> = nested![[[1, 2]], [], [[3], 4], 5];
//! let sequence = flatten(&input);
//!
//! let stack: Vec<i32> = sequence.make_cursor(CursorKind::Stack).copied().collect();
//! let chain: Vec<i32> = sequence.make_cursor(CursorKind::Chain).copied().collect();
//! assert_eq!(stack, vec![1, 2, 3, 4, 5]);
//! assert_eq!(stack, chain);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod cursor;   // Stack and chain cursors
pub mod nested;   // Element / container / frame model
pub mod sequence; // Lazy flattened view

// Re-exports for convenience
pub use cursor::{ChainCursor, Cursor, CursorKind, StackCursor};
pub use nested::{Container, Element, Frame, ParseError};
pub use sequence::{flatten, RecursiveFlatten};

/// Parameters for parsing nested literals
#[derive(Debug, Clone)]
pub struct ParseConfig {
    /// Maximum nesting depth accepted; the root container is level 1
    pub max_depth: usize,

    /// Accept a `,` directly before `]`
    pub allow_trailing_comma: bool,
}

impl ParseConfig {
    /// Default depth limit
    pub const DEFAULT_MAX_DEPTH: usize = 1024;

    /// Default configuration with a different depth limit
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            allow_trailing_comma: true,
        }
    }
}

/// Build a [`Container`] from a bracketed literal
///
/// Each leaf must be a single token tree; wrap anything longer in
/// parentheses.
///
/// ```
/// use recursive_flatten::{nested, Container, Element};
///
/// let c: Container<i32> = nested![1, [2, []], (1 + 2)];
/// assert_eq!(c.len(), 3);
/// assert!(matches!(c.get(1), Some(Element::Nested(_))));
/// ```
#[macro_export]
macro_rules! nested {
    (@element [$($inner:tt),* $(,)?]) => {
        $crate::Element::Nested($crate::nested![$($inner),*])
    };
    (@element $leaf:expr) => {
        $crate::Element::Leaf($leaf)
    };
    ($($element:tt),* $(,)?) => {
        $crate::Container::from_elements(vec![$($crate::nested!(@element $element)),*])
    };
}
