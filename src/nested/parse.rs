//! Bracketed literal parsing
//!
//! Grammar: `[` (element (`,` element)*)? `,`? `]`
//! A leaf is a maximal run of characters other than `[`, `]` and `,`,
//! trimmed and handed to `V::from_str`. Whitespace between tokens is ignored.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use super::{Container, Element};
use crate::ParseConfig;

/// Errors produced while parsing a nested literal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input ended before every opened container was closed
    #[error("unexpected end of input with {open} unclosed container(s)")]
    UnexpectedEnd {
        /// Containers still open at end of input
        open: usize,
    },

    /// Character not valid in the current position
    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar {
        /// Offending character
        ch: char,
        /// Byte offset into the input
        offset: usize,
    },

    /// Separator where an element was expected, e.g. `[1,,2]`
    #[error("missing element before ',' at offset {offset}")]
    EmptyLeaf {
        /// Byte offset of the separator
        offset: usize,
    },

    /// Leaf text rejected by the payload parser
    #[error("invalid leaf '{token}' at offset {offset}: {reason}")]
    InvalidLeaf {
        /// Trimmed leaf text
        token: String,
        /// Byte offset where the leaf starts
        offset: usize,
        /// Message from the payload parser
        reason: String,
    },

    /// Nesting deeper than the configured limit
    #[error("nesting depth exceeds limit {limit} at offset {offset}")]
    DepthExceeded {
        /// Configured maximum depth
        limit: usize,
        /// Byte offset of the `[` that crossed the limit
        offset: usize,
    },

    /// Non-whitespace input after the root container closed
    #[error("trailing input at offset {offset}")]
    TrailingInput {
        /// Byte offset of the first trailing character
        offset: usize,
    },
}

/// What the parser accepts next
#[derive(Debug, Clone, Copy, PartialEq)]
enum Expect {
    /// Right after `[`: an element or `]`
    First,
    /// Right after `,`: an element (or `]` if trailing commas are allowed)
    Element,
    /// Right after an element: `,` or `]`
    Separator,
}

struct Scanner<'s> {
    input: &'s str,
    offset: usize,
}

impl<'s> Scanner<'s> {
    fn peek(&self) -> Option<char> {
        self.input[self.offset..].chars().next()
    }

    fn bump(&mut self, ch: char) {
        self.offset += ch.len_utf8();
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.bump(ch);
        }
    }

    /// Consume a leaf token, returning its trimmed text
    fn take_leaf(&mut self) -> &'s str {
        let start = self.offset;
        while let Some(ch) = self.peek() {
            if matches!(ch, '[' | ']' | ',') {
                break;
            }
            self.bump(ch);
        }
        self.input[start..self.offset].trim()
    }
}

/// Parse `input` into a container, iteratively
pub(crate) fn parse_container<V>(
    input: &str,
    config: &ParseConfig,
) -> Result<Container<V>, ParseError>
where
    V: FromStr,
    V::Err: fmt::Display,
{
    let mut scanner = Scanner { input, offset: 0 };
    let mut open: Vec<Container<V>> = Vec::new();
    let mut expect = Expect::First;

    scanner.skip_whitespace();
    match scanner.peek() {
        Some('[') => {
            check_depth(open.len(), config, scanner.offset)?;
            scanner.bump('[');
            open.push(Container::new());
        }
        Some(ch) => {
            return Err(ParseError::UnexpectedChar {
                ch,
                offset: scanner.offset,
            })
        }
        None => return Err(ParseError::UnexpectedEnd { open: 0 }),
    }

    loop {
        scanner.skip_whitespace();
        let offset = scanner.offset;
        let ch = scanner.peek().ok_or(ParseError::UnexpectedEnd { open: open.len() })?;

        match (ch, expect) {
            ('[', Expect::First | Expect::Element) => {
                check_depth(open.len(), config, offset)?;
                scanner.bump(ch);
                open.push(Container::new());
                expect = Expect::First;
            }
            (']', Expect::First | Expect::Separator) => {
                scanner.bump(ch);
                if let Some(done) = close(&mut open) {
                    return finish(&mut scanner, done);
                }
                expect = Expect::Separator;
            }
            (']', Expect::Element) if config.allow_trailing_comma => {
                scanner.bump(ch);
                if let Some(done) = close(&mut open) {
                    return finish(&mut scanner, done);
                }
                expect = Expect::Separator;
            }
            (',', Expect::Separator) => {
                scanner.bump(ch);
                expect = Expect::Element;
            }
            (',', Expect::First | Expect::Element) => {
                return Err(ParseError::EmptyLeaf { offset });
            }
            (']' | '[', _) | (_, Expect::Separator) => {
                return Err(ParseError::UnexpectedChar { ch, offset });
            }
            (_, Expect::First | Expect::Element) => {
                let token = scanner.take_leaf();
                let value = token.parse::<V>().map_err(|err| ParseError::InvalidLeaf {
                    token: token.to_string(),
                    offset,
                    reason: err.to_string(),
                })?;
                if let Some(top) = open.last_mut() {
                    top.push_leaf(value);
                }
                expect = Expect::Separator;
            }
        }
    }
}

fn check_depth(open: usize, config: &ParseConfig, offset: usize) -> Result<(), ParseError> {
    if open >= config.max_depth {
        return Err(ParseError::DepthExceeded {
            limit: config.max_depth,
            offset,
        });
    }
    Ok(())
}

/// Pop the innermost open container; returns it when it was the root
fn close<V>(open: &mut Vec<Container<V>>) -> Option<Container<V>> {
    let finished = open.pop()?;
    match open.last_mut() {
        Some(parent) => {
            parent.push_nested(finished);
            None
        }
        None => Some(finished),
    }
}

fn finish<V>(scanner: &mut Scanner<'_>, root: Container<V>) -> Result<Container<V>, ParseError> {
    scanner.skip_whitespace();
    if scanner.peek().is_some() {
        return Err(ParseError::TrailingInput {
            offset: scanner.offset,
        });
    }
    debug!(
        leaves = root.leaf_count(),
        depth = root.depth(),
        "parsed nested literal"
    );
    Ok(root)
}

impl<V> Container<V>
where
    V: FromStr,
    V::Err: fmt::Display,
{
    /// Parse a bracketed literal such as `[1, [2, []], 3]`
    pub fn parse_with(input: &str, config: &ParseConfig) -> Result<Self, ParseError> {
        parse_container(input, config)
    }
}

impl<V> FromStr for Container<V>
where
    V: FromStr,
    V::Err: fmt::Display,
{
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_container(s, &ParseConfig::default())
    }
}

impl<V> FromStr for Element<V>
where
    V: FromStr,
    V::Err: fmt::Display,
{
    type Err = ParseError;

    /// Bracketed input parses as a nested container, anything else as a leaf
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.starts_with('[') {
            return s.parse().map(Element::Nested);
        }

        let offset = s.len() - s.trim_start().len();
        trimmed
            .parse::<V>()
            .map(Element::Leaf)
            .map_err(|err| ParseError::InvalidLeaf {
                token: trimmed.to_string(),
                offset,
                reason: err.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_nesting() {
        let container: Container<i32> = "[[[1, 2]], [], [[3], 4], 5]".parse().unwrap();
        assert_eq!(container, crate::nested![[[1, 2]], [], [[3], 4], 5]);
    }

    #[test]
    fn test_whitespace_and_trailing_comma() {
        let container: Container<i32> = " [ 1 ,\n [ 2 , ] , ] ".parse().unwrap();
        assert_eq!(container, crate::nested![1, [2]]);

        let strict = ParseConfig {
            allow_trailing_comma: false,
            ..ParseConfig::default()
        };
        let err = Container::<i32>::parse_with("[1,]", &strict).unwrap_err();
        assert_eq!(err, ParseError::UnexpectedChar { ch: ']', offset: 3 });
    }

    #[test]
    fn test_string_leaves_are_trimmed() {
        let container: Container<String> = "[ a b , [c]]".parse().unwrap();
        assert_eq!(container.to_string(), "[a b, [c]]");
    }

    #[test]
    fn test_depth_limit() {
        let config = ParseConfig::with_max_depth(2);
        assert!(Container::<i32>::parse_with("[[1]]", &config).is_ok());

        let err = Container::<i32>::parse_with("[[[1]]]", &config).unwrap_err();
        assert_eq!(err, ParseError::DepthExceeded { limit: 2, offset: 2 });
    }

    #[test]
    fn test_error_positions() {
        let parse = |s: &str| s.parse::<Container<i32>>().unwrap_err();

        assert_eq!(parse(""), ParseError::UnexpectedEnd { open: 0 });
        assert_eq!(parse("[1, [2]"), ParseError::UnexpectedEnd { open: 1 });
        assert_eq!(parse("1"), ParseError::UnexpectedChar { ch: '1', offset: 0 });
        assert_eq!(parse("[1,,2]"), ParseError::EmptyLeaf { offset: 3 });
        assert_eq!(parse("[1[2]]"), ParseError::UnexpectedChar { ch: '[', offset: 2 });
        assert_eq!(parse("[1] x"), ParseError::TrailingInput { offset: 4 });
        assert!(matches!(
            parse("[1, x]"),
            ParseError::InvalidLeaf { ref token, offset: 4, .. } if token == "x"
        ));
    }

    #[test]
    fn test_element_from_str() {
        assert_eq!("7".parse::<Element<i32>>(), Ok(Element::Leaf(7)));
        assert_eq!(
            " [7] ".parse::<Element<i32>>(),
            Ok(Element::Nested(crate::nested![7]))
        );
    }

    #[test]
    fn test_element_errors_count_leading_whitespace() {
        let err = " [1, x]".parse::<Element<i32>>().unwrap_err();
        assert!(matches!(err, ParseError::InvalidLeaf { offset: 5, .. }));

        let err = "  y".parse::<Element<i32>>().unwrap_err();
        assert!(matches!(err, ParseError::InvalidLeaf { offset: 2, .. }));
    }
}
