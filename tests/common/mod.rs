#![allow(dead_code)]

use recursive_flatten::{flatten, Container, CursorKind, Element};

/// Recursive flatten used as the oracle for both cursors
pub fn reference_flatten<V: Clone>(container: &Container<V>) -> Vec<V> {
    let mut out = Vec::new();
    collect(container, &mut out);
    out
}

fn collect<V: Clone>(container: &Container<V>, out: &mut Vec<V>) {
    for element in container {
        match element {
            Element::Leaf(value) => out.push(value.clone()),
            Element::Nested(inner) => collect(inner, out),
        }
    }
}

/// Drain a cursor of the given kind, returning the leaves and the number of
/// calls it took to see the first `None`
pub fn drain<V: Clone>(container: &Container<V>, kind: CursorKind) -> (Vec<V>, usize) {
    let mut cursor = flatten(container).make_cursor(kind);
    let mut values = Vec::new();
    let mut calls = 0;

    loop {
        calls += 1;
        match cursor.next() {
            Some(value) => values.push(value.clone()),
            None => break,
        }
    }

    (values, calls)
}
