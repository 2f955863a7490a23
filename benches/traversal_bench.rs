//! Stack vs chain cursor throughput

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use recursive_flatten::{flatten, Container, CursorKind};

/// `levels` containers nested inside each other, one leaf per level
fn deep(levels: u32) -> Container<u32> {
    let mut container = Container::new();
    container.push_leaf(0);
    for level in 1..levels {
        let mut outer = Container::new();
        outer.push_leaf(level);
        outer.push_nested(container);
        container = outer;
    }
    container
}

/// `groups` shallow containers of `width` leaves each
fn wide(groups: u32, width: u32) -> Container<u32> {
    let mut container = Container::new();
    for group in 0..groups {
        let mut inner = Container::new();
        for offset in 0..width {
            inner.push_leaf(group * width + offset);
        }
        container.push_nested(inner);
    }
    container
}

fn benchmark_cursors(c: &mut Criterion) {
    let inputs = [
        ("deep_64", deep(64)),
        ("deep_512", deep(512)),
        ("wide_100x100", wide(100, 100)),
    ];

    let mut group = c.benchmark_group("flatten");
    for (name, input) in &inputs {
        for kind in CursorKind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.to_string(), name), input, |b, input| {
                b.iter(|| {
                    let sum: u64 = flatten(black_box(input))
                        .make_cursor(kind)
                        .map(|&leaf| u64::from(leaf))
                        .sum();
                    black_box(sum)
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, benchmark_cursors);
criterion_main!(benches);
