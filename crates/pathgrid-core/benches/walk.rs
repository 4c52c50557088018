//! Benchmarks for coordinate path generation.
//!
//! Measures a full walk of every path family over a few grid shapes.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench walk
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pathgrid_core::{GridSize, Origin, Path, PathFamily};

const SHAPES: [(usize, usize); 3] = [(3, 3), (8, 12), (32, 32)];

fn bench_walk(c: &mut Criterion) {
    for family in PathFamily::ALL {
        let path = Path::new(family, Origin::TopLeft);
        for (rows, cols) in SHAPES {
            let size = GridSize::new(rows, cols).unwrap();
            c.bench_with_input(
                BenchmarkId::new(format!("walk_{family}"), size),
                &size,
                |b, size| {
                    b.iter(|| {
                        let count = path.walk(hint::black_box(*size)).count();
                        hint::black_box(count)
                    });
                },
            );
        }
    }
}

criterion_group!(benches, bench_walk);
criterion_main!(benches);
