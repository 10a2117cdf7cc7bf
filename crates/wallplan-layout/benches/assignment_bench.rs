//! Assignment engine benchmarks.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use wallplan_core::{OverrideMap, PanelCoord, PanelGrid};
use wallplan_layout::{assign_lines, AssignmentParams, Traversal};

fn bench_assignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("assign_lines");

    let grid = PanelGrid::new(60, 30);
    let empty = OverrideMap::new();
    group.bench_function("serpentine_1800_panels", |b| {
        b.iter(|| {
            let params = AssignmentParams {
                traversal: Traversal::SerpentineTop,
                capacity: 16,
                overrides: black_box(&empty),
            };
            black_box(assign_lines(black_box(&grid), &params))
        })
    });

    let mut sparse = PanelGrid::new(60, 30);
    let mut overrides = OverrideMap::new();
    for col in 0..60u16 {
        if col % 7 == 0 {
            sparse.delete(PanelCoord::new(col, col % 30));
        }
        if col % 11 == 0 {
            overrides.set(PanelCoord::new(col, 0), u32::from(col) + 40);
        }
    }
    group.bench_function("serpentine_with_overrides_and_knockouts", |b| {
        b.iter(|| {
            let params = AssignmentParams {
                traversal: Traversal::SerpentineTop,
                capacity: 16,
                overrides: black_box(&overrides),
            };
            black_box(assign_lines(black_box(&sparse), &params))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_assignment);
criterion_main!(benches);
