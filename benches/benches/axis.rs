// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use trellis_axis::{ExtentModel, ExtentTable};

fn bench_offset_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("axis/index_at_offset");

    // Hypothesis: lookup is O(log n) after a one-time prefix rebuild, so
    // per-query cost should barely move across sizes.
    for len in [1_000usize, 10_000, 100_000] {
        let mut table = ExtentTable::new(len, 36.0);
        // Sparse overrides, like measured wrapped-text rows.
        for index in (0..len).step_by(97) {
            table.set_extent(index, 72.0);
        }
        let total = table.total_extent();
        group.throughput(Throughput::Elements(1));

        group.bench_with_input(BenchmarkId::from_parameter(len), &total, |b, &total| {
            let mut offset = 0.0;
            b.iter(|| {
                offset = (offset + 1234.5) % total;
                black_box(table.index_at_offset(black_box(offset)));
            });
        });
    }

    group.finish();
}

fn bench_rebuild_after_mutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("axis/rebuild");

    for len in [1_000usize, 10_000, 100_000] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                || ExtentTable::new(len, 36.0),
                |mut table| {
                    table.set_extent(len / 2, 72.0);
                    // First query after a mutation pays the O(n) rebuild.
                    black_box(table.total_extent());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_offset_lookup, bench_rebuild_after_mutation);
criterion_main!(benches);
