// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use trellis_selection::{SelectionState, SpanRange};

fn bench_span_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/add_rows");

    // Hypothesis: normalization cost is dominated by the sort, so heavily
    // fragmented selections should still normalize in O(n log n).
    for spans in [16usize, 128, 1_024] {
        group.throughput(Throughput::Elements(spans as u64));
        group.bench_with_input(BenchmarkId::from_parameter(spans), &spans, |b, &spans| {
            b.iter_batched(
                SelectionState::new,
                |mut state| {
                    // Disjoint spans in shuffled-ish order (stride walk).
                    for i in 0..spans {
                        let start = (i * 7919) % (spans * 4);
                        state.add_rows(SpanRange::new(start, start + 1));
                    }
                    black_box(state);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_merge_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/merge_chain");

    for spans in [128usize, 1_024] {
        group.throughput(Throughput::Elements(spans as u64));
        group.bench_with_input(BenchmarkId::from_parameter(spans), &spans, |b, &spans| {
            b.iter_batched(
                SelectionState::new,
                |mut state| {
                    // Every span overlaps the previous one; the whole chain
                    // collapses to a single range.
                    for i in 0..spans {
                        state.add_rows(SpanRange::new(i * 2, i * 2 + 2));
                    }
                    black_box(state);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_span_normalization, bench_merge_chain);
criterion_main!(benches);
