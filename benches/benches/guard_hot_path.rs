// Copyright 2026 the Skywatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use skywatch_guard::{ZoomGuard, ZoomPolicy};
use skywatch_relayout::{LatLon, RelayoutData, keys};

fn bench_handler(c: &mut Criterion) {
    let mut group = c.benchmark_group("guard/on_relayout");

    // The guard sits on every relayout event a widget emits, so the
    // interesting costs are the per-event ones: key lookup, policy
    // evaluation, and (rarely) building a one-key corrective payload.
    let in_range = RelayoutData::single(keys::MAP_ZOOM, 5.0);
    let out_of_range = RelayoutData::single(keys::MAP_ZOOM, 12.0);
    let irrelevant = RelayoutData::single(keys::MAP_CENTER, LatLon::new(44.0, -121.0));

    group.bench_function("in_range", |b| {
        let mut guard = ZoomGuard::new(keys::MAP_ZOOM, ZoomPolicy::clamp(3.0, 8.0), 5.0);
        b.iter(|| black_box(guard.on_relayout(black_box(&in_range))));
    });

    group.bench_function("irrelevant_key", |b| {
        let mut guard = ZoomGuard::new(keys::MAP_ZOOM, ZoomPolicy::clamp(3.0, 8.0), 5.0);
        b.iter(|| black_box(guard.on_relayout(black_box(&irrelevant))));
    });

    group.bench_function("correction_and_echo", |b| {
        b.iter_batched(
            || ZoomGuard::new(keys::MAP_ZOOM, ZoomPolicy::clamp(3.0, 8.0), 5.0),
            |mut guard| {
                let correction = guard.on_relayout(&out_of_range);
                black_box(&correction);
                // Absorb the echo the correction would cause.
                if let Some(echo) = correction {
                    black_box(guard.on_relayout(&echo));
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_event_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("guard/event_stream");

    // A mixed stream approximating real interaction: mostly pans and
    // in-range zooms, the occasional out-of-range gesture.
    let events: Vec<RelayoutData> = (0..1_024)
        .map(|i| match i % 8 {
            0 => RelayoutData::single(keys::MAP_ZOOM, 12.0),
            1..=3 => RelayoutData::single(keys::MAP_ZOOM, 3.0 + f64::from(i % 5)),
            _ => RelayoutData::single(keys::MAP_CENTER, LatLon::new(44.0, -121.0)),
        })
        .collect();
    group.throughput(Throughput::Elements(events.len() as u64));

    group.bench_function("mixed_stream", |b| {
        b.iter_batched(
            || ZoomGuard::new(keys::MAP_ZOOM, ZoomPolicy::clamp(3.0, 8.0), 5.0),
            |mut guard| {
                for event in &events {
                    black_box(guard.on_relayout(event));
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_handler, bench_event_stream);
criterion_main!(benches);
