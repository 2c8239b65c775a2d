// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_notify`.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::cell::Cell;
use std::rc::Rc;

use understory_notify::Event;

fn counted(event: &Event, hits: &Rc<Cell<u64>>) {
    let hits = hits.clone();
    event.subscribe(move || hits.set(hits.get() + 1));
}

fn bench_raise(c: &mut Criterion) {
    let mut group = c.benchmark_group("notify/raise");

    for listeners in [0_usize, 1, 2, 8, 64] {
        group.bench_function(BenchmarkId::new("listeners", listeners), |b| {
            let event = Event::new();
            let hits = Rc::new(Cell::new(0));
            for _ in 0..listeners {
                counted(&event, &hits);
            }
            b.iter(|| event.raise());
            black_box(hits.get());
        });
    }

    // A chain of forwarders, as built by nested composites.
    for depth in [1_usize, 4, 16] {
        group.bench_function(BenchmarkId::new("forward_chain", depth), |b| {
            let events: Vec<Event> = (0..=depth).map(|_| Event::new()).collect();
            for pair in events.windows(2) {
                let target = pair[1].downgrade();
                pair[0].subscribe(move || {
                    target.raise();
                });
            }
            let hits = Rc::new(Cell::new(0));
            counted(&events[depth], &hits);
            b.iter(|| events[0].raise());
            black_box(hits.get());
        });
    }

    group.finish();
}

fn bench_subscribe(c: &mut Criterion) {
    let mut group = c.benchmark_group("notify/subscribe");

    group.bench_function("subscribe_unsubscribe", |b| {
        let event = Event::new();
        b.iter(|| {
            let key = event.subscribe(|| {});
            black_box(event.unsubscribe(key))
        });
    });

    group.bench_function("unsubscribe_middle/64", |b| {
        b.iter_batched(
            || {
                let event = Event::new();
                let keys: Vec<_> = (0..64).map(|_| event.subscribe(|| {})).collect();
                (event, keys[32])
            },
            |(event, key)| black_box(event.unsubscribe(key)),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_raise, bench_subscribe);
criterion_main!(benches);
