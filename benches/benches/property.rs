// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_property`.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use std::rc::Rc;
use std::sync::Once;

use peniko::Color;
use understory_property::{
    ArrowMaterialProperty, CallbackProperty, ConstantProperty, JulianDate, MaterialParameters,
    PolylineOutlineMaterialProperty, PropertyNode, PropertySlot,
};

fn bench_resolve(c: &mut Criterion) {
    static PRINT_SIZES: Once = Once::new();
    PRINT_SIZES.call_once(|| {
        eprintln!(
            "sizes: MaterialParameters={} PropertySlot<Color>={} ArrowMaterialProperty={}",
            size_of::<MaterialParameters>(),
            size_of::<PropertySlot<Color>>(),
            size_of::<ArrowMaterialProperty>(),
        );
    });

    let time = JulianDate::J2000;
    let red = Color::from_rgba8(255, 0, 0, 255);
    let mut group = c.benchmark_group("property/resolve");

    group.bench_function("arrow/empty", |b| {
        let arrow = ArrowMaterialProperty::new();
        b.iter(|| black_box(arrow.value(time)));
    });

    group.bench_function("arrow/constant", |b| {
        let arrow = ArrowMaterialProperty::with_color(red);
        b.iter(|| black_box(arrow.value(time)));
    });

    group.bench_function("arrow/constant_into", |b| {
        let arrow = ArrowMaterialProperty::with_color(red);
        let mut params = MaterialParameters::new();
        b.iter(|| {
            arrow.value_into(time, &mut params);
            black_box(&params);
        });
    });

    group.bench_function("arrow/callback_into", |b| {
        let arrow = ArrowMaterialProperty::with_color(Rc::new(CallbackProperty::new(
            move |time: JulianDate| {
                let alpha = (time.seconds_of_day() / 86_400.0) as f32;
                red.with_alpha(alpha)
            },
            false,
        )));
        let mut params = MaterialParameters::new();
        b.iter(|| {
            arrow.value_into(time, &mut params);
            black_box(&params);
        });
    });

    group.bench_function("outline/defaults_into", |b| {
        let outline = PolylineOutlineMaterialProperty::new();
        let mut params = MaterialParameters::new();
        b.iter(|| {
            outline.value_into(time, &mut params);
            black_box(&params);
        });
    });

    group.bench_function("arrow/is_constant", |b| {
        let arrow = ArrowMaterialProperty::with_color(red);
        b.iter(|| black_box(arrow.is_constant()));
    });

    group.finish();
}

fn bench_mutate(c: &mut Criterion) {
    let red = Color::from_rgba8(255, 0, 0, 255);
    let mut group = c.benchmark_group("property/mutate");

    group.bench_function("set_color/literal", |b| {
        let arrow = ArrowMaterialProperty::new();
        b.iter(|| arrow.set_color(black_box(red)));
    });

    group.bench_function("set_color/same_node", |b| {
        let node: Rc<dyn PropertyNode<Color>> = Rc::new(ConstantProperty::new(red));
        let arrow = ArrowMaterialProperty::with_color(node.clone());
        b.iter(|| arrow.set_color(node.clone()));
    });

    group.bench_function("upstream_change/forwarded", |b| {
        let node = Rc::new(ConstantProperty::new(red));
        let arrow = ArrowMaterialProperty::with_color(node.clone());
        arrow.definition_changed().subscribe(|| {});
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            node.set_value(if flip { Color::BLACK } else { red });
        });
    });

    group.bench_function("build_and_drop/arrow", |b| {
        let node = Rc::new(ConstantProperty::new(red));
        b.iter_batched(
            || node.clone(),
            |node| black_box(ArrowMaterialProperty::with_color(node)),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_mutate);
criterion_main!(benches);
