// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_optional`.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use std::string::String;

use understory_optional::{
    DefaultableProperty, DefaultablePropertyExt, DelegateProperty, Field,
    MutableDefaultableProperty, MutableProperty, Property, PropertyExt,
    StoredDefaultableProperty, StoredProperty,
};

const TEXT: Field = Field::new("Elem", "text");
const WIDTH: Field = Field::new("Elem", "width");

fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("optional/read");

    let set = StoredProperty::with_value(100.0_f64);
    let unset = StoredProperty::<f64>::new();

    group.bench_function("get/set", |b| b.iter(|| black_box(black_box(&set).get())));
    group.bench_function("get/unset", |b| {
        b.iter(|| black_box(black_box(&unset).get()))
    });
    group.bench_function("get_or/unset", |b| {
        b.iter(|| black_box(black_box(&unset).get_or(0.0)))
    });

    let defaulted = StoredDefaultableProperty::with_default(12.0_f64);
    group.bench_function("get_or_default/default", |b| {
        b.iter(|| black_box(black_box(&defaulted).get_or_default()))
    });
    group.bench_function("get_or_default_or/default", |b| {
        b.iter(|| black_box(black_box(&defaulted).get_or_default_or(0.0)))
    });

    group.finish();
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("optional/transform");

    let set = StoredProperty::with_value(21_u64);
    let unset = StoredProperty::<u64>::new();

    group.bench_function("map/set", |b| {
        b.iter(|| black_box(black_box(&set).map(|v| v * 2).get_or(0)))
    });
    group.bench_function("map/unset", |b| {
        b.iter(|| black_box(black_box(&unset).map(|v| v * 2).get_or(0)))
    });
    group.bench_function("flat_map/set", |b| {
        b.iter(|| {
            black_box(
                black_box(&set)
                    .flat_map(|v| StoredProperty::with_value(v + 1))
                    .get_or(0),
            )
        })
    });
    group.bench_function("as_iter/set", |b| {
        b.iter(|| black_box(black_box(&set).as_iter().copied().sum::<u64>()))
    });

    group.finish();
}

fn bench_delegate(c: &mut Criterion) {
    let mut group = c.benchmark_group("optional/delegate");

    let mut text = StoredProperty::<String>::new();
    text.set(String::from("hello world hello world hello world"));
    group.bench_function("get_value/string_clone", |b| {
        b.iter(|| black_box(black_box(&text).get_value(&(), &TEXT)))
    });

    let mut width = StoredDefaultableProperty::with_default(640_u32);
    width.set_default(800);
    group.bench_function("get_value/defaulted", |b| {
        b.iter(|| black_box(black_box(&width).get_value(&(), &WIDTH)))
    });

    group.bench_function("set_unset", |b| {
        b.iter_batched(
            StoredDefaultableProperty::<u32>::new,
            |mut prop| {
                prop.set(1);
                prop.unset();
                black_box(prop);
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_read, bench_transform, bench_delegate);
criterion_main!(benches);
