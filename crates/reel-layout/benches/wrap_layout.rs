//! Wrap layout benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reel_core::{Point, Size};
use reel_layout::WrapLayout;

fn chip_row(count: usize) -> Vec<Size> {
    (0..count)
        .map(|i| Size::new(40.0 + (i % 7) as f64 * 12.0, 28.0 + (i % 3) as f64 * 6.0))
        .collect()
}

fn measure_chips(c: &mut Criterion) {
    let layout = WrapLayout::new().with_vertical_spacing(8.0);
    let items = chip_row(200);
    c.bench_function("measure_200_chips", |b| {
        b.iter(|| layout.measure(black_box(&items), black_box(360.0)))
    });
}

fn place_chips(c: &mut Criterion) {
    let layout = WrapLayout::new().with_vertical_spacing(8.0);
    let items = chip_row(200);
    c.bench_function("place_200_chips", |b| {
        b.iter(|| layout.place(black_box(&items), Point::ZERO, black_box(360.0)))
    });
}

criterion_group!(benches, measure_chips, place_chips);
criterion_main!(benches);
