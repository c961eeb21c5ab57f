//! Benchmarks for the comparison engines.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use framediff::{diff_edges, diff_pixels, extract_edges, DiffOptions, Raster};

/// A 256x256 frame with a diagonal colour ramp, shifted by `offset`.
fn frame(offset: u32) -> Raster {
    let mut raster = Raster::filled(256, 256, [0, 0, 0, 255]);
    for y in 0..256 {
        for x in 0..256 {
            raster.set(
                x,
                y,
                [
                    ((x + offset) % 256) as u8,
                    ((y * 2) % 256) as u8,
                    (((x + y + offset) * 3) % 256) as u8,
                    255,
                ],
            );
        }
    }
    raster
}

fn bench_pixels(c: &mut Criterion) {
    let mut group = c.benchmark_group("pixels");

    let a = frame(0);
    let b = frame(7);

    group.bench_function("diff_pixels_256", |bench| {
        bench.iter(|| diff_pixels(black_box(&a), black_box(&b), DiffOptions::default()).unwrap())
    });

    group.finish();
}

fn bench_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("edges");

    let a = frame(0);
    let b = frame(7);
    let ea = extract_edges(&a);
    let eb = extract_edges(&b);

    group.bench_function("extract_edges_256", |bench| {
        bench.iter(|| extract_edges(black_box(&a)))
    });

    group.bench_function("diff_edges_256", |bench| {
        bench.iter(|| diff_edges(black_box(&ea), black_box(&eb), DiffOptions::default()).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_pixels, bench_edges);
criterion_main!(benches);
