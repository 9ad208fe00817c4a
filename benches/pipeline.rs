//! Benchmarks for the bannerforge pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bannerforge::{classify, encode_png, render, Banner, Colour, Layer, Pattern};

fn full_banner() -> Banner {
    let mut banner = Banner::default();
    let layers = [
        (Pattern::HalfHorizontal, Colour::rgb(0x3C, 0x44, 0xAA)),
        (Pattern::Border, Colour::rgb(0x1F, 0x1F, 0x1F)),
        (Pattern::Cross, Colour::rgb(0xF9, 0xFF, 0xFE)),
        (Pattern::Gradient, Colour::rgb(0xFF, 0xFF, 0xFF)),
        (Pattern::Circle, Colour::rgb(0xB0, 0x2E, 0x26)),
        (Pattern::Chevron, Colour::rgb(0xFE, 0xD8, 0x3D)),
    ];
    for (pattern, colour) in layers {
        banner.add_layer(Layer::new(pattern, colour)).unwrap();
    }
    banner
}

// -- Rendering benchmarks --

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    let empty = Banner::default();
    let full = full_banner();

    let mut gradient_only = Banner::default();
    gradient_only
        .add_layer(Layer::new(Pattern::Gradient, Colour::WHITE))
        .unwrap();

    group.bench_function("render_base_only", |b| {
        b.iter(|| render(black_box(&empty)))
    });

    group.bench_function("render_gradient_layer", |b| {
        b.iter(|| render(black_box(&gradient_only)))
    });

    group.bench_function("render_six_layers", |b| {
        b.iter(|| render(black_box(&full)))
    });

    group.finish();
}

// -- Encoding benchmarks --

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");

    let canvas = render(&full_banner());

    group.bench_function("encode_png", |b| {
        b.iter(|| encode_png(black_box(&canvas)).unwrap())
    });

    group.finish();
}

// -- Classification benchmarks --

fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    // Sweep a spread of colours rather than one lucky exact match
    let colours: Vec<Colour> = (0..64)
        .map(|i| {
            Colour::rgb(
                ((i * 4) % 256) as u8,
                ((i * 7) % 256) as u8,
                ((i * 13) % 256) as u8,
            )
        })
        .collect();

    group.bench_function("classify_sweep", |b| {
        b.iter(|| {
            for colour in &colours {
                black_box(classify(black_box(*colour)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_rendering, bench_encoding, bench_classification);
criterion_main!(benches);
