//! Benchmarks for the poster pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use poster::render::{rasterize, Compositor};
use poster::types::{Palette, PaletteKind, RenderParams, ShapeSpec, ShapeType};
use poster::{to_svg, Canvas, RngStream};

fn params(shape: ShapeType, layers: u32) -> RenderParams {
    RenderParams {
        shape,
        layers,
        seed: Some(1),
        ..Default::default()
    }
}

// -- Palette benchmarks --

fn bench_palettes(c: &mut Criterion) {
    let mut group = c.benchmark_group("palettes");

    for kind in [PaletteKind::Pastel, PaletteKind::Vibrant, PaletteKind::Mono] {
        group.bench_function(format!("generate_{}", kind), |b| {
            b.iter(|| {
                let mut rng = RngStream::new(Some(7));
                Palette::generate(black_box(&kind), 6, &mut rng)
            })
        });
    }

    group.finish();
}

// -- Shape benchmarks --

fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("shapes");

    for shape in ShapeType::ALL {
        group.bench_function(format!("outlines_{}", shape), |b| {
            b.iter(|| {
                let mut rng = RngStream::new(Some(3));
                let spec = ShapeSpec::draw(
                    black_box(&shape),
                    poster::Point::new(0.5, 0.5),
                    0.3,
                    0.15,
                    &mut rng,
                );
                spec.map(|s| s.outlines(&mut rng))
            })
        });
    }

    group.finish();
}

// -- Composition and encoding benchmarks --

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let compositor = Compositor::new();

    let small = params(ShapeType::Blob, 3);
    let large = params(ShapeType::Waves, 20);

    group.bench_function("compose_blob_3", |b| {
        b.iter(|| compositor.render(black_box(&small)))
    });

    group.bench_function("compose_waves_20", |b| {
        b.iter(|| compositor.render(black_box(&large)))
    });

    let canvas = compositor.render(&large);
    group.bench_function("svg_waves_20", |b| {
        b.iter(|| to_svg(black_box(&canvas), 700, Canvas::height_for(700)))
    });

    group.sample_size(10);
    group.bench_function("rasterize_waves_20", |b| {
        b.iter(|| rasterize(black_box(&canvas), 350).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_palettes, bench_shapes, bench_render);
criterion_main!(benches);
