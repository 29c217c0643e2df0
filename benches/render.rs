#[macro_use]
extern crate criterion;
extern crate mandelzoom;
extern crate num;

use criterion::Criterion;
use mandelzoom::{escape_time, EscapeRenderer, Viewport};
use num::Complex;

fn bench_escape_time(c: &mut Criterion) {
    c.bench_function("escape_time interior point", |b| {
        // An interior point always runs to the cap, so this is the
        // worst case per pixel.
        b.iter(|| escape_time(Complex::new(-0.1, 0.1), 450))
    });
}

fn bench_render(c: &mut Criterion) {
    c.bench_function("render 128x128 whole-set view", |b| {
        let viewport = Viewport::new(-2.0, 1.0, -1.5, 1.5, 128, 128).unwrap();
        let renderer = EscapeRenderer::new(viewport, 200).unwrap();
        b.iter(|| renderer.render_single())
    });
}

criterion_group!(benches, bench_escape_time, bench_render);
criterion_main!(benches);
