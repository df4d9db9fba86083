use criterion::{black_box, criterion_group, criterion_main, Criterion};

use airfoil_rs::airfoil::generate::{AirfoilGenerator, Naca4Digit};
use airfoil_rs::geometry::embed::{embed_contour, Axis};

fn benchmark(c: &mut Criterion) {
    let naca = Naca4Digit::from_code("2412", 1.0).unwrap();

    c.bench_function("Generate NACA 2412", |b| {
        b.iter(|| black_box(&naca).generate(101).unwrap())
    });

    let contour = naca.generate(101).unwrap().to_outer_contour();
    c.bench_function("Embed Contour", |b| {
        b.iter(|| embed_contour(black_box(&contour), Axis::Z))
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
