use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use snap_core::{cartesian_lines, polar_grid, GridConfig};

fn bench_grid_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_build");
    let cart = GridConfig::cartesian(0.25).unwrap();
    let polar = GridConfig::polar(0.25, 48).unwrap();

    for &extent in &[16.0f64, 64.0, 256.0] {
        group.bench_with_input(BenchmarkId::new("cartesian", extent as i64), &extent, |b, &e| {
            b.iter(|| black_box(cartesian_lines(&cart, e)));
        });
        group.bench_with_input(BenchmarkId::new("polar", extent as i64), &extent, |b, &e| {
            b.iter(|| black_box(polar_grid(&polar, e)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_grid_build);
criterion_main!(benches);
