//! Benchmarks for rectilinear polygon partitioning.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use rectilin::{partition, Point2, Polygon};

/// Staircase polygon with `steps` unit steps: many reflex vertices, no
/// chords, every cut resolved individually.
fn staircase(steps: i64) -> Polygon<i64> {
    let mut points = vec![Point2::new(0, 0), Point2::new(steps, 0)];
    for k in 1..=steps {
        points.push(Point2::new(steps + 1 - k, k));
        points.push(Point2::new(steps - k, k));
    }
    Polygon::new(points)
}

/// Upward comb with `teeth` unit teeth: long runs of aligned reflex
/// vertices, one chord under every interior tooth.
fn comb(teeth: i64) -> Polygon<i64> {
    let width = 2 * teeth - 1;
    let mut points = vec![
        Point2::new(0, 0),
        Point2::new(width, 0),
        Point2::new(width, 2),
    ];
    for i in (0..teeth - 1).rev() {
        let gap_right = 2 * i + 2;
        points.push(Point2::new(gap_right, 2));
        points.push(Point2::new(gap_right, 1));
        points.push(Point2::new(gap_right - 1, 1));
        points.push(Point2::new(gap_right - 1, 2));
    }
    points.push(Point2::new(0, 2));
    Polygon::new(points)
}

/// The plus sign: the smallest input whose chords cross, forcing the
/// matching and cover stages to do real work.
fn plus_sign() -> Polygon<i64> {
    Polygon::new(
        [
            (1, 0),
            (2, 0),
            (2, 1),
            (3, 1),
            (3, 2),
            (2, 2),
            (2, 3),
            (1, 3),
            (1, 2),
            (0, 2),
            (0, 1),
            (1, 1),
        ]
        .iter()
        .map(|&(x, y)| Point2::new(x, y))
        .collect(),
    )
}

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");

    for &steps in &[10i64, 100, 1000] {
        let polygon = staircase(steps);
        group.throughput(Throughput::Elements(polygon.len() as u64));
        group.bench_with_input(BenchmarkId::new("staircase", steps), &polygon, |b, p| {
            b.iter(|| partition(black_box(p)).unwrap())
        });
    }

    for &teeth in &[10i64, 100, 1000] {
        let polygon = comb(teeth);
        group.throughput(Throughput::Elements(polygon.len() as u64));
        group.bench_with_input(BenchmarkId::new("comb", teeth), &polygon, |b, p| {
            b.iter(|| partition(black_box(p)).unwrap())
        });
    }

    let plus = plus_sign();
    group.bench_function("plus_sign", |b| {
        b.iter(|| partition(black_box(&plus)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_partition);
criterion_main!(benches);
