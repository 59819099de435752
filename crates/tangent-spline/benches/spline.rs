//! Benchmarks for spline evaluation, bounds and nearest-point search

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::Vec3;
use tangent_spline::{BezierSpline, TangentMode};

fn wavy_spline(curves: usize) -> BezierSpline {
    let mut spline = BezierSpline::new();
    for _ in 1..curves {
        spline.add_segment();
    }
    for anchor in (0..spline.control_point_count()).step_by(3) {
        spline.set_control_point_mode(anchor, TangentMode::Aligned).unwrap();
    }
    for index in (1..spline.control_point_count()).step_by(3) {
        let lift = if index % 2 == 0 { 1.5 } else { -1.5 };
        let p = spline.control_point(index).unwrap();
        spline.set_control_point(index, p + Vec3::new(0.0, lift, 0.5)).unwrap();
    }
    spline
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let samples = 1000;
    group.throughput(Throughput::Elements(samples as u64));

    for curves in [1, 10, 100] {
        let spline = wavy_spline(curves);

        group.bench_with_input(BenchmarkId::new("point", curves), &curves, |b, _| {
            b.iter(|| {
                let mut acc = Vec3::ZERO;
                for i in 0..samples {
                    acc += spline.point(black_box(i as f32 / samples as f32));
                }
                acc
            });
        });

        group.bench_with_input(BenchmarkId::new("velocity", curves), &curves, |b, _| {
            b.iter(|| {
                let mut acc = Vec3::ZERO;
                for i in 0..samples {
                    acc += spline.velocity(black_box(i as f32 / samples as f32));
                }
                acc
            });
        });
    }

    group.finish();
}

fn bench_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounding_box");

    for curves in [1, 10, 100] {
        let mut spline = wavy_spline(curves);

        group.bench_with_input(BenchmarkId::new("recompute", curves), &curves, |b, _| {
            b.iter(|| {
                spline.invalidate_bounds();
                black_box(spline.bounding_box())
            });
        });

        group.bench_with_input(BenchmarkId::new("cached", curves), &curves, |b, _| {
            b.iter(|| black_box(spline.bounding_box()));
        });
    }

    group.finish();
}

fn bench_nearest_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_point");

    for curves in [1, 10, 100] {
        let spline = wavy_spline(curves);
        let target = Vec3::new(curves as f32 * 1.5, 2.0, 0.0);

        group.bench_with_input(BenchmarkId::from_parameter(curves), &curves, |b, _| {
            b.iter(|| spline.nearest_point(black_box(target)));
        });
    }

    group.finish();
}

fn bench_editing(c: &mut Criterion) {
    let mut group = c.benchmark_group("editing");

    group.bench_function("add_remove_segment", |b| {
        let mut spline = wavy_spline(10);
        b.iter(|| {
            spline.add_segment();
            spline.remove_segment(black_box(15)).unwrap();
        });
    });

    group.bench_function("drag_mirrored_handle", |b| {
        let mut spline = wavy_spline(10);
        spline.set_control_point_mode(15, TangentMode::Mirrored).unwrap();
        let mut offset = 0.0_f32;
        b.iter(|| {
            offset = (offset + 0.01) % 1.0;
            spline
                .set_control_point(black_box(14), Vec3::new(14.0, offset, 0.0))
                .unwrap();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_bounds, bench_nearest_point, bench_editing);
criterion_main!(benches);
