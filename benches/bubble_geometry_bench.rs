use bubble_compare::core::{
    BubbleDataset, BubblePoint, BubbleRadiusOptions, BubbleSeries, BubbleValue, PixelPoint,
    SeriesId, bubble_radius,
};
use bubble_compare::interaction::{HitSelection, HitTestHost, find_closest};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Derives a deterministic pixel position from each sample's size value so
/// the bench needs no stored layout.
struct GridHost;

impl HitTestHost for GridHost {
    fn is_excluded_type(&self, _id: &SeriesId) -> bool {
        false
    }

    fn pointer_distance(&self, point: &BubblePoint, pointer: PixelPoint) -> f64 {
        let z = point.z_value().unwrap_or_default();
        PixelPoint::new(z * 2.0, z).distance_to(pointer)
    }
}

fn eight_series_dataset() -> BubbleDataset {
    let mut dataset = BubbleDataset::new();
    for i in 0..8u32 {
        dataset
            .insert_series(BubbleSeries::new(
                format!("series-{i}"),
                vec![BubbleValue::Scalar(f64::from((i + 1) * 100))],
            ))
            .expect("valid generated series");
    }
    dataset
}

fn candidate_points(count: usize) -> Vec<BubblePoint> {
    (0..count)
        .map(|i| {
            let z = (i % 800 + 1) as f64;
            BubblePoint::new(format!("series-{}", i % 8), BubbleValue::Scalar(z))
        })
        .collect()
}

fn bench_radius_map(c: &mut Criterion) {
    let dataset = eight_series_dataset();
    let options = BubbleRadiusOptions::new(5.0, 50.0);
    let point = BubblePoint::new("series-3", BubbleValue::Scalar(431.5));

    c.bench_function("radius_map", |b| {
        b.iter(|| bubble_radius(black_box(&point), black_box(&dataset), black_box(&options)))
    });
}

fn bench_radius_sweep_1k(c: &mut Criterion) {
    let dataset = eight_series_dataset();
    let options = BubbleRadiusOptions::new(5.0, 50.0);
    let points = candidate_points(1_000);

    c.bench_function("radius_sweep_1k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for point in black_box(&points) {
                acc += bubble_radius(point, &dataset, &options);
            }
            acc
        })
    });
}

fn bench_hit_test_10k(c: &mut Criterion) {
    let dataset = eight_series_dataset();
    let options = BubbleRadiusOptions::new(2.0, 6.0);
    let candidates = candidate_points(10_000);
    let pointer = PixelPoint::new(100.0, 50.0);

    c.bench_function("hit_test_10k", |b| {
        b.iter(|| {
            find_closest(
                black_box(&candidates),
                black_box(pointer),
                black_box(&dataset),
                black_box(&options),
                HitSelection::LastMatch,
                &GridHost,
            )
        })
    });
}

criterion_group!(
    benches,
    bench_radius_map,
    bench_radius_sweep_1k,
    bench_hit_test_10k
);
criterion_main!(benches);
