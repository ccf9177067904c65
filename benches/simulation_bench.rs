//! Batch simulation throughput benchmarks.
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use pitchsim::{simulate, PitchEvent, Vec3, DEFAULT_TIME_STEP};

/// Generate a batch of plausible pitch events with some variation.
fn generate_events(count: usize) -> Vec<PitchEvent> {
    (0..count)
        .map(|i| {
            let spread = (i % 7) as f64 * 0.1;
            PitchEvent::new(
                Vec3::new(1.0 + spread, 50.0, 6.0 - spread * 0.2),
                Vec3::new(2.0 - spread, -130.0 + spread * 4.0, -5.0),
                Vec3::new(-10.0 + spread, 25.0, -20.0 - spread),
                0.40 + spread * 0.02,
                "Four-Seam Fastball",
                i % 3 == 0,
            )
        })
        .collect()
}

fn bench_single_pitch(c: &mut Criterion) {
    let events = generate_events(1);

    let mut group = c.benchmark_group("single_pitch");
    for &dt in &[0.01, 0.001] {
        group.bench_with_input(BenchmarkId::from_parameter(dt), &dt, |b, &dt| {
            b.iter(|| simulate(&events, dt).unwrap());
        });
    }
    group.finish();
}

fn bench_batch_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_simulation");
    for &count in &[5usize, 50, 500] {
        let events = generate_events(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &events, |b, events| {
            b.iter(|| simulate(events, DEFAULT_TIME_STEP).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_pitch, bench_batch_sizes);
criterion_main!(benches);
