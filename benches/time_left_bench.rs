// Benchmark for the time-remaining calculation
// Measures the per-tick cost of decomposing a delta into d/h/m/s

use chrono::{Duration, Local, TimeZone};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_countdown::services::countdown::calculate_time_left;

fn bench_calculate_time_left(c: &mut Criterion) {
    let now = Local.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
    let mut group = c.benchmark_group("calculate_time_left");

    for delta_ms in [500i64, 90_061_000, 31_536_000_000].iter() {
        let target = now + Duration::milliseconds(*delta_ms);
        group.bench_with_input(
            BenchmarkId::from_parameter(delta_ms),
            &target,
            |b, &target| {
                b.iter(|| calculate_time_left(black_box(target), black_box(now)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_calculate_time_left);
criterion_main!(benches);
