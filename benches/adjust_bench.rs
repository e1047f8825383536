use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bowditch::leg::parse_legs;
use bowditch::{adjust, adjust_traverse, AdjustOptions, BearingInput, RawLeg};

/// Near-regular polygon with a small deliberate blunder on every seventh leg.
fn make_traverse(n: usize) -> Vec<RawLeg> {
    (0..n)
        .map(|i| {
            let bearing = i as f64 * 360.0 / n as f64;
            let blunder = if i % 7 == 0 { 0.05 } else { 0.0 };
            RawLeg::new(100.0 + (i % 5) as f64, bearing + blunder)
        })
        .collect()
}

fn bench_adjust(c: &mut Criterion) {
    let sizes = [4, 64, 1024, 16384];
    for &size in &sizes {
        let raw = make_traverse(size);
        let legs = parse_legs(&raw, BearingInput::AsGiven).unwrap();

        c.bench_function(&format!("adjust_{size}_legs"), |b| {
            b.iter(|| black_box(adjust(legs.clone()).unwrap()));
        });
    }
}

fn bench_adjust_traverse(c: &mut Criterion) {
    let sizes = [4, 64, 1024, 16384];
    let options = AdjustOptions::default();
    for &size in &sizes {
        let raw = make_traverse(size);

        c.bench_function(&format!("adjust_traverse_{size}_legs"), |b| {
            b.iter(|| black_box(adjust_traverse(&raw, &options).unwrap()));
        });
    }
}

fn bench_display(c: &mut Criterion) {
    let options = AdjustOptions::default();
    let report = adjust_traverse(&make_traverse(1024), &options).unwrap();

    c.bench_function("display_1024_legs", |b| {
        b.iter(|| black_box(report.display(&options)));
    });
}

criterion_group!(benches, bench_adjust, bench_adjust_traverse, bench_display);
criterion_main!(benches);
