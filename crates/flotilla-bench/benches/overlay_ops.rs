//! Criterion micro-benchmarks for overlay emission.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flotilla_bench::{armada_profile, wing_profile};
use flotilla_draw::{draw_grid, DrawCommand, DrawSink, DrawStyle, RecordingSink};

/// A sink that counts instead of storing, to measure emission without the
/// allocation cost of recording.
struct CountingSink(usize);

impl DrawSink for CountingSink {
    fn submit(&mut self, command: DrawCommand) {
        black_box(&command);
        self.0 += 1;
    }
}

fn bench_overlay(c: &mut Criterion) {
    let style = DrawStyle::default();

    c.bench_function("overlay_wing_32", |b| {
        b.iter(|| {
            let mut sink = CountingSink(0);
            draw_grid(&wing_profile(), &style, &mut sink);
            sink.0
        })
    });

    c.bench_function("overlay_armada_4096", |b| {
        b.iter(|| {
            let mut sink = CountingSink(0);
            draw_grid(&armada_profile(), &style, &mut sink);
            sink.0
        })
    });

    c.bench_function("overlay_wing_32_recorded", |b| {
        b.iter(|| {
            let mut sink = RecordingSink::new();
            draw_grid(&wing_profile(), &style, &mut sink);
            sink
        })
    });
}

criterion_group!(benches, bench_overlay);
criterion_main!(benches);
