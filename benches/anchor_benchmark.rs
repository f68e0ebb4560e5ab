//! Anchor benchmark: Measure per-pass correction cost.
//!
//! Target: well under a microsecond per pass - this runs inside the layout
//! callback on the UI thread.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rtl_anchor::{
    FrozenPolicy, LayoutBox, LayoutDirection, ModelViewport, RtlScrollAnchor, ScrollHost,
};

struct BenchHost {
    measured: i32,
}

impl ScrollHost for BenchHost {
    fn measured_width(&self) -> i32 {
        self.measured
    }

    fn set_clip_children(&mut self, _clip: bool) {}

    fn set_culling(&mut self, _cull: bool) {}
}

fn rtl_pass(c: &mut Criterion) {
    let mut anchor = RtlScrollAnchor::new(Box::new(FrozenPolicy::new(LayoutDirection::Rtl)));
    let mut host = BenchHost { measured: 1000 };
    let mut viewport = ModelViewport::new(400);
    let b = LayoutBox::new(-1000, 0, 0, 50);

    c.bench_function("rtl_pass", |bench| {
        bench.iter(|| anchor.on_layout(black_box(true), black_box(b), &mut host, &mut viewport))
    });
}

fn ltr_pass(c: &mut Criterion) {
    let mut anchor = RtlScrollAnchor::new(Box::new(FrozenPolicy::new(LayoutDirection::Ltr)));
    let mut host = BenchHost { measured: 1000 };
    let mut viewport = ModelViewport::new(400);
    let b = LayoutBox::new(0, 0, 1000, 50);

    c.bench_function("ltr_pass", |bench| {
        bench.iter(|| anchor.on_layout(black_box(true), black_box(b), &mut host, &mut viewport))
    });
}

fn rtl_pass_with_growth(c: &mut Criterion) {
    let mut anchor = RtlScrollAnchor::new(Box::new(FrozenPolicy::new(LayoutDirection::Rtl)));
    let mut viewport = ModelViewport::new(400);
    let b = LayoutBox::new(-1000, 0, 0, 50);
    let mut width = 1000;

    c.bench_function("rtl_pass_growing", |bench| {
        bench.iter(|| {
            width += 1;
            let mut host = BenchHost { measured: width };
            anchor.on_layout(black_box(false), black_box(b), &mut host, &mut viewport)
        })
    });
}

criterion_group!(benches, rtl_pass, ltr_pass, rtl_pass_with_growth);
criterion_main!(benches);
