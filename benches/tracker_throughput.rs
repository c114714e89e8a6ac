//! Outline and tracker throughput benchmarks
//!
//! Measures:
//! - Outline construction for pages with growing item counts
//! - Bursts of scroll events folded into a single frame
//! - One recomputation per frame for growing outlines
//!
//! Run benchmarks: `cargo bench --bench tracker_throughput`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::rc::Rc;
use vita::{ActiveSectionTracker, InMemoryViewport, Section, TrackerConfig, build_outline};
use vita_traits::ViewportEventKind;

/// Four sections sharing `items` items between them.
fn sections(items: usize) -> Vec<Section> {
    (0..4)
        .map(|s| {
            Section::new(format!("Section {}", s), true)
                .with_items((0..items / 4).map(|i| format!("Item {} {}", s, i)))
        })
        .collect()
}

fn mounted(items: usize) -> (ActiveSectionTracker<Rc<InMemoryViewport>>, Rc<InMemoryViewport>) {
    let outline = build_outline(&sections(items)).expect("valid outline");
    let viewport = Rc::new(InMemoryViewport::new());
    for (i, entry) in outline.iter_flat().enumerate() {
        viewport.insert_anchor(entry.id.as_str(), i as f32 * 200.0, 40.0);
    }
    let mut tracker = ActiveSectionTracker::new(outline, viewport.clone(), TrackerConfig::default());
    tracker.mount().expect("mount");
    (tracker, viewport)
}

fn bench_build_outline(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_outline");

    for items in [8, 64, 512] {
        let input = sections(items);
        group.throughput(Throughput::Elements(items as u64));
        group.bench_with_input(BenchmarkId::from_parameter(items), &input, |b, input| {
            b.iter(|| build_outline(black_box(input)).expect("valid outline"));
        });
    }

    group.finish();
}

fn bench_event_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_burst");
    let (mut tracker, viewport) = mounted(64);

    for burst in [1, 16, 256] {
        group.throughput(Throughput::Elements(burst as u64));
        group.bench_with_input(BenchmarkId::from_parameter(burst), &burst, |b, &burst| {
            let mut y = 0.0;
            b.iter(|| {
                for _ in 0..burst {
                    y = (y + 37.0) % 12_000.0;
                    viewport.scroll_to(y);
                    tracker.handle_event(ViewportEventKind::Scroll);
                }
                for frame in viewport.take_due_frames() {
                    tracker.on_frame(frame);
                }
                black_box(tracker.active_id().is_some())
            });
        });
    }

    group.finish();
}

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute");

    for items in [8, 64, 512] {
        let (mut tracker, viewport) = mounted(items);
        group.bench_with_input(BenchmarkId::from_parameter(items), &items, |b, _| {
            let mut y = 0.0;
            b.iter(|| {
                y = (y + 200.0) % (items as f32 * 200.0);
                viewport.scroll_to(y);
                tracker.handle_event(ViewportEventKind::Resize);
                for frame in viewport.take_due_frames() {
                    tracker.on_frame(frame);
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_outline, bench_event_burst, bench_recompute);
criterion_main!(benches);
