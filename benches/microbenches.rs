//! Criterion microbenches for yoloexport label construction.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks measure:
//! - class index construction over a corpus
//! - label line construction and rendering for one file

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

use yoloexport::export::{
    build_label_lines, render_label_text, ClassIndex, ExportReport, PolygonMode,
};
use yoloexport::ir::{Annotation, AnnotationFile, BoundingBox, Point};

const CLASSES: [&str; 5] = ["bus", "car", "person", "road", "truck"];

fn synthetic_corpus(files: usize, annotations_per_file: usize) -> Vec<AnnotationFile> {
    (0..files)
        .map(|f| {
            let mut file = AnnotationFile::new(format!("frame_{f:05}.jpg")).with_image_size(1920, 1080);
            for a in 0..annotations_per_file {
                let name = CLASSES[(f + a) % CLASSES.len()];
                let x = (a * 37 % 1800) as f64;
                let y = (a * 53 % 1000) as f64;
                let ann = if a % 3 == 0 {
                    Annotation::polygon(
                        name,
                        Some(BoundingBox::from_xywh(x, y, 80.0, 60.0)),
                        vec![
                            Point::new(x, y),
                            Point::new(x + 80.0, y),
                            Point::new(x + 40.0, y + 60.0),
                        ],
                    )
                } else {
                    Annotation::bounding_box(name, x, y, 120.0, 90.0)
                };
                file = file.with_annotation(ann);
            }
            file
        })
        .collect()
}

/// Benchmark class index construction.
fn bench_class_index(c: &mut Criterion) {
    let corpus = synthetic_corpus(200, 50);

    let mut group = c.benchmark_group("class_index");
    group.throughput(Throughput::Elements((200 * 50) as u64));

    group.bench_function("build", |b| {
        b.iter(|| black_box(ClassIndex::build(black_box(&corpus))))
    });

    group.finish();
}

/// Benchmark label text construction for a single file, in both polygon modes.
fn bench_label_text(c: &mut Criterion) {
    let corpus = synthetic_corpus(1, 500);
    let index = ClassIndex::build(&corpus);

    let mut group = c.benchmark_group("label_text");
    group.throughput(Throughput::Elements(500));

    for (label, mode) in [
        ("bbox", PolygonMode::BoundingBox),
        ("vertices", PolygonMode::Vertices),
    ] {
        group.bench_function(label, |b| {
            b.iter(|| {
                let mut report = ExportReport::new();
                let lines = build_label_lines(black_box(&corpus[0]), &index, mode, &mut report);
                black_box(render_label_text(&lines))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_class_index, bench_label_text);
criterion_main!(benches);
