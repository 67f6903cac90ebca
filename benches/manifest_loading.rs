// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for manifest loading and collection navigation.
//!
//! Measures the performance of:
//! - Parsing picture manifests of increasing size
//! - Cursor navigation over a loaded collection (next/previous/home)
//! - Metadata payload construction for the current entry

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lantern::domain::media::MediaKind;
use lantern::domain::metadata::MetadataPayload;
use lantern::manifest::parse_manifest;
use std::fmt::Write as _;
use std::hint::black_box;
use std::path::Path;

/// Builds a picture manifest with `entries` fully populated entries.
fn picture_manifest(entries: usize) -> String {
    let mut xml = String::from("<collection>\n  <title>Benchmark roll</title>\n");
    for i in 0..entries {
        let _ = write!(
            xml,
            "  <picture>\n    <image>scans/{i:05}.jpg</image>\n    <caption>Frame {i}</caption>\n    \
             <date>July 1987</date>\n    <location>Brest</location>\n    <asa>400</asa>\n    \
             <roll_num>{}</roll_num>\n    <roll_max>36</roll_max>\n  </picture>\n",
            i % 36 + 1
        );
    }
    xml.push_str("</collection>\n");
    xml
}

/// Benchmark manifest parsing.
///
/// Measures XML parsing and record construction, without file I/O.
fn bench_parse_manifest(c: &mut Criterion) {
    let mut group = c.benchmark_group("manifest_loading");
    let base_dir = Path::new("/photos");

    for entries in [10, 100, 1000] {
        let xml = picture_manifest(entries);
        group.bench_with_input(BenchmarkId::new("parse", entries), &xml, |b, xml| {
            b.iter(|| {
                let manifest = parse_manifest(black_box(xml), base_dir, MediaKind::Image)
                    .expect("benchmark manifest parses");
                black_box(manifest);
            });
        });
    }

    group.finish();
}

/// Benchmark navigation operations.
///
/// Measures pure cursor movement and payload building, without image loading.
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection_navigation");

    let manifest = parse_manifest(&picture_manifest(1000), Path::new("/photos"), MediaKind::Image)
        .expect("benchmark manifest parses");
    let collection = manifest.into_collection(MediaKind::Image);

    group.bench_function("next_full_cycle", |b| {
        b.iter(|| {
            let mut nav = collection.clone();
            for _ in 0..nav.len() {
                nav.next();
            }
            black_box(nav.position());
        });
    });

    group.bench_function("previous_full_cycle", |b| {
        b.iter(|| {
            let mut nav = collection.clone();
            for _ in 0..nav.len() {
                nav.previous();
            }
            black_box(nav.position());
        });
    });

    group.bench_function("metadata_for_current", |b| {
        let mut nav = collection.clone();
        b.iter(|| {
            nav.next();
            let payload = nav.current().map(MetadataPayload::for_record);
            black_box(payload);
        });
    });

    group.bench_function("home", |b| {
        let mut nav = collection.clone();
        b.iter(|| {
            nav.next();
            nav.home();
            black_box(nav.position());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse_manifest, bench_navigate);
criterion_main!(benches);
