use criterion::{Criterion, black_box, criterion_group, criterion_main};
use scnuml::from_str;
use std::fmt::Write;

fn synthetic_scene(nodes: usize) -> String {
    let mut source = String::from("{type=transform;id=0;}{type=shader;id=1;}{type=tex2d;id=2;}");
    for i in 3..nodes {
        let _ = write!(
            source,
            "// node {i} //\n{{type=geometry;id={i};parent=0;shader=1;texture=2;}}\n"
        );
    }
    source
}

fn benchmark_extract_small_scene(c: &mut Criterion) {
    let source = synthetic_scene(50);
    c.bench_function("extract_records_50", |b| {
        b.iter(|| black_box(from_str(&source)).expect("scene parses"))
    });
}

fn benchmark_extract_large_scene(c: &mut Criterion) {
    let source = synthetic_scene(2000);
    c.bench_function("extract_records_2000", |b| {
        b.iter(|| black_box(from_str(&source)).expect("scene parses"))
    });
}

criterion_group!(
    benches,
    benchmark_extract_small_scene,
    benchmark_extract_large_scene
);
criterion_main!(benches);
