use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mudvolcano_atlas::dataset::{gas_seeps, mud_volcanoes};
use mudvolcano_atlas::render::{build_scene, MapConfig};
use mudvolcano_atlas::utils::parse_coordinate_pair;

fn bench_coordinate_parsing(c: &mut Criterion) {
    let coordinate_texts: Vec<String> = mud_volcanoes()
        .into_iter()
        .map(|v| v.coordinate_text)
        .chain(gas_seeps().into_iter().map(|s| s.coordinate_text))
        .collect();

    c.bench_function("parse_full_dataset", |b| {
        b.iter(|| {
            for text in &coordinate_texts {
                let _ = black_box(parse_coordinate_pair(black_box(text)));
            }
        })
    });
}

fn bench_scene_build(c: &mut Criterion) {
    let volcanoes = mud_volcanoes();
    let seeps = gas_seeps();

    c.bench_function("build_scene", |b| {
        b.iter(|| {
            black_box(build_scene(
                MapConfig::default(),
                black_box(&volcanoes),
                black_box(&seeps),
            ))
        })
    });
}

criterion_group!(benches, bench_coordinate_parsing, bench_scene_build);
criterion_main!(benches);
