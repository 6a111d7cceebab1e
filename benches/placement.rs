use callout_layout::config::{BoundsMode, LayoutConfig, SceneConfig};
use callout_layout::ir::{Region, Scene};
use callout_layout::layout::{candidates_for_region, compute_layout, place_labels};
use callout_layout::parser::parse_scene;
use callout_layout::render::render_svg;
use callout_layout::theme::Theme;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Evenly spaced regions, close enough that probe candidates interfere with
/// the neighboring ellipses but with every top slide run left open.
fn grid_scene(side: usize) -> Scene {
    let mut scene = Scene::new(260.0 * side as f32, 200.0 * side as f32);
    for row in 0..side {
        for col in 0..side {
            let cx = 130.0 + 260.0 * col as f32;
            let cy = 100.0 + 200.0 * row as f32;
            scene.push_region(Region::new(cx, cy, 60.0, 45.0, 110.0, 36.0));
        }
    }
    scene
}

fn fixture(name: &str) -> &'static str {
    match name {
        "scatter" => include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/benches/fixtures/scatter.json5"
        )),
        "mask_medium" => include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/benches/fixtures/mask_medium.svg"
        )),
        _ => panic!("unknown fixture"),
    }
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let scene_config = SceneConfig::default();
    for name in ["scatter", "mask_medium"] {
        let input = fixture(name);
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, data| {
            b.iter(|| {
                let scene = parse_scene(black_box(data), &scene_config).expect("parse failed");
                black_box(scene.regions.len());
            });
        });
    }
    group.finish();
}

fn bench_candidates(c: &mut Criterion) {
    let mut group = c.benchmark_group("candidates");
    for side in [2usize, 3, 4] {
        let scene = grid_scene(side);
        let name = format!("grid_{}", scene.regions.len());
        group.bench_with_input(BenchmarkId::from_parameter(name), &scene, |b, scene| {
            b.iter(|| {
                for index in 0..scene.regions.len() {
                    let candidates = candidates_for_region(
                        black_box(&scene.regions),
                        index,
                        scene.width,
                        scene.height,
                        BoundsMode::Strict,
                    );
                    black_box(candidates.len());
                }
            });
        });
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for side in [2usize, 3, 4] {
        let scene = grid_scene(side);
        let name = format!("grid_{}", scene.regions.len());
        group.bench_with_input(BenchmarkId::from_parameter(name), &scene, |b, scene| {
            b.iter(|| {
                let placement =
                    place_labels(black_box(&scene.regions), scene.width, scene.height)
                        .expect("layout failed");
                black_box(placement.labels().len());
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_svg");
    let theme = Theme::classic();
    let config = LayoutConfig::default();
    for side in [2usize, 3, 4] {
        let scene = grid_scene(side);
        let placement = compute_layout(&scene, &config).expect("layout failed");
        let name = format!("grid_{}", scene.regions.len());
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(scene, placement),
            |b, (scene, placement)| {
                b.iter(|| {
                    let svg = render_svg(black_box(scene), placement, &theme);
                    black_box(svg.len());
                });
            },
        );
    }
    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_to_end");
    let theme = Theme::classic();
    let layout_config = LayoutConfig::default();
    let scene_config = SceneConfig::default();
    for name in ["scatter", "mask_medium"] {
        let input = fixture(name);
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, data| {
            b.iter(|| {
                let scene = parse_scene(black_box(data), &scene_config).expect("parse failed");
                let placement = compute_layout(&scene, &layout_config).expect("layout failed");
                let svg = render_svg(&scene, &placement, &theme);
                black_box(svg.len());
            });
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_parse, bench_candidates, bench_layout, bench_render, bench_end_to_end
);
criterion_main!(benches);
