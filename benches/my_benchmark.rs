extern crate walkbox_pathfinding;
use env_logger::Env;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use nanorand::{Rng, WyRand};
use walkbox_pathfinding::prelude::*;

/// A long Corridor made of `segments` Walkboxes that alternate between an upper and a lower
/// lane, overlapping their neighbours at the ends.
fn corridor(segments: i32, config: PathfindingConfig) -> PathfindingContext {
    let mut room = PathfindingContext::with_config(config);
    for i in 0..segments {
        let x = i * 60;
        let y = (i % 2) * 40;
        room.add_walkbox(Walkbox::new((x, y), (x + 80, y + 50)).unwrap())
            .unwrap();
    }
    room.recalculate();
    room
}

/// A Room cluttered with random, mostly overlapping Walkboxes
fn random_room(count: usize) -> PathfindingContext {
    let mut rng = WyRand::new_seed(4);
    let mut room = PathfindingContext::new();
    for _ in 0..count {
        let x = rng.generate_range(0u32..600) as i32;
        let y = rng.generate_range(0u32..400) as i32;
        let w = rng.generate_range(20u32..120) as i32;
        let h = rng.generate_range(20u32..120) as i32;
        room.add_walkbox(Walkbox::new((x, y), (x + w, y + h)).unwrap())
            .unwrap();
    }
    room.recalculate();
    room
}

#[allow(unused)]
// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "debug") // Change this from debug to trace to see every Portal and shortcut.
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_recalculate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Recalculate");
    // init();

    for segments in [8, 32, 64] {
        let mut room = corridor(segments, PathfindingConfig::default());
        group.bench_with_input(
            BenchmarkId::new("Corridor", segments),
            &segments,
            |b, _| b.iter(|| room.recalculate()),
        );
    }

    let mut room = random_room(40);
    group.bench_function("Random Room, 40 Walkboxes", |b| {
        b.iter(|| room.recalculate())
    });
}

fn bench_find_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("Find Path");
    // init();

    for segments in [8, 32, 64] {
        // the middle of the last segment
        let goal = ((segments - 1) * 60 + 40, (segments - 1) % 2 * 40 + 25);

        let room = corridor(segments, PathfindingConfig::default());
        group.bench_with_input(
            BenchmarkId::new("Corridor", segments),
            &goal,
            |b, &goal| b.iter(|| room.find_path((10, 10), goal)),
        );

        let room = corridor(segments, PathfindingConfig::COARSE);
        group.bench_with_input(
            BenchmarkId::new("Corridor, Corners only", segments),
            &goal,
            |b, &goal| b.iter(|| room.find_path((10, 10), goal)),
        );

        let room = corridor(
            segments,
            PathfindingConfig {
                smooth_paths: false,
                ..Default::default()
            },
        );
        group.bench_with_input(
            BenchmarkId::new("Corridor, unsmoothed", segments),
            &goal,
            |b, &goal| b.iter(|| room.find_path((10, 10), goal)),
        );
    }

    let room = random_room(40);
    let mut rng = WyRand::new_seed(42);
    let queries: Vec<(Point, Point)> = (0..64)
        .map(|_| {
            let mut point = || {
                (
                    rng.generate_range(0u32..700) as i32,
                    rng.generate_range(0u32..500) as i32,
                )
            };
            (point(), point())
        })
        .collect();
    group.bench_function("Random Room, 64 Queries", |b| {
        b.iter(|| {
            queries
                .iter()
                .map(|&(from, to)| room.find_path(from, to).len())
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, bench_recalculate, bench_find_path);
criterion_main!(benches);
