//! Benchmark: measure tick() cost under various grid conditions.
//!
//! Target: a single tick on a 256×256 grid should stay well under 4 ms so
//! two passes per frame leave room for rendering at 60 Hz.
//!
//! Falling benchmarks use `iter_batched` to re-seed the grid before every
//! iteration so we measure *active* simulation, not a settled grid.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use sandfall::cell::Material;
use sandfall::{BrushShape, Grid, Spawner, Universe};

/// Empty grid: baseline cost of scanning 65K cells with nothing to do.
fn bench_tick_empty(c: &mut Criterion) {
    c.bench_function("tick_empty_256x256", |b| {
        let mut grid = Grid::with_seed(256, 256, 0).unwrap();
        b.iter(|| {
            black_box(grid.tick());
        });
    });
}

/// Sand falling: top 20% filled, every grain actively moving.
fn bench_tick_sand_falling(c: &mut Criterion) {
    c.bench_function("tick_sand_falling_256x256", |b| {
        b.iter_batched(
            || {
                let mut grid = Grid::with_seed(256, 256, 1).unwrap();
                for y in 0..51 {
                    for x in 0..256 {
                        grid.place(x, y, Material::Sand);
                    }
                }
                grid
            },
            |mut grid| {
                black_box(grid.tick());
            },
            BatchSize::SmallInput,
        );
    });
}

/// Settled pile on cobble: every grain is checked but nothing moves.
fn bench_tick_settled(c: &mut Criterion) {
    c.bench_function("tick_settled_256x256", |b| {
        let mut grid = Grid::with_seed(256, 256, 2).unwrap();
        for x in 0..256 {
            grid.place(x, 255, Material::Cobble);
        }
        for y in 128..255 {
            for x in 0..256 {
                grid.place(x, y, Material::Sand);
            }
        }
        b.iter(|| {
            black_box(grid.tick());
        });
    });
}

/// Disc brush at radius 8 on an empty grid.
fn bench_spawn_disc(c: &mut Criterion) {
    c.bench_function("spawn_disc_r8", |b| {
        b.iter_batched(
            || {
                (
                    Grid::with_seed(256, 256, 3).unwrap(),
                    Spawner::with_seed(8, BrushShape::Disc, 3),
                )
            },
            |(mut grid, mut spawner)| {
                black_box(spawner.spawn(&mut grid, 128, 128, Material::Cobble));
            },
            BatchSize::SmallInput,
        );
    });
}

/// Full Universe::frame() (two passes) with a held brush, what the browser calls.
fn bench_universe_frame(c: &mut Criterion) {
    c.bench_function("universe_frame_256x256", |b| {
        b.iter_batched(
            || {
                let mut universe = Universe::new(1024, 1024, 4).unwrap();
                for y in 0..128 {
                    for x in (0..256).step_by(2) {
                        universe.set_cell(x, y, Material::Sand as u8);
                    }
                }
                universe.pointer_down(512.0, 40.0, 0.0, 0.0);
                universe
            },
            |mut universe| {
                universe.hold();
                black_box(universe.frame());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_tick_empty,
    bench_tick_sand_falling,
    bench_tick_settled,
    bench_spawn_disc,
    bench_universe_frame,
);
criterion_main!(benches);
