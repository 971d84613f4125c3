use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tile_sim::core::{sweep, Grid};
use tile_sim::engine::{AosEngine, CursorEngine, Simulation, SoaEngine};
use tile_sim::term::Surface;
use tile_sim::types::{SCREEN_HEIGHT, SCREEN_WIDTH};

fn screen() -> Surface {
    Surface::new(SCREEN_WIDTH as u16, SCREEN_HEIGHT as u16)
}

fn bench_frame<S: Simulation>(c: &mut Criterion, mut engine: S) {
    let mut surface = screen();
    c.bench_function(&format!("frame_{}", S::NAME), |b| {
        b.iter(|| {
            engine.frame(black_box(&mut surface));
        })
    });
}

fn bench_frames(c: &mut Criterion) {
    let surface = screen();
    bench_frame(c, SoaEngine::new(&surface).unwrap());
    bench_frame(c, CursorEngine::new(&surface).unwrap());
    bench_frame(c, AosEngine::new(&surface).unwrap());
}

fn bench_sweep_row_pointers(c: &mut Criterion) {
    let mut grid = Grid::new();
    c.bench_function("sweep_row_pointers", |b| {
        b.iter(|| sweep(&mut grid.row_pointers(), black_box(1)))
    });
}

fn bench_sweep_row_offsets(c: &mut Criterion) {
    let mut grid = Grid::new();
    c.bench_function("sweep_row_offsets", |b| {
        b.iter(|| sweep(&mut grid.row_offsets(), black_box(1)))
    });
}

fn bench_sweep_cached_index(c: &mut Criterion) {
    let mut grid = Grid::new();
    c.bench_function("sweep_cached_index", |b| {
        b.iter(|| sweep(&mut grid.cached_index(), black_box(1)))
    });
}

criterion_group!(
    benches,
    bench_frames,
    bench_sweep_row_pointers,
    bench_sweep_row_offsets,
    bench_sweep_cached_index
);
criterion_main!(benches);
