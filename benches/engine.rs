use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use gridlife::{Grid, Pos2};

fn make_grid(size: i32) -> Grid {
    let mut grid = Grid::new(size, size);
    for y in 0..size {
        for x in 0..size {
            if (x + y) % 3 == 0 {
                grid.set_alive(Pos2 { x, y }, true);
            }
        }
    }
    grid
}

fn bench_advance_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_generation");
    for size in [64, 128, 256] {
        let grid = make_grid(size);

        group.bench_with_input(BenchmarkId::new("serial", size), &grid, |b, grid| {
            b.iter_batched(
                || grid.clone(),
                |mut grid| grid.advance_generation(),
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &grid, |b, grid| {
            b.iter_batched(
                || grid.clone(),
                |mut grid| grid.advance_generation_parallel(),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_advance_generation);
criterion_main!(benches);
