use criterion::{
    criterion_group,
    criterion_main,
    BenchmarkGroup,
    Criterion,
    SamplingMode
};
use criterion::measurement::WallTime;

use rand::SeedableRng;

use rand_chacha::ChaCha8Rng;

use sudoku_six::SudokuGrid;
use sudoku_six::generator::{Generator, Reducer};
use sudoku_six::puzzle::Puzzle;
use sudoku_six::solver::BacktrackingSolver;

use std::time::Duration;

// Explanation of benchmark classes:
//
// fill: Generating a full grid by randomized backtracking only.
// generate: The full pipeline including uniqueness-checked clue removal,
//           which dominates the cost through repeated solution counting.
// solve: Solving and counting solutions of reduced boards.

const MEASUREMENT_TIME_SECS: u64 = 10;
const SEED: u64 = 42;

fn config_group(group: &mut BenchmarkGroup<'_, WallTime>) {
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(MEASUREMENT_TIME_SECS));
}

fn reduced_boards(count: usize) -> Vec<SudokuGrid> {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    (0..count)
        .map(|_| {
            let mut board = Generator::new(&mut rng).generate();
            Reducer::new(&mut rng).reduce(&mut board);
            board
        })
        .collect()
}

fn benchmark_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");
    config_group(&mut group);

    let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(SEED));
    group.bench_function("full grid", |b| b.iter(|| generator.generate()));
    group.finish();
}

fn benchmark_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    config_group(&mut group);

    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    group.bench_function("unique puzzle",
        |b| b.iter(|| Puzzle::generate(&mut rng)));
    group.finish();
}

fn benchmark_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    config_group(&mut group);

    let boards = reduced_boards(100);
    let solver = BacktrackingSolver;

    group.bench_function("backtracking", |b| b.iter(|| {
        for board in boards.iter() {
            solver.solve(board);
        }
    }));
    group.bench_function("count solutions", |b| b.iter(|| {
        for board in boards.iter() {
            solver.count_solutions(board);
        }
    }));
    group.finish();
}

criterion_group!(benches, benchmark_fill, benchmark_generate,
    benchmark_solve);
criterion_main!(benches);
