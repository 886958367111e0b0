//! Benchmarks for the backtracking solver.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use numplace_core::DigitGrid;
use numplace_solver::BacktrackSolver;

const PUZZLE: &str = "\
    003020600\
    900305001\
    001806400\
    008102900\
    700000008\
    006708200\
    002609500\
    800203009\
    005010300";

fn bench_solve_empty_grid(c: &mut Criterion) {
    let solver = BacktrackSolver::new();
    c.bench_function("solve empty grid", |b| {
        b.iter(|| {
            let mut grid = DigitGrid::new();
            let solved = solver.solve(black_box(&mut grid));
            assert!(solved);
            grid
        });
    });
}

fn bench_solve_puzzle(c: &mut Criterion) {
    let solver = BacktrackSolver::new();
    let puzzle: DigitGrid = PUZZLE.parse().expect("valid grid string");
    c.bench_function("solve 32-clue puzzle", |b| {
        b.iter(|| {
            let mut grid = puzzle.clone();
            let solved = solver.solve(black_box(&mut grid));
            assert!(solved);
            grid
        });
    });
}

criterion_group!(benches, bench_solve_empty_grid, bench_solve_puzzle);
criterion_main!(benches);
