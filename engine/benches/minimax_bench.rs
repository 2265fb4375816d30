use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::time::Duration;

use engine::game::{Cell, Grid, Outcome, Player, Position, compute_outcome, search};

fn bench_search_empty_grid() {
    let mut grid = Grid::empty();
    search(&mut grid, Player::X);
}

fn bench_search_mid_game() {
    let mut grid = Grid::empty();
    grid.set(Position::new(1, 1), Cell::X);
    grid.set(Position::new(0, 0), Cell::O);
    grid.set(Position::new(2, 2), Cell::X);

    search(&mut grid, Player::O);
}

fn bench_full_playout() {
    let mut grid = Grid::empty();
    let mut player = Player::X;

    while compute_outcome(&grid) == Outcome::Unresolved {
        let (_, position) = search(&mut grid, player);
        grid.set(position, player.mark());
        player = player.opponent();
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(20));

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_search_empty_grid)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_search_mid_game)
    });

    group.bench_function("full_playout", |b| {
        b.iter(bench_full_playout)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
