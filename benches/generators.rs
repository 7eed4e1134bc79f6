use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use mazes::{
    generators::{self, FirstChoice, RandomChooser},
    state::MazeState,
    units::{ColumnsCount, RowsCount},
};

fn fresh_state_32() -> MazeState {
    MazeState::new(RowsCount(32), ColumnsCount(32)).unwrap()
}

fn bench_recursive_backtracker_maze_32(c: &mut Criterion) {
    c.bench_function("recursive_backtracker_maze_32", |b| {
        b.iter_batched(|| (fresh_state_32(), RandomChooser::from_seed(7)),
                       |(mut state, mut chooser)| generators::recursive_backtracker(&mut state, &mut chooser),
                       BatchSize::SmallInput)
    });
}

fn bench_recursive_backtracker_first_choice_maze_32(c: &mut Criterion) {
    c.bench_function("recursive_backtracker_first_choice_maze_32", |b| {
        b.iter_batched(fresh_state_32,
                       |mut state| generators::recursive_backtracker(&mut state, &mut FirstChoice),
                       BatchSize::SmallInput)
    });
}

fn bench_single_step_32(c: &mut Criterion) {
    let mut state = fresh_state_32();
    let mut chooser = RandomChooser::from_seed(7);
    c.bench_function("single_step_32", move |b| {
        b.iter(|| {
            if state.is_complete() {
                state = fresh_state_32();
            }
            generators::step(&mut state, &mut chooser)
        })
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_maze_32,
    bench_recursive_backtracker_first_choice_maze_32,
    bench_single_step_32
);
criterion_main!(benches);
