use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use lifeboard::{Board, BorderPolicy, Pos2};

fn make_board(size: usize, policy: BorderPolicy) -> Board {
    let mut board = Board::new(size, policy).expect("valid board");
    let alive = board
        .simulated_positions()
        .filter(|pos| (pos.x + pos.y) % 3 == 0)
        .collect::<Vec<_>>();
    board.place(&alive, Pos2::zero()).expect("pattern fits");
    board
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    for size in [40, 128, 256] {
        for policy in [BorderPolicy::Bordered, BorderPolicy::Clamped] {
            let board = make_board(size, policy);
            let id = format!("{policy}/{size}");

            group.bench_with_input(BenchmarkId::new("serial", &id), &board, |b, board| {
                b.iter_batched(
                    || board.clone(),
                    |mut board| board.step(),
                    BatchSize::LargeInput,
                );
            });

            group.bench_with_input(BenchmarkId::new("parallel", &id), &board, |b, board| {
                b.iter_batched(
                    || board.clone(),
                    |mut board| board.step_parallel(),
                    BatchSize::LargeInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
