use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slither_core::*;

const ARENA: &str = "B12x40|W40|W1G38W1|W1G1E36G1W1|W1G1E36G1W1|W1G1E4S1E31G1W1|W1G1E36G1W1|W1G1E36G1W1|\
W1G1E36G1W1|W1G1E36G1W1|W1G1E36G1W1|W1G38W1|W40";

fn decompress(c: &mut Criterion) {
    c.bench_function("decompress 40x12", |b| {
        b.iter(|| CompressedBoard(black_box(ARENA)).build().unwrap())
    });
}

fn tick_lap(c: &mut Criterion) {
    let inputs = [Input::Right, Input::Down, Input::Left, Input::Up];

    c.bench_function("tick lap on default board", |b| {
        b.iter(|| {
            let mut source = SeededIndexSource::new(1);
            let board = DefaultBoard.build().unwrap();
            let mut game = GameState::new(board, Rules::default(), &mut source).unwrap();
            for input in inputs {
                for _ in 0..5 {
                    black_box(game.tick(input, &mut source));
                }
            }
            game
        })
    });
}

criterion_group!(benches, decompress, tick_lap);
criterion_main!(benches);
