use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tracks_engine::playout::random_board;
use tracks_engine::protocol::notation::parse_board;
use tracks_engine::score;

/// A dense mid-game position: road column joining two exits, a lake
/// block, a rail run, and a forest corner.
const DENSE_BOARD: &str = "20r-r-:4010,21r-r-:4010,22r-r-:4010,23r-r-:4010,24r-r-:4010,25r-r-:4010,26r-r-:4010,27r-r-:4010,28r-r-:4010,44llll,45llll,54llll,55llll,36tttt,46tttt,56tttt,66ffff,67ffff";

fn bench_get(c: &mut Criterion) {
    let board = parse_board(DENSE_BOARD).unwrap();
    c.bench_function("score_dense_board", |b| {
        b.iter(|| score::get(black_box(&board)))
    });
}

fn bench_get_parallel(c: &mut Criterion) {
    let board = parse_board(DENSE_BOARD).unwrap();
    c.bench_function("score_dense_board_parallel", |b| {
        b.iter(|| score::get_parallel(black_box(&board)))
    });
}

fn bench_sum(c: &mut Criterion) {
    let board = parse_board(DENSE_BOARD).unwrap();
    let scored = score::get(&board);
    c.bench_function("sum_scored_record", |b| {
        b.iter(|| score::sum(black_box(&scored)))
    });
}

fn bench_full_board(c: &mut Criterion) {
    // A saturated random board is the worst case for the path search.
    let board = random_board(7, 200);
    c.bench_function("score_saturated_board", |b| {
        b.iter(|| score::get(black_box(&board)))
    });
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_dense_notation", |b| {
        b.iter(|| parse_board(black_box(DENSE_BOARD)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_get,
    bench_get_parallel,
    bench_sum,
    bench_full_board,
    bench_parse
);
criterion_main!(benches);
