//! `ai` の性能計測（強さごとの1手選択）。

use core::hint::black_box;
use criterion::BenchmarkId;
use criterion::Criterion;
use othello_core::ai::types::Ai;
use othello_core::{ai, engine};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 指定手数だけ進めた局面を返す（途中で終局した場合はその時点で止める）。
fn board_after_plies(plies: u16) -> engine::Board {
    let mut black = ai::Player::with_seed(ai::Difficulty::Easy, engine::Color::Black, 0);
    let mut white = ai::Player::with_seed(ai::Difficulty::Easy, engine::Color::White, 1);
    let mut session = engine::Session::new();

    for _turn in u16::MIN..plies {
        let board = *session.board();
        let mv = match session.side_to_move() {
            engine::Color::Black => black.select_move(&board),
            engine::Color::White => white.select_move(&board),
            _ => engine::Move::Pass,
        };

        match session.play(mv) {
            Ok(engine::GameStatus::InProgress) => {}
            Ok(_) | Err(_) => break,
        }
    }

    *session.board()
}

/// ベンチ用に代表局面をいくつか用意する。
fn board_samples() -> [engine::Board; 3] {
    [
        engine::Board::initial(),
        board_after_plies(8),
        board_after_plies(24),
    ]
}

/// `Player::select_move` を強さごとに計測する。
fn bench_select_move(criterion: &mut Criterion) {
    let samples = board_samples();

    for difficulty in [ai::Difficulty::Easy, ai::Difficulty::Medium, ai::Difficulty::Hard] {
        let mut group = criterion.benchmark_group(format!("ai/{difficulty}/select_move"));

        for (index, board) in samples.iter().enumerate() {
            let bench_id = BenchmarkId::new("pos", index);
            group.bench_with_input(bench_id, board, |bench, input| {
                let mut player = ai::Player::with_seed(difficulty, input.side_to_move(), 0);
                bench.iter(|| black_box(player.select_move(input)));
            });
        }

        group.finish();
    }
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_select_move(&mut criterion);
    criterion.final_summary();
}
