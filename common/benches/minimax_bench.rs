use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_common::games::tictactoe::{
    Board, GameController, Mode, Player, calculate_minimax_move,
};

fn bench_full_search_empty_board(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax_empty_board");
    group.sample_size(10);
    group.bench_function("x_to_move", |b| {
        let board = Board::new();
        b.iter(|| calculate_minimax_move(black_box(&board), Player::X));
    });
    group.finish();
}

fn bench_center_opening_reply(c: &mut Criterion) {
    c.bench_function("minimax_center_opening_reply", |b| {
        let mut board = Board::new();
        board.place(4, Player::X).unwrap();
        b.iter(|| calculate_minimax_move(black_box(&board), Player::O));
    });
}

fn bench_ai_game_against_first_free_cell(c: &mut Criterion) {
    c.bench_function("ai_game_against_first_free_cell", |b| {
        b.iter(|| {
            let mut controller = GameController::new(Mode::HumanVsAI);
            controller.start();
            while let Some(Player::X) = controller.current_player() {
                let board = controller.board();
                let Some(&index) = board.available_moves().first() else {
                    break;
                };
                controller.apply_move(index, Player::X).unwrap();
                if controller.needs_ai_move() {
                    controller.request_ai_move().unwrap();
                }
            }
            controller.status()
        });
    });
}

criterion_group!(
    benches,
    bench_full_search_empty_board,
    bench_center_opening_reply,
    bench_ai_game_against_first_free_cell
);
criterion_main!(benches);
