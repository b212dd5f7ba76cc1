use criterion::{black_box, criterion_group, criterion_main, Criterion};
use set_game::{find_sets, is_matching_set, Board, Card, GameState};

fn bench_is_matching_set(c: &mut Criterion) {
    let cards: Vec<Card> = Card::all().collect();

    c.bench_function("is_matching_set/all_pairs_with_next", |b| {
        b.iter(|| {
            let mut count = 0;
            for i in 0..cards.len() {
                for j in i + 1..cards.len() {
                    let k = (j + 1) % cards.len();
                    if is_matching_set(&cards[i], &cards[j], &cards[k]) {
                        count += 1;
                    }
                }
            }
            black_box(count)
        })
    });
}

fn bench_find_sets(c: &mut Criterion) {
    let game = GameState::new(42);
    c.bench_function("find_sets/board_12", |b| {
        b.iter(|| black_box(find_sets(black_box(game.board()))))
    });

    let mut full = Board::new(24);
    for card in Card::all().step_by(3).take(24) {
        full.place(card);
    }
    c.bench_function("find_sets/board_24", |b| {
        b.iter(|| black_box(find_sets(black_box(&full))))
    });
}

criterion_group!(benches, bench_is_matching_set, bench_find_sets);
criterion_main!(benches);
