use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use picmatch::{
    core::{Deck, GameConfig, GameRng, Millis},
    policy::{play_out, MemoryPolicy, RandomPolicy},
    session::GameController,
    view::{AssetStatus, BoardView},
};

fn images(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("/images/{i}.png")).collect()
}

/// Benchmark dealing shuffled decks of increasing size
fn bench_deck_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("deck_shuffle");
    for pairs in [4, 16, 64] {
        let images = images(pairs);
        group.bench_with_input(BenchmarkId::from_parameter(pairs), &images, |b, images| {
            let mut rng = GameRng::new(42);
            b.iter(|| Deck::shuffled(black_box(images), &mut rng));
        });
    }
    group.finish();
}

/// Benchmark full games with the memory policy
fn bench_memory_playout(c: &mut Criterion) {
    let mut group = c.benchmark_group("memory_playout");
    for pairs in [4, 16, 64] {
        let config = GameConfig::new(images(pairs)).with_seed(7);
        group.bench_with_input(BenchmarkId::from_parameter(pairs), &config, |b, config| {
            b.iter(|| {
                let mut game = GameController::immediate(config.clone()).unwrap();
                play_out(&mut game, &mut MemoryPolicy::new(), 0, 100_000)
            });
        });
    }
    group.finish();
}

/// Benchmark a full random game with real delays
fn bench_random_playout_delayed(c: &mut Criterion) {
    let config = GameConfig::default().with_seed(3);
    c.bench_function("random_playout_delayed", |b| {
        b.iter(|| {
            let mut game = GameController::new(config.clone()).unwrap();
            play_out(&mut game, &mut RandomPolicy, 100, 100_000)
        });
    });
}

/// Benchmark rendering the board mid-game
fn bench_board_view(c: &mut Criterion) {
    let mut game = GameController::new(GameConfig::new(images(16)).with_seed(1)).unwrap();
    game.handle_card_click(0, Millis::ZERO);
    let assets = AssetStatus::new();

    c.bench_function("board_view", |b| {
        b.iter(|| BoardView::from_session(black_box(game.session()), &assets));
    });
}

criterion_group!(dealing, bench_deck_shuffle);

criterion_group!(
    playing,
    bench_memory_playout,
    bench_random_playout_delayed,
    bench_board_view,
);

criterion_main!(dealing, playing);
