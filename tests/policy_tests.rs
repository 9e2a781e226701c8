//! Automated play integration tests.

use picmatch::core::{GameConfig, Millis};
use picmatch::policy::{play_out, policy_by_name, ClickPolicy, MemoryPolicy, RandomPolicy};
use picmatch::session::GameController;

fn images(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("/images/{i}.png")).collect()
}

// =============================================================================
// Play-Out Tests
// =============================================================================

#[test]
fn test_random_policy_eventually_wins() {
    let config = GameConfig::new(images(6)).with_seed(42);
    let mut game = GameController::new(config).unwrap();
    let stats = play_out(&mut game, &mut RandomPolicy, 250, 100_000);

    assert!(stats.won, "random play should finish a 6-pair game");
    assert_eq!(stats.matches, 6);
    assert!(stats.moves >= 12);
    assert_eq!(stats.moves % 2, 0);
}

/// Perfect recall never needs more than two clicks per card.
#[test]
fn test_memory_policy_is_bounded() {
    for seed in 0..20 {
        let config = GameConfig::new(images(8)).with_seed(seed);
        let mut game = GameController::immediate(config).unwrap();
        let stats = play_out(&mut game, &mut MemoryPolicy::new(), 0, 10_000);

        assert!(stats.won, "seed {seed}");
        assert!(stats.moves <= 32, "seed {seed}: {} moves", stats.moves);
    }
}

#[test]
fn test_memory_beats_random_on_average() {
    let mut memory_moves = 0;
    let mut random_moves = 0;
    for seed in 0..20 {
        let config = GameConfig::new(images(8)).with_seed(seed);
        let mut game = GameController::immediate(config.clone()).unwrap();
        memory_moves += play_out(&mut game, &mut MemoryPolicy::new(), 0, 100_000).moves;

        let mut game = GameController::immediate(config).unwrap();
        random_moves += play_out(&mut game, &mut RandomPolicy, 0, 100_000).moves;
    }
    assert!(memory_moves < random_moves);
}

/// Play-out jumps the clock over resolution delays.
#[test]
fn test_play_out_waits_for_delays() {
    let config = GameConfig::new(images(3))
        .with_seed(5)
        .with_match_delay(500)
        .with_mismatch_delay(1000);
    let mut game = GameController::new(config).unwrap();
    let stats = play_out(&mut game, &mut MemoryPolicy::new(), 10, 1000);

    assert!(stats.won);
    assert!(game.is_settled());
    // Three matches at least, each followed by a 500ms wait.
    assert!(stats.elapsed >= Millis::new(1500));
}

/// Play continues from wherever the game currently is.
#[test]
fn test_play_out_resumes_started_game() {
    let config = GameConfig::new(images(4)).with_seed(17);
    let mut game = GameController::new(config).unwrap();
    game.handle_card_click(0, Millis::new(3000));

    let stats = play_out(&mut game, &mut MemoryPolicy::new(), 100, 1000);
    assert!(stats.won);
    assert_eq!(stats.moves, stats.clicks + 1);
    assert!(stats.elapsed > Millis::new(3000));
}

#[test]
fn test_same_seed_same_playout() {
    let run = || {
        let config = GameConfig::new(images(5)).with_seed(123);
        let mut game = GameController::immediate(config).unwrap();
        play_out(&mut game, &mut RandomPolicy, 0, 100_000)
    };
    assert_eq!(run(), run());
}

#[test]
fn test_boxed_policy() {
    let mut policy: Box<dyn ClickPolicy> = policy_by_name("memory").unwrap();
    let config = GameConfig::default().with_seed(1);
    let mut game = GameController::immediate(config).unwrap();
    let stats = play_out(&mut game, policy.as_mut(), 0, 1000);
    assert!(stats.won);
}
