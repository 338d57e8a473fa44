//! Loot boxes, price predictions and the shell pages that show them.
use rand::rngs::StdRng;
use rand::SeedableRng;

use swapquest::game::lootbox::{self, PRIZE_TABLE};
use swapquest::game::{Direction, GameError, GameState, PredictionBoard};
use swapquest::shell::pages;

#[test]
fn loot_box_draws_one_to_three_known_prizes() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let items = lootbox::roll(&mut rng);
        assert!((1..=3).contains(&items.len()));
        for item in &items {
            assert!(PRIZE_TABLE.iter().any(|p| p.id == item.id));
        }
    }
}

#[test]
fn loot_box_xp_lands_on_state() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut state = GameState::seeded();
    let items = lootbox::roll(&mut rng);
    let expected = lootbox::xp_total(&items);
    lootbox::apply_rewards(&mut state, &items);
    // every prize is worth at most one level, so single-step rollover loses nothing
    let total = (state.level() as i64 - 1) * state.max_xp() + state.xp();
    assert_eq!(total, 150 + expected);
}

#[test]
fn one_prediction_per_round() {
    let mut board = PredictionBoard::seeded();
    assert!(board.predict(0, Direction::Up).is_ok());
    assert_eq!(
        board.predict(0, Direction::Down).unwrap_err(),
        GameError::AlreadyPredicted("SOL".into())
    );
    assert_eq!(board.rounds()[0].prediction, Some(Direction::Up));
    assert_eq!(
        board.predict(7, Direction::Up).unwrap_err(),
        GameError::UnknownRound(8)
    );
}

#[test]
fn countdown_closes_rounds() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut board = PredictionBoard::seeded();
    let longest = board.rounds().iter().map(|r| r.time_left).max().unwrap();
    for _ in 0..=longest {
        board.tick(&mut rng);
    }
    assert!(board.rounds().iter().all(|r| r.time_left == 0 && !r.is_open()));
    assert_eq!(
        board.predict(1, Direction::Down).unwrap_err(),
        GameError::RoundClosed("JUP".into())
    );
}

#[test]
fn quests_page_lists_claimable_quests() {
    let mut state = GameState::seeded();
    let page = pages::quests(&state);
    assert!(page.contains("Prediction Master"));
    assert!(!page.contains("Ready to claim"));
    state.claim_quest_reward("3");
    assert!(pages::quests(&state).contains("[3] Prediction Master [2/3] +150 XP (✓)"));
}
