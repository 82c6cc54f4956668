//! Integration tests for the pet engine
//!
//! These tests drive the public API the way a host would:
//! - Ticks decay every stat and publish one event per stat
//! - Actions are gated by per-kind cooldowns on the host clock
//! - Experience levels the butler up to completion
//! - Terminal phases freeze the pet

use perfect_butler::actions::{ActionKind, ActionRequest, MiniGameResult};
use perfect_butler::core::config::{GameConfig, MAX_LEVEL};
use perfect_butler::core::types::{GamePhase, StatType};
use perfect_butler::entity::LevelUpResult;
use perfect_butler::simulation::{ActionOutcome, EventRecorder, PetEngine, PetEvent, TickOutcome};

fn engine_with_recorder() -> (PetEngine, EventRecorder) {
    let mut engine = PetEngine::default();
    let recorder = EventRecorder::new();
    engine.subscribe(recorder.clone());
    (engine, recorder)
}

#[test]
fn test_initial_state() {
    let engine = PetEngine::default();
    let state = engine.state();

    for stat in StatType::all() {
        assert_eq!(state.stat(stat), 80.0);
    }
    assert_eq!(state.level(), 0);
    assert_eq!(state.experience(), 0.0);
    assert_eq!(state.level_name(), "novice");
    assert_eq!(engine.phase(), GamePhase::Playing);
}

#[test]
fn test_tick_publishes_stats_in_fixed_order() {
    let (mut engine, recorder) = engine_with_recorder();

    engine.tick(0.5);

    let stats: Vec<StatType> = recorder
        .events()
        .iter()
        .filter_map(|e| match e {
            PetEvent::StatChanged { stat, value } => {
                assert_eq!(*value, 79.5);
                Some(*stat)
            }
            _ => None,
        })
        .collect();
    assert_eq!(stats, StatType::ALL.to_vec());
    assert_eq!(recorder.count(|e| *e == PetEvent::GameOver), 0);
}

#[test]
fn test_feed_scenario() {
    let mut engine = PetEngine::default();
    let feed = ActionRequest::new(StatType::Hunger, 25.0, 5.0, "feed");

    let first = engine.try_perform_action(&feed, 0.0);
    assert!(first.performed());
    assert_eq!(engine.stat(StatType::Hunger), 100.0);
    assert_eq!(engine.state().experience(), 5.0);

    let early = engine.try_perform_action(&feed, 30.0);
    assert!(!early.performed());
    assert!((engine.remaining_cooldown(StatType::Hunger, 30.0) - 30.0).abs() < 1e-9);

    assert!(engine.try_perform_action(&feed, 60.0).performed());
}

#[test]
fn test_same_time_retry_fails_for_every_cooldown_action() {
    let mut engine = PetEngine::default();

    for kind in [ActionKind::Feed, ActionKind::Play, ActionKind::Hospital] {
        let cooldown = engine.config().cooldown(kind.stat());
        assert!(engine.perform(kind, 10.0).performed());
        assert!(!engine.perform(kind, 10.0).performed(), "{:?} retried", kind);
        assert!(engine.perform(kind, 10.0 + cooldown).performed());
    }
}

#[test]
fn test_clean_always_available() {
    let mut engine = PetEngine::default();

    for _ in 0..20 {
        assert!(engine.perform(ActionKind::Clean, 5.0).performed());
    }
    assert_eq!(engine.stat(StatType::Cleanliness), 100.0);
}

#[test]
fn test_hundred_exp_levels_up_once() {
    let (mut engine, recorder) = engine_with_recorder();

    engine.grant_experience(100.0);

    assert_eq!(engine.state().level(), 1);
    assert_eq!(engine.state().experience(), 0.0);
    assert_eq!(recorder.count(PetEvent::is_level_changed), 1);
}

#[test]
fn test_level_up_through_actions() {
    let (mut engine, recorder) = engine_with_recorder();
    let mut now = 0.0;

    // Perfect play is worth 20 exp: five rounds clear level 0
    for _ in 0..5 {
        let outcome = engine.try_perform_action(&ActionKind::play(MiniGameResult::Perfect), now);
        assert!(outcome.performed());
        now += 60.0;
    }

    assert_eq!(engine.state().level(), 1);
    assert_eq!(
        recorder.events().last(),
        Some(&PetEvent::LevelChanged {
            level: 1,
            experience: 0.0,
            level_name: "apprentice".into(),
        })
    );
}

#[test]
fn test_completion_fires_once() {
    let (mut engine, recorder) = engine_with_recorder();

    for _ in 0..MAX_LEVEL {
        engine.grant_experience(100.0);
    }
    assert_eq!(engine.state().level(), MAX_LEVEL);
    assert_eq!(engine.state().level_name(), "perfect");

    let outcome = engine.try_perform_action(
        &ActionRequest::new(StatType::Fun, 5.0, 100.0, "grand finale"),
        0.0,
    );
    assert_eq!(
        outcome,
        ActionOutcome::Performed {
            stat: StatType::Fun,
            value: 85.0,
            level_up: LevelUpResult::GameComplete,
        }
    );
    assert_eq!(engine.phase(), GamePhase::GameComplete);

    engine.grant_experience(500.0);
    engine.perform(ActionKind::Clean, 1.0);
    engine.tick(0.5);

    assert_eq!(recorder.count(|e| *e == PetEvent::GameComplete), 1);
    assert_eq!(recorder.count(PetEvent::is_level_changed), 4);
    assert_eq!(engine.state().level(), MAX_LEVEL);
}

#[test]
fn test_decay_to_zero_is_game_over_once() {
    let config = GameConfig {
        starting_value: 2.0,
        ..GameConfig::default()
    };
    let mut engine = PetEngine::new(config);
    let recorder = EventRecorder::new();
    engine.subscribe(recorder.clone());

    let mut outcome = TickOutcome::Decayed;
    for _ in 0..4 {
        outcome = engine.tick(0.5);
    }
    assert_eq!(outcome, TickOutcome::GameOver(StatType::Hunger));
    assert_eq!(engine.phase(), GamePhase::GameOver);
    assert_eq!(recorder.events().last(), Some(&PetEvent::GameOver));

    recorder.clear();
    assert_eq!(engine.tick(0.5), TickOutcome::Skipped(GamePhase::GameOver));
    assert_eq!(
        engine.perform(ActionKind::Feed, 1000.0),
        ActionOutcome::NotPlaying(GamePhase::GameOver)
    );
    assert_eq!(engine.grant_experience(100.0), None);
    assert_eq!(engine.adjust_stat(StatType::Health, 50.0), None);
    assert!(!engine.pause());
    assert!(recorder.is_empty());
}

#[test]
fn test_adjust_stat_to_zero_is_game_over() {
    let (mut engine, recorder) = engine_with_recorder();

    assert_eq!(engine.adjust_stat(StatType::Cleanliness, -80.0), Some(0.0));
    assert_eq!(engine.phase(), GamePhase::GameOver);
    assert_eq!(
        recorder.events(),
        vec![
            PetEvent::StatChanged {
                stat: StatType::Cleanliness,
                value: 0.0,
            },
            PetEvent::GameOver,
        ]
    );
}

#[test]
fn test_independent_pets() {
    let mut first = PetEngine::default();
    let second = PetEngine::default();

    first.tick(10.0);

    assert_ne!(first.id(), second.id());
    assert_eq!(first.stat(StatType::Fun), 70.0);
    assert_eq!(second.stat(StatType::Fun), 80.0);
}

#[test]
fn test_closure_subscriber() {
    use std::cell::Cell;
    use std::rc::Rc;

    let mut engine = PetEngine::default();
    let ticks = Rc::new(Cell::new(0));
    let seen = ticks.clone();
    engine.subscribe(move |event: &PetEvent| {
        if let PetEvent::StatChanged {
            stat: StatType::Health,
            ..
        } = event
        {
            seen.set(seen.get() + 1);
        }
    });

    for _ in 0..3 {
        engine.tick_default();
    }
    assert_eq!(ticks.get(), 3);
}

#[test]
fn test_cooldown_status_report() {
    let mut engine = PetEngine::default();
    engine.perform(ActionKind::Hospital, 0.0);
    engine.perform(ActionKind::Feed, 0.0);

    let status = engine.cooldown_status(30.0);
    let by_stat = |stat: StatType| status.iter().find(|s| s.stat == stat).copied().unwrap();

    assert!(!by_stat(StatType::Hunger).ready);
    assert!((by_stat(StatType::Hunger).remaining - 30.0).abs() < 1e-9);
    assert!(!by_stat(StatType::Health).ready);
    assert!((by_stat(StatType::Health).remaining - 150.0).abs() < 1e-9);
    assert!(by_stat(StatType::Fun).ready);
    assert!(by_stat(StatType::Cleanliness).ready);
}
