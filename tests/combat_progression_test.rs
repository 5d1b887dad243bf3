//! Integration test: combat and level progression
//!
//! Drives the engine through clicks and ticks the way the UI would:
//! killing monsters, leveling through the experience curve, hitting the
//! level-10 boss gate, and losing a boss to the clock.

use loot_lord::events::GameEvent;
use loot_lord::game::{handle_command, tick, Command};
use loot_lord::game_state::{GameState, Mode};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Clicks until the current monster dies, answering any story modal
/// that pops up along the way. Caps at 10_000 clicks.
fn fight_until_kill(state: &mut GameState, rng: &mut ChaCha8Rng) -> Vec<GameEvent> {
    for _ in 0..10_000 {
        if state.mode == Mode::AwaitingStoryChoice {
            handle_command(state, Command::ChooseStory(0), 0, rng);
        }
        if state.mode == Mode::AwaitingBossIntro {
            handle_command(state, Command::AcknowledgeBossIntro, 0, rng);
        }
        let events = handle_command(state, Command::ClickAttack, 0, rng);
        if events
            .iter()
            .any(|e| matches!(e, GameEvent::MonsterDied { .. }))
        {
            return events;
        }
    }
    panic!("monster never died");
}

#[test]
fn ten_kills_reach_level_two() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut state = GameState::new(0);
    state.stats.click_damage = 1_000;

    // 100 max experience at 10 per kill.
    for _ in 0..10 {
        fight_until_kill(&mut state, &mut rng);
    }

    assert_eq!(state.stats.level, 2);
    assert_eq!(state.stats.experience, 0);
    assert_eq!(state.stats.max_experience, 120);
    assert_eq!(state.stats.total_monsters_killed, 10);
    assert!(state.stats.gold > 0);
    // Random post-kill events can pad gold past the lifetime counter.
    assert!(state.stats.gold >= state.stats.total_gold_collected);
}

#[test]
fn level_ten_spawns_a_boss_behind_an_intro() {
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    let mut state = GameState::new(0);
    state.stats.level = 9;
    state.stats.experience = 90;
    state.enter_encounter(9);
    state.stats.click_damage = 1_000_000;
    for zone in loot_lord::zones::ZONES {
        state.seen_zones.insert(zone.id.to_string());
    }

    fight_until_kill(&mut state, &mut rng);

    assert_eq!(state.stats.level, 10);
    assert!(state.monster.is_boss);
    assert_eq!(state.monster.name, "Slime King");
    assert_eq!(state.mode, Mode::AwaitingBossIntro);

    // Combat input bounces off the intro screen.
    let hp = state.monster.hp;
    assert!(handle_command(&mut state, Command::ClickAttack, 0, &mut rng).is_empty());
    assert_eq!(state.monster.hp, hp);

    // Acknowledge, then the kill force-levels past the boss floor.
    handle_command(&mut state, Command::AcknowledgeBossIntro, 0, &mut rng);
    fight_until_kill(&mut state, &mut rng);
    assert_eq!(state.stats.level, 11);
}

#[test]
fn boss_timer_counts_down_only_while_idle() {
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    let mut state = GameState::new(0);
    state.stats.level = 10;
    state.enter_encounter(10);
    for zone in loot_lord::zones::ZONES {
        state.seen_zones.insert(zone.id.to_string());
    }

    // Clock frozen behind the intro.
    let before = state.monster.time_remaining;
    tick(&mut state, 1_000, &mut rng);
    assert_eq!(state.monster.time_remaining, before);

    handle_command(&mut state, Command::AcknowledgeBossIntro, 0, &mut rng);
    tick(&mut state, 2_000, &mut rng);
    assert_eq!(state.monster.time_remaining, before - 1);

    // Run the clock out.
    state.monster.hp = u64::MAX;
    let mut now = 2_000;
    let mut failed = false;
    for _ in 0..before {
        now += 1_000;
        let events = tick(&mut state, now, &mut rng);
        if events
            .iter()
            .any(|e| matches!(e, GameEvent::BossFailed { .. }))
        {
            failed = true;
            break;
        }
    }
    assert!(failed);
    assert_eq!(state.stats.level, 9);
    assert_eq!(state.stats.experience, 0);
    assert!(!state.monster.is_boss);
}

#[test]
fn auto_attacker_grinds_without_input() {
    let mut rng = ChaCha8Rng::seed_from_u64(14);
    let mut state = GameState::new(0);
    state.stats.auto_dps = 50;
    // Answer the forest story up front so ticks stay unblocked.
    state.seen_zones.insert("forest".to_string());

    let mut kills = 0;
    let mut now = 0;
    for _ in 0..100 {
        now += 1_000;
        let events = tick(&mut state, now, &mut rng);
        kills += events
            .iter()
            .filter(|e| matches!(e, GameEvent::MonsterDied { .. }))
            .count();
    }

    assert!(kills > 0);
    assert_eq!(state.stats.total_monsters_killed, kills as u64);
}

#[test]
fn pause_freezes_the_whole_engine() {
    let mut rng = ChaCha8Rng::seed_from_u64(15);
    let mut state = GameState::new(0);
    state.stats.auto_dps = 50;
    state.seen_zones.insert("forest".to_string());

    handle_command(&mut state, Command::TogglePause, 0, &mut rng);
    let hp = state.monster.hp;
    for i in 0..10 {
        assert!(tick(&mut state, i * 1_000, &mut rng).is_empty());
    }
    assert_eq!(state.monster.hp, hp);

    handle_command(&mut state, Command::TogglePause, 0, &mut rng);
    tick(&mut state, 11_000, &mut rng);
    assert!(state.monster.hp < hp || state.stats.total_monsters_killed > 0);
}
