//! Integration test: the prestige cycle
//!
//! A full rebirth: banking souls, verifying what survives the reset,
//! spending souls on permanent multipliers, and confirming the next
//! run actually benefits from them.

use loot_lord::events::GameEvent;
use loot_lord::game::{handle_command, Command};
use loot_lord::game_state::{GameState, Mode};
use loot_lord::items::roll_item;
use loot_lord::prestige::{potential_souls, PrestigeUpgrade};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn seasoned_run() -> GameState {
    let mut state = GameState::new(0);
    state.stats.level = 27;
    state.stats.gold = 5_500;
    state.stats.click_damage = 40;
    state.stats.auto_dps = 15;
    state.stats.loot_boxes = 3;
    state.stats.crit_chance = 0.04;
    state.stats.crit_multiplier = 2.1;
    state.stats.total_monsters_killed = 900;
    state.stats.total_legendaries_found = 2;
    state.stats.total_loot_boxes_opened = 40;
    state
        .stats
        .unlocked_achievements
        .insert("kill_100".to_string());
    state.costs.click = 700;
    state.costs.auto = 1_200;
    state.seen_zones.insert("forest".to_string());
    state.seen_zones.insert("cave".to_string());
    state.enter_encounter(27);
    state
}

#[test]
fn payout_formula_is_level_plus_gold() {
    let state = seasoned_run();
    // floor(27 / 5) + floor(5500 / 2000)
    assert_eq!(potential_souls(&state.stats), 7);
}

#[test]
fn prestige_keeps_the_permanent_and_drops_the_rest() {
    let mut rng = ChaCha8Rng::seed_from_u64(41);
    let mut state = seasoned_run();
    let mut item = roll_item(20, &mut rng);
    item.item_type = loot_lord::items::ItemType::Weapon;
    state.equipment.equip(item);
    state.queue_pending_item(roll_item(20, &mut rng));
    state.mode = Mode::Idle;

    let events = handle_command(&mut state, Command::PerformPrestige, 0, &mut rng);
    assert!(matches!(
        events[0],
        GameEvent::PrestigeCompleted { souls_earned: 7, .. }
    ));

    // Banked and preserved.
    assert_eq!(state.stats.souls, 7);
    assert!((state.stats.crit_chance - 0.04).abs() < 1e-9);
    assert!((state.stats.crit_multiplier - 2.1).abs() < 1e-9);
    assert_eq!(state.stats.total_monsters_killed, 900);
    assert_eq!(state.stats.total_legendaries_found, 2);
    assert_eq!(state.stats.total_loot_boxes_opened, 40);
    assert!(state.stats.unlocked_achievements.contains("kill_100"));

    // Reset.
    assert_eq!(state.stats.level, 1);
    assert_eq!(state.stats.gold, 0);
    assert_eq!(state.stats.experience, 0);
    assert_eq!(state.stats.max_experience, 100);
    assert_eq!(state.stats.click_damage, 1);
    assert_eq!(state.stats.auto_dps, 0);
    assert_eq!(state.stats.loot_boxes, 0);
    assert_eq!(state.costs.click, 10);
    assert_eq!(state.costs.auto, 25);
    assert!(state.equipment.get(loot_lord::items::ItemType::Weapon).is_none());
    assert!(state.pending_items.is_empty());
    assert!(state.seen_zones.is_empty());
    assert_eq!(state.monster.level, 1);
    assert_eq!(state.mode, Mode::Idle);
}

#[test]
fn worthless_run_cannot_prestige() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut state = GameState::new(0);
    state.stats.level = 4;
    state.stats.gold = 1_999;

    let events = handle_command(&mut state, Command::PerformPrestige, 0, &mut rng);
    assert!(events.is_empty());
    assert_eq!(state.stats.level, 4);
    assert_eq!(state.stats.gold, 1_999);
}

#[test]
fn soul_pacts_survive_the_next_rebirth() {
    let mut rng = ChaCha8Rng::seed_from_u64(43);
    let mut state = seasoned_run();
    state.stats.souls = 20;
    // No achievement bonuses, so the multipliers below are pure pacts.
    state.stats.unlocked_achievements.clear();

    handle_command(&mut state, Command::PerformPrestige, 0, &mut rng);
    assert_eq!(state.stats.souls, 27);

    handle_command(
        &mut state,
        Command::BuyPrestigeUpgrade(PrestigeUpgrade::Damage),
        0,
        &mut rng,
    );
    handle_command(
        &mut state,
        Command::BuyPrestigeUpgrade(PrestigeUpgrade::Gold),
        0,
        &mut rng,
    );
    assert_eq!(state.stats.souls, 7);
    assert_eq!(state.stats.prestige_damage_mult, 1.5);
    assert_eq!(state.stats.prestige_gold_mult, 1.5);
    assert!((state.effects.damage_mult - 1.5).abs() < 1e-9);
    assert!((state.effects.gold_mult - 1.5).abs() < 1e-9);

    // Multipliers ride through another prestige untouched.
    state.stats.level = 10;
    state.stats.gold = 4_000;
    handle_command(&mut state, Command::PerformPrestige, 0, &mut rng);
    assert_eq!(state.stats.prestige_damage_mult, 1.5);
    assert_eq!(state.stats.prestige_gold_mult, 1.5);
    assert!((state.effects.damage_mult - 1.5).abs() < 1e-9);
}

#[test]
fn fresh_run_retells_the_forest_story() {
    let mut rng = ChaCha8Rng::seed_from_u64(44);
    let mut state = seasoned_run();
    handle_command(&mut state, Command::PerformPrestige, 0, &mut rng);
    assert!(state.seen_zones.is_empty());

    state.stats.click_damage = 1_000;
    let mut died = false;
    for _ in 0..100 {
        let events = handle_command(&mut state, Command::ClickAttack, 0, &mut rng);
        if events
            .iter()
            .any(|e| matches!(e, GameEvent::MonsterDied { .. }))
        {
            died = true;
            break;
        }
    }
    assert!(died);
    assert_eq!(state.mode, Mode::AwaitingStoryChoice);
    assert!(state.seen_zones.contains("forest"));
}
