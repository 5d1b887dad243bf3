//! Kill rewards: gold, experience, leveling, rare post-kill events.

use crate::achievements::evaluate_achievements;
use crate::constants::{RANDOM_EVENT_CHANCE, XP_CURVE_GROWTH, XP_PER_KILL};
use crate::events::GameEvent;
use crate::game_state::{GameState, Mode};
use crate::monsters::Monster;
use crate::zones::zone_for_level;
use rand::Rng;

const RANDOM_EVENT_BUFF_MS: i64 = 60_000;

enum EventReward {
    /// Bonus gold as a multiple of the kill's (already multiplied) payout.
    GoldMult(f64),
    DamageBuff(i64),
    GoldFlat(u64),
    LootBox(u32),
}

struct RandomEventDef {
    name: &'static str,
    description: &'static str,
    reward: EventReward,
    weight: f64,
}

static RANDOM_EVENTS: &[RandomEventDef] = &[
    RandomEventDef {
        name: "Lucky Chest",
        description: "The monster dropped a heavy chest. Gold glittered inside!",
        reward: EventReward::GoldMult(5.0),
        weight: 0.4,
    },
    RandomEventDef {
        name: "Blessing",
        description: "A ray of light broke through the gloom. You feel stronger.",
        reward: EventReward::DamageBuff(RANDOM_EVENT_BUFF_MS),
        weight: 0.3,
    },
    RandomEventDef {
        name: "Thief's Stash",
        description: "You found a map leading to a hidden stash.",
        reward: EventReward::GoldFlat(500),
        weight: 0.2,
    },
    RandomEventDef {
        name: "Mystery Box",
        description: "A strange parcel fell out of the enemy's pocket.",
        reward: EventReward::LootBox(1),
        weight: 0.1,
    },
];

fn pick_random_event(roll: f64) -> &'static RandomEventDef {
    let mut cumulative = 0.0;
    for event in RANDOM_EVENTS {
        cumulative += event.weight;
        if roll <= cumulative {
            return event;
        }
    }
    &RANDOM_EVENTS[0]
}

/// Pays out a kill and advances progression. The dead monster is a
/// snapshot taken before the killing blow mutated the encounter slot.
///
/// Order matters: the gold multiplier is read before leveling so the
/// payout reflects the state the monster died under, and random events
/// scale off that same payout.
pub fn on_monster_death(
    state: &mut GameState,
    dead: &Monster,
    now_ms: i64,
    rng: &mut impl Rng,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let gold_earned = (dead.gold_reward as f64 * state.effects.gold_mult) as u64;

    if !dead.is_boss && rng.gen::<f64>() < RANDOM_EVENT_CHANCE {
        let event = pick_random_event(rng.gen());
        match event.reward {
            EventReward::GoldMult(mult) => {
                let bonus = (gold_earned as f64 * mult) as u64;
                state.stats.gold += bonus;
            }
            EventReward::DamageBuff(duration_ms) => {
                state.buffs.extend_damage(now_ms, duration_ms);
            }
            EventReward::GoldFlat(amount) => {
                state.stats.gold += amount;
            }
            EventReward::LootBox(count) => {
                state.stats.loot_boxes += count;
            }
        }
        events.push(GameEvent::RandomEvent {
            event_name: event.name,
            message: format!("{}: {}", event.name, event.description),
        });
    }

    state.stats.earn_gold(gold_earned);
    state.stats.total_monsters_killed += 1;
    events.push(GameEvent::MonsterDied {
        monster_name: dead.name.clone(),
        gold_earned,
        message: format!("{} slain, +{} gold", dead.name, gold_earned),
    });

    let new_exp = state.stats.experience + XP_PER_KILL;
    let leveled_up = new_exp >= state.stats.max_experience || dead.is_boss;
    if leveled_up {
        state.stats.experience = 0;
        state.stats.max_experience =
            (state.stats.max_experience as f64 * XP_CURVE_GROWTH) as u64;
        state.stats.level += 1;
        events.push(GameEvent::LeveledUp {
            new_level: state.stats.level,
            message: format!("Level up! Now level {}", state.stats.level),
        });
    } else {
        state.stats.experience = new_exp;
    }

    for def in evaluate_achievements(&mut state.stats) {
        events.push(GameEvent::AchievementUnlocked {
            id: def.id,
            message: format!("Achievement unlocked: {}", def.name),
        });
    }

    state.refresh_effects(now_ms);
    state.enter_encounter(state.stats.level);

    // A freshly unlocked zone tells its story before the next fight,
    // unless a boss introduction already claimed the pause.
    if state.mode == Mode::Idle {
        let zone = zone_for_level(state.stats.level);
        if !state.seen_zones.contains(zone.id) {
            state.seen_zones.insert(zone.id.to_string());
            state.mode = Mode::AwaitingStoryChoice;
            events.push(GameEvent::ZoneEntered {
                zone_id: zone.id,
                message: format!("Entered {}", zone.name),
            });
        }
    }

    events
}

/// The boss outlasted its timer: drop a level, wipe the experience bar,
/// and respawn a regular encounter.
pub fn on_boss_timeout(state: &mut GameState) -> Vec<GameEvent> {
    state.stats.level = state.stats.level.saturating_sub(1).max(1);
    state.stats.experience = 0;
    state.enter_encounter(state.stats.level);
    vec![GameEvent::BossFailed {
        new_level: state.stats.level,
        message: format!(
            "The boss escaped. Knocked back to level {}",
            state.stats.level
        ),
    }]
}
