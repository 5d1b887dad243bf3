//! Monster spawning — names, HP, and gold rewards scale exponentially
//! with the target level; every tenth level is a timed boss.

use crate::constants::{
    BASE_MONSTER_GOLD, BASE_MONSTER_HP, BOSS_GOLD_MULTIPLIER, BOSS_HP_MULTIPLIER,
    BOSS_TIME_LIMIT_SECONDS, MONSTER_GOLD_GROWTH, MONSTER_HP_GROWTH,
};
use serde::{Deserialize, Serialize};

/// The current combat encounter. Exactly one lives at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monster {
    pub name: String,
    pub level: u32,
    pub hp: u64,
    pub max_hp: u64,
    pub gold_reward: u64,
    pub is_boss: bool,
    /// Seconds left to kill a boss; unused for normal monsters.
    pub time_remaining: u32,
}

const MONSTER_NAMES: [&str; 11] = [
    "Slime",
    "Rat",
    "Goblin",
    "Skeleton",
    "Orc",
    "Phantom",
    "Troll",
    "Golem",
    "Wyvern",
    "Dragon",
    "Demon Lord",
];

const BOSS_NAMES: [&str; 11] = [
    "Slime King",
    "Rat Emperor",
    "Goblin Chieftain",
    "Bone Lord",
    "Orc Conqueror",
    "Opera Phantom",
    "Mountain Troll",
    "Titan Golem",
    "Ancient Wyvern",
    "Void Dragon",
    "Archdemon",
];

/// Fallback boss name for levels past the catalog.
const GENERIC_BOSS_NAME: &str = "Ancient Evil";

fn monster_name(level: u32, is_boss: bool) -> &'static str {
    if is_boss {
        // Boss levels are multiples of 10, so the index starts at 0.
        let index = (level / 10).saturating_sub(1) as usize;
        BOSS_NAMES.get(index.min(BOSS_NAMES.len() - 1)).copied().unwrap_or(GENERIC_BOSS_NAME)
    } else {
        let index = (level / 5) as usize;
        MONSTER_NAMES[index.min(MONSTER_NAMES.len() - 1)]
    }
}

/// Spawns the monster for the given level.
///
/// `hp = floor(15 × 1.25^(level-1) × (boss ? 10 : 1))` and
/// `gold = floor(3 × 1.20^(level-1) × (boss ? 5 : 1))`. Bosses carry a
/// 30-second kill timer; the caller is responsible for pausing combat
/// until the boss intro has been acknowledged.
pub fn spawn_monster(level: u32) -> Monster {
    let level = level.max(1);
    let is_boss = level % 10 == 0;

    let hp_mult = if is_boss { BOSS_HP_MULTIPLIER } else { 1.0 };
    let gold_mult = if is_boss { BOSS_GOLD_MULTIPLIER } else { 1.0 };
    let hp = (BASE_MONSTER_HP * MONSTER_HP_GROWTH.powi(level as i32 - 1) * hp_mult) as u64;
    let gold = (BASE_MONSTER_GOLD * MONSTER_GOLD_GROWTH.powi(level as i32 - 1) * gold_mult) as u64;

    Monster {
        name: monster_name(level, is_boss).to_string(),
        level,
        hp,
        max_hp: hp,
        gold_reward: gold,
        is_boss,
        time_remaining: if is_boss { BOSS_TIME_LIMIT_SECONDS } else { 0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_one_starter() {
        let monster = spawn_monster(1);
        assert_eq!(monster.name, "Slime");
        assert_eq!(monster.hp, 15);
        assert_eq!(monster.max_hp, 15);
        assert_eq!(monster.gold_reward, 3);
        assert!(!monster.is_boss);
        assert_eq!(monster.time_remaining, 0);
    }

    #[test]
    fn test_every_tenth_level_is_boss() {
        for level in 1..=100 {
            let monster = spawn_monster(level);
            assert_eq!(monster.is_boss, level % 10 == 0, "level {}", level);
        }
    }

    #[test]
    fn test_level_ten_boss_scaling() {
        // floor(15 × 1.25^9 × 10) = 1117, floor(3 × 1.20^9 × 5) = 77
        let boss = spawn_monster(10);
        assert!(boss.is_boss);
        assert_eq!(boss.name, "Slime King");
        assert_eq!(boss.max_hp, 1117);
        assert_eq!(boss.gold_reward, 77);
        assert_eq!(boss.time_remaining, 30);
    }

    #[test]
    fn test_hp_and_gold_grow_monotonically() {
        let mut prev = spawn_monster(1);
        for level in 2..=60 {
            let monster = spawn_monster(level);
            if monster.is_boss == prev.is_boss {
                assert!(monster.max_hp > prev.max_hp);
                assert!(monster.gold_reward >= prev.gold_reward);
            }
            prev = monster;
        }
    }

    #[test]
    fn test_name_catalog_clamps_at_high_levels() {
        assert_eq!(spawn_monster(55).name, "Demon Lord");
        assert_eq!(spawn_monster(9999).name, "Demon Lord");
        assert_eq!(spawn_monster(110).name, "Archdemon");
        assert_eq!(spawn_monster(10_000).name, "Archdemon");
    }

    #[test]
    fn test_name_progression() {
        assert_eq!(spawn_monster(4).name, "Slime");
        assert_eq!(spawn_monster(5).name, "Rat");
        assert_eq!(spawn_monster(11).name, "Goblin");
        assert_eq!(spawn_monster(20).name, "Rat Emperor");
        assert_eq!(spawn_monster(30).name, "Goblin Chieftain");
    }

    #[test]
    fn test_level_zero_clamps_to_one() {
        let monster = spawn_monster(0);
        assert_eq!(monster.level, 1);
        assert_eq!(monster.max_hp, 15);
    }
}
