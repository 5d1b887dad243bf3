//! Achievement catalog and evaluator.
//!
//! Unlocks are permanent and idempotent; reward effects flow entirely
//! through [`crate::effects`], which sums over the unlocked set — there
//! is no separate "apply" step beyond inserting the id.

use crate::game_state::PlayerStats;

/// Which lifetime counter an achievement threshold is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementCounter {
    Kills,
    Gold,
    Legendaries,
}

/// The permanent multiplier bonus an achievement grants, as an additive
/// fraction (0.1 = +10%).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AchievementReward {
    Damage(f64),
    Gold(f64),
}

#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub counter: AchievementCounter,
    pub threshold: u64,
    pub reward: AchievementReward,
}

pub const ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: "kill_10",
        name: "First Blood",
        description: "Slay 10 monsters",
        counter: AchievementCounter::Kills,
        threshold: 10,
        reward: AchievementReward::Damage(0.1),
    },
    AchievementDef {
        id: "kill_100",
        name: "Hunter",
        description: "Slay 100 monsters",
        counter: AchievementCounter::Kills,
        threshold: 100,
        reward: AchievementReward::Damage(0.2),
    },
    AchievementDef {
        id: "kill_500",
        name: "Exterminator",
        description: "Slay 500 monsters",
        counter: AchievementCounter::Kills,
        threshold: 500,
        reward: AchievementReward::Damage(0.3),
    },
    AchievementDef {
        id: "gold_1000",
        name: "Piggy Bank",
        description: "Collect 1,000 gold (lifetime)",
        counter: AchievementCounter::Gold,
        threshold: 1000,
        reward: AchievementReward::Gold(0.1),
    },
    AchievementDef {
        id: "gold_10000",
        name: "Treasury",
        description: "Collect 10,000 gold (lifetime)",
        counter: AchievementCounter::Gold,
        threshold: 10_000,
        reward: AchievementReward::Gold(0.25),
    },
    AchievementDef {
        id: "legendary_1",
        name: "The Chosen",
        description: "Find 1 legendary item",
        counter: AchievementCounter::Legendaries,
        threshold: 1,
        reward: AchievementReward::Damage(0.5),
    },
    AchievementDef {
        id: "legendary_5",
        name: "Loot Lord",
        description: "Find 5 legendary items",
        counter: AchievementCounter::Legendaries,
        threshold: 5,
        reward: AchievementReward::Gold(1.0),
    },
];

/// Unlocks every catalog entry whose counter has met its threshold.
/// Returns the definitions unlocked by this call.
pub fn evaluate_achievements(stats: &mut PlayerStats) -> Vec<&'static AchievementDef> {
    let mut newly_unlocked = Vec::new();
    for def in ACHIEVEMENTS {
        if stats.unlocked_achievements.contains(def.id) {
            continue;
        }
        let counter = match def.counter {
            AchievementCounter::Kills => stats.total_monsters_killed,
            AchievementCounter::Gold => stats.total_gold_collected,
            AchievementCounter::Legendaries => stats.total_legendaries_found,
        };
        if counter >= def.threshold {
            stats.unlocked_achievements.insert(def.id.to_string());
            newly_unlocked.push(def);
        }
    }
    newly_unlocked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_unlocks_at_zero() {
        let mut stats = PlayerStats::new();
        assert!(evaluate_achievements(&mut stats).is_empty());
        assert!(stats.unlocked_achievements.is_empty());
    }

    #[test]
    fn test_threshold_unlocks_exactly_once() {
        let mut stats = PlayerStats::new();
        stats.total_monsters_killed = 10;

        let unlocked = evaluate_achievements(&mut stats);
        assert_eq!(unlocked.len(), 1);
        assert_eq!(unlocked[0].id, "kill_10");
        assert!(stats.unlocked_achievements.contains("kill_10"));

        // Re-evaluating with the same counters is a no-op.
        assert!(evaluate_achievements(&mut stats).is_empty());
    }

    #[test]
    fn test_jumping_past_several_thresholds_unlocks_all() {
        let mut stats = PlayerStats::new();
        stats.total_monsters_killed = 600;
        stats.total_gold_collected = 15_000;

        let unlocked = evaluate_achievements(&mut stats);
        let ids: Vec<&str> = unlocked.iter().map(|d| d.id).collect();
        assert_eq!(
            ids,
            vec!["kill_10", "kill_100", "kill_500", "gold_1000", "gold_10000"]
        );
    }

    #[test]
    fn test_legendary_counter() {
        let mut stats = PlayerStats::new();
        stats.total_legendaries_found = 5;
        let ids: Vec<&str> = evaluate_achievements(&mut stats)
            .iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec!["legendary_1", "legendary_5"]);
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for def in ACHIEVEMENTS {
            assert!(seen.insert(def.id), "duplicate achievement id {}", def.id);
        }
    }
}
