//! Aggregates the player's net damage and gold multipliers.
//!
//! Recomputed eagerly whenever equipment, achievements, buffs, or
//! prestige multipliers change — the combat resolver and reward engine
//! read the cached pair synchronously, so a stale value is a bug.

use crate::achievements::{AchievementReward, ACHIEVEMENTS};
use crate::game_state::{Buffs, PlayerStats};
use crate::items::Equipment;

/// The current net multiplier pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveEffects {
    pub damage_mult: f64,
    pub gold_mult: f64,
}

impl Default for ActiveEffects {
    fn default() -> Self {
        Self {
            damage_mult: 1.0,
            gold_mult: 1.0,
        }
    }
}

impl ActiveEffects {
    /// Recomputes both multipliers from current state. Pure.
    pub fn compute(stats: &PlayerStats, equipment: &Equipment, buffs: &Buffs, now_ms: i64) -> Self {
        let mut ach_damage = 0.0;
        let mut ach_gold = 0.0;
        for def in ACHIEVEMENTS {
            if stats.unlocked_achievements.contains(def.id) {
                match def.reward {
                    AchievementReward::Damage(value) => ach_damage += value,
                    AchievementReward::Gold(value) => ach_gold += value,
                }
            }
        }

        // Buffs are binary: an active window adds a flat +1.0, however
        // much time remains on it.
        let buff_damage = if buffs.damage_active(now_ms) { 1.0 } else { 0.0 };
        let buff_gold = if buffs.gold_active(now_ms) { 1.0 } else { 0.0 };

        let damage_mult = stats.prestige_damage_mult * (1.0 + ach_damage + buff_damage);
        let gold_mult = (1.0 + equipment.gold_multiplier())
            * stats.prestige_gold_mult
            * (1.0 + ach_gold + buff_gold);

        Self {
            damage_mult,
            gold_mult,
        }
    }
}
