//! Prestige: trade a run's progress for souls and permanent multipliers.

use crate::constants::{
    PRESTIGE_GOLD_DIVISOR, PRESTIGE_LEVEL_DIVISOR, PRESTIGE_UPGRADE_COST,
    PRESTIGE_UPGRADE_STEP,
};
use crate::events::GameEvent;
use crate::game_state::{Costs, GameState, Mode, PlayerStats};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrestigeUpgrade {
    Damage,
    Gold,
}

/// Souls a prestige would pay out right now.
pub fn potential_souls(stats: &PlayerStats) -> u64 {
    (stats.level / PRESTIGE_LEVEL_DIVISOR) as u64 + stats.gold / PRESTIGE_GOLD_DIVISOR
}

/// Resets the run in exchange for souls. Soul-bought multipliers, crit
/// training and lifetime counters survive; everything else starts
/// over. Returns `None` when the run is worth nothing yet.
pub fn perform_prestige(state: &mut GameState, now_ms: i64) -> Option<Vec<GameEvent>> {
    let payout = potential_souls(&state.stats);
    if payout == 0 {
        return None;
    }

    let old = std::mem::replace(&mut state.stats, PlayerStats::new());
    state.stats.souls = old.souls + payout;
    state.stats.prestige_damage_mult = old.prestige_damage_mult;
    state.stats.prestige_gold_mult = old.prestige_gold_mult;
    state.stats.crit_chance = old.crit_chance;
    state.stats.crit_multiplier = old.crit_multiplier;
    state.stats.total_monsters_killed = old.total_monsters_killed;
    state.stats.total_gold_collected = old.total_gold_collected;
    state.stats.total_legendaries_found = old.total_legendaries_found;
    state.stats.total_loot_boxes_opened = old.total_loot_boxes_opened;
    state.stats.unlocked_achievements = old.unlocked_achievements;

    state.equipment = Default::default();
    state.costs = Costs::default();
    state.buffs = Default::default();
    state.seen_zones.clear();
    state.pending_items.clear();
    state.gacha_reveal_secs = None;
    state.lootbox_spin_secs = None;
    state.mode = Mode::Idle;
    state.enter_encounter(1);
    state.refresh_effects(now_ms);

    Some(vec![GameEvent::PrestigeCompleted {
        souls_earned: payout,
        message: format!("Reborn with {} fresh souls", payout),
    }])
}

/// Spends souls on a permanent multiplier. Silent refusal when souls
/// run short, matching the other purchase paths.
pub fn buy_prestige_upgrade(
    state: &mut GameState,
    upgrade: PrestigeUpgrade,
    now_ms: i64,
) -> Option<Vec<GameEvent>> {
    if state.stats.souls < PRESTIGE_UPGRADE_COST {
        return None;
    }
    state.stats.souls -= PRESTIGE_UPGRADE_COST;
    let message = match upgrade {
        PrestigeUpgrade::Damage => {
            state.stats.prestige_damage_mult += PRESTIGE_UPGRADE_STEP;
            format!(
                "Soul pact sealed: damage x{:.1}",
                state.stats.prestige_damage_mult
            )
        }
        PrestigeUpgrade::Gold => {
            state.stats.prestige_gold_mult += PRESTIGE_UPGRADE_STEP;
            format!(
                "Soul pact sealed: gold x{:.1}",
                state.stats.prestige_gold_mult
            )
        }
    };
    state.refresh_effects(now_ms);
    Some(vec![GameEvent::Purchased { message }])
}
