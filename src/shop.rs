//! The gold shop: two buff potions and two permanent crit upgrades.

use crate::constants::{BASE_CRIT_CHANCE, BASE_CRIT_MULTIPLIER};
use crate::game_state::GameState;

const POTION_COST: u64 = 500;
const POTION_DURATION_MS: i64 = 120_000;
const CRIT_UPGRADE_BASE_COST: u64 = 1000;
const CRIT_UPGRADE_COST_GROWTH: f64 = 1.5;
pub const CRIT_CHANCE_STEP: f64 = 0.01;
pub const CRIT_MULTIPLIER_STEP: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopItem {
    /// +100% damage for 2 minutes.
    DamagePotion,
    /// +100% gold for 2 minutes.
    GoldPotion,
    /// +1% crit chance, permanent.
    CritChance,
    /// +10% crit multiplier, permanent.
    CritDamage,
}

impl ShopItem {
    pub const ALL: [ShopItem; 4] = [
        ShopItem::DamagePotion,
        ShopItem::GoldPotion,
        ShopItem::CritChance,
        ShopItem::CritDamage,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShopItem::DamagePotion => "Potion of Fury",
            ShopItem::GoldPotion => "Elixir of Midas",
            ShopItem::CritChance => "Keen Eye",
            ShopItem::CritDamage => "Cruel Strike",
        }
    }
}

/// Current price of a shop item. Crit upgrades grow ×1.5 per prior
/// purchase; the purchase count is derived from how far the crit stats
/// have moved off their base values.
pub fn shop_cost(state: &GameState, item: ShopItem) -> u64 {
    match item {
        ShopItem::DamagePotion | ShopItem::GoldPotion => POTION_COST,
        ShopItem::CritChance => {
            let bought = ((state.stats.crit_chance - BASE_CRIT_CHANCE) / CRIT_CHANCE_STEP).round();
            (CRIT_UPGRADE_BASE_COST as f64 * CRIT_UPGRADE_COST_GROWTH.powi(bought as i32)) as u64
        }
        ShopItem::CritDamage => {
            let bought =
                ((state.stats.crit_multiplier - BASE_CRIT_MULTIPLIER) / CRIT_MULTIPLIER_STEP)
                    .round();
            (CRIT_UPGRADE_BASE_COST as f64 * CRIT_UPGRADE_COST_GROWTH.powi(bought as i32)) as u64
        }
    }
}

/// Buys a shop item if affordable. Returns false without mutating
/// anything when gold is short.
pub fn buy_shop_item(state: &mut GameState, item: ShopItem, now_ms: i64) -> bool {
    let cost = shop_cost(state, item);
    if !state.stats.try_spend_gold(cost) {
        return false;
    }
    match item {
        ShopItem::DamagePotion => state.buffs.extend_damage(now_ms, POTION_DURATION_MS),
        ShopItem::GoldPotion => state.buffs.extend_gold(now_ms, POTION_DURATION_MS),
        ShopItem::CritChance => state.stats.crit_chance += CRIT_CHANCE_STEP,
        ShopItem::CritDamage => state.stats.crit_multiplier += CRIT_MULTIPLIER_STEP,
    }
    state.refresh_effects(now_ms);
    true
}
