use crate::constants::*;
use crate::effects::ActiveEffects;
use crate::items::{Equipment, Item};
use crate::monsters::{spawn_monster, Monster};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

/// The player's full progression state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerStats {
    pub level: u32,
    pub experience: u64,
    pub max_experience: u64,
    pub gold: u64,
    pub souls: u64,
    pub loot_boxes: u32,
    pub click_damage: u64,
    pub auto_dps: u64,
    pub crit_chance: f64,
    pub crit_multiplier: f64,
    /// Permanent prestige multipliers. Never reset, +0.5 per purchase.
    pub prestige_damage_mult: f64,
    pub prestige_gold_mult: f64,
    // Lifetime counters — never reset, not even by prestige.
    pub total_monsters_killed: u64,
    pub total_gold_collected: u64,
    pub total_legendaries_found: u64,
    #[serde(default)]
    pub total_loot_boxes_opened: u64,
    pub unlocked_achievements: HashSet<String>,
}

impl PlayerStats {
    pub fn new() -> Self {
        Self {
            level: 1,
            experience: 0,
            max_experience: BASE_MAX_EXPERIENCE,
            gold: 0,
            souls: 0,
            loot_boxes: 0,
            click_damage: BASE_CLICK_DAMAGE,
            auto_dps: 0,
            crit_chance: BASE_CRIT_CHANCE,
            crit_multiplier: BASE_CRIT_MULTIPLIER,
            prestige_damage_mult: 1.0,
            prestige_gold_mult: 1.0,
            total_monsters_killed: 0,
            total_gold_collected: 0,
            total_legendaries_found: 0,
            total_loot_boxes_opened: 0,
            unlocked_achievements: HashSet::new(),
        }
    }

    /// Current gacha pull cost — scales with player level, not pull count.
    pub fn gacha_cost(&self) -> u64 {
        (GACHA_COST_BASE * GACHA_COST_GROWTH.powi(self.level as i32)) as u64
    }

    /// Deducts `amount` gold if affordable. Returns false (and leaves
    /// state untouched) otherwise.
    pub fn try_spend_gold(&mut self, amount: u64) -> bool {
        if self.gold < amount {
            return false;
        }
        self.gold -= amount;
        true
    }

    /// Adds earned gold to both the wallet and the lifetime counter.
    pub fn earn_gold(&mut self, amount: u64) {
        self.gold += amount;
        self.total_gold_collected += amount;
    }
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Ephemeral global buff windows, stored as absolute epoch-millisecond
/// expiries. A buff is active iff `now < expiry`; acquiring another of
/// the same kind extends the window, it never stacks.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Buffs {
    pub damage_buff_expiry_ms: i64,
    pub gold_buff_expiry_ms: i64,
}

impl Buffs {
    pub fn damage_active(&self, now_ms: i64) -> bool {
        now_ms < self.damage_buff_expiry_ms
    }

    pub fn gold_active(&self, now_ms: i64) -> bool {
        now_ms < self.gold_buff_expiry_ms
    }

    /// Extends the damage buff by `duration_ms` from `max(now, expiry)`.
    pub fn extend_damage(&mut self, now_ms: i64, duration_ms: i64) {
        self.damage_buff_expiry_ms = self.damage_buff_expiry_ms.max(now_ms) + duration_ms;
    }

    pub fn extend_gold(&mut self, now_ms: i64, duration_ms: i64) {
        self.gold_buff_expiry_ms = self.gold_buff_expiry_ms.max(now_ms) + duration_ms;
    }
}

/// Mutable purchase prices for the two permanent upgrades. Each grows
/// ×1.15 on purchase and resets only at prestige.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Costs {
    pub click: u64,
    pub auto: u64,
}

impl Default for Costs {
    fn default() -> Self {
        Self {
            click: CLICK_UPGRADE_COST_BASE,
            auto: AUTO_UPGRADE_COST_BASE,
        }
    }
}

/// What kind of input the engine is currently accepting.
///
/// Timers (auto tick, boss countdown, reveal delays) advance only in
/// `Idle`. Commands invalid for the current mode are silent no-ops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    /// A boss spawned; combat stays frozen until the intro is acknowledged.
    AwaitingBossIntro,
    /// One or more rolled items await an equip/discard decision.
    AwaitingPendingItem,
    /// The player just entered a new zone and owes a story choice.
    AwaitingStoryChoice,
    Paused,
}

/// Everything the engine mutates, plus the transient bookkeeping that
/// never hits the save file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub stats: PlayerStats,
    pub equipment: Equipment,
    pub costs: Costs,
    pub buffs: Buffs,
    /// Zones whose intro story has been seen; cleared by prestige.
    pub seen_zones: HashSet<String>,
    pub last_save_time: i64,

    #[serde(skip)]
    pub monster: Monster,
    #[serde(skip)]
    pub mode: Mode,
    /// Rolled items awaiting resolution, oldest first.
    #[serde(skip)]
    pub pending_items: VecDeque<Item>,
    /// Seconds left before an in-flight gacha pull reveals its item.
    #[serde(skip)]
    pub gacha_reveal_secs: Option<u32>,
    /// Seconds left on a single loot box spin.
    #[serde(skip)]
    pub lootbox_spin_secs: Option<u32>,
    #[serde(skip)]
    pub effects: ActiveEffects,
}

impl Default for Monster {
    fn default() -> Self {
        spawn_monster(1)
    }
}

impl GameState {
    /// A fresh game: level-1 slime, base costs, empty everything.
    pub fn new(current_time: i64) -> Self {
        Self {
            stats: PlayerStats::new(),
            equipment: Equipment::new(),
            costs: Costs::default(),
            buffs: Buffs::default(),
            seen_zones: HashSet::new(),
            last_save_time: current_time,
            monster: spawn_monster(1),
            mode: Mode::Idle,
            pending_items: VecDeque::new(),
            gacha_reveal_secs: None,
            lootbox_spin_secs: None,
            effects: ActiveEffects::default(),
        }
    }

    /// Recomputes the cached multiplier pair. Must run after every
    /// mutation that can change an input — equip, sell, unlock, buff
    /// or prestige-multiplier change.
    pub fn refresh_effects(&mut self, now_ms: i64) {
        self.effects = ActiveEffects::compute(&self.stats, &self.equipment, &self.buffs, now_ms);
    }

    /// Replaces the active monster for the given level. Spawning a boss
    /// freezes combat until the intro is acknowledged.
    pub fn enter_encounter(&mut self, level: u32) {
        self.monster = spawn_monster(level);
        if self.monster.is_boss {
            self.mode = Mode::AwaitingBossIntro;
        }
    }

    /// Queues a rolled item for resolution and blocks further combat
    /// input until the queue drains.
    pub fn queue_pending_item(&mut self, item: Item) {
        self.pending_items.push_back(item);
        self.mode = Mode::AwaitingPendingItem;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let state = GameState::new(1_234_567_890);
        assert_eq!(state.stats.level, 1);
        assert_eq!(state.stats.experience, 0);
        assert_eq!(state.stats.max_experience, 100);
        assert_eq!(state.stats.gold, 0);
        assert_eq!(state.stats.click_damage, 1);
        assert_eq!(state.stats.crit_chance, 0.01);
        assert_eq!(state.stats.crit_multiplier, 1.5);
        assert_eq!(state.costs.click, 10);
        assert_eq!(state.costs.auto, 25);
        assert_eq!(state.monster.name, "Slime");
        assert_eq!(state.mode, Mode::Idle);
        assert_eq!(state.last_save_time, 1_234_567_890);
    }

    #[test]
    fn test_gacha_cost_scales_with_level() {
        let mut stats = PlayerStats::new();
        assert_eq!(stats.gacha_cost(), 52); // floor(50 × 1.05)
        stats.level = 10;
        assert_eq!(stats.gacha_cost(), 81); // floor(50 × 1.05^10)
    }

    #[test]
    fn test_try_spend_gold_refuses_without_mutation() {
        let mut stats = PlayerStats::new();
        stats.gold = 30;
        assert!(!stats.try_spend_gold(31));
        assert_eq!(stats.gold, 30);
        assert!(stats.try_spend_gold(30));
        assert_eq!(stats.gold, 0);
    }

    #[test]
    fn test_earn_gold_tracks_lifetime() {
        let mut stats = PlayerStats::new();
        stats.earn_gold(40);
        stats.try_spend_gold(25);
        stats.earn_gold(10);
        assert_eq!(stats.gold, 25);
        assert_eq!(stats.total_gold_collected, 50);
    }

    #[test]
    fn test_buff_extends_from_later_of_now_and_expiry() {
        let mut buffs = Buffs::default();

        // Fresh buff: expiry = now + duration.
        buffs.extend_damage(1_000, 500);
        assert_eq!(buffs.damage_buff_expiry_ms, 1_500);

        // Still active: extends from the current expiry, not from now.
        buffs.extend_damage(1_200, 500);
        assert_eq!(buffs.damage_buff_expiry_ms, 2_000);

        // Long expired: extends from now again.
        buffs.extend_damage(10_000, 500);
        assert_eq!(buffs.damage_buff_expiry_ms, 10_500);
    }

    #[test]
    fn test_boss_encounter_freezes_input() {
        let mut state = GameState::new(0);
        state.enter_encounter(10);
        assert!(state.monster.is_boss);
        assert_eq!(state.mode, Mode::AwaitingBossIntro);

        state.mode = Mode::Idle;
        state.enter_encounter(11);
        assert_eq!(state.mode, Mode::Idle);
    }
}
