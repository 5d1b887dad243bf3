// Game timing constants
pub const TICK_INTERVAL_MS: u64 = 1000;
pub const GACHA_REVEAL_SECONDS: u32 = 1;
pub const LOOTBOX_SPIN_SECONDS: u32 = 2;
pub const BOSS_TIME_LIMIT_SECONDS: u32 = 30;

// Monster scaling constants
pub const BASE_MONSTER_HP: f64 = 15.0;
pub const MONSTER_HP_GROWTH: f64 = 1.25;
pub const BOSS_HP_MULTIPLIER: f64 = 10.0;
pub const BASE_MONSTER_GOLD: f64 = 3.0;
pub const MONSTER_GOLD_GROWTH: f64 = 1.20;
pub const BOSS_GOLD_MULTIPLIER: f64 = 5.0;

// Experience and progression constants
pub const XP_PER_KILL: u64 = 10;
pub const BASE_MAX_EXPERIENCE: u64 = 100;
pub const XP_CURVE_GROWTH: f64 = 1.2;

// Combat constants
pub const BASE_CLICK_DAMAGE: u64 = 1;
pub const BASE_CRIT_CHANCE: f64 = 0.01;
pub const BASE_CRIT_MULTIPLIER: f64 = 1.5;
/// Equipped items contribute only a tenth of their bonus to auto ticks.
pub const AUTO_TICK_INVENTORY_EFFICIENCY: f64 = 0.1;

// Economy constants
pub const CLICK_UPGRADE_COST_BASE: u64 = 10;
pub const AUTO_UPGRADE_COST_BASE: u64 = 25;
pub const UPGRADE_COST_GROWTH: f64 = 1.15;
pub const GACHA_COST_BASE: f64 = 50.0;
pub const GACHA_COST_GROWTH: f64 = 1.05;
pub const LOOTBOX_COST: u64 = 200;
pub const SELL_PRICE_PER_LEVEL: u64 = 10;

// Gacha drop rates (cumulative roll, legendary boundary checked first)
pub const DROP_RATE_LEGENDARY: f64 = 0.01;
pub const DROP_RATE_EPIC: f64 = 0.09;
pub const DROP_RATE_RARE: f64 = 0.30;
pub const DROP_RATE_COMMON: f64 = 0.60;

// Loot box outcome table (50% gold / 30% soul / 20% free gacha)
pub const LOOTBOX_GOLD_CHANCE: f64 = 0.5;
pub const LOOTBOX_SOUL_CHANCE: f64 = 0.3;
pub const LOOTBOX_GOLD_REWARD_FACTOR: f64 = 20.0;
pub const MAX_LOOTBOX_BATCH: u32 = 10;

// Random events (after non-boss kills)
pub const RANDOM_EVENT_CHANCE: f64 = 0.05;

// Prestige constants
pub const PRESTIGE_LEVEL_DIVISOR: u32 = 5;
pub const PRESTIGE_GOLD_DIVISOR: u64 = 2000;
pub const PRESTIGE_UPGRADE_COST: u64 = 10;
pub const PRESTIGE_UPGRADE_STEP: f64 = 0.5;

// Offline progression constants
pub const OFFLINE_MIN_GAP_SECONDS: i64 = 60;
pub const OFFLINE_EFFICIENCY: f64 = 0.5;

// Save system constants
pub const AUTOSAVE_INTERVAL_SECONDS: u64 = 30;
pub const SAVE_VERSION_MAGIC: u64 = 0x4C4F4F544C524400; // "LOOTLRD\0" in hex
