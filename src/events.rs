//! Events produced by commands and ticks.
//!
//! The presentation layer maps these to log lines and UI state changes;
//! the engine never touches UI types directly. Variants carry a
//! human-readable `message` plus the typed fields observers need.

use crate::items::{ItemType, Rarity};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A hit landed on the active monster.
    Hit {
        damage: u64,
        was_crit: bool,
        is_click: bool,
    },

    /// The active monster died and rewards were paid out.
    MonsterDied {
        monster_name: String,
        gold_earned: u64,
        message: String,
    },

    /// The player gained a level (threshold reached or boss kill).
    LeveledUp { new_level: u32, message: String },

    /// A boss timer expired: level lost, new encounter spawned.
    BossFailed { new_level: u32, message: String },

    /// A rare post-kill event fired.
    RandomEvent {
        event_name: &'static str,
        message: String,
    },

    /// A lifetime-counter achievement unlocked.
    AchievementUnlocked {
        id: &'static str,
        message: String,
    },

    /// A rolled item is now awaiting an equip/discard decision.
    ItemRevealed {
        item_name: String,
        rarity: Rarity,
        message: String,
    },

    /// A pending item was equipped (the displaced item, if any, sold).
    ItemEquipped { item_name: String, message: String },

    /// An item was sold or a pending item discarded for gold.
    ItemSold {
        item_name: String,
        price: u64,
        message: String,
    },

    /// One loot box resolved to gold.
    LootBoxGold { gold: u64, message: String },

    /// One loot box resolved to a soul.
    LootBoxSoul { message: String },

    /// One loot box resolved to a free gacha item (also `ItemRevealed`).
    LootBoxItem { message: String },

    /// An upgrade or purchase went through.
    Purchased { message: String },

    /// First visit to a zone: the story gate is now open.
    ZoneEntered {
        zone_id: &'static str,
        message: String,
    },

    /// A story choice resolved and its reward applied.
    StoryOutcome { message: String },

    /// A legendary wants flavor text from the external service. The
    /// driver runs the enricher and calls back with the item id as the
    /// correlation token.
    EnrichmentRequested {
        item_id: Uuid,
        level: u32,
        item_type: ItemType,
        rarity: Rarity,
    },

    /// One-time offline earnings credited on load.
    OfflineGold { gold: u64, message: String },

    /// Prestige executed: souls banked, transient progress reset.
    PrestigeCompleted { souls_earned: u64, message: String },
}
