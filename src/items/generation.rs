//! The gacha roll — rarity, type, and stat magnitude for a single item.

use super::names::{random_description, random_name, PENDING_DESCRIPTION, PENDING_NAME};
use super::types::{Item, ItemType, Rarity};
use crate::constants::{DROP_RATE_EPIC, DROP_RATE_LEGENDARY, DROP_RATE_RARE};
use rand::Rng;
use uuid::Uuid;

/// Rolls item rarity against the cumulative drop table.
///
/// The legendary boundary is checked first, then epic, then rare;
/// everything past the rare boundary is common. Order matters: the
/// boundaries are cumulative sums of the table in `constants.rs`.
pub fn roll_rarity(rng: &mut impl Rng) -> Rarity {
    let roll = rng.gen::<f64>();
    if roll < DROP_RATE_LEGENDARY {
        Rarity::Legendary
    } else if roll < DROP_RATE_LEGENDARY + DROP_RATE_EPIC {
        Rarity::Epic
    } else if roll < DROP_RATE_LEGENDARY + DROP_RATE_EPIC + DROP_RATE_RARE {
        Rarity::Rare
    } else {
        Rarity::Common
    }
}

/// Rolls item type uniformly via two cut-points.
pub fn roll_item_type(rng: &mut impl Rng) -> ItemType {
    let roll = rng.gen::<f64>();
    if roll > 2.0 / 3.0 {
        ItemType::Armor
    } else if roll > 1.0 / 3.0 {
        ItemType::Accessory
    } else {
        ItemType::Weapon
    }
}

/// Rolls a complete item scaled to the given player level.
///
/// Exactly one stat field is populated based on the rolled type:
/// weapons get flat damage, armor gets flat "defense" (which the combat
/// resolver treats as damage), accessories get a fractional gold
/// multiplier. Legendaries come back with placeholder name text — the
/// caller is expected to request enrichment keyed on the item id.
pub fn roll_item(player_level: u32, rng: &mut impl Rng) -> Item {
    let rarity = roll_rarity(rng);
    let item_type = roll_item_type(rng);
    let item_level = player_level.max(1);
    let mult = rarity.stat_multiplier();

    let mut item = Item {
        id: Uuid::new_v4(),
        name: PENDING_NAME.to_string(),
        description: PENDING_DESCRIPTION.to_string(),
        rarity,
        item_type,
        item_level,
        damage_bonus: 0,
        defense_bonus: 0,
        gold_multiplier: 0.0,
    };

    match item_type {
        ItemType::Weapon => {
            let base = (item_level as u64 * 2).max(1) as f64;
            item.damage_bonus = (base * mult) as u64;
        }
        ItemType::Armor => {
            let base = (item_level as f64 * 1.5).max(1.0);
            item.defense_bonus = (base * mult) as u64;
        }
        ItemType::Accessory => {
            item.gold_multiplier = 0.05 * mult;
        }
    }

    if rarity != Rarity::Legendary {
        item.name = random_name(item_type, rarity, rng).to_string();
        item.description = random_description(rng).to_string();
    }

    item
}
