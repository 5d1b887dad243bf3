//! Static name and description pools for non-legendary items.
//!
//! Legendary items start with placeholder text and are renamed by the
//! flavor-text service (see [`crate::enrichment`]); everything below
//! legendary draws from these pools synchronously.

use super::types::{ItemType, Rarity};
use rand::Rng;

pub fn name_pool(item_type: ItemType, rarity: Rarity) -> &'static [&'static str] {
    match (item_type, rarity) {
        (ItemType::Weapon, Rarity::Common) => &[
            "Rusty Sword",
            "Wooden Club",
            "Broken Dagger",
            "Old Scythe",
            "Stone Hammer",
        ],
        (ItemType::Weapon, Rarity::Rare) => &[
            "Steel Gladius",
            "Sharpened Axe",
            "Guard's Spear",
            "War Hammer",
            "Hunting Bow",
        ],
        (ItemType::Weapon, _) => &[
            "Dragon Sword",
            "Berserker Axe",
            "Shadow Blades",
            "Storm Hammer",
            "Archmage Staff",
        ],
        (ItemType::Armor, Rarity::Common) => &[
            "Tattered Rags",
            "Leather Jacket",
            "Torn Cloak",
            "Wooden Shield",
            "Old Hat",
        ],
        (ItemType::Armor, Rarity::Rare) => &[
            "Chainmail",
            "Steel Breastplate",
            "Knight's Helm",
            "Iron Boots",
            "Reinforced Shield",
        ],
        (ItemType::Armor, _) => &[
            "Mithril Armor",
            "Cloak of Shadows",
            "Helm of Dread",
            "Boots of Speed",
            "Aegis Shield",
        ],
        (ItemType::Accessory, Rarity::Common) => &[
            "Copper Ring",
            "Rope Amulet",
            "Glass Beads",
            "Plain Bracelet",
            "Old Coin",
        ],
        (ItemType::Accessory, Rarity::Rare) => &[
            "Silver Signet",
            "Lucky Amulet",
            "Fang Necklace",
            "Bracelet of Might",
            "Ring of Agility",
        ],
        (ItemType::Accessory, _) => &[
            "Golden Signet",
            "Dragon's Eye",
            "Amulet of Immortality",
            "Ring of Dominion",
            "Titan's Heart",
        ],
    }
}

pub const DESCRIPTION_POOL: [&str; 8] = [
    "Simple, but dependable.",
    "Smells of dust and old age.",
    "Looks like it has seen some use.",
    "Better than nothing.",
    "Standard-issue beginner gear.",
    "Glows faintly in the dark.",
    "Made by a true craftsman.",
    "Bears the marks of old battles.",
];

/// Placeholder shown on a legendary while the flavor service works.
pub const PENDING_NAME: &str = "Identifying...";
pub const PENDING_DESCRIPTION: &str = "...";

pub fn random_name(item_type: ItemType, rarity: Rarity, rng: &mut impl Rng) -> &'static str {
    let pool = name_pool(item_type, rarity);
    pool[rng.gen_range(0..pool.len())]
}

pub fn random_description(rng: &mut impl Rng) -> &'static str {
    DESCRIPTION_POOL[rng.gen_range(0..DESCRIPTION_POOL.len())]
}
