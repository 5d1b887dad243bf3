use crate::constants::SELL_PRICE_PER_LEVEL;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Rare = 1,
    Epic = 2,
    Legendary = 3,
}

impl Rarity {
    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Multiplier applied to an item's base stat magnitude.
    pub fn stat_multiplier(&self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Rare => 3.0,
            Rarity::Epic => 8.0,
            Rarity::Legendary => 20.0,
        }
    }

    /// Multiplier applied to an item's sell price.
    pub fn sell_multiplier(&self) -> u64 {
        match self {
            Rarity::Common => 1,
            Rarity::Rare => 2,
            Rarity::Epic => 5,
            Rarity::Legendary => 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    Weapon,
    Armor,
    Accessory,
}

impl ItemType {
    pub const ALL: [ItemType; 3] = [ItemType::Weapon, ItemType::Armor, ItemType::Accessory];

    pub fn name(&self) -> &'static str {
        match self {
            ItemType::Weapon => "Weapon",
            ItemType::Armor => "Armor",
            ItemType::Accessory => "Accessory",
        }
    }
}

/// A piece of equipment produced by the gacha.
///
/// Exactly one of `damage_bonus`, `defense_bonus`, `gold_multiplier` is
/// non-zero, determined by `item_type`. Armor's `defense_bonus` acts as
/// extra click damage, not mitigation — inherited game behavior, kept
/// deliberately (see DESIGN.md).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub rarity: Rarity,
    pub item_type: ItemType,
    /// Player level at roll time; scales stats and sell price.
    pub item_level: u32,
    pub damage_bonus: u64,
    pub defense_bonus: u64,
    pub gold_multiplier: f64,
}

impl Item {
    /// Flat damage this item contributes to a strike. Defense counts too.
    pub fn strike_bonus(&self) -> u64 {
        self.damage_bonus + self.defense_bonus
    }

    /// Gold paid out when this item is sold or discarded.
    pub fn sell_price(&self) -> u64 {
        SELL_PRICE_PER_LEVEL * self.item_level.max(1) as u64 * self.rarity.sell_multiplier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(rarity: Rarity, item_level: u32) -> Item {
        Item {
            id: Uuid::new_v4(),
            name: "Test".to_string(),
            description: String::new(),
            rarity,
            item_type: ItemType::Weapon,
            item_level,
            damage_bonus: 4,
            defense_bonus: 0,
            gold_multiplier: 0.0,
        }
    }

    #[test]
    fn test_sell_price_scales_with_level_and_rarity() {
        assert_eq!(make_item(Rarity::Common, 1).sell_price(), 10);
        assert_eq!(make_item(Rarity::Rare, 3).sell_price(), 60);
        assert_eq!(make_item(Rarity::Epic, 2).sell_price(), 100);
        assert_eq!(make_item(Rarity::Legendary, 5).sell_price(), 1000);
    }

    #[test]
    fn test_sell_price_clamps_zero_level() {
        // Level 0 items from very old saves still sell for something.
        assert_eq!(make_item(Rarity::Common, 0).sell_price(), 10);
    }

    #[test]
    fn test_strike_bonus_counts_defense() {
        let mut item = make_item(Rarity::Common, 1);
        item.defense_bonus = 6;
        assert_eq!(item.strike_bonus(), 10);
    }
}
