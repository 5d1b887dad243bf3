use super::types::{Item, ItemType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The player's equipped items — at most one per type.
///
/// There is no bag: a rolled item is either equipped (replacing and
/// selling the previous same-type item) or sold on the spot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<Item>,
    pub armor: Option<Item>,
    pub accessory: Option<Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, item_type: ItemType) -> &Option<Item> {
        match item_type {
            ItemType::Weapon => &self.weapon,
            ItemType::Armor => &self.armor,
            ItemType::Accessory => &self.accessory,
        }
    }

    /// Puts `item` in its type's slot, returning whatever it replaced.
    pub fn equip(&mut self, item: Item) -> Option<Item> {
        let slot = match item.item_type {
            ItemType::Weapon => &mut self.weapon,
            ItemType::Armor => &mut self.armor,
            ItemType::Accessory => &mut self.accessory,
        };
        slot.replace(item)
    }

    /// Removes and returns the equipped item with the given id, if any.
    pub fn remove(&mut self, id: Uuid) -> Option<Item> {
        for slot in [&mut self.weapon, &mut self.armor, &mut self.accessory] {
            if slot.as_ref().is_some_and(|item| item.id == id) {
                return slot.take();
            }
        }
        None
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &Item> {
        [&self.weapon, &self.armor, &self.accessory]
            .into_iter()
            .filter_map(|slot| slot.as_ref())
    }

    /// Total flat strike bonus from all equipped items.
    pub fn strike_bonus(&self) -> u64 {
        self.iter_equipped().map(|item| item.strike_bonus()).sum()
    }

    /// Total fractional gold bonus from all equipped items.
    pub fn gold_multiplier(&self) -> f64 {
        self.iter_equipped().map(|item| item.gold_multiplier).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::types::Rarity;

    fn make_item(item_type: ItemType, damage: u64) -> Item {
        Item {
            id: Uuid::new_v4(),
            name: "Test".to_string(),
            description: String::new(),
            rarity: Rarity::Common,
            item_type,
            item_level: 1,
            damage_bonus: damage,
            defense_bonus: 0,
            gold_multiplier: 0.0,
        }
    }

    #[test]
    fn test_equip_replaces_same_type_only() {
        let mut eq = Equipment::new();
        assert!(eq.equip(make_item(ItemType::Weapon, 5)).is_none());
        assert!(eq.equip(make_item(ItemType::Armor, 0)).is_none());

        // A new weapon displaces only the weapon.
        let replaced = eq.equip(make_item(ItemType::Weapon, 9));
        assert_eq!(replaced.unwrap().damage_bonus, 5);
        assert!(eq.armor.is_some());
        assert_eq!(eq.iter_equipped().count(), 2);
    }

    #[test]
    fn test_remove_by_id() {
        let mut eq = Equipment::new();
        let item = make_item(ItemType::Accessory, 0);
        let id = item.id;
        eq.equip(item);

        assert!(eq.remove(Uuid::new_v4()).is_none());
        assert!(eq.remove(id).is_some());
        assert!(eq.accessory.is_none());
    }

    #[test]
    fn test_strike_bonus_sums_damage_and_defense() {
        let mut eq = Equipment::new();
        eq.equip(make_item(ItemType::Weapon, 7));
        let mut armor = make_item(ItemType::Armor, 0);
        armor.defense_bonus = 4;
        eq.equip(armor);
        assert_eq!(eq.strike_bonus(), 11);
    }

    #[test]
    fn test_gold_multiplier_sums_accessories() {
        let mut eq = Equipment::new();
        let mut acc = make_item(ItemType::Accessory, 0);
        acc.gold_multiplier = 0.15;
        eq.equip(acc);
        assert!((eq.gold_multiplier() - 0.15).abs() < 1e-9);
    }
}
