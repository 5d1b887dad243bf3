//! Loot box resolution.

use crate::constants::{
    LOOTBOX_GOLD_CHANCE, LOOTBOX_GOLD_REWARD_FACTOR, LOOTBOX_SOUL_CHANCE,
};
use crate::items::{roll_item, Item};
use rand::Rng;

/// What a single opened loot box produced.
#[derive(Debug, Clone)]
pub enum LootOutcome {
    Gold(u64),
    Soul,
    Item(Item),
}

/// Resolves one loot box. Gold payouts scale with the active monster's
/// bounty so boxes stay relevant as the player climbs; item payouts go
/// through the normal gacha roll at the player's level.
pub fn roll_loot_box(
    monster_gold_reward: u64,
    player_level: u32,
    rng: &mut impl Rng,
) -> LootOutcome {
    let roll: f64 = rng.gen();
    if roll < LOOTBOX_GOLD_CHANCE {
        let spread: f64 = rng.gen();
        let gold =
            (monster_gold_reward as f64 * LOOTBOX_GOLD_REWARD_FACTOR * (1.0 + spread)) as u64;
        LootOutcome::Gold(gold)
    } else if roll < LOOTBOX_GOLD_CHANCE + LOOTBOX_SOUL_CHANCE {
        LootOutcome::Soul
    } else {
        LootOutcome::Item(roll_item(player_level, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn gold_payout_stays_within_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            if let LootOutcome::Gold(g) = roll_loot_box(50, 5, &mut rng) {
                // 50 * 20 * [1.0, 2.0)
                assert!((1000..2000).contains(&g), "gold {} out of range", g);
            }
        }
    }

    #[test]
    fn outcome_mix_roughly_matches_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let mut gold = 0u32;
        let mut souls = 0u32;
        let mut items = 0u32;
        for _ in 0..10_000 {
            match roll_loot_box(10, 3, &mut rng) {
                LootOutcome::Gold(_) => gold += 1,
                LootOutcome::Soul => souls += 1,
                LootOutcome::Item(_) => items += 1,
            }
        }
        assert!((4700..5300).contains(&gold), "gold count {}", gold);
        assert!((2700..3300).contains(&souls), "soul count {}", souls);
        assert!((1700..2300).contains(&items), "item count {}", items);
    }

    #[test]
    fn item_outcome_rolls_at_player_level() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        loop {
            if let LootOutcome::Item(item) = roll_loot_box(10, 42, &mut rng) {
                assert_eq!(item.item_level, 42);
                break;
            }
        }
    }
}
