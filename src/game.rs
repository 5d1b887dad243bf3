//! Command handling and the once-per-second tick.
//!
//! All mutation enters through `handle_command` and `tick`. Commands
//! are gated by the current `Mode` so modal pauses (boss intro, item
//! decision, story choice) block combat input instead of racing it.

use crate::combat::resolve_hit;
use crate::constants::{
    GACHA_REVEAL_SECONDS, LOOTBOX_COST, LOOTBOX_SPIN_SECONDS, MAX_LOOTBOX_BATCH,
    UPGRADE_COST_GROWTH,
};
use crate::enrichment::ItemDetails;
use crate::events::GameEvent;
use crate::game_state::{GameState, Mode};
use crate::items::{roll_item, Item};
use crate::lootbox::{roll_loot_box, LootOutcome};
use crate::prestige::{buy_prestige_upgrade, perform_prestige, PrestigeUpgrade};
use crate::rewards::on_boss_timeout;
use crate::shop::{buy_shop_item, ShopItem};
use crate::zones::{zone_for_level, StoryReward};
use rand::Rng;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeKind {
    Click,
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemResolution {
    Equip,
    Discard,
}

/// Player intents. The UI translates key presses into these.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ClickAttack,
    BuyUpgrade(UpgradeKind),
    PullGacha,
    BuyLootBox,
    OpenLootBoxes { count: u32 },
    ResolvePendingItem(ItemResolution),
    SellEquipped(Uuid),
    BuyShopItem(ShopItem),
    ChooseStory(usize),
    AcknowledgeBossIntro,
    TogglePause,
    PerformPrestige,
    BuyPrestigeUpgrade(PrestigeUpgrade),
    /// Async callback from the enrichment worker. The id is the
    /// correlation token minted when the legendary was revealed.
    ApplyEnrichment { item_id: Uuid, details: ItemDetails },
}

pub fn handle_command(
    state: &mut GameState,
    command: Command,
    now_ms: i64,
    rng: &mut impl Rng,
) -> Vec<GameEvent> {
    // Modal commands first: each is valid in exactly one mode.
    match command {
        Command::ApplyEnrichment { item_id, details } => {
            return apply_enrichment(state, item_id, &details);
        }
        Command::TogglePause => {
            state.mode = match state.mode {
                Mode::Idle => Mode::Paused,
                Mode::Paused => Mode::Idle,
                other => other,
            };
            return Vec::new();
        }
        Command::AcknowledgeBossIntro => {
            if state.mode == Mode::AwaitingBossIntro {
                state.mode = Mode::Idle;
            }
            return Vec::new();
        }
        Command::ResolvePendingItem(resolution) => {
            if state.mode != Mode::AwaitingPendingItem {
                return Vec::new();
            }
            return resolve_pending_item(state, resolution, now_ms);
        }
        Command::ChooseStory(index) => {
            if state.mode != Mode::AwaitingStoryChoice {
                return Vec::new();
            }
            return choose_story(state, index, now_ms);
        }
        _ => {}
    }

    if state.mode != Mode::Idle {
        return Vec::new();
    }

    match command {
        Command::ClickAttack => resolve_hit(state, state.stats.click_damage, true, now_ms, rng),
        Command::BuyUpgrade(kind) => buy_upgrade(state, kind),
        Command::PullGacha => pull_gacha(state),
        Command::BuyLootBox => {
            if !state.stats.try_spend_gold(LOOTBOX_COST) {
                return Vec::new();
            }
            state.stats.loot_boxes += 1;
            vec![GameEvent::Purchased {
                message: format!("Loot box bought ({} owned)", state.stats.loot_boxes),
            }]
        }
        Command::OpenLootBoxes { count } => open_loot_boxes(state, count, now_ms, rng),
        Command::SellEquipped(id) => sell_equipped(state, id, now_ms),
        Command::BuyShopItem(item) => {
            if buy_shop_item(state, item, now_ms) {
                vec![GameEvent::Purchased {
                    message: format!("Bought {}", item.name()),
                }]
            } else {
                Vec::new()
            }
        }
        Command::PerformPrestige => perform_prestige(state, now_ms).unwrap_or_default(),
        Command::BuyPrestigeUpgrade(upgrade) => {
            buy_prestige_upgrade(state, upgrade, now_ms).unwrap_or_default()
        }
        // Handled above.
        Command::ApplyEnrichment { .. }
        | Command::TogglePause
        | Command::AcknowledgeBossIntro
        | Command::ResolvePendingItem(_)
        | Command::ChooseStory(_) => Vec::new(),
    }
}

/// Advances all one-second timers. No-op outside `Idle`: a paused or
/// modal game freezes gacha reveals, loot box spins, the auto attacker
/// and boss clocks alike.
pub fn tick(state: &mut GameState, now_ms: i64, rng: &mut impl Rng) -> Vec<GameEvent> {
    state.refresh_effects(now_ms);
    if state.mode != Mode::Idle {
        return Vec::new();
    }

    let mut events = Vec::new();

    if let Some(secs) = state.gacha_reveal_secs {
        if secs <= 1 {
            state.gacha_reveal_secs = None;
            let item = roll_item(state.stats.level, rng);
            reveal_item(state, item, now_ms, &mut events);
        } else {
            state.gacha_reveal_secs = Some(secs - 1);
        }
    }

    if state.mode == Mode::Idle {
        if let Some(secs) = state.lootbox_spin_secs {
            if secs <= 1 {
                state.lootbox_spin_secs = None;
                let outcome =
                    roll_loot_box(state.monster.gold_reward, state.stats.level, rng);
                apply_loot_outcome(state, outcome, now_ms, &mut events);
            } else {
                state.lootbox_spin_secs = Some(secs - 1);
            }
        }
    }

    if state.mode == Mode::Idle && state.stats.auto_dps > 0 {
        events.extend(resolve_hit(
            state,
            state.stats.auto_dps,
            false,
            now_ms,
            rng,
        ));
    }

    // The auto hit may have killed the boss and spawned a fresh
    // monster, so re-check before running the clock down.
    if state.mode == Mode::Idle && state.monster.is_boss {
        state.monster.time_remaining = state.monster.time_remaining.saturating_sub(1);
        if state.monster.time_remaining == 0 {
            events.extend(on_boss_timeout(state));
        }
    }

    events
}

fn buy_upgrade(state: &mut GameState, kind: UpgradeKind) -> Vec<GameEvent> {
    let cost = match kind {
        UpgradeKind::Click => state.costs.click,
        UpgradeKind::Auto => state.costs.auto,
    };
    if !state.stats.try_spend_gold(cost) {
        return Vec::new();
    }
    let message = match kind {
        UpgradeKind::Click => {
            state.stats.click_damage += 1;
            state.costs.click = (state.costs.click as f64 * UPGRADE_COST_GROWTH) as u64;
            format!("Click damage up ({})", state.stats.click_damage)
        }
        UpgradeKind::Auto => {
            state.stats.auto_dps += 1;
            state.costs.auto = (state.costs.auto as f64 * UPGRADE_COST_GROWTH) as u64;
            format!("Auto damage up ({})", state.stats.auto_dps)
        }
    };
    vec![GameEvent::Purchased { message }]
}

fn pull_gacha(state: &mut GameState) -> Vec<GameEvent> {
    if state.gacha_reveal_secs.is_some() {
        return Vec::new();
    }
    let cost = state.stats.gacha_cost();
    if !state.stats.try_spend_gold(cost) {
        return Vec::new();
    }
    state.gacha_reveal_secs = Some(GACHA_REVEAL_SECONDS);
    vec![GameEvent::Purchased {
        message: format!("Gacha pull for {} gold", cost),
    }]
}

fn open_loot_boxes(
    state: &mut GameState,
    count: u32,
    now_ms: i64,
    rng: &mut impl Rng,
) -> Vec<GameEvent> {
    if count == 0 || state.stats.loot_boxes == 0 {
        return Vec::new();
    }

    if count == 1 {
        if state.lootbox_spin_secs.is_some() {
            return Vec::new();
        }
        state.stats.loot_boxes -= 1;
        state.stats.total_loot_boxes_opened += 1;
        state.lootbox_spin_secs = Some(LOOTBOX_SPIN_SECONDS);
        return Vec::new();
    }

    let amount = count.min(MAX_LOOTBOX_BATCH).min(state.stats.loot_boxes);
    state.stats.loot_boxes -= amount;
    state.stats.total_loot_boxes_opened += amount as u64;

    let mut events = Vec::new();
    for _ in 0..amount {
        let outcome = roll_loot_box(state.monster.gold_reward, state.stats.level, rng);
        apply_loot_outcome(state, outcome, now_ms, &mut events);
    }
    events
}

fn apply_loot_outcome(
    state: &mut GameState,
    outcome: LootOutcome,
    now_ms: i64,
    events: &mut Vec<GameEvent>,
) {
    match outcome {
        LootOutcome::Gold(gold) => {
            state.stats.gold += gold;
            events.push(GameEvent::LootBoxGold {
                gold,
                message: format!("The box spills {} gold", gold),
            });
        }
        LootOutcome::Soul => {
            state.stats.souls += 1;
            events.push(GameEvent::LootBoxSoul {
                message: "A soul drifts out of the box".to_string(),
            });
        }
        LootOutcome::Item(item) => {
            events.push(GameEvent::LootBoxItem {
                message: "The box holds an item!".to_string(),
            });
            reveal_item(state, item, now_ms, events);
        }
    }
}

/// Shared tail of every item roll: legendary bookkeeping, the
/// enrichment request, and queueing the equip/discard decision.
fn reveal_item(state: &mut GameState, item: Item, now_ms: i64, events: &mut Vec<GameEvent>) {
    if item.rarity == crate::items::Rarity::Legendary {
        state.stats.total_legendaries_found += 1;
        for def in crate::achievements::evaluate_achievements(&mut state.stats) {
            events.push(GameEvent::AchievementUnlocked {
                id: def.id,
                message: format!("Achievement unlocked: {}", def.name),
            });
        }
        state.refresh_effects(now_ms);
        events.push(GameEvent::EnrichmentRequested {
            item_id: item.id,
            level: item.item_level,
            item_type: item.item_type,
            rarity: item.rarity,
        });
    }
    events.push(GameEvent::ItemRevealed {
        item_name: item.name.clone(),
        rarity: item.rarity,
        message: format!("{} {} revealed", item.rarity.name(), item.name),
    });
    state.queue_pending_item(item);
}

fn resolve_pending_item(
    state: &mut GameState,
    resolution: ItemResolution,
    now_ms: i64,
) -> Vec<GameEvent> {
    let Some(item) = state.pending_items.pop_front() else {
        state.mode = Mode::Idle;
        return Vec::new();
    };

    let mut events = Vec::new();
    match resolution {
        ItemResolution::Equip => {
            let name = item.name.clone();
            let replaced = state.equipment.equip(item);
            events.push(GameEvent::ItemEquipped {
                item_name: name.clone(),
                message: format!("Equipped {}", name),
            });
            if let Some(old) = replaced {
                let price = old.sell_price();
                state.stats.gold += price;
                events.push(GameEvent::ItemSold {
                    item_name: old.name.clone(),
                    price,
                    message: format!("{} sold for {} gold", old.name, price),
                });
            }
        }
        ItemResolution::Discard => {
            let price = item.sell_price();
            state.stats.gold += price;
            events.push(GameEvent::ItemSold {
                item_name: item.name.clone(),
                price,
                message: format!("{} sold for {} gold", item.name, price),
            });
        }
    }

    if state.pending_items.is_empty() {
        state.mode = Mode::Idle;
    }
    state.refresh_effects(now_ms);
    events
}

fn sell_equipped(state: &mut GameState, id: Uuid, now_ms: i64) -> Vec<GameEvent> {
    let Some(item) = state.equipment.remove(id) else {
        return Vec::new();
    };
    let price = item.sell_price();
    state.stats.gold += price;
    state.refresh_effects(now_ms);
    vec![GameEvent::ItemSold {
        item_name: item.name.clone(),
        price,
        message: format!("{} sold for {} gold", item.name, price),
    }]
}

fn choose_story(state: &mut GameState, index: usize, now_ms: i64) -> Vec<GameEvent> {
    let zone = zone_for_level(state.stats.level);
    let Some(choice) = zone.choices.get(index) else {
        return Vec::new();
    };

    match choice.reward {
        StoryReward::Gold(amount) => state.stats.gold += amount,
        StoryReward::DamageBuff(duration_ms) => state.buffs.extend_damage(now_ms, duration_ms),
        StoryReward::GoldBuff(duration_ms) => state.buffs.extend_gold(now_ms, duration_ms),
    }
    state.mode = Mode::Idle;
    state.refresh_effects(now_ms);
    vec![GameEvent::StoryOutcome {
        message: choice.outcome_text.to_string(),
    }]
}

/// Applies late-arriving flavor text to the pending legendary it was
/// minted for. If the item has already been resolved the details are
/// dropped on the floor.
pub fn apply_enrichment(
    state: &mut GameState,
    item_id: Uuid,
    details: &ItemDetails,
) -> Vec<GameEvent> {
    for item in state.pending_items.iter_mut() {
        if item.id == item_id {
            item.name = details.name.clone();
            item.description = details.description.clone();
            return vec![GameEvent::ItemRevealed {
                item_name: item.name.clone(),
                rarity: item.rarity,
                message: format!("The relic speaks its name: {}", item.name),
            }];
        }
    }
    Vec::new()
}
