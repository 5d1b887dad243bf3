//! Hit resolution for clicks and the auto attacker.

use crate::constants::AUTO_TICK_INVENTORY_EFFICIENCY;
use crate::events::GameEvent;
use crate::game_state::GameState;
use crate::rewards::on_monster_death;
use rand::Rng;

/// Applies one hit to the active monster. Clicks get the full gear
/// bonus, auto ticks only a fraction of it. Kills cascade straight
/// into reward handling so callers see the whole exchange as events.
pub fn resolve_hit(
    state: &mut GameState,
    base_amount: u64,
    is_click: bool,
    now_ms: i64,
    rng: &mut impl Rng,
) -> Vec<GameEvent> {
    let gear = state.equipment.strike_bonus() as f64;
    let gear = if is_click {
        gear
    } else {
        gear * AUTO_TICK_INVENTORY_EFFICIENCY
    };

    let mut raw = base_amount as f64 + gear;
    let was_crit = rng.gen::<f64>() < state.stats.crit_chance;
    if was_crit {
        raw *= state.stats.crit_multiplier;
    }
    let damage = (raw * state.effects.damage_mult) as u64;

    let mut events = vec![GameEvent::Hit {
        damage,
        was_crit,
        is_click,
    }];

    state.monster.hp = state.monster.hp.saturating_sub(damage);
    if state.monster.hp == 0 {
        let dead = state.monster.clone();
        events.extend(on_monster_death(state, &dead, now_ms, rng));
    }
    events
}
