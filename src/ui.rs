//! Terminal rendering. Pure view code: reads `GameState` plus the
//! message log, never mutates either.

use crate::game_state::{GameState, Mode};
use crate::items::{ItemType, Rarity};
use crate::prestige::potential_souls;
use crate::shop::{shop_cost, ShopItem};
use crate::zones::zone_for_level;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

fn rarity_color(rarity: Rarity) -> Color {
    match rarity {
        Rarity::Common => Color::Gray,
        Rarity::Rare => Color::Blue,
        Rarity::Epic => Color::Magenta,
        Rarity::Legendary => Color::Yellow,
    }
}

pub fn draw_ui(frame: &mut Frame, state: &GameState, log: &[String]) {
    let size = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // header
            Constraint::Length(9),  // monster
            Constraint::Min(10),    // player / equipment / shop
            Constraint::Length(8),  // log
            Constraint::Length(1),  // key hints
        ])
        .split(size);

    draw_header(frame, chunks[0], state);
    draw_monster(frame, chunks[1], state);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(chunks[2]);
    draw_player(frame, columns[0], state);
    draw_equipment(frame, columns[1], state);
    draw_shop(frame, columns[2], state);

    draw_log(frame, chunks[3], log);
    draw_hints(frame, chunks[4], state);

    match state.mode {
        Mode::AwaitingBossIntro => draw_boss_intro(frame, size, state),
        Mode::AwaitingPendingItem => draw_pending_item(frame, size, state),
        Mode::AwaitingStoryChoice => draw_story(frame, size, state),
        Mode::Paused => draw_pause(frame, size),
        Mode::Idle => {}
    }
}

fn draw_header(frame: &mut Frame, area: Rect, state: &GameState) {
    let zone = zone_for_level(state.stats.level);
    let line = Line::from(vec![
        Span::styled(
            " Loot Lord ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("| {} ", zone.name)),
        Span::styled(
            format!("| {} gold ", state.stats.gold),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!("| {} souls ", state.stats.souls),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(format!(
            "| {} loot boxes | prestige now: {} souls",
            state.stats.loot_boxes,
            potential_souls(&state.stats)
        )),
    ]);
    let block = Block::default().borders(Borders::ALL);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_monster(frame: &mut Frame, area: Rect, state: &GameState) {
    let monster = &state.monster;
    let title = if monster.is_boss {
        format!(" BOSS: {} (Lv.{}) ", monster.name, monster.level)
    } else {
        format!(" {} (Lv.{}) ", monster.name, monster.level)
    };
    let border_color = if monster.is_boss {
        Color::Red
    } else {
        Color::White
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let hp_ratio = if monster.max_hp == 0 {
        0.0
    } else {
        monster.hp as f64 / monster.max_hp as f64
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Red))
        .ratio(hp_ratio)
        .label(format!("{} / {} HP", monster.hp, monster.max_hp));
    frame.render_widget(gauge, rows[0]);

    frame.render_widget(
        Paragraph::new(format!("Bounty: {} gold", monster.gold_reward)),
        rows[1],
    );
    if monster.is_boss {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("Time left: {}s", monster.time_remaining),
                Style::default().fg(Color::Red),
            )),
            rows[2],
        );
    }
}

fn draw_player(frame: &mut Frame, area: Rect, state: &GameState) {
    let block = Block::default().borders(Borders::ALL).title(" Hero ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let xp_ratio = if state.stats.max_experience == 0 {
        0.0
    } else {
        (state.stats.experience as f64 / state.stats.max_experience as f64).min(1.0)
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(xp_ratio)
        .label(format!(
            "Lv.{}  {} / {} XP",
            state.stats.level, state.stats.experience, state.stats.max_experience
        ));
    frame.render_widget(gauge, rows[0]);

    let lines = vec![
        Line::from(format!(
            "Click damage: {}  (upgrade: {} gold)",
            state.stats.click_damage, state.costs.click
        )),
        Line::from(format!(
            "Auto damage:  {}  (upgrade: {} gold)",
            state.stats.auto_dps, state.costs.auto
        )),
        Line::from(format!(
            "Crit: {:.0}% chance, x{:.1} damage",
            state.stats.crit_chance * 100.0,
            state.stats.crit_multiplier
        )),
        Line::from(format!(
            "Multipliers: x{:.2} damage, x{:.2} gold",
            state.effects.damage_mult, state.effects.gold_mult
        )),
        Line::from(format!("Gacha pull: {} gold", state.stats.gacha_cost())),
        Line::from(format!(
            "Kills: {}  Legendaries: {}",
            state.stats.total_monsters_killed, state.stats.total_legendaries_found
        )),
    ];
    frame.render_widget(Paragraph::new(lines), rows[1]);
}

fn draw_equipment(frame: &mut Frame, area: Rect, state: &GameState) {
    let block = Block::default().borders(Borders::ALL).title(" Equipment ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for item_type in ItemType::ALL {
        let slot = state.equipment.get(item_type);
        let line = match slot {
            Some(item) => Line::from(vec![
                Span::raw(format!("{}: ", item_type.name())),
                Span::styled(
                    item.name.clone(),
                    Style::default().fg(rarity_color(item.rarity)),
                ),
                Span::raw(format!(" (+{})", item.strike_bonus())),
            ]),
            None => Line::from(format!("{}: -", item_type.name())),
        };
        lines.push(line);
    }
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "Strike bonus: +{}  Gold bonus: +{:.0}%",
        state.equipment.strike_bonus(),
        state.equipment.gold_multiplier() * 100.0
    )));
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_shop(frame: &mut Frame, area: Rect, state: &GameState) {
    let block = Block::default().borders(Borders::ALL).title(" Shop ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for (key, item) in ["1", "2", "3", "4"].iter().zip(ShopItem::ALL) {
        lines.push(Line::from(format!(
            "[{}] {} - {} gold",
            key,
            item.name(),
            shop_cost(state, item)
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "[P] Prestige for {} souls",
        potential_souls(&state.stats)
    )));
    lines.push(Line::from(
        "[d]/[f] Soul pact: +0.5x damage/gold (10 souls)",
    ));
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_log(frame: &mut Frame, area: Rect, log: &[String]) {
    let block = Block::default().borders(Borders::ALL).title(" Log ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = inner.height as usize;
    let lines: Vec<Line> = log
        .iter()
        .rev()
        .take(visible)
        .rev()
        .map(|m| Line::from(m.as_str()))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_hints(frame: &mut Frame, area: Rect, state: &GameState) {
    let text = match state.mode {
        Mode::AwaitingBossIntro => "Enter: face the boss",
        Mode::AwaitingPendingItem => "e: equip  d: discard",
        Mode::AwaitingStoryChoice => "1-3: choose",
        Mode::Paused => "p: resume  q: save & quit",
        Mode::Idle => {
            "Space: attack  u/i: upgrades  g: gacha  b/o/O: loot boxes  z/x/c: sell  p: pause  q: quit"
        }
    };
    frame.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray))),
        area,
    );
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

fn draw_boss_intro(frame: &mut Frame, area: Rect, state: &GameState) {
    let popup = centered_rect(50, 8, area);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" A boss blocks the path ");
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", state.monster.name),
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "  {} HP, {} seconds to bring it down.",
            state.monster.max_hp, state.monster.time_remaining
        )),
        Line::from(""),
        Line::from("  Press Enter to fight."),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn draw_pending_item(frame: &mut Frame, area: Rect, state: &GameState) {
    let popup = centered_rect(56, 10, area);
    frame.render_widget(Clear, popup);
    let Some(item) = state.pending_items.front() else {
        return;
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(rarity_color(item.rarity)))
        .title(format!(
            " New item ({} more waiting) ",
            state.pending_items.len().saturating_sub(1)
        ));
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {} [{}]", item.name, item.rarity.name()),
            Style::default()
                .fg(rarity_color(item.rarity))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("  {} Lv.{}", item.item_type.name(), item.item_level)),
        Line::from(format!(
            "  +{} strike, +{:.0}% gold",
            item.strike_bonus(),
            item.gold_multiplier * 100.0
        )),
        Line::from(format!("  {}", item.description)),
        Line::from(""),
        Line::from(format!(
            "  [e] Equip    [d] Discard for {} gold",
            item.sell_price()
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn draw_story(frame: &mut Frame, area: Rect, state: &GameState) {
    let zone = zone_for_level(state.stats.level);
    let popup = centered_rect(64, (zone.choices.len() as u16) + 8, area);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", zone.name));
    let mut lines = vec![
        Line::from(""),
        Line::from(format!("  {}", zone.description)),
        Line::from(format!("  {}", zone.mission)),
        Line::from(""),
    ];
    for (i, choice) in zone.choices.iter().enumerate() {
        lines.push(Line::from(format!("  [{}] {}", i + 1, choice.text)));
    }
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn draw_pause(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(30, 5, area);
    frame.render_widget(Clear, popup);
    let block = Block::default().borders(Borders::ALL).title(" Paused ");
    let lines = vec![
        Line::from(""),
        Line::from("  The dungeon waits."),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
