use chrono::Utc;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use loot_lord::constants::TICK_INTERVAL_MS;
use loot_lord::enrichment::{enrich_or_fallback, fallback_details, HttpEnricher, ItemDetails};
use loot_lord::events::GameEvent;
use loot_lord::game::{handle_command, tick, Command, ItemResolution, UpgradeKind};
use loot_lord::game_state::{GameState, Mode};
use loot_lord::items::{ItemType, Rarity};
use loot_lord::prestige::PrestigeUpgrade;
use loot_lord::save_manager::{load_or_new, SaveManager};
use loot_lord::shop::ShopItem;
use loot_lord::ui::draw_ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};
use uuid::Uuid;

const LOG_CAPACITY: usize = 100;
const ENRICH_URL_ENV: &str = "LOOT_LORD_ENRICH_URL";

struct EnrichJob {
    item_id: Uuid,
    level: u32,
    item_type: ItemType,
    rarity: Rarity,
}

/// Runs enrichment requests off the render thread. Without a
/// configured endpoint every job resolves to the canned fallback.
fn spawn_enrichment_worker(
    jobs: mpsc::Receiver<EnrichJob>,
    results: mpsc::Sender<(Uuid, ItemDetails)>,
) {
    let enricher = std::env::var(ENRICH_URL_ENV).ok().map(HttpEnricher::new);
    std::thread::spawn(move || {
        for job in jobs {
            let details = match &enricher {
                Some(enricher) => {
                    enrich_or_fallback(enricher, job.level, job.item_type, job.rarity)
                }
                None => fallback_details(job.level),
            };
            if results.send((job.item_id, details)).is_err() {
                break;
            }
        }
    });
}

fn push_log(log: &mut Vec<String>, message: String) {
    log.push(message);
    if log.len() > LOG_CAPACITY {
        log.remove(0);
    }
}

fn record_events(events: Vec<GameEvent>, log: &mut Vec<String>, jobs: &mpsc::Sender<EnrichJob>) {
    for event in events {
        match event {
            GameEvent::Hit {
                damage, was_crit, ..
            } => {
                if was_crit {
                    push_log(log, format!("Critical hit for {}!", damage));
                }
            }
            GameEvent::EnrichmentRequested {
                item_id,
                level,
                item_type,
                rarity,
            } => {
                let _ = jobs.send(EnrichJob {
                    item_id,
                    level,
                    item_type,
                    rarity,
                });
            }
            GameEvent::MonsterDied { message, .. }
            | GameEvent::LeveledUp { message, .. }
            | GameEvent::BossFailed { message, .. }
            | GameEvent::RandomEvent { message, .. }
            | GameEvent::AchievementUnlocked { message, .. }
            | GameEvent::ItemRevealed { message, .. }
            | GameEvent::ItemEquipped { message, .. }
            | GameEvent::ItemSold { message, .. }
            | GameEvent::LootBoxGold { message, .. }
            | GameEvent::LootBoxSoul { message }
            | GameEvent::LootBoxItem { message }
            | GameEvent::Purchased { message }
            | GameEvent::ZoneEntered { message, .. }
            | GameEvent::StoryOutcome { message }
            | GameEvent::OfflineGold { message, .. }
            | GameEvent::PrestigeCompleted { message, .. } => push_log(log, message),
        }
    }
}

/// Maps a key press to a command given the current mode. Mode gating
/// is enforced again inside the engine; this only resolves key reuse
/// between modal and idle bindings.
fn command_for_key(code: KeyCode, state: &GameState) -> Option<Command> {
    match state.mode {
        Mode::AwaitingBossIntro => {
            return matches!(code, KeyCode::Enter | KeyCode::Char(' '))
                .then_some(Command::AcknowledgeBossIntro);
        }
        Mode::AwaitingPendingItem => {
            return match code {
                KeyCode::Char('e') => Some(Command::ResolvePendingItem(ItemResolution::Equip)),
                KeyCode::Char('d') => {
                    Some(Command::ResolvePendingItem(ItemResolution::Discard))
                }
                _ => None,
            };
        }
        Mode::AwaitingStoryChoice => {
            return match code {
                KeyCode::Char(c @ '1'..='9') => {
                    Some(Command::ChooseStory(c as usize - '1' as usize))
                }
                _ => None,
            };
        }
        Mode::Paused => {
            return matches!(code, KeyCode::Char('p')).then_some(Command::TogglePause);
        }
        Mode::Idle => {}
    }

    match code {
        KeyCode::Char(' ') => Some(Command::ClickAttack),
        KeyCode::Char('u') => Some(Command::BuyUpgrade(UpgradeKind::Click)),
        KeyCode::Char('i') => Some(Command::BuyUpgrade(UpgradeKind::Auto)),
        KeyCode::Char('g') => Some(Command::PullGacha),
        KeyCode::Char('b') => Some(Command::BuyLootBox),
        KeyCode::Char('o') => Some(Command::OpenLootBoxes { count: 1 }),
        KeyCode::Char('O') => Some(Command::OpenLootBoxes { count: 10 }),
        KeyCode::Char('1') => Some(Command::BuyShopItem(ShopItem::DamagePotion)),
        KeyCode::Char('2') => Some(Command::BuyShopItem(ShopItem::GoldPotion)),
        KeyCode::Char('3') => Some(Command::BuyShopItem(ShopItem::CritChance)),
        KeyCode::Char('4') => Some(Command::BuyShopItem(ShopItem::CritDamage)),
        KeyCode::Char('z') => sell_slot(state, ItemType::Weapon),
        KeyCode::Char('x') => sell_slot(state, ItemType::Armor),
        KeyCode::Char('c') => sell_slot(state, ItemType::Accessory),
        KeyCode::Char('P') => Some(Command::PerformPrestige),
        KeyCode::Char('d') => Some(Command::BuyPrestigeUpgrade(PrestigeUpgrade::Damage)),
        KeyCode::Char('f') => Some(Command::BuyPrestigeUpgrade(PrestigeUpgrade::Gold)),
        KeyCode::Char('p') => Some(Command::TogglePause),
        _ => None,
    }
}

fn sell_slot(state: &GameState, item_type: ItemType) -> Option<Command> {
    state
        .equipment
        .get(item_type)
        .as_ref()
        .map(|item| Command::SellEquipped(item.id))
}

fn main() -> io::Result<()> {
    let save_manager = SaveManager::new()?;
    let now_ms = Utc::now().timestamp_millis();
    let (mut state, load_events) = load_or_new(&save_manager, now_ms);

    let (jobs_tx, jobs_rx) = mpsc::channel();
    let (results_tx, results_rx) = mpsc::channel();
    spawn_enrichment_worker(jobs_rx, results_tx);

    let mut log = Vec::new();
    push_log(&mut log, "Welcome back to the dungeon.".to_string());
    record_events(load_events, &mut log, &jobs_tx);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut rng = rand::thread_rng();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| draw_ui(frame, &state, &log))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        code => {
                            if let Some(command) = command_for_key(code, &state) {
                                let now_ms = Utc::now().timestamp_millis();
                                let events =
                                    handle_command(&mut state, command, now_ms, &mut rng);
                                record_events(events, &mut log, &jobs_tx);
                            }
                        }
                    }
                }
            }
        }

        while let Ok((item_id, details)) = results_rx.try_recv() {
            let now_ms = Utc::now().timestamp_millis();
            let events = handle_command(
                &mut state,
                Command::ApplyEnrichment { item_id, details },
                now_ms,
                &mut rng,
            );
            record_events(events, &mut log, &jobs_tx);
        }

        if last_tick.elapsed() >= Duration::from_millis(TICK_INTERVAL_MS) {
            last_tick = Instant::now();
            let now_ms = Utc::now().timestamp_millis();
            let events = tick(&mut state, now_ms, &mut rng);
            record_events(events, &mut log, &jobs_tx);

            if save_manager.autosave_due(&state, now_ms) {
                state.last_save_time = now_ms;
                if save_manager.save(&state).is_ok() {
                    push_log(&mut log, "Game saved.".to_string());
                }
            }
        }
    }

    state.last_save_time = Utc::now().timestamp_millis();
    save_manager.save(&state)?;

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    Ok(())
}
