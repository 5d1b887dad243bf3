pub mod achievements;
pub mod combat;
pub mod constants;
pub mod effects;
pub mod enrichment;
pub mod events;
pub mod game;
pub mod game_state;
pub mod items;
pub mod lootbox;
pub mod monsters;
pub mod prestige;
pub mod rewards;
pub mod save_manager;
pub mod shop;
pub mod ui;
pub mod zones;
