//! Items: types, the gacha roll, name pools, and the equipped set.

pub mod equipment;
pub mod generation;
pub mod names;
pub mod types;

pub use equipment::Equipment;
pub use generation::{roll_item, roll_item_type, roll_rarity};
pub use types::{Item, ItemType, Rarity};
