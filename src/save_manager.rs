//! Saving and loading with a checksummed binary format, plus the
//! load-time fixups: respawning an encounter and crediting offline
//! earnings.

use crate::constants::{
    AUTOSAVE_INTERVAL_SECONDS, OFFLINE_EFFICIENCY, OFFLINE_MIN_GAP_SECONDS, SAVE_VERSION_MAGIC,
};
use crate::events::GameEvent;
use crate::game_state::GameState;
use directories::ProjectDirs;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Manages saving and loading game state with checksum verification.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Sets up the save directory at the platform's config location.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "loot-lord").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            save_path: config_dir.join("save.dat"),
        })
    }

    /// A SaveManager writing to a unique temporary directory.
    #[cfg(test)]
    fn new_for_test() -> io::Result<Self> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

        let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let temp_dir = std::env::temp_dir().join(format!("loot-lord-test-{}", test_id));
        fs::create_dir_all(&temp_dir)?;

        Ok(Self {
            save_path: temp_dir.join("save.dat"),
        })
    }

    /// Saves the game state to disk.
    ///
    /// File format:
    /// - Version magic (8 bytes)
    /// - Data length (4 bytes)
    /// - Serialized game state (variable length)
    /// - SHA256 checksum (32 bytes)
    pub fn save(&self, state: &GameState) -> io::Result<()> {
        let data =
            bincode::serialize(state).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let data_len = data.len() as u32;

        let mut hasher = Sha256::new();
        hasher.update(SAVE_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(&data);
        let checksum = hasher.finalize();

        let mut file = fs::File::create(&self.save_path)?;
        file.write_all(&SAVE_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&data)?;
        file.write_all(&checksum)?;

        Ok(())
    }

    /// Loads the game state from disk with checksum verification.
    ///
    /// Returns an error if the file doesn't exist, the version magic is
    /// wrong, the checksum fails, or the data cannot be deserialized.
    pub fn load(&self) -> io::Result<GameState> {
        let mut file = fs::File::open(&self.save_path)?;

        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        let version = u64::from_le_bytes(version_bytes);

        if version != SAVE_VERSION_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Invalid save version: expected 0x{:016X}, got 0x{:016X}",
                    SAVE_VERSION_MAGIC, version
                ),
            ));
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let data_len = u32::from_le_bytes(length_bytes);

        let mut data = vec![0u8; data_len as usize];
        file.read_exact(&mut data)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(length_bytes);
        hasher.update(&data);
        let computed_checksum = hasher.finalize();

        if stored_checksum != computed_checksum.as_slice() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Checksum verification failed",
            ));
        }

        bincode::deserialize::<GameState>(&data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Checks if a save file exists.
    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    /// Whether enough play time has passed since the last write.
    pub fn autosave_due(&self, state: &GameState, now_ms: i64) -> bool {
        now_ms - state.last_save_time >= AUTOSAVE_INTERVAL_SECONDS as i64 * 1000
    }
}

/// Loads the save if one exists and is intact, otherwise starts fresh.
/// Either way the state comes back ready to play: encounter respawned
/// at the player's level, effects current, offline gold credited.
pub fn load_or_new(manager: &SaveManager, now_ms: i64) -> (GameState, Vec<GameEvent>) {
    let mut state = match manager.load() {
        Ok(state) => state,
        Err(_) => return (GameState::new(now_ms), Vec::new()),
    };

    let mut events = Vec::new();
    if let Some(gold) = offline_gold(&state, now_ms) {
        state.stats.earn_gold(gold);
        events.push(GameEvent::OfflineGold {
            gold,
            message: format!("Your hero kept fighting: +{} gold while away", gold),
        });
    }

    state.enter_encounter(state.stats.level);
    state.last_save_time = now_ms;
    state.refresh_effects(now_ms);
    (state, events)
}

/// Gold owed for the time between the last save and now. Requires a
/// real absence and a running auto attacker; pays out at half rate.
fn offline_gold(state: &GameState, now_ms: i64) -> Option<u64> {
    let elapsed_secs = (now_ms - state.last_save_time) / 1000;
    if elapsed_secs <= OFFLINE_MIN_GAP_SECONDS || state.stats.auto_dps == 0 {
        return None;
    }
    let earned =
        (state.stats.auto_dps as f64 * elapsed_secs as f64 * OFFLINE_EFFICIENCY) as u64;
    (earned > 0).then_some(earned)
}
