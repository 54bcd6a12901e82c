// Rules configuration, stored as JSON next to the save data.
use crate::error::GameError;
use crate::tracks::{MAX_GUTS, MAX_THREAT};
use crate::wounds::{BLEEDING_CAPACITY, BROKEN_CAPACITY, BRUISED_BASE, WoundCapacity};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

pub const SETTINGS_PATH: &str = "./data/settings.json";

// Define a structure to hold rules settings with serialization and deserialization capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub max_stress: i32,
    pub max_threat: i32,
    pub max_guts: i32,
    pub bruised_base: u8, // Bruised slots on top of grit.
    pub bleeding_capacity: u8,
    pub broken_capacity: u8,
    pub cascade_wounds: bool, // Spill wounds from a full tier into the next worse one.
    pub debug_mode: bool,     // Log every roll.
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            max_stress: 10,
            max_threat: MAX_THREAT,
            max_guts: MAX_GUTS,
            bruised_base: BRUISED_BASE,
            bleeding_capacity: BLEEDING_CAPACITY,
            broken_capacity: BROKEN_CAPACITY,
            cascade_wounds: true,
            debug_mode: false,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load() -> Result<Self, GameError> {
        Self::load_settings_from_file(SETTINGS_PATH)
    }

    pub fn save(&self) -> Result<(), GameError> {
        self.save_to_file(SETTINGS_PATH)
    }

    pub fn load_settings_from_file(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let data = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&data)?;
        Ok(settings)
    }

    // Fall back to the defaults when there is no settings file yet.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_settings_from_file(path)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), GameError> {
        let path = path.as_ref();
        let data = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(path)?;
        file.write_all(data.as_bytes())?;
        Ok(())
    }

    pub fn wound_capacity(&self, grit: u8) -> WoundCapacity {
        WoundCapacity {
            bruised: grit.saturating_add(self.bruised_base),
            bleeding: self.bleeding_capacity,
            broken: self.broken_capacity,
        }
    }
}
