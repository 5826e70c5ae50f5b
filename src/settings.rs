//! Settings persistence using TOML
//!
//! Stores settings in ~/.config/blockfall/settings.toml (or platform equivalent)

use crate::board::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::config::{DEFAULT_FALL_INTERVAL, DEFAULT_SOFT_DROP_INTERVAL, SessionConfig};
use crate::error::SettingsError;
use crate::score::DEFAULT_POINTS_PER_CELL;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// User settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Keybindings
    pub keys: KeyBindings,
    /// Board and gravity settings
    pub gameplay: GameplaySettings,
}

/// Key bindings (stored as strings for easy editing)
/// Each action can have one or more keys bound to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    #[serde(deserialize_with = "deserialize_keys", serialize_with = "serialize_keys")]
    pub move_left: Vec<String>,
    #[serde(deserialize_with = "deserialize_keys", serialize_with = "serialize_keys")]
    pub move_right: Vec<String>,
    #[serde(deserialize_with = "deserialize_keys", serialize_with = "serialize_keys")]
    pub rotate: Vec<String>,
    #[serde(deserialize_with = "deserialize_keys", serialize_with = "serialize_keys")]
    pub soft_drop: Vec<String>,
    #[serde(deserialize_with = "deserialize_keys", serialize_with = "serialize_keys")]
    pub quit: Vec<String>,
}

/// Deserialize keys as either a single string or array of strings
fn deserialize_keys<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct KeysVisitor;

    impl<'de> Visitor<'de> for KeysVisitor {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a string or array of strings")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![v.to_string()])
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            let mut keys = Vec::new();
            while let Some(key) = seq.next_element::<String>()? {
                keys.push(key);
            }
            Ok(keys)
        }
    }

    deserializer.deserialize_any(KeysVisitor)
}

/// Serialize keys: single key as string, multiple as array
fn serialize_keys<S>(keys: &Vec<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeSeq;

    if let [key] = keys.as_slice() {
        serializer.serialize_str(key)
    } else {
        let mut seq = serializer.serialize_seq(Some(keys.len()))?;
        for key in keys {
            seq.serialize_element(key)?;
        }
        seq.end()
    }
}

/// Board size, gravity and scoring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplaySettings {
    pub rows: usize,
    pub cols: usize,
    /// Gravity interval in milliseconds
    pub fall_interval_ms: u64,
    /// Gravity interval while soft drop is held, in milliseconds
    pub soft_drop_interval_ms: u64,
    pub points_per_cell: u64,
    /// Fixed piece sequence; random when absent
    pub seed: Option<u64>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_left: vec!["Left".to_string(), "a".to_string()],
            move_right: vec!["Right".to_string(), "d".to_string()],
            rotate: vec!["Up".to_string(), "w".to_string()],
            soft_drop: vec!["Down".to_string(), "s".to_string()],
            quit: vec!["q".to_string(), "Esc".to_string()],
        }
    }
}

impl Default for GameplaySettings {
    fn default() -> Self {
        Self {
            rows: BOARD_HEIGHT,
            cols: BOARD_WIDTH,
            fall_interval_ms: DEFAULT_FALL_INTERVAL.as_millis() as u64,
            soft_drop_interval_ms: DEFAULT_SOFT_DROP_INTERVAL.as_millis() as u64,
            points_per_cell: DEFAULT_POINTS_PER_CELL,
            seed: None,
        }
    }
}

impl GameplaySettings {
    /// Session parameters; validated when the game is built
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            rows: self.rows,
            cols: self.cols,
            fall_interval: Duration::from_millis(self.fall_interval_ms),
            soft_drop_interval: Duration::from_millis(self.soft_drop_interval_ms),
            points_per_cell: self.points_per_cell,
        }
    }
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "blockfall", "blockfall")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the settings file path
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("settings.toml"))
    }

    /// Load settings from the platform config file, or fall back to defaults
    pub fn load() -> Self {
        match Self::settings_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load settings from a specific file, or fall back to defaults
    pub fn load_from(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => return Self::default(),
        };
        Self::parse(&contents).unwrap_or_else(|e| {
            warn!("ignoring malformed settings at {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Load settings, writing the defaults out on first run so they can be edited
    pub fn load_or_create() -> Self {
        match Self::settings_path() {
            Some(path) => Self::load_or_create_at(&path),
            None => Self::default(),
        }
    }

    /// Load settings from `path`, writing the defaults there if it does not exist
    pub fn load_or_create_at(path: &Path) -> Self {
        if path.exists() {
            return Self::load_from(path);
        }
        let settings = Self::default();
        match settings.save_to(path) {
            Ok(()) => info!("wrote default settings to {}", path.display()),
            Err(e) => warn!("could not write settings to {}: {}", path.display(), e),
        }
        settings
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Save settings to the platform config file
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = Self::settings_path().ok_or(SettingsError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save settings to a specific file, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}
