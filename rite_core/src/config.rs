//! Configuration file support for Rite.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/rite/config.toml`.

use crate::{Error, Religion, Result, User, UserRole};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub booking: BookingConfig,
}

/// Preconfigured session profile
///
/// Religion and role left unset here are asked for interactively instead.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_profile_name")]
    pub name: String,

    #[serde(default)]
    pub religion: Option<Religion>,

    #[serde(default)]
    pub role: Option<UserRole>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_profile_name(),
            religion: None,
            role: None,
        }
    }
}

impl ProfileConfig {
    /// Materialize the configured profile as a session user with a fresh id
    pub fn user(&self) -> User {
        let mut user = User::guest();
        user.name = self.name.clone();
        user.religion = self.religion;
        user.role = self.role;
        user
    }
}

/// Booking flow configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BookingConfig {
    #[serde(default = "default_time_slots")]
    pub time_slots: Vec<String>,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            time_slots: default_time_slots(),
        }
    }
}

// Default value functions
fn default_profile_name() -> String {
    "Guest".to_string()
}

fn default_time_slots() -> Vec<String> {
    [
        "09:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "02:00 PM", "03:00 PM", "04:00 PM",
        "05:00 PM", "06:00 PM", "07:00 PM",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME")
                .expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("rite").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Check the configuration for values the app cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.profile.name.trim().is_empty() {
            return Err(Error::Config("profile.name must not be empty".to_string()));
        }
        if self.booking.time_slots.is_empty() {
            return Err(Error::Config(
                "booking.time_slots must list at least one slot".to_string(),
            ));
        }
        for slot in &self.booking.time_slots {
            if slot.trim().is_empty() {
                return Err(Error::Config(
                    "booking.time_slots contains a blank slot".to_string(),
                ));
            }
        }
        for (i, slot) in self.booking.time_slots.iter().enumerate() {
            if self.booking.time_slots[..i].contains(slot) {
                return Err(Error::Config(format!(
                    "booking.time_slots lists '{}' twice",
                    slot
                )));
            }
        }
        Ok(())
    }
}
