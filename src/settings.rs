//! Game settings
//!
//! Loaded from an optional JSON file; missing fields take their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{BALL_SCORE_DURATION, BALL_SERVE_DURATION, PADDLE_MOVE_SPEED};

/// Settings loading/saving failures
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tunables for a gameplay session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Key-driven paddle speed (units per second)
    pub player2_move_speed: f32,
    /// Pause before each serve (seconds)
    pub serve_duration: f32,
    /// Pause after each point (seconds)
    pub score_duration: f32,
    /// Fixed RNG seed for reproducible serves; entropy when unset
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player2_move_speed: PADDLE_MOVE_SPEED,
            serve_duration: BALL_SERVE_DURATION,
            score_duration: BALL_SCORE_DURATION,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    fn validate(&self) -> Result<(), SettingsError> {
        let checks = [
            ("player2_move_speed", self.player2_move_speed),
            ("serve_duration", self.serve_duration),
            ("score_duration", self.score_duration),
        ];

        for (field, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(SettingsError::Invalid {
                    field,
                    reason: format!("expected a non-negative number, got {value}"),
                });
            }
        }

        Ok(())
    }
}
