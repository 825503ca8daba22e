//! Game settings and preferences
//!
//! Persisted as JSON: LocalStorage in the browser, a file on native.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// How the frame driver turns display refreshes into simulation steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FramePacing {
    /// Exactly one step per refresh (speed follows the display rate)
    PerRefresh,
    /// Fixed 60 Hz steps regardless of the display rate
    #[default]
    FixedStep,
}

impl FramePacing {
    pub fn as_str(&self) -> &'static str {
        match self {
            FramePacing::PerRefresh => "PerRefresh",
            FramePacing::FixedStep => "FixedStep",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "refresh" | "perrefresh" | "per-refresh" => Some(FramePacing::PerRefresh),
            "fixed" | "fixedstep" | "fixed-step" => Some(FramePacing::FixedStep),
            _ => None,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Arena geometry and balance
    pub tuning: Tuning,
    pub pacing: FramePacing,

    // === Visuals ===
    /// Draw the ball as a circle instead of a square
    pub round_ball: bool,
    /// Show FPS counter
    pub show_fps: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),
            pacing: FramePacing::default(),

            round_ball: false,
            show_fps: false,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "paddle_pong_settings";

    /// Parse settings, replacing unplayable tuning with the defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Fix values that would break the game or the audio graph
    pub fn sanitize(&mut self) {
        if let Err(err) = self.tuning.validate() {
            log::warn!("Invalid tuning ({err}), using defaults");
            self.tuning = Tuning::default();
        }
        self.master_volume = clamp_volume(self.master_volume);
        self.sfx_volume = clamp_volume(self.sfx_volume);
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(err) => log::warn!("Ignoring stored settings: {err}"),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match self.to_json() {
                Ok(json) => {
                    let _ = storage.set_item(Self::STORAGE_KEY, &json);
                    log::info!("Settings saved");
                }
                Err(err) => log::warn!("Could not serialize settings: {err}"),
            }
        }
    }

    /// Load settings from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Malformed settings in {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(err) => {
                log::info!("No settings at {} ({err}), using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

fn clamp_volume(vol: f32) -> f32 {
    if vol.is_finite() { vol.clamp(0.0, 1.0) } else { 1.0 }
}
