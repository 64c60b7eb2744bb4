//! Widget settings persistence
//!
//! Settings live in `settings.json` under the platform config directory.
//! Every section defaults independently, so a file that only overrides one
//! value still loads.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::KeyBindings;
use super::ask::suggestions::{self, Suggestion, SwapStrategy};
use super::ask::{AskConfig, ShellTimings};

/// Visual variant of the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Gradient ring and staged suggestion swap
    #[default]
    Layered,
    /// Plain border and immediate suggestion swap
    Flat,
}

impl Variant {
    pub fn swap_strategy(self) -> SwapStrategy {
        match self {
            Variant::Layered => SwapStrategy::Staged,
            Variant::Flat => SwapStrategy::Direct,
        }
    }

    pub fn has_gradient_ring(self) -> bool {
        self == Variant::Layered
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub widget: WidgetSettings,
    pub suggestions: SuggestionSettings,
    pub display: DisplaySettings,
    pub keybindings: KeyBindings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    pub variant: Variant,
    /// How long the query must stay empty before the title comes back
    pub title_reveal_delay_ms: u64,
    /// Fade before the container starts resizing
    pub fade_out_ms: u64,
    /// Time the container gets to settle after resizing
    pub settle_ms: u64,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        let timings = ShellTimings::default();
        Self {
            variant: Variant::default(),
            title_reveal_delay_ms: 1000,
            fade_out_ms: timings.fade_out.as_millis() as u64,
            settle_ms: timings.settle.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionSettings {
    pub initial: Vec<Suggestion>,
    pub more: Vec<Suggestion>,
}

impl Default for SuggestionSettings {
    fn default() -> Self {
        Self {
            initial: suggestions::sparkle_set(&suggestions::DEFAULT_SET),
            more: suggestions::sparkle_set(&suggestions::MORE_SET),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub dark_mode: bool,
    /// Skip spring and fade animations; timers still run
    pub reduced_motion: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "ask-widget", "AskWidget")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from the config directory, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("No config directory available, using default settings");
            return Self::default();
        };
        if !path.exists() {
            // First launch: write the defaults out so they can be edited
            let settings = Self::default();
            match settings.save_to_file(&path) {
                Ok(()) => tracing::info!("Wrote default settings to {}", path.display()),
                Err(e) => tracing::warn!("Failed to write default settings: {:#}", e),
            }
            return settings;
        }
        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to load settings, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Construction parameters for the widget state machine
    pub fn to_ask_config(&self) -> AskConfig {
        AskConfig {
            timings: ShellTimings {
                fade_out: Duration::from_millis(self.widget.fade_out_ms),
                settle: Duration::from_millis(self.widget.settle_ms),
            },
            title_delay: Duration::from_millis(self.widget.title_reveal_delay_ms),
            swap: self.widget.variant.swap_strategy(),
            initial: self.suggestions.initial.clone(),
            more: self.suggestions.more.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Action;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("ask-widget-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn round_trip_through_file() {
        let path = temp_path("round_trip.json");
        let mut settings = Settings::default();
        settings.widget.variant = Variant::Flat;
        settings.display.reduced_motion = true;
        settings.suggestions.more = suggestions::sparkle_set(&["Cooking"]);

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let json = r#"{ "widget": { "variant": "flat" } }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.widget.variant, Variant::Flat);
        assert_eq!(settings.widget.title_reveal_delay_ms, 1000);
        assert_eq!(settings.suggestions, SuggestionSettings::default());
        assert!(settings.keybindings.get(&Action::Collapse).is_some());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = r#"{ "volume": 0.5, "display": { "reduced_motion": true, "theme": "x" } }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert!(settings.display.reduced_motion);
        assert!(settings.display.dark_mode);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Settings::load_from_file(&temp_path("does_not_exist.json")).is_err());
    }

    #[test]
    fn ask_config_follows_settings() {
        let mut settings = Settings::default();
        settings.widget.variant = Variant::Flat;
        settings.widget.settle_ms = 250;
        let config = settings.to_ask_config();
        assert_eq!(config.swap, SwapStrategy::Direct);
        assert_eq!(config.timings.settle, Duration::from_millis(250));
        assert_eq!(config.initial.len(), 3);
    }

    #[test]
    fn variants_map_to_swap_strategies() {
        assert_eq!(Variant::default().swap_strategy(), SwapStrategy::Staged);
        assert!(Variant::Layered.has_gradient_ring());
        assert!(!Variant::Flat.has_gradient_ring());
    }
}
