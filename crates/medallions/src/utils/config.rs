//! Configuration file management.
//!
//! Handles loading user preferences from `~/.medallions.toml`.

use anyhow::Context;
use medallions_core::{PatternConfig, Rgb};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_SMOOTHING: f32 = 0.8;

const CONFIG_TEMPLATE: &str = r#"# medallions configuration file

# WAV file played and analyzed on startup (overridden by --track)
# track = "/path/to/song.wav"

# Fixed random seed for reproducible layouts (overridden by --seed)
# seed = 42

# Analyzer smoothing between frames, 0.0 - 0.99 (default: 0.8)
# smoothing = 0.8

# =============================================================================
# Pattern
# =============================================================================

# circle_diameter = 180.0
# spacing = 35.0
# offset_x = -10.0
# offset_y = -20.0
# accent_ring_gap = 15.0
# spectrum_bins = 1024

# red_line_weight = 0.8
# red_line_spikes = 130
# gold_line_weight = 3.0
# gold_line_spikes = 16

# special_color = { r = 255, g = 255, b = 0 }
# background = { r = 50, g = 100, b = 150 }
"#;

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct Config {
    pub track: Option<PathBuf>,
    pub seed: Option<u64>,
    pub smoothing: Option<f32>,

    // Pattern overrides (flattened for simpler TOML)
    pub circle_diameter: Option<f32>,
    pub spacing: Option<f32>,
    pub offset_x: Option<f32>,
    pub offset_y: Option<f32>,
    pub accent_ring_gap: Option<f32>,
    pub spectrum_bins: Option<usize>,
    pub red_line_weight: Option<f32>,
    pub red_line_spikes: Option<usize>,
    pub gold_line_weight: Option<f32>,
    pub gold_line_spikes: Option<usize>,
    pub special_color: Option<Rgb>,
    pub background: Option<Rgb>,
}

impl Config {
    fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".medallions.toml"))
    }

    /// Load `~/.medallions.toml`, writing the template on first run
    pub fn load() -> Self {
        let path = match Self::path() {
            Some(p) => p,
            None => return Self::default(),
        };

        if !path.exists() {
            match fs::write(&path, CONFIG_TEMPLATE) {
                Ok(()) => log::info!("Created config template at {:?}", path),
                Err(e) => log::warn!("Could not write config template {:?}: {}", path, e),
            }
        }

        Self::load_or_default(&path)
    }

    /// Load an explicit file; unreadable or invalid files fall back to defaults
    pub fn load_or_default(path: &Path) -> Self {
        match Self::read(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{:#}, using defaults", e);
                Self::default()
            }
        }
    }

    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn smoothing(&self) -> f32 {
        self.smoothing
            .filter(|s| (0.0..1.0).contains(s))
            .unwrap_or(DEFAULT_SMOOTHING)
    }

    /// Pattern settings with defaults for every unset key
    pub fn pattern(&self) -> PatternConfig {
        let d = PatternConfig::default();
        PatternConfig {
            circle_diameter: self.circle_diameter.unwrap_or(d.circle_diameter),
            spacing: self.spacing.unwrap_or(d.spacing),
            offset_x: self.offset_x.unwrap_or(d.offset_x),
            offset_y: self.offset_y.unwrap_or(d.offset_y),
            special_color: self.special_color.unwrap_or(d.special_color),
            red_line_weight: self.red_line_weight.unwrap_or(d.red_line_weight),
            red_line_spikes: self.red_line_spikes.unwrap_or(d.red_line_spikes),
            gold_line_weight: self.gold_line_weight.unwrap_or(d.gold_line_weight),
            gold_line_spikes: self.gold_line_spikes.unwrap_or(d.gold_line_spikes),
            accent_ring_gap: self.accent_ring_gap.unwrap_or(d.accent_ring_gap),
            spectrum_bins: self.spectrum_bins.unwrap_or(d.spectrum_bins),
            background: self.background.unwrap_or(d.background),
        }
    }
}
