//! Gesture and visibility tuning, loadable from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the stock behaviour.  Lookup order for [`ShowcaseConfig::discover`]:
//!
//! 1. the path in `$SHOWCASE_CONFIG`
//! 2. `showcase.toml`, then `config/showcase.toml`
//! 3. built-in defaults
//!
//! ```toml
//! [input]
//! mode = "touch"                    # auto | pointer | touch
//! touch-visibility = "sticky-intersection"
//!
//! [wheel]
//! throttle-ms = 250
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_ENV: &str = "SHOWCASE_CONFIG";

const CANDIDATES: &[&str] = &["showcase.toml", "config/showcase.toml"];

// ════════════════════════════════════════════════════════════════════════════
// Errors
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {origin}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid configuration value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Where a loaded configuration came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    EnvPath(PathBuf),
    File(PathBuf),
    Default,
}

// ════════════════════════════════════════════════════════════════════════════
// Sections
// ════════════════════════════════════════════════════════════════════════════

/// Forces a strategy instead of detecting one from device capabilities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputMode {
    #[default]
    Auto,
    Pointer,
    Touch,
}

/// Which visibility signal the touch strategy trusts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TouchVisibility {
    /// Poll element geometry; in view when fully inside the viewport.
    #[default]
    Geometry,
    /// Multi-threshold intersection with a shrunk bottom edge.
    StickyIntersection,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct InputConfig {
    pub mode:             InputMode,
    pub touch_visibility: TouchVisibility,
    /// Touch-capable viewports at or below this width count as mobile.
    pub mobile_max_width: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            mode:             InputMode::Auto,
            touch_visibility: TouchVisibility::Geometry,
            mobile_max_width: 768.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WheelConfig {
    pub throttle_ms: u64,
}

impl Default for WheelConfig {
    fn default() -> Self { WheelConfig { throttle_ms: 250 } }
}

impl WheelConfig {
    pub fn throttle(&self) -> Duration { Duration::from_millis(self.throttle_ms) }
}

/// Touch-device scroll accumulation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ScrollConfig {
    pub settle_ms:      u64,
    pub throttle_ms:    u64,
    /// Accumulated distance that commits on its own.
    pub min_distance:   f32,
    /// Shorter distance that commits when the last event was fast enough.
    pub flick_distance: f32,
    pub flick_velocity: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            settle_ms:      100,
            throttle_ms:    400,
            min_distance:   50.0,
            flick_distance: 20.0,
            flick_velocity: 10.0,
        }
    }
}

impl ScrollConfig {
    pub fn settle(&self)   -> Duration { Duration::from_millis(self.settle_ms) }
    pub fn throttle(&self) -> Duration { Duration::from_millis(self.throttle_ms) }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SwipeConfig {
    /// Horizontal swipes (pointer strategy).
    pub horizontal_distance: f32,
    /// Vertical movement that marks a touch as a swipe.
    pub move_threshold:      f32,
    pub long_distance:       f32,
    pub flick_distance:      f32,
    pub flick_ms:            u64,
    pub throttle_ms:         u64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        SwipeConfig {
            horizontal_distance: 40.0,
            move_threshold:      10.0,
            long_distance:       60.0,
            flick_distance:      30.0,
            flick_ms:            300,
            throttle_ms:         300,
        }
    }
}

impl SwipeConfig {
    pub fn flick_window(&self) -> Duration { Duration::from_millis(self.flick_ms) }
    pub fn throttle(&self)     -> Duration { Duration::from_millis(self.throttle_ms) }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct VisibilityConfig {
    /// Pointer strategy: ratio the element must reach to count as in view.
    pub intersection_threshold: f32,
    /// Geometry polling re-checks on touch moves longer than this.
    pub poll_move_threshold:    f32,
    pub sticky_thresholds:      Vec<f32>,
    /// Fraction of the viewport height cut off the bottom edge.
    pub sticky_bottom_margin:   f32,
    pub sticky_min_ratio:       f32,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        VisibilityConfig {
            intersection_threshold: 1.0,
            poll_move_threshold:    10.0,
            sticky_thresholds:      vec![0.0, 0.25, 0.5, 0.75, 1.0],
            sticky_bottom_margin:   0.1,
            sticky_min_ratio:       0.5,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// ShowcaseConfig
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub input:      InputConfig,
    pub wheel:      WheelConfig,
    pub scroll:     ScrollConfig,
    pub swipe:      SwipeConfig,
    pub visibility: VisibilityConfig,
}

impl ShowcaseConfig {
    /// Resolve configuration from the environment, well-known files, or
    /// defaults, in that order.
    pub fn discover() -> Result<(Self, ConfigSource), ConfigError> {
        let env_path = env::var(CONFIG_ENV).ok();
        Self::discover_in(env_path.as_deref(), Path::new(""))
    }

    /// [`discover`](Self::discover) with an explicit `$SHOWCASE_CONFIG`
    /// value and a base directory for the candidate files.
    pub fn discover_in(env_path: Option<&str>, base: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        if let Some(raw) = env_path.map(str::trim).filter(|raw| !raw.is_empty()) {
            let path = PathBuf::from(raw);
            let cfg  = Self::load_from_file(&path)?;
            return Ok((cfg, ConfigSource::EnvPath(path)));
        }

        if let Some(path) = CANDIDATES.iter().map(|c| base.join(c)).find(|p| p.exists()) {
            let cfg = Self::load_from_file(&path)?;
            return Ok((cfg, ConfigSource::File(path)));
        }

        Ok((Self::default(), ConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_from_str(&contents, &path.display().to_string())
    }

    /// Parse and validate TOML.  `origin` only labels errors.
    pub fn parse_from_str(contents: &str, origin: &str) -> Result<Self, ConfigError> {
        let cfg: ShowcaseConfig = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let distances = [
            ("input.mobile-max-width",        self.input.mobile_max_width),
            ("scroll.min-distance",           self.scroll.min_distance),
            ("scroll.flick-distance",         self.scroll.flick_distance),
            ("scroll.flick-velocity",         self.scroll.flick_velocity),
            ("swipe.horizontal-distance",     self.swipe.horizontal_distance),
            ("swipe.move-threshold",          self.swipe.move_threshold),
            ("swipe.long-distance",           self.swipe.long_distance),
            ("swipe.flick-distance",          self.swipe.flick_distance),
            ("visibility.poll-move-threshold", self.visibility.poll_move_threshold),
        ];
        for (field, value) in distances {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, format!("expected a non-negative number, got {value}")));
            }
        }

        let ratios = [
            ("visibility.intersection-threshold", self.visibility.intersection_threshold),
            ("visibility.sticky-bottom-margin",   self.visibility.sticky_bottom_margin),
            ("visibility.sticky-min-ratio",       self.visibility.sticky_min_ratio),
        ];
        for (field, value) in ratios {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, format!("expected a ratio in [0, 1], got {value}")));
            }
        }

        if self.visibility.sticky_thresholds.iter().any(|t| !(0.0..=1.0).contains(t)) {
            return Err(invalid("visibility.sticky-thresholds", "every threshold must lie in [0, 1]".into()));
        }

        let windows = [
            ("wheel.throttle-ms",  self.wheel.throttle_ms),
            ("scroll.settle-ms",   self.scroll.settle_ms),
            ("scroll.throttle-ms", self.scroll.throttle_ms),
            ("swipe.flick-ms",     self.swipe.flick_ms),
            ("swipe.throttle-ms",  self.swipe.throttle_ms),
        ];
        for (field, value) in windows {
            if value == 0 {
                return Err(invalid(field, "time window must be positive".into()));
            }
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
