//! Application configuration.
//!
//! Two layers, as on the dashboard:
//!
//! - Compile-time constants for timing, watchdog thresholds and layout. These are
//!   `const` so the per-tick code never recomputes them.
//! - [`HudConfig`]: read-only runtime toggles loaded from a TOML file by the
//!   frame driver. Every field has a default, so an empty file is valid.
//!
//! ```toml
//! [display]
//! openpilot_view_enabled = false
//! is_metric = true
//! show_tpms = true
//!
//! [turn_signals]
//! base_alpha = 0.8
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Frame driver tick rate in Hz.
pub const UI_FREQ: u32 = 20;

/// Period of one tick (50ms at 20 Hz).
pub const TICK_PERIOD: Duration = Duration::from_millis(1000 / UI_FREQ as u64);

/// Simulated time elapsed after `frame` ticks. Saturates instead of wrapping.
#[inline]
pub fn tick_offset(frame: u64) -> Duration { TICK_PERIOD.saturating_mul(u32::try_from(frame).unwrap_or(u32::MAX)) }

// =============================================================================
// Controls Watchdog
// =============================================================================

/// Ticks after the car started before the watchdog may synthesize alerts (5 seconds).
pub const STARTUP_GRACE_FRAMES: u64 = 5 * UI_FREQ as u64;

/// Maximum age of the last controls state message before controls count as unresponsive.
pub const CONTROLS_TIMEOUT: Duration = Duration::from_secs(5);

// =============================================================================
// Turn Signal Animation
// =============================================================================

/// Number of chevrons drawn per direction.
pub const BLINK_DRAW_COUNT: usize = 8;

/// Opacity of the chevron under the animation index.
pub const BLINK_BASE_ALPHA: f32 = 0.8;

/// Minimum time between two index advances (900 / `UI_FREQ` = 45ms).
/// Compared with strict `>` against the elapsed time.
pub const BLINK_ADVANCE_INTERVAL: Duration = Duration::from_millis(900 / UI_FREQ as u64);

/// Ticks to hold the animation at rest after a full sweep (`UI_FREQ` / 4 = 5 ticks).
pub const BLINK_COOLDOWN_TICKS: u32 = UI_FREQ / 4;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

/// Width of the status-colored border around the camera view.
pub const BORDER_WIDTH: u32 = 4;

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Read-only HUD toggles loaded from a TOML file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct HudConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub turn_signals: TurnSignalConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Camera-only view: the alert overlay is never updated.
    #[serde(default)]
    pub openpilot_view_enabled: bool,
    #[serde(default = "default_true")]
    pub is_metric: bool,
    #[serde(default = "default_true")]
    pub show_tpms: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            openpilot_view_enabled: false,
            is_metric: true,
            show_tpms: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TurnSignalConfig {
    #[serde(default = "default_base_alpha")]
    pub base_alpha: f32,
}

impl Default for TurnSignalConfig {
    fn default() -> Self {
        Self {
            base_alpha: BLINK_BASE_ALPHA,
        }
    }
}

fn default_true() -> bool { true }

fn default_base_alpha() -> f32 { BLINK_BASE_ALPHA }

impl HudConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let alpha = self.turn_signals.base_alpha;
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "turn_signals.base_alpha must be in (0, 1], got {alpha}"
            )));
        }
        Ok(())
    }
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<HudConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    HudConfig::from_toml_str(&content)
}
