// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/u64->f32 in animation and layout math
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for screen-sized values
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive
#![allow(clippy::struct_excessive_bools)] // RenderState and OnroadFrame use bools appropriately
#![allow(clippy::module_name_repetitions)] // AlertSelector in alerts, etc.

//! Onroad HUD overlay: alert watchdog, turn-signal animation and rendering.
//!
//! The HUD sits on top of the driving camera view and shows:
//! - the alert reported by the driving controller, or a synthesized fallback
//!   when the controller has not started or stopped reporting,
//! - a border and alert band tinted by the engagement status,
//! - animated turn-signal chevrons,
//! - tire pressures.
//!
//! # Per-Tick Data Flow
//!
//! ```text
//! TelemetrySource::poll ──► TelemetrySnapshot
//!                                │
//!                         OnroadState::update
//!                                │
//!                           OnroadFrame ──► widgets::* ──► DrawTarget<Rgb565>
//! ```
//!
//! All per-drive state (watchdog grace window, animation index, what is on
//! screen) is owned by [`onroad::OnroadState`]; there are no globals. One
//! call to `update` per tick at [`config::UI_FREQ`].
//!
//! # Modules
//!
//! - [`alerts`]: alert record, equality, and the controls watchdog
//! - [`animations`]: turn-signal blink animator, color interpolation
//! - [`status`]: engagement status and the status palette
//! - [`render`]: repaint suppression
//! - [`onroad`]: the frame driver
//! - [`telemetry`]: snapshot data model and the source trait
//! - [`scenario`]: scripted telemetry for the simulator
//! - [`widgets`]: drawing
//! - [`canvas`]: in-memory framebuffer
//! - [`config`]: constants and the TOML runtime configuration
//! - [`profiling`]: frame timing and repaint counters

pub mod alerts;
pub mod animations;
pub mod canvas;
pub mod colors;
pub mod config;
pub mod error;
pub mod onroad;
pub mod profiling;
pub mod render;
pub mod scenario;
pub mod status;
pub mod styles;
pub mod telemetry;
pub mod widgets;

pub use alerts::{Alert, AlertSelector, AlertSize, AudibleAlert};
pub use animations::{BlinkAnimator, BlinkFrame};
pub use config::HudConfig;
pub use error::ConfigError;
pub use onroad::{OnroadFrame, OnroadState};
pub use status::{StatusColor, UiStatus};
pub use telemetry::{TelemetrySnapshot, TelemetrySource};
