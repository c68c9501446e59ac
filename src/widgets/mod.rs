//! Overlay widgets drawn on top of the camera view.
//!
//! - [`alerts`]: the alert band (size-dependent height and fonts)
//! - [`turn_signals`]: animated turn-signal chevrons
//! - [`speed`]: current speed, top center
//! - [`tpms`]: tire pressure readout
//! - [`primitives`]: border, fills and over-black blending
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` and discard draw
//! errors, so they work unchanged on the in-memory [`Canvas`](crate::canvas::Canvas)
//! and on a real panel driver.
//!
//! # Repaint Order
//!
//! The frame driver paints in this order when the corresponding element is
//! dirty: border, speed, alert band, TPMS, turn signals. A full-size alert band covers
//! the whole screen, so it goes before the elements that stay visible on top.

mod alerts;
mod primitives;
mod speed;
mod tpms;
mod turn_signals;

pub use alerts::{MID_BAND_HEIGHT, SMALL_BAND_HEIGHT, band_height, draw_alert};
pub use primitives::{blend_over_black, draw_border, fill_rect};
pub use speed::{MS_TO_KPH, MS_TO_MPH, display_speed, draw_speed, speed_text, speed_unit};
pub use tpms::{draw_tpms, tpms_color, tpms_text};
pub use turn_signals::draw_turn_signals;
