//! Color constants for the HUD overlay.
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! Colors specified as 8-bit RGB are converted with [`rgb888`] at compile time.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Stands in for the camera feed behind translucent overlays.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Alert text and TPMS readings.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure green. Turn-signal chevrons.
pub const GREEN: Rgb565 = Rgb565::GREEN;

// =============================================================================
// Custom Colors
// =============================================================================

/// Sky blue shown while the driving assist is engaged (#87CEEB).
pub const SKY_BLUE: Rgb565 = rgb888(0x87, 0xce, 0xeb);

/// Mid gray shown for user-prompt warnings (#808080).
pub const MID_GRAY: Rgb565 = rgb888(0x80, 0x80, 0x80);

/// Alert red (#C92231). Critical alerts and the controls-unresponsive override.
pub const ALERT_RED: Rgb565 = rgb888(0xc9, 0x22, 0x31);

/// Light red for low tire pressure (255, 90, 90).
pub const TPMS_LOW: Rgb565 = rgb888(255, 90, 90);

/// Convert an 8-bit-per-channel color to Rgb565 by truncating the low bits.
pub const fn rgb888(
    r: u8,
    g: u8,
    b: u8,
) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}
