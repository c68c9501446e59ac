//! Tire pressure readout.
//!
//! Four values in a 2x2 grid in the bottom-right corner, front axle on top.
//! Readings outside 5..=60 PSI are treated as "sensor not available" and left
//! blank; readings below 31 PSI are highlighted.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Text, TextStyle};
use heapless::String;

use crate::colors::{TPMS_LOW, WHITE};
use crate::config::{BORDER_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::styles::{LEFT_ALIGNED, RIGHT_ALIGNED};
use crate::telemetry::Tpms;

/// Lowest plausible reading in PSI.
const TPMS_MIN_VALID: f32 = 5.0;

/// Highest plausible reading in PSI.
const TPMS_MAX_VALID: f32 = 60.0;

/// Readings below this are shown in the warning color.
const TPMS_LOW_THRESHOLD: f32 = 31.0;

/// Horizontal center of the readout (between the left and right columns).
const TPMS_CENTER_X: i32 = SCREEN_WIDTH as i32 - BORDER_WIDTH as i32 - 28;

/// Baseline of the front row.
const TPMS_FRONT_Y: i32 = SCREEN_HEIGHT as i32 - BORDER_WIDTH as i32 - 22;

/// Baseline of the rear row.
const TPMS_REAR_Y: i32 = TPMS_FRONT_Y + 14;

/// Gap between the center line and each column.
const TPMS_MARGIN_X: i32 = 4;

#[inline]
fn tpms_valid(psi: f32) -> bool { (TPMS_MIN_VALID..=TPMS_MAX_VALID).contains(&psi) }

/// Text color for a reading.
pub fn tpms_color(psi: f32) -> Rgb565 {
    if tpms_valid(psi) && psi < TPMS_LOW_THRESHOLD {
        TPMS_LOW
    } else {
        WHITE
    }
}

/// Reading rounded to whole PSI, empty when not available.
pub fn tpms_text(psi: f32) -> String<8> {
    let mut s: String<8> = String::new();
    if tpms_valid(psi) {
        let _ = write!(s, "{}", psi.round() as i32);
    }
    s
}

/// Draw the 2x2 tire pressure grid.
pub fn draw_tpms<D>(
    display: &mut D,
    tpms: &Tpms,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let left = TPMS_CENTER_X - TPMS_MARGIN_X;
    let right = TPMS_CENTER_X + TPMS_MARGIN_X;

    draw_value(display, tpms.fl, Point::new(left, TPMS_FRONT_Y), RIGHT_ALIGNED);
    draw_value(display, tpms.fr, Point::new(right, TPMS_FRONT_Y), LEFT_ALIGNED);
    draw_value(display, tpms.rl, Point::new(left, TPMS_REAR_Y), RIGHT_ALIGNED);
    draw_value(display, tpms.rr, Point::new(right, TPMS_REAR_Y), LEFT_ALIGNED);
}

fn draw_value<D>(
    display: &mut D,
    psi: f32,
    pos: Point,
    align: TextStyle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let text = tpms_text(psi);
    if text.is_empty() {
        return;
    }
    let style = MonoTextStyle::new(&FONT_6X10, tpms_color(psi));
    Text::with_text_style(&text, pos, style, align).draw(display).ok();
}
