//! Current speed readout, top center.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use crate::config::{BORDER_WIDTH, CENTER_X};
use crate::styles::{CENTERED, HEADLINE_STYLE_WHITE, LABEL_STYLE_WHITE};

/// m/s to km/h.
pub const MS_TO_KPH: f32 = 3.6;

/// m/s to mph.
pub const MS_TO_MPH: f32 = 2.237_414;

/// Baseline of the speed value.
const SPEED_Y: i32 = BORDER_WIDTH as i32 + 30;

/// Baseline of the unit label under the value.
const UNIT_Y: i32 = SPEED_Y + 14;

/// Speed in display units, never negative.
#[inline]
pub fn display_speed(
    v_ego: f32,
    is_metric: bool,
) -> f32 {
    let factor = if is_metric { MS_TO_KPH } else { MS_TO_MPH };
    (v_ego * factor).max(0.0)
}

/// Unit label for the configured system.
#[inline]
pub const fn speed_unit(is_metric: bool) -> &'static str {
    if is_metric { "km/h" } else { "mph" }
}

/// Speed rounded to a whole number, e.g. `"54"`.
pub fn speed_text(
    v_ego: f32,
    is_metric: bool,
) -> String<8> {
    let mut s: String<8> = String::new();
    let _ = write!(s, "{}", display_speed(v_ego, is_metric).round() as u32);
    s
}

/// Draw the speed value with its unit label below.
pub fn draw_speed<D>(
    display: &mut D,
    v_ego: f32,
    is_metric: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let text = speed_text(v_ego, is_metric);
    Text::with_text_style(&text, Point::new(CENTER_X, SPEED_Y), HEADLINE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(speed_unit(is_metric), Point::new(CENTER_X, UNIT_Y), LABEL_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}
