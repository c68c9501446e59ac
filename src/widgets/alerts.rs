//! Alert overlay band.
//!
//! The band is anchored to the bottom edge and spans the full width:
//!
//! | Size | Band height | text1 | text2 |
//! |------|-------------|-------|-------|
//! | Small | 60px | 10x20, centered in band | not shown |
//! | Mid | 93px | 10x20 | 6x10 |
//! | Full | whole screen | `ProFont` 24 (10x20 if longer than 15 chars) | `ProFont` 18 |
//!
//! The fill is the status color pre-blended over black at the palette alpha.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use super::primitives::{blend_over_black, fill_rect};
use crate::alerts::{Alert, AlertSize};
use crate::config::{CENTER_X, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::status::StatusColor;
use crate::styles::{CENTERED, HEADLINE_STYLE_WHITE, LABEL_STYLE_WHITE, SUBTITLE_STYLE_WHITE, TITLE_STYLE_WHITE};

// =============================================================================
// Layout Constants
// =============================================================================

/// Band height for small alerts.
pub const SMALL_BAND_HEIGHT: u32 = 60;

/// Band height for mid alerts.
pub const MID_BAND_HEIGHT: u32 = 93;

/// Full alerts with a primary line longer than this use the smaller font.
const FULL_LONG_TEXT1_CHARS: usize = 15;

/// Height of the alert band for `size` (0 for [`AlertSize::None`]).
pub const fn band_height(size: AlertSize) -> u32 {
    match size {
        AlertSize::None => 0,
        AlertSize::Small => SMALL_BAND_HEIGHT,
        AlertSize::Mid => MID_BAND_HEIGHT,
        AlertSize::Full => SCREEN_HEIGHT,
    }
}

/// Draw `alert` on its band. Alerts of size `None` draw nothing.
pub fn draw_alert<D>(
    display: &mut D,
    alert: &Alert,
    bg: StatusColor,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let h = band_height(alert.size);
    if h == 0 {
        return;
    }
    let top = (SCREEN_HEIGHT - h) as i32;
    let center_y = top + h as i32 / 2;

    fill_rect(
        display,
        Point::new(0, top),
        Size::new(SCREEN_WIDTH, h),
        blend_over_black(bg.color, bg.opacity()),
    );

    match alert.size {
        AlertSize::None => {}
        AlertSize::Small => {
            draw_line(display, &alert.text1, center_y + 6, TITLE_STYLE_WHITE);
        }
        AlertSize::Mid => {
            draw_line(display, &alert.text1, center_y - 4, TITLE_STYLE_WHITE);
            draw_line(display, &alert.text2, center_y + 22, LABEL_STYLE_WHITE);
        }
        AlertSize::Full => {
            let long = alert.text1.chars().count() > FULL_LONG_TEXT1_CHARS;
            let (style, y) = if long {
                (TITLE_STYLE_WHITE, center_y - 20)
            } else {
                (HEADLINE_STYLE_WHITE, center_y - 14)
            };
            draw_line(display, &alert.text1, y, style);
            draw_line(display, &alert.text2, center_y + 40, SUBTITLE_STYLE_WHITE);
        }
    }
}

fn draw_line<D>(
    display: &mut D,
    text: &str,
    baseline_y: i32,
    style: MonoTextStyle<'static, Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if text.is_empty() {
        return;
    }
    Text::with_text_style(text, Point::new(CENTER_X, baseline_y), style, CENTERED)
        .draw(display)
        .ok();
}
