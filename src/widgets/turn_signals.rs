//! Turn-signal chevrons.
//!
//! Each direction draws [`BLINK_DRAW_COUNT`] chevrons fanning outward from the
//! screen center, vertically centered. Chevron `i` is scaled by its size
//! factor about its vertical center and blended over black by its alpha, so
//! the lit chevron sweeps outward while the trailing ones fade.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Triangle};

use super::primitives::blend_over_black;
use crate::animations::{BlinkFrame, BlinkIcon};
use crate::colors::GREEN;
use crate::config::{BLINK_DRAW_COUNT, CENTER_X, SCREEN_HEIGHT, SCREEN_WIDTH};

// =============================================================================
// Layout Constants
// =============================================================================

/// Half-width of the area available to one direction.
const FAN_WIDTH: i32 = SCREEN_WIDTH as i32 / 2 - 30;

/// Unscaled chevron width.
pub const CHEVRON_WIDTH: i32 = FAN_WIDTH / 20;

/// Unscaled chevron height.
pub const CHEVRON_HEIGHT: i32 = 36;

/// Gap between neighbouring chevrons.
const CHEVRON_GAP: i32 = FAN_WIDTH / 25;

/// Distance from the screen center to the first chevron.
pub const CHEVRON_MARGIN: i32 = FAN_WIDTH * 10 / 38;

/// Top edge of an unscaled chevron.
const BASE_Y: i32 = (SCREEN_HEIGHT as i32 - CHEVRON_HEIGHT) / 2;

#[derive(Clone, Copy)]
enum Direction {
    Left,
    Right,
}

/// Draw the chevrons for every visible direction in `frame`.
pub fn draw_turn_signals<D>(
    display: &mut D,
    frame: &BlinkFrame,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if frame.left_visible {
        draw_fan(display, &frame.icons, Direction::Left);
    }
    if frame.right_visible {
        draw_fan(display, &frame.icons, Direction::Right);
    }
}

fn draw_fan<D>(
    display: &mut D,
    icons: &[BlinkIcon; BLINK_DRAW_COUNT],
    dir: Direction,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let step = CHEVRON_GAP + CHEVRON_WIDTH;

    for (i, icon) in icons.iter().enumerate() {
        let offset = CHEVRON_MARGIN + i as i32 * step;
        let w = ((CHEVRON_WIDTH as f32 * icon.size_factor) as i32).max(1);
        let h = (CHEVRON_HEIGHT as f32 * icon.size_factor) as i32;
        let top = BASE_Y + (CHEVRON_HEIGHT - h) / 2;
        let mid = top + h / 2;

        // Tip points away from the center
        let (base_x, tip_x) = match dir {
            Direction::Left => (CENTER_X - offset, CENTER_X - offset - w),
            Direction::Right => (CENTER_X + offset, CENTER_X + offset + w),
        };

        let color = blend_over_black(GREEN, icon.alpha);
        Triangle::new(Point::new(base_x, top), Point::new(base_x, top + h), Point::new(tip_x, mid))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(display)
            .ok();
    }
}
