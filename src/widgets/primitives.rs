//! Low-level drawing primitives shared across widgets.
//!
//! # Translucency
//!
//! The overlay sits on top of the camera feed. Draw targets here are plain
//! Rgb565 surfaces without an alpha channel, so translucent fills are
//! pre-blended against [`BLACK`] (the camera stand-in) with
//! [`lerp_rgb565`](crate::animations::lerp_rgb565).
//!
//! # Border
//!
//! The status border is four opaque strips of [`BORDER_WIDTH`] along the
//! screen edges. Its alpha is ignored; only the alert band is translucent.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::animations::lerp_rgb565;
use crate::colors::BLACK;
use crate::config::{BORDER_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::status::StatusColor;

/// Blend `color` over black with the given opacity (0.0 to 1.0).
#[inline]
pub fn blend_over_black(
    color: Rgb565,
    opacity: f32,
) -> Rgb565 {
    lerp_rgb565(BLACK, color, opacity)
}

/// Fill a rectangle. Zero-sized rectangles draw nothing.
pub fn fill_rect<D>(
    display: &mut D,
    top_left: Point,
    size: Size,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(top_left, size)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Paint the status border around the screen edges (opaque).
pub fn draw_border<D>(
    display: &mut D,
    bg: StatusColor,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let inner_h = SCREEN_HEIGHT - 2 * BORDER_WIDTH;
    let bw = BORDER_WIDTH as i32;

    // Top, bottom, left, right
    fill_rect(display, Point::zero(), Size::new(SCREEN_WIDTH, BORDER_WIDTH), bg.color);
    fill_rect(
        display,
        Point::new(0, (SCREEN_HEIGHT - BORDER_WIDTH) as i32),
        Size::new(SCREEN_WIDTH, BORDER_WIDTH),
        bg.color,
    );
    fill_rect(display, Point::new(0, bw), Size::new(BORDER_WIDTH, inner_h), bg.color);
    fill_rect(
        display,
        Point::new((SCREEN_WIDTH - BORDER_WIDTH) as i32, bw),
        Size::new(BORDER_WIDTH, inner_h),
        bg.color,
    );
}
