//! In-memory Rgb565 framebuffer.
//!
//! The headless simulator and the widget tests draw into a [`Canvas`] instead
//! of a window or panel. Unlike `MockDisplay`, overdraw is allowed, since the
//! overlay clears bands and then draws text on top of them.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::colors::BLACK;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Framebuffer display that accepts any pixel order and overdraw.
pub struct Canvas {
    pixels: Vec<Rgb565>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create a black canvas of the given size.
    pub fn new(
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            pixels: vec![BLACK; (width * height) as usize],
            width,
            height,
        }
    }

    /// Create a canvas matching the HUD screen (320x240).
    pub fn screen() -> Self { Self::new(SCREEN_WIDTH, SCREEN_HEIGHT) }

    /// Color at `(x, y)`, `None` when out of bounds.
    pub fn pixel(
        &self,
        x: i32,
        y: i32,
    ) -> Option<Rgb565> {
        self.index_of(Point::new(x, y)).map(|idx| self.pixels[idx])
    }

    /// Number of pixels that differ from black.
    pub fn lit_pixels(&self) -> usize { self.pixels.iter().filter(|&&c| c != BLACK).count() }

    /// Number of pixels in the given rectangle with exactly `color`.
    pub fn count_color_in(
        &self,
        top_left: Point,
        size: Size,
        color: Rgb565,
    ) -> usize {
        let mut count = 0;
        for y in top_left.y..top_left.y + size.height as i32 {
            for x in top_left.x..top_left.x + size.width as i32 {
                if self.pixel(x, y) == Some(color) {
                    count += 1;
                }
            }
        }
        count
    }

    fn index_of(
        &self,
        coord: Point,
    ) -> Option<usize> {
        if coord.x >= 0 && coord.y >= 0 && (coord.x as u32) < self.width && (coord.y as u32) < self.height {
            Some((coord.y as u32 * self.width + coord.x as u32) as usize)
        } else {
            None
        }
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if let Some(idx) = self.index_of(coord) {
                self.pixels[idx] = color;
            }
        }
        Ok(())
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size { Size::new(self.width, self.height) }
}
