//! Pre-computed static text styles for the overlay widgets.
//!
//! Styles are `const` so they live in read-only data and are never rebuilt per
//! frame. Alert text is always white on the status-colored band.

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::WHITE;

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment. Used for all alert lines.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Right-aligned text. Left column of the TPMS grid.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

/// Left-aligned text. Right column of the TPMS grid.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

// =============================================================================
// Text Styles
// =============================================================================

/// Small white text (6x10). Secondary line of mid alerts.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Medium white text (10x20). Primary line of small and mid alerts, long full-screen titles.
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Secondary line of full-screen alerts (`ProFont` 18pt).
pub const SUBTITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, WHITE);

/// Primary line of full-screen alerts (`ProFont` 24pt).
pub const HEADLINE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, WHITE);
