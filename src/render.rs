//! Render state tracking for repaint suppression.
//!
//! The overlay is only repainted when something visible changed:
//!
//! | Element | Repaint when |
//! |---------|--------------|
//! | Alert band | Alert differs (by [`Alert`] equality) or its background differs |
//! | Border | Background color differs |
//! | Turn signals | Every tick while visible (they animate) |
//!
//! Alert equality ignores `size`, so a size-only change does not repaint the
//! band. This matches the alert sound re-trigger logic downstream.

use crate::alerts::Alert;
use crate::status::StatusColor;

/// Tracks what is currently on screen to decide what needs repainting.
pub struct RenderState {
    /// Alert currently painted on the overlay band.
    alert: Alert,

    /// Background the alert band was painted with.
    alert_bg: StatusColor,

    /// Background currently painted on the border.
    border_bg: StatusColor,

    /// Whether the alert band must be repainted this frame.
    alert_dirty: bool,

    /// Whether the border must be repainted this frame.
    border_dirty: bool,

    /// Whether this is the first frame (need full redraw).
    first_frame: bool,
}

impl RenderState {
    /// Create a new render state for first frame.
    pub fn new() -> Self {
        Self {
            alert: Alert::default(),
            alert_bg: StatusColor::default(),
            border_bg: StatusColor::default(),
            alert_dirty: false,
            border_dirty: false,
            first_frame: true,
        }
    }

    /// Offer a new alert and background to the overlay.
    ///
    /// Returns `true` (and marks the band dirty) if either changed.
    pub fn update_alert(
        &mut self,
        alert: &Alert,
        bg: StatusColor,
    ) -> bool {
        if self.alert != *alert || self.alert_bg != bg {
            self.alert = alert.clone();
            self.alert_bg = bg;
            self.alert_dirty = true;
            true
        } else {
            false
        }
    }

    /// Offer a new border background. Returns `true` if it changed.
    pub fn update_border(
        &mut self,
        bg: StatusColor,
    ) -> bool {
        if self.border_bg == bg {
            false
        } else {
            self.border_bg = bg;
            self.border_dirty = true;
            true
        }
    }

    /// Alert currently shown on the overlay.
    #[inline]
    pub const fn alert(&self) -> &Alert { &self.alert }

    /// Background of the alert band.
    #[inline]
    pub const fn alert_bg(&self) -> StatusColor { self.alert_bg }

    /// Background of the border.
    #[inline]
    pub const fn border_bg(&self) -> StatusColor { self.border_bg }

    /// Check if the alert band needs repainting.
    #[inline]
    pub const fn alert_dirty(&self) -> bool { self.alert_dirty || self.first_frame }

    /// Check if the border needs repainting.
    #[inline]
    pub const fn border_dirty(&self) -> bool { self.border_dirty || self.first_frame }

    /// Check if this is the first frame.
    #[inline]
    pub const fn is_first_frame(&self) -> bool { self.first_frame }

    /// Call at end of frame to reset per-frame state.
    pub const fn end_frame(&mut self) {
        self.first_frame = false;
        self.alert_dirty = false;
        self.border_dirty = false;
    }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
