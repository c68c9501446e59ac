//! Engagement status and the status background color.
//!
//! The border around the camera view and the alert band are tinted by the
//! engagement status. Each palette entry carries its own opacity; the border
//! is painted opaque, the alert band blends with the given alpha.

use embedded_graphics::pixelcolor::Rgb565;

use crate::alerts::{Alert, CONTROLS_UNRESPONSIVE};
use crate::colors::{ALERT_RED, BLACK, MID_GRAY, SKY_BLUE};
use crate::telemetry::{AlertStatus, ControlsState};

/// Engagement status of the driving assist as shown on the HUD.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum UiStatus {
    #[default]
    Disengaged,
    Engaged,
    Warning,
    Alert,
}

impl UiStatus {
    /// Derive the status from the controller's engagement and alert severity.
    pub const fn from_controls(cs: &ControlsState) -> Self {
        if !cs.enabled {
            return Self::Disengaged;
        }
        match cs.alert_status {
            AlertStatus::UserPrompt => Self::Warning,
            AlertStatus::Critical => Self::Alert,
            AlertStatus::Normal => Self::Engaged,
        }
    }

    /// Palette entry for this status.
    pub const fn bg_color(self) -> StatusColor {
        match self {
            Self::Disengaged => StatusColor::new(BLACK, 0xff),
            Self::Engaged => StatusColor::new(SKY_BLUE, 0x30),
            Self::Warning => StatusColor::new(MID_GRAY, 0x0f),
            Self::Alert => StatusColor::new(ALERT_RED, 0x65),
        }
    }
}

/// Background color with opacity (0 = transparent, 255 = opaque).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StatusColor {
    pub color: Rgb565,
    pub alpha: u8,
}

impl StatusColor {
    pub const fn new(
        color: Rgb565,
        alpha: u8,
    ) -> Self {
        Self { color, alpha }
    }

    /// Opacity as a 0.0-1.0 factor.
    #[inline]
    pub fn opacity(self) -> f32 { f32::from(self.alpha) / 255.0 }
}

impl Default for StatusColor {
    fn default() -> Self { UiStatus::Disengaged.bg_color() }
}

/// Background for this tick given the resolved alert.
///
/// An unresponsive controller forces the alert palette entry regardless of the
/// last reported engagement status.
pub fn resolve_bg(
    status: UiStatus,
    alert: &Alert,
) -> StatusColor {
    if alert.kind == CONTROLS_UNRESPONSIVE {
        UiStatus::Alert.bg_color()
    } else {
        status.bg_color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controls(
        enabled: bool,
        alert_status: AlertStatus,
    ) -> ControlsState {
        ControlsState {
            enabled,
            alert_status,
            ..ControlsState::default()
        }
    }

    #[test]
    fn test_status_from_controls() {
        assert_eq!(UiStatus::from_controls(&controls(false, AlertStatus::Critical)), UiStatus::Disengaged);
        assert_eq!(UiStatus::from_controls(&controls(true, AlertStatus::Normal)), UiStatus::Engaged);
        assert_eq!(UiStatus::from_controls(&controls(true, AlertStatus::UserPrompt)), UiStatus::Warning);
        assert_eq!(UiStatus::from_controls(&controls(true, AlertStatus::Critical)), UiStatus::Alert);
    }

    #[test]
    fn test_palette_alpha() {
        assert_eq!(UiStatus::Disengaged.bg_color().alpha, 0xff);
        assert_eq!(UiStatus::Engaged.bg_color().alpha, 0x30);
        assert_eq!(UiStatus::Warning.bg_color().alpha, 0x0f);
        assert_eq!(UiStatus::Alert.bg_color().alpha, 0x65);
        assert_eq!(StatusColor::default(), UiStatus::Disengaged.bg_color());
    }

    #[test]
    fn test_unresponsive_forces_alert_bg() {
        let bg = resolve_bg(UiStatus::Engaged, &Alert::controls_unresponsive());
        assert_eq!(bg, UiStatus::Alert.bg_color(), "Unresponsive controls must force the alert color");
    }

    #[test]
    fn test_other_alerts_keep_status_bg() {
        assert_eq!(resolve_bg(UiStatus::Engaged, &Alert::controls_waiting()), UiStatus::Engaged.bg_color());
        assert_eq!(resolve_bg(UiStatus::Warning, &Alert::default()), UiStatus::Warning.bg_color());
    }
}
