//! Alert selection with a controls watchdog.
//!
//! The controller normally states explicitly what the overlay shows, including
//! "no alert". When it stops reporting, the overlay must fail safe instead of
//! showing stale or no information, so [`AlertSelector`] synthesizes one of two
//! fallback alerts:
//!
//! | Condition (after the 5s startup grace window) | Alert | Size |
//! |-----------------------------------------------|-------|------|
//! | No controls state received since the car started | `controlsWaiting` | Mid |
//! | Last controls state older than 5 seconds | `controlsUnresponsive` | Full |
//!
//! The grace window is measured in ticks from the started frame; the staleness
//! timeout is measured in monotonic time from the last receive.

use std::time::{Duration, Instant};

use crate::config::{CONTROLS_TIMEOUT, STARTUP_GRACE_FRAMES};
use crate::telemetry::TelemetrySnapshot;

/// Kind of the fallback alert shown before the controller ever reported.
pub const CONTROLS_WAITING: &str = "controlsWaiting";

/// Kind of the fallback alert shown after the controller went silent.
pub const CONTROLS_UNRESPONSIVE: &str = "controlsUnresponsive";

/// Overlay band size. Drives layout only.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum AlertSize {
    #[default]
    None,
    Small,
    Mid,
    Full,
}

/// Audible cue identifier. Playback happens elsewhere.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum AudibleAlert {
    #[default]
    None,
    Engage,
    Disengage,
    Refuse,
    Prompt,
    PromptRepeat,
    PromptDistracted,
    WarningSoft,
    WarningImmediate,
}

/// The alert currently shown on the overlay.
///
/// `Alert::default()` is the empty alert: no text, empty kind, no band, no sound.
#[derive(Clone, Default, Debug)]
pub struct Alert {
    pub text1: String,
    pub text2: String,
    pub kind: String,
    pub size: AlertSize,
    pub sound: AudibleAlert,
}

/// Two alerts are equal when text, kind and sound match. `size` is not compared.
///
/// A change of size alone therefore neither repaints the overlay nor
/// re-triggers the sound. This mirrors the deployed behavior and is most likely
/// a latent bug; it is kept so repaint decisions stay identical.
impl PartialEq for Alert {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.text1 == other.text1 && self.text2 == other.text2 && self.kind == other.kind && self.sound == other.sound
    }
}

impl Eq for Alert {}

impl Alert {
    pub fn new(
        text1: &str,
        text2: &str,
        kind: &str,
        size: AlertSize,
        sound: AudibleAlert,
    ) -> Self {
        Self {
            text1: text1.to_owned(),
            text2: text2.to_owned(),
            kind: kind.to_owned(),
            size,
            sound,
        }
    }

    /// "openpilot Unavailable": the car started but controls never reported.
    pub fn controls_waiting() -> Self {
        Self::new(
            "openpilot Unavailable",
            "Waiting for controls to start",
            CONTROLS_WAITING,
            AlertSize::Mid,
            AudibleAlert::None,
        )
    }

    /// "TAKE CONTROL IMMEDIATELY": controls reported once, then went silent.
    pub fn controls_unresponsive() -> Self {
        Self::new(
            "TAKE CONTROL IMMEDIATELY",
            "Controls Unresponsive",
            CONTROLS_UNRESPONSIVE,
            AlertSize::Full,
            AudibleAlert::WarningImmediate,
        )
    }

    /// True for the empty alert (by alert equality).
    #[inline]
    pub fn is_empty(&self) -> bool { *self == Self::default() }

    /// True if this is one of the locally synthesized watchdog alerts.
    #[inline]
    pub fn is_watchdog(&self) -> bool { Self::is_watchdog_kind(&self.kind) }

    /// True if `kind` names a watchdog alert.
    #[inline]
    pub fn is_watchdog_kind(kind: &str) -> bool { kind == CONTROLS_WAITING || kind == CONTROLS_UNRESPONSIVE }
}

/// Maps a telemetry snapshot to the currently active alert.
#[derive(Clone, Copy, Debug)]
pub struct AlertSelector {
    /// Ticks after the started frame before fallback alerts may appear.
    startup_grace_frames: u64,
    /// Maximum age of the last controls state message.
    controls_timeout: Duration,
}

impl AlertSelector {
    pub const fn new() -> Self {
        Self {
            startup_grace_frames: STARTUP_GRACE_FRAMES,
            controls_timeout: CONTROLS_TIMEOUT,
        }
    }

    /// Select the active alert.
    ///
    /// # Parameters
    /// - `snapshot`: this tick's telemetry. The `controls_state` topic supplies
    ///   the updated flag, the alert fields and the last receive frame/time.
    /// - `started_frame`: subscriber frame at which the car became started
    /// - `now`: current monotonic time
    ///
    /// Pure: identical inputs always give equal results.
    pub fn select(
        &self,
        snapshot: &TelemetrySnapshot,
        started_frame: u64,
        now: Instant,
    ) -> Alert {
        let controls = &snapshot.controls_state;

        if controls.updated {
            let cs = &controls.data;
            return Alert::new(&cs.alert_text1, &cs.alert_text2, &cs.alert_type, cs.alert_size, cs.alert_sound);
        }

        if snapshot.frame.saturating_sub(started_frame) > self.startup_grace_frames {
            let seen_since_start = controls.rcv_frame.is_some_and(|frame| frame >= started_frame);
            if !seen_since_start {
                return Alert::controls_waiting();
            }

            let stale = controls
                .rcv_time
                .is_some_and(|rcv| now.saturating_duration_since(rcv) > self.controls_timeout);
            if stale {
                return Alert::controls_unresponsive();
            }
        }

        Alert::default()
    }
}

impl Default for AlertSelector {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::ControlsState;

    const STARTED: u64 = 10;

    fn engaged_prompt() -> ControlsState {
        ControlsState {
            enabled: true,
            alert_text1: "Steer Assist Limited".into(),
            alert_text2: "Take the wheel".into(),
            alert_type: "steerSaturated/warning".into(),
            alert_size: AlertSize::Small,
            alert_sound: AudibleAlert::Prompt,
            ..ControlsState::default()
        }
    }

    /// Snapshot at `frame` where controls were last received at `rcv`.
    fn snapshot_at(
        frame: u64,
        rcv: Option<(u64, Instant)>,
    ) -> TelemetrySnapshot {
        let mut snapshot = TelemetrySnapshot {
            frame,
            started: true,
            ..TelemetrySnapshot::default()
        };
        if let Some((rcv_frame, rcv_time)) = rcv {
            snapshot.controls_state.receive(engaged_prompt(), rcv_frame, rcv_time);
            snapshot.controls_state.updated = rcv_frame == frame;
        }
        snapshot
    }

    // -------------------------------------------------------------------------
    // Alert Equality Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_default_alert_is_empty() {
        let alert = Alert::default();
        assert!(alert.is_empty());
        assert_eq!(alert.size, AlertSize::None);
        assert_eq!(alert.sound, AudibleAlert::None);
    }

    #[test]
    fn test_alert_equality_ignores_size() {
        let small = Alert::new("a", "b", "k", AlertSize::Small, AudibleAlert::Prompt);
        let full = Alert::new("a", "b", "k", AlertSize::Full, AudibleAlert::Prompt);
        assert_eq!(small, full, "Size-only difference should compare equal");
    }

    #[test]
    fn test_alert_equality_compares_sound_and_kind() {
        let base = Alert::new("a", "b", "k", AlertSize::Small, AudibleAlert::Prompt);
        let other_sound = Alert::new("a", "b", "k", AlertSize::Small, AudibleAlert::WarningSoft);
        let other_kind = Alert::new("a", "b", "x", AlertSize::Small, AudibleAlert::Prompt);
        assert_ne!(base, other_sound);
        assert_ne!(base, other_kind);
    }

    #[test]
    fn test_watchdog_alerts_are_watchdog() {
        assert!(Alert::controls_waiting().is_watchdog());
        assert!(Alert::controls_unresponsive().is_watchdog());
        assert!(!Alert::default().is_watchdog());
    }

    // -------------------------------------------------------------------------
    // Healthy Path Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_updated_controls_state_returned_verbatim() {
        let boot = Instant::now();
        let selector = AlertSelector::new();
        let now = boot + Duration::from_secs(30);

        // Far past the grace window and stale by time: updated flag still wins
        let snapshot = snapshot_at(STARTED + 500, Some((STARTED + 500, now)));
        let alert = selector.select(&snapshot, STARTED, now + Duration::from_secs(60));

        assert_eq!(alert.text1, "Steer Assist Limited");
        assert_eq!(alert.text2, "Take the wheel");
        assert_eq!(alert.kind, "steerSaturated/warning");
        assert_eq!(alert.size, AlertSize::Small, "Size should be copied verbatim");
        assert_eq!(alert.sound, AudibleAlert::Prompt);
    }

    #[test]
    fn test_updated_empty_alert_is_returned_as_empty() {
        let boot = Instant::now();
        let selector = AlertSelector::new();
        let mut snapshot = snapshot_at(STARTED + 200, None);
        snapshot.controls_state.receive(ControlsState::default(), STARTED + 200, boot);

        let alert = selector.select(&snapshot, STARTED, boot);
        assert!(alert.is_empty(), "Upstream 'no alert' should yield the empty alert");
    }

    // -------------------------------------------------------------------------
    // Grace Window Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_no_alert_within_grace_window() {
        let boot = Instant::now();
        let selector = AlertSelector::new();

        for elapsed in 0..=STARTUP_GRACE_FRAMES {
            let snapshot = snapshot_at(STARTED + elapsed, None);
            let alert = selector.select(&snapshot, STARTED, boot + Duration::from_secs(100));
            assert!(alert.is_empty(), "Elapsed {elapsed} ticks should be within grace window");
        }
    }

    #[test]
    fn test_started_frame_ahead_of_frame_is_within_grace() {
        let boot = Instant::now();
        let selector = AlertSelector::new();
        let snapshot = snapshot_at(5, None);
        assert!(selector.select(&snapshot, 500, boot).is_empty());
    }

    // -------------------------------------------------------------------------
    // Watchdog Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_controls_never_received_gives_waiting() {
        let boot = Instant::now();
        let selector = AlertSelector::new();
        let snapshot = snapshot_at(STARTED + STARTUP_GRACE_FRAMES + 1, None);

        let alert = selector.select(&snapshot, STARTED, boot);
        assert_eq!(alert.kind, CONTROLS_WAITING);
        assert_eq!(alert.size, AlertSize::Mid);
        assert_eq!(alert.sound, AudibleAlert::None);
        assert_eq!(alert.text1, "openpilot Unavailable");
    }

    #[test]
    fn test_controls_received_before_start_gives_waiting() {
        let boot = Instant::now();
        let selector = AlertSelector::new();
        // Last message from a previous drive (frame 3), car started at frame 10
        let snapshot = snapshot_at(STARTED + STARTUP_GRACE_FRAMES + 1, Some((3, boot)));

        let alert = selector.select(&snapshot, STARTED, boot + Duration::from_secs(1));
        assert_eq!(alert.kind, CONTROLS_WAITING);
    }

    #[test]
    fn test_stale_controls_gives_unresponsive() {
        let boot = Instant::now();
        let selector = AlertSelector::new();
        let rcv_time = boot + Duration::from_secs(2);
        let snapshot = snapshot_at(STARTED + 300, Some((STARTED + 20, rcv_time)));

        let now = rcv_time + CONTROLS_TIMEOUT + Duration::from_millis(1);
        let alert = selector.select(&snapshot, STARTED, now);
        assert_eq!(alert.kind, CONTROLS_UNRESPONSIVE);
        assert_eq!(alert.size, AlertSize::Full);
        assert_eq!(alert.sound, AudibleAlert::WarningImmediate);
    }

    #[test]
    fn test_timeout_boundary_is_exclusive() {
        let boot = Instant::now();
        let selector = AlertSelector::new();
        let snapshot = snapshot_at(STARTED + 300, Some((STARTED + 20, boot)));

        let alert = selector.select(&snapshot, STARTED, boot + CONTROLS_TIMEOUT);
        assert!(alert.is_empty(), "Exactly 5s old should not yet be unresponsive");
    }

    #[test]
    fn test_recent_controls_without_update_gives_empty() {
        let boot = Instant::now();
        let selector = AlertSelector::new();
        let snapshot = snapshot_at(STARTED + 300, Some((STARTED + 299, boot)));

        let alert = selector.select(&snapshot, STARTED, boot + Duration::from_millis(50));
        assert!(alert.is_empty(), "Fresh controls without an update this tick show nothing");
    }

    #[test]
    fn test_select_is_idempotent() {
        let boot = Instant::now();
        let selector = AlertSelector::new();
        let snapshot = snapshot_at(STARTED + 300, Some((STARTED + 20, boot)));
        let now = boot + Duration::from_secs(9);

        let first = selector.select(&snapshot, STARTED, now);
        let second = selector.select(&snapshot, STARTED, now);
        assert_eq!(first, second);
        assert_eq!(first.size, second.size);
    }
}
