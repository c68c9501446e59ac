//! Per-tick onroad HUD state.
//!
//! [`OnroadState`] is owned by the frame driver. It holds the alert selector,
//! the blink animator and the render tracking, and is driven once per tick
//! with the latest snapshot:
//!
//! ```text
//! snapshot ─┬─ started edge ──► started_frame, offroad transition
//!           ├─ controlsState ─► UiStatus
//!           ├─ AlertSelector ─► Alert ─► resolve_bg ─┬► RenderState::update_alert
//!           │                                        └► RenderState::update_border
//!           └─ carState ──────► BlinkAnimator::tick ──► BlinkFrame
//! ```
//!
//! The returned [`OnroadFrame`] is everything the drawing layer needs.

use std::time::Instant;

use crate::alerts::{Alert, AlertSelector};
use crate::animations::{BlinkAnimator, BlinkFrame};
use crate::config::HudConfig;
use crate::render::RenderState;
use crate::status::{StatusColor, UiStatus, resolve_bg};
use crate::telemetry::{CarState, TelemetrySnapshot};

/// Render-ready HUD state for one tick.
#[derive(Clone, Debug)]
pub struct OnroadFrame {
    /// Alert shown on the overlay band (may lag the selected alert, see
    /// [`OnroadState::update`]).
    pub alert: Alert,
    pub alert_bg: StatusColor,
    pub alert_changed: bool,
    /// Border color: the status color, or the alert color while the
    /// controller is unresponsive.
    pub border_bg: StatusColor,
    pub border_changed: bool,
    pub blink: BlinkFrame,
    pub car: CarState,
}

/// Owned per-drive HUD state.
pub struct OnroadState {
    selector: AlertSelector,
    animator: BlinkAnimator,
    render: RenderState,
    status: UiStatus,

    /// Subscriber frame at which the car last became started.
    started_frame: u64,
    started_prev: bool,

    /// Camera-only view: leave the alert overlay untouched.
    openpilot_view_enabled: bool,

    /// Previous tick's selected alert kind, for transition logging.
    prev_kind: String,
}

impl OnroadState {
    pub fn new(config: &HudConfig) -> Self {
        Self {
            selector: AlertSelector::new(),
            animator: BlinkAnimator::with_base_alpha(config.turn_signals.base_alpha),
            render: RenderState::new(),
            status: UiStatus::default(),
            started_frame: 0,
            started_prev: false,
            openpilot_view_enabled: config.display.openpilot_view_enabled,
            prev_kind: String::new(),
        }
    }

    #[inline]
    pub const fn status(&self) -> UiStatus { self.status }

    #[inline]
    pub const fn started_frame(&self) -> u64 { self.started_frame }

    #[inline]
    pub const fn render_state(&self) -> &RenderState { &self.render }

    /// Clear the overlay on an onroad/offroad transition.
    pub fn offroad_transition(
        &mut self,
        offroad: bool,
    ) {
        log::info!("{} transition, clearing alert overlay", if offroad { "offroad" } else { "onroad" });
        let bg = self.render.border_bg();
        self.render.update_alert(&Alert::default(), bg);
    }

    /// Advance the HUD by one tick.
    ///
    /// The overlay only takes the selected alert when the controller reported
    /// this tick or the alert is non-empty. An empty watchdog result between
    /// controller messages therefore keeps the last reported alert on screen.
    pub fn update(
        &mut self,
        snapshot: &TelemetrySnapshot,
        now: Instant,
    ) -> OnroadFrame {
        self.track_started(snapshot);

        if snapshot.controls_state.ever_received() {
            self.status = UiStatus::from_controls(&snapshot.controls_state.data);
        }
        let mut bg = self.status.bg_color();

        let alert = self.selector.select(snapshot, self.started_frame, now);
        self.log_alert_transition(&alert);

        if snapshot.controls_state.updated || !alert.is_empty() {
            bg = resolve_bg(self.status, &alert);
            if !self.openpilot_view_enabled && self.render.update_alert(&alert, bg) {
                log::debug!("alert repaint: kind={:?} size={:?}", alert.kind, alert.size);
            }
        }

        // The unresponsive override reaches the border too
        if self.render.update_border(bg) {
            log::debug!("border repaint: status={:?} alert={:?}", self.status, alert.kind);
        }

        let car = &snapshot.car_state.data;
        let blink = self.animator.tick(car.left_blinker, car.right_blinker, now);

        OnroadFrame {
            alert: self.render.alert().clone(),
            alert_bg: self.render.alert_bg(),
            alert_changed: self.render.alert_dirty(),
            border_bg: self.render.border_bg(),
            border_changed: self.render.border_dirty(),
            blink,
            car: car.clone(),
        }
    }

    /// Call after the frame has been drawn.
    pub const fn end_frame(&mut self) { self.render.end_frame(); }

    fn track_started(
        &mut self,
        snapshot: &TelemetrySnapshot,
    ) {
        if snapshot.started == self.started_prev {
            return;
        }
        self.started_prev = snapshot.started;

        if snapshot.started {
            self.started_frame = snapshot.frame;
            self.animator.reset();
            log::info!("car started at frame {}", snapshot.frame);
        }
        self.offroad_transition(!snapshot.started);
    }

    fn log_alert_transition(
        &mut self,
        alert: &Alert,
    ) {
        if alert.kind == self.prev_kind {
            return;
        }
        if alert.is_watchdog() {
            log::warn!("watchdog alert: {} ({})", alert.kind, alert.text2);
        } else if Alert::is_watchdog_kind(&self.prev_kind) {
            log::info!("watchdog alert cleared: {}", self.prev_kind);
        }
        self.prev_kind.clone_from(&alert.kind);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
