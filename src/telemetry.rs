//! Telemetry snapshot data model.
//!
//! The pub/sub layer that produces these values is external. The frame driver
//! polls a [`TelemetrySource`] once per tick and treats the returned
//! [`TelemetrySnapshot`] as an immutable value for the rest of that tick, so a
//! source refreshing between ticks can never tear a frame.
//!
//! Each topic carries:
//! - whether it was updated this tick,
//! - the decoded payload (last received value),
//! - the subscriber frame counter at which it was last received,
//! - the monotonic time at which it was last received.

use std::time::Instant;

use crate::alerts::{AlertSize, AudibleAlert};

/// Severity reported by the controller alongside its alert.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum AlertStatus {
    #[default]
    Normal,
    UserPrompt,
    Critical,
}

/// Payload of the `controlsState` topic (alert and engagement fields only).
#[derive(Clone, PartialEq, Default, Debug)]
pub struct ControlsState {
    pub enabled: bool,
    pub alert_text1: String,
    pub alert_text2: String,
    pub alert_type: String,
    pub alert_size: AlertSize,
    pub alert_sound: AudibleAlert,
    pub alert_status: AlertStatus,
}

/// Tire pressures in PSI.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct Tpms {
    pub fl: f32,
    pub fr: f32,
    pub rl: f32,
    pub rr: f32,
}

/// Payload of the `carState` topic (fields the overlay displays).
#[derive(Clone, PartialEq, Default, Debug)]
pub struct CarState {
    pub left_blinker: bool,
    pub right_blinker: bool,
    /// Vehicle speed in m/s.
    pub v_ego: f32,
    pub tpms: Tpms,
}

/// One topic as seen by the subscriber at snapshot time.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct Topic<T> {
    /// A new message arrived since the previous tick.
    pub updated: bool,
    /// Subscriber frame of the most recent message, `None` if never received.
    pub rcv_frame: Option<u64>,
    /// Receive time of the most recent message, `None` if never received.
    pub rcv_time: Option<Instant>,
    /// Last received payload (default until the first message).
    pub data: T,
}

impl<T> Topic<T> {
    /// Record a message received during `frame` at `now`.
    pub fn receive(
        &mut self,
        data: T,
        frame: u64,
        now: Instant,
    ) {
        self.data = data;
        self.updated = true;
        self.rcv_frame = Some(frame);
        self.rcv_time = Some(now);
    }

    /// Whether any message has ever been received on this topic.
    #[inline]
    pub const fn ever_received(&self) -> bool { self.rcv_frame.is_some() }
}

/// Consistent read of all subscribed topics at one tick.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct TelemetrySnapshot {
    /// Subscriber frame counter, incremented once per tick.
    pub frame: u64,
    /// Ignition / device started.
    pub started: bool,
    pub controls_state: Topic<ControlsState>,
    pub car_state: Topic<CarState>,
}

/// Producer of per-tick snapshots.
pub trait TelemetrySource {
    /// Return the snapshot for tick `frame` taken at `now`.
    fn poll(
        &mut self,
        frame: u64,
        now: Instant,
    ) -> TelemetrySnapshot;
}
