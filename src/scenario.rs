//! Scripted telemetry for the headless simulator.
//!
//! Plays back a fixed drive so every watchdog path can be observed without a
//! live pub/sub bus:
//!
//! | Time | Event |
//! |------|-------|
//! | 0s | Ignition on, controls silent |
//! | 3s - 6s | Left blinker on |
//! | 5s | Grace window over: "waiting for controls" |
//! | 6s | Controls start reporting, engaged, at 10 Hz |
//! | 7s - 8s | Controller raises a small user prompt |
//! | 10s | Controls go silent (unresponsive after 5 more seconds) |
//! | 18s | Controls recover |
//!
//! Car state is published every tick with a slow speed ramp and a slowly
//! leaking front-left tire.

use std::time::Instant;

use crate::alerts::{AlertSize, AudibleAlert};
use crate::config::UI_FREQ;
use crate::telemetry::{AlertStatus, CarState, ControlsState, TelemetrySnapshot, TelemetrySource, Tpms};

const BLINKER_ON_S: f32 = 3.0;
const BLINKER_OFF_S: f32 = 6.0;
const CONTROLS_START_S: f32 = 6.0;
const PROMPT_START_S: f32 = 7.0;
const PROMPT_END_S: f32 = 8.0;
const CONTROLS_SILENT_S: f32 = 10.0;
const CONTROLS_RECOVER_S: f32 = 18.0;

/// Controls state is published every other tick.
const CONTROLS_DIVIDER: u64 = 2;

/// Deterministic drive playback implementing [`TelemetrySource`].
pub struct ScriptedTelemetry {
    snapshot: TelemetrySnapshot,
}

impl ScriptedTelemetry {
    pub fn new() -> Self {
        Self {
            snapshot: TelemetrySnapshot::default(),
        }
    }

    fn controls_at(t: f32) -> ControlsState {
        if (PROMPT_START_S..PROMPT_END_S).contains(&t) {
            ControlsState {
                enabled: true,
                alert_text1: "Steer Assist Limited".into(),
                alert_text2: "Take the wheel".into(),
                alert_type: "steerSaturated/userPrompt".into(),
                alert_size: AlertSize::Small,
                alert_sound: AudibleAlert::Prompt,
                alert_status: AlertStatus::UserPrompt,
            }
        } else {
            ControlsState {
                enabled: true,
                ..ControlsState::default()
            }
        }
    }

    fn car_at(t: f32) -> CarState {
        CarState {
            left_blinker: (BLINKER_ON_S..BLINKER_OFF_S).contains(&t),
            right_blinker: false,
            v_ego: (t * 1.5).min(30.0),
            tpms: Tpms {
                fl: (36.0 - (t * 0.5).floor()).max(0.0),
                fr: 35.5,
                rl: 34.0,
                rr: 34.5,
            },
        }
    }

    fn controls_publishing(t: f32) -> bool {
        t >= CONTROLS_START_S && !(CONTROLS_SILENT_S..CONTROLS_RECOVER_S).contains(&t)
    }
}

impl Default for ScriptedTelemetry {
    fn default() -> Self { Self::new() }
}

impl TelemetrySource for ScriptedTelemetry {
    fn poll(
        &mut self,
        frame: u64,
        now: Instant,
    ) -> TelemetrySnapshot {
        let t = frame as f32 / UI_FREQ as f32;
        let snap = &mut self.snapshot;

        snap.frame = frame;
        snap.started = true;
        snap.controls_state.updated = false;
        snap.car_state.updated = false;

        if Self::controls_publishing(t) && frame % CONTROLS_DIVIDER == 0 {
            snap.controls_state.receive(Self::controls_at(t), frame, now);
        }
        snap.car_state.receive(Self::car_at(t), frame, now);

        snap.clone()
    }
}
