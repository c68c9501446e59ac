//! Frame timing and repaint counters for the frame driver.
//!
//! ```ignore
//! let mut metrics = FrameMetrics::new();
//!
//! // In main loop:
//! let frame_start = Instant::now();
//! // ... update + render ...
//! let render_time = frame_start.elapsed();
//! // ... sleep ...
//! metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
//! ```
//!
//! Repaint counters show whether repaint suppression works: on a quiet drive
//! the alert and border counts stay far below the frame count.

use std::time::Duration;

use crate::onroad::OnroadFrame;

/// Frame timing and repaint statistics.
pub struct FrameMetrics {
    // Frame timing (microseconds for precision)
    /// Total frame time (update + render + sleep)
    pub frame_time_us: u32,
    /// Time spent updating state and drawing
    pub render_time_us: u32,
    /// Time spent sleeping (rate limiting)
    pub sleep_time_us: u32,

    // Statistics
    pub frame_time_min_us: u32,
    pub frame_time_max_us: u32,
    /// Exponential moving average of the frame time
    frame_time_avg_us: f32,

    // Counters
    /// Ticks driven since startup
    pub total_frames: u64,
    /// Alert band repaints
    pub alert_repaints: u32,
    /// Border repaints
    pub border_repaints: u32,
    /// Ticks with at least one turn signal visible
    pub blink_frames: u32,
    /// Ticks showing a watchdog alert
    pub watchdog_frames: u32,
}

impl FrameMetrics {
    /// EMA smoothing factor.
    const EMA_ALPHA: f32 = 0.1;

    pub const fn new() -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            sleep_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            total_frames: 0,
            alert_repaints: 0,
            border_repaints: 0,
            blink_frames: 0,
            watchdog_frames: 0,
        }
    }

    /// Record timing for one tick. Updates min/max and the rolling average.
    pub fn record_frame(
        &mut self,
        total_time: Duration,
        render_time: Duration,
        sleep_time: Duration,
    ) {
        let total_us = total_time.as_micros() as u32;

        self.frame_time_us = total_us;
        self.render_time_us = render_time.as_micros() as u32;
        self.sleep_time_us = sleep_time.as_micros() as u32;

        self.frame_time_min_us = self.frame_time_min_us.min(total_us);
        self.frame_time_max_us = self.frame_time_max_us.max(total_us);

        if self.total_frames == 0 {
            self.frame_time_avg_us = total_us as f32;
        } else {
            self.frame_time_avg_us =
                Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us);
        }

        self.total_frames += 1;
    }

    /// Count what `frame` asked the renderer to repaint.
    pub fn record_repaints(
        &mut self,
        frame: &OnroadFrame,
    ) {
        if frame.alert_changed {
            self.alert_repaints += 1;
        }
        if frame.border_changed {
            self.border_repaints += 1;
        }
        if frame.blink.is_visible() {
            self.blink_frames += 1;
        }
        if frame.alert.is_watchdog() {
            self.watchdog_frames += 1;
        }
    }

    /// Average frame time in microseconds.
    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 { self.frame_time_avg_us as u32 }
}

impl Default for FrameMetrics {
    fn default() -> Self { Self::new() }
}
