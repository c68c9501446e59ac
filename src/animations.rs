//! Turn-signal blink animation and color blending.
//!
//! # Blink Animation
//!
//! While a blinker is on, a row of chevrons fans out from the center. One
//! chevron is "lit" at the animation index; its neighbours fade with distance
//! and every chevron shrinks with its position in the row:
//!
//! ```text
//! alpha(i)       = base_alpha / max(1, 2 * |index - i|)
//! size_factor(i) = N / (i + N)
//! ```
//!
//! The index sweeps from 0 to N - 1, then the animation rests for a few ticks
//! before the next sweep, which reads as the repeating cadence of a blinker.
//!
//! **Mixed timing model**: the index advance is gated on monotonic time (so the
//! sweep speed does not depend on the frame rate), while the rest between
//! sweeps is counted in ticks. Both directions share a single index.
//!
//! # Color Blending
//!
//! Rgb565 has no alpha channel, so translucent overlay elements are blended
//! against a known backdrop with [`lerp_rgb565`], using fixed-point integer math.

use std::time::{Duration, Instant};

use embedded_graphics::{pixelcolor::Rgb565, prelude::IntoStorage};

use crate::config::{BLINK_ADVANCE_INTERVAL, BLINK_BASE_ALPHA, BLINK_COOLDOWN_TICKS, BLINK_DRAW_COUNT};

// =============================================================================
// Blink Frame
// =============================================================================

/// Opacity and scale of one chevron.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct BlinkIcon {
    pub alpha: f32,
    pub size_factor: f32,
}

/// Render-ready turn-signal state for one tick.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BlinkFrame {
    /// Animation index the icons were computed for.
    pub index: usize,
    pub left_visible: bool,
    pub right_visible: bool,
    pub icons: [BlinkIcon; BLINK_DRAW_COUNT],
}

impl BlinkFrame {
    /// Frame with no chevrons drawn.
    pub const fn hidden() -> Self {
        Self {
            index: 0,
            left_visible: false,
            right_visible: false,
            icons: [BlinkIcon {
                alpha: 0.0,
                size_factor: 0.0,
            }; BLINK_DRAW_COUNT],
        }
    }

    /// Whether any direction is drawn this tick.
    #[inline]
    pub const fn is_visible(&self) -> bool { self.left_visible || self.right_visible }
}

impl Default for BlinkFrame {
    fn default() -> Self { Self::hidden() }
}

// =============================================================================
// Blink Animator
// =============================================================================

/// Owned turn-signal animation state. One instance per signal pair, driven
/// exclusively by the frame driver.
#[derive(Clone, Debug)]
pub struct BlinkAnimator {
    /// Current animation index, always in `[0, BLINK_DRAW_COUNT)`.
    index: usize,

    /// Ticks left before the animation resumes after a full sweep.
    pause_ticks_remaining: u32,

    /// Time of the last index advance. `None` until the first advance.
    last_advance: Option<Instant>,

    base_alpha: f32,
    advance_interval: Duration,
    cooldown_ticks: u32,
}

impl BlinkAnimator {
    /// Create an idle animator with the default opacity and timing.
    pub const fn new() -> Self { Self::with_base_alpha(BLINK_BASE_ALPHA) }

    /// Create an idle animator with a custom opacity for the lit chevron.
    pub const fn with_base_alpha(base_alpha: f32) -> Self {
        Self {
            index: 0,
            pause_ticks_remaining: 0,
            last_advance: None,
            base_alpha,
            advance_interval: BLINK_ADVANCE_INTERVAL,
            cooldown_ticks: BLINK_COOLDOWN_TICKS,
        }
    }

    #[inline]
    pub const fn index(&self) -> usize { self.index }

    #[inline]
    pub const fn pause_ticks_remaining(&self) -> u32 { self.pause_ticks_remaining }

    /// Return to idle (used when the car transitions onroad).
    ///
    /// Also forgets the last advance time, so the first lit tick of a new
    /// drive advances immediately.
    pub const fn reset(&mut self) {
        self.index = 0;
        self.pause_ticks_remaining = 0;
        self.last_advance = None;
    }

    /// Advance the animation by one tick.
    ///
    /// # Parameters
    /// - `left_on`, `right_on`: blinker states sampled this tick
    /// - `now`: current monotonic time, gates the index advance
    ///
    /// # Returns
    /// The chevrons to draw this tick, computed for the index before it advances.
    pub fn tick(
        &mut self,
        left_on: bool,
        right_on: bool,
        now: Instant,
    ) -> BlinkFrame {
        if self.pause_ticks_remaining > 0 {
            self.pause_ticks_remaining -= 1;
            self.index = 0;
            return BlinkFrame::hidden();
        }

        if !left_on && !right_on {
            self.index = 0;
            return BlinkFrame::hidden();
        }

        let frame = BlinkFrame {
            index: self.index,
            left_visible: left_on,
            right_visible: right_on,
            icons: self.icons(),
        };

        let interval_elapsed = self
            .last_advance
            .is_none_or(|last| now.saturating_duration_since(last) > self.advance_interval);
        if interval_elapsed {
            self.last_advance = Some(now);
            self.index += 1;
        }

        if self.index >= BLINK_DRAW_COUNT {
            self.index = BLINK_DRAW_COUNT - 1;
            self.pause_ticks_remaining = self.cooldown_ticks;
        }

        frame
    }

    fn icons(&self) -> [BlinkIcon; BLINK_DRAW_COUNT] {
        let count = BLINK_DRAW_COUNT as f32;
        core::array::from_fn(|i| {
            let distance = self.index.abs_diff(i);
            BlinkIcon {
                alpha: self.base_alpha / (distance * 2).max(1) as f32,
                size_factor: count / (i as f32 + count),
            }
        })
    }
}

impl Default for BlinkAnimator {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Color Blending
// =============================================================================

/// Linear interpolation between two Rgb565 colors (`t` = 0.0 gives `from`).
///
/// Uses 8-bit fixed-point math per channel. When the computed step truncates to
/// zero for a non-zero delta, a step of ±1 is taken so any `t > 0` moves
/// visibly toward `to`.
pub fn lerp_rgb565(
    from: Rgb565,
    to: Rgb565,
    t: f32,
) -> Rgb565 {
    let from_raw = from.into_storage();
    let to_raw = to.into_storage();

    let from_r = i32::from((from_raw >> 11) & 0x1F);
    let from_g = i32::from((from_raw >> 5) & 0x3F);
    let from_b = i32::from(from_raw & 0x1F);

    let to_r = i32::from((to_raw >> 11) & 0x1F);
    let to_g = i32::from((to_raw >> 5) & 0x3F);
    let to_b = i32::from(to_raw & 0x1F);

    let t_fixed = (t.clamp(0.0, 1.0) * 256.0) as i32;

    let compute_step = |delta: i32| -> i32 {
        if delta == 0 || t_fixed == 0 {
            0
        } else {
            let step = (delta * t_fixed) >> 8;
            if step == 0 {
                if delta > 0 { 1 } else { -1 }
            } else {
                step
            }
        }
    };

    let r = (from_r + compute_step(to_r - from_r)).clamp(0, 31);
    let g = (from_g + compute_step(to_g - from_g)).clamp(0, 63);
    let b = (from_b + compute_step(to_b - from_b)).clamp(0, 31);

    Rgb565::new(r as u8, g as u8, b as u8)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, GREEN, WHITE};
    use crate::config::TICK_PERIOD;

    /// Drive `animator` with `left_on` for `ticks` ticks starting at `start`,
    /// returning the index after each tick.
    fn run(
        animator: &mut BlinkAnimator,
        start: Instant,
        ticks: u32,
        left_on: bool,
    ) -> Vec<usize> {
        (0..ticks)
            .map(|n| {
                animator.tick(left_on, false, start + TICK_PERIOD * n);
                animator.index()
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Idle Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_idle_index_stays_zero() {
        let boot = Instant::now();
        let mut animator = BlinkAnimator::new();

        let indices = run(&mut animator, boot, 200, false);
        assert!(indices.iter().all(|&i| i == 0), "Idle animator should never advance");
        assert_eq!(animator.pause_ticks_remaining(), 0);
    }

    #[test]
    fn test_idle_frame_is_hidden() {
        let mut animator = BlinkAnimator::new();
        let frame = animator.tick(false, false, Instant::now());
        assert!(!frame.is_visible());
        assert_eq!(frame, BlinkFrame::hidden());
    }

    #[test]
    fn test_signal_off_resets_index_without_pause() {
        let boot = Instant::now();
        let mut animator = BlinkAnimator::new();
        run(&mut animator, boot, 3, true);
        assert_eq!(animator.index(), 3);

        animator.tick(false, false, boot + TICK_PERIOD * 3);
        assert_eq!(animator.index(), 0, "Turning the signal off should reset the index");
        assert_eq!(animator.pause_ticks_remaining(), 0, "Reset on off should not start a pause");
    }

    // -------------------------------------------------------------------------
    // Sweep And Pause Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_index_sweeps_then_pauses() {
        let boot = Instant::now();
        let mut animator = BlinkAnimator::new();

        // 50ms ticks exceed the 45ms interval, so every tick advances
        let indices = run(&mut animator, boot, BLINK_DRAW_COUNT as u32, true);
        assert_eq!(indices, vec![1, 2, 3, 4, 5, 6, 7, 7], "Index should climb and clamp at N - 1");
        assert_eq!(
            animator.pause_ticks_remaining(),
            BLINK_COOLDOWN_TICKS,
            "Reaching the end should start the cooldown"
        );

        // One tick later the index is back at 0
        let frame = animator.tick(true, false, boot + TICK_PERIOD * 8);
        assert_eq!(animator.index(), 0);
        assert!(!frame.is_visible(), "No chevrons during the pause");

        // Stays at 0 until the cooldown is exhausted
        for n in 9..(8 + BLINK_COOLDOWN_TICKS) {
            animator.tick(true, false, boot + TICK_PERIOD * n);
            assert_eq!(animator.index(), 0, "Index should stay 0 during pause (tick {n})");
        }
        assert_eq!(animator.pause_ticks_remaining(), 0);

        // Animation resumes from index 0
        let frame = animator.tick(true, false, boot + TICK_PERIOD * (8 + BLINK_COOLDOWN_TICKS));
        assert!(frame.is_visible());
        assert_eq!(frame.index, 0, "Sweep should restart at index 0");
        assert_eq!(animator.index(), 1);
    }

    #[test]
    fn test_index_never_exceeds_last_icon() {
        let boot = Instant::now();
        let mut animator = BlinkAnimator::new();
        let indices = run(&mut animator, boot, 500, true);
        assert!(indices.iter().all(|&i| i < BLINK_DRAW_COUNT));
    }

    #[test]
    fn test_advance_gated_by_interval() {
        let boot = Instant::now();
        let mut animator = BlinkAnimator::new();

        animator.tick(true, false, boot);
        assert_eq!(animator.index(), 1, "First tick advances immediately");

        // 45ms later: not strictly greater than the interval
        animator.tick(true, false, boot + BLINK_ADVANCE_INTERVAL);
        assert_eq!(animator.index(), 1, "Exactly one interval should not advance");

        animator.tick(true, false, boot + BLINK_ADVANCE_INTERVAL + Duration::from_millis(1));
        assert_eq!(animator.index(), 2);
    }

    #[test]
    fn test_fast_ticks_do_not_speed_up_sweep() {
        let boot = Instant::now();
        let mut animator = BlinkAnimator::new();

        // 10ms ticks: advances only every 5th tick (50ms > 45ms)
        for n in 0..21u32 {
            animator.tick(true, false, boot + Duration::from_millis(10) * n);
        }
        assert_eq!(animator.index(), 5, "Sweep speed should follow time, not tick count");
    }

    #[test]
    fn test_scenario_400ms_at_20hz() {
        let boot = Instant::now();
        let mut animator = BlinkAnimator::new();

        // Ticks at 0, 50, ..., 350ms: the 8th tick reaches index 8 and clamps
        let indices = run(&mut animator, boot, 8, true);
        assert_eq!(*indices.last().unwrap(), BLINK_DRAW_COUNT - 1);
        assert_eq!(animator.pause_ticks_remaining(), 5, "UI_FREQ / 4 = 5 cooldown ticks");
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let boot = Instant::now();
        let mut animator = BlinkAnimator::new();
        run(&mut animator, boot, 8, true);

        animator.reset();
        assert_eq!(animator.index(), 0);
        assert_eq!(animator.pause_ticks_remaining(), 0);
        assert!(animator.tick(true, false, boot).is_visible(), "Reset animator should draw immediately");
    }

    #[test]
    fn test_reset_forgets_last_advance() {
        let boot = Instant::now();
        let mut animator = BlinkAnimator::new();
        run(&mut animator, boot, 2, true);
        assert_eq!(animator.index(), 2);

        animator.reset();
        animator.tick(true, false, boot + TICK_PERIOD + Duration::from_millis(10));
        assert_eq!(animator.index(), 1, "First tick after reset should advance without waiting");
    }

    // -------------------------------------------------------------------------
    // Icon Alpha And Size Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_icons_fade_with_distance() {
        let boot = Instant::now();
        let mut animator = BlinkAnimator::new();
        let frame = animator.tick(true, false, boot);

        assert_eq!(frame.index, 0);
        assert!((frame.icons[0].alpha - 0.8).abs() < 1e-6, "Lit icon uses base alpha");
        assert!((frame.icons[1].alpha - 0.4).abs() < 1e-6, "Distance 1 halves alpha");
        assert!((frame.icons[2].alpha - 0.2).abs() < 1e-6, "Distance 2 quarters alpha");
        assert!((frame.icons[7].alpha - 0.8 / 14.0).abs() < 1e-6);
    }

    #[test]
    fn test_icons_shrink_with_position() {
        let mut animator = BlinkAnimator::new();
        let frame = animator.tick(false, true, Instant::now());

        assert!(frame.right_visible && !frame.left_visible);
        assert!((frame.icons[0].size_factor - 1.0).abs() < 1e-6);
        assert!((frame.icons[7].size_factor - 8.0 / 15.0).abs() < 1e-6);
        for pair in frame.icons.windows(2) {
            assert!(pair[1].size_factor < pair[0].size_factor, "Icons should shrink outward");
        }
    }

    #[test]
    fn test_custom_base_alpha() {
        let mut animator = BlinkAnimator::with_base_alpha(0.5);
        let frame = animator.tick(true, true, Instant::now());
        assert!((frame.icons[0].alpha - 0.5).abs() < 1e-6);
        assert!(frame.left_visible && frame.right_visible);
    }

    // -------------------------------------------------------------------------
    // Color Interpolation Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_lerp_rgb565_same_color() {
        assert_eq!(lerp_rgb565(GREEN, GREEN, 0.5), GREEN);
    }

    #[test]
    fn test_lerp_rgb565_endpoints() {
        assert_eq!(lerp_rgb565(BLACK, WHITE, 0.0), BLACK, "At t=0, should return 'from' color");
        assert_eq!(lerp_rgb565(BLACK, WHITE, 1.0), WHITE, "At t=1, should return 'to' color");
    }

    #[test]
    fn test_lerp_rgb565_clamps_t() {
        assert_eq!(lerp_rgb565(BLACK, WHITE, 2.0), WHITE);
        assert_eq!(lerp_rgb565(BLACK, WHITE, -1.0), BLACK);
    }

    #[test]
    fn test_lerp_rgb565_midpoint() {
        let raw = lerp_rgb565(BLACK, WHITE, 0.5).into_storage();
        let r = (raw >> 11) & 0x1F;
        let g = (raw >> 5) & 0x3F;
        let b = raw & 0x1F;

        assert!(r > 10 && r < 20, "Red component should be around midpoint");
        assert!(g > 25 && g < 40, "Green component should be around midpoint");
        assert!(b > 10 && b < 20, "Blue component should be around midpoint");
    }

    #[test]
    fn test_lerp_rgb565_small_t_moves() {
        let result = lerp_rgb565(BLACK, GREEN, 0.01);
        assert_ne!(result, BLACK, "Any t > 0 should take at least one step");
    }
}
