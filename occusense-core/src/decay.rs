//! Evidence Decay Model
//!
//! ## Overview
//!
//! When a sensor stops reporting activity, its evidence should not vanish
//! instantly - a person sitting still in a room did not leave the moment
//! the motion sensor cleared. The decay model tracks whether an entity's
//! evidence is fresh or fading and computes a continuous freshness factor
//! in [0, 1] using exponential half-life decay:
//!
//! ```text
//! factor = 0.5 ^ (age_seconds / half_life)
//! ```
//!
//! Below 5% the remaining evidence is noise, so the factor is floored to
//! 0.0 and the next `tick` clears the decaying state.
//!
//! ## Half-life selection
//!
//! Sleeping areas carry two half-lives: the long base value while inside
//! the configured sleep window, and a shorter "awake" value outside it.
//! Both same-day (`13:00-15:00`) and overnight (`23:00-07:00`) windows
//! are supported. Areas without a schedule always use the base value.
//!
//! ## State machine
//!
//! `start_decay` and `stop_decay` are idempotent; only the stopped->
//! decaying transition resets the decay clock, so repeated inactive
//! reports while already fading do not refresh the evidence.

use crate::constants::decay::{DECAY_CUTOFF, MS_PER_SECOND};
use crate::time::{LocalClock, SleepWindow, Timestamp};

/// Tracks the freshness of one entity's evidence after it ceases
#[derive(Debug, Clone)]
pub struct Decay {
    is_decaying: bool,
    decay_start: Timestamp,
    base_half_life: f32,
    awake_half_life: Option<f32>,
    sleep_window: Option<SleepWindow>,
    clock: LocalClock,
}

impl Decay {
    /// Create an unscheduled decay model with the given half-life in
    /// seconds
    pub fn new(half_life: f32) -> Self {
        Self {
            is_decaying: false,
            decay_start: 0,
            base_half_life: half_life,
            awake_half_life: None,
            sleep_window: None,
            clock: LocalClock::utc(),
        }
    }

    /// Create a sleep-scheduled decay model
    ///
    /// `half_life` applies inside the window, `awake_half_life` outside
    /// it. The window is evaluated against local time via `clock`.
    pub fn with_schedule(
        half_life: f32,
        awake_half_life: f32,
        window: SleepWindow,
        clock: LocalClock,
    ) -> Self {
        Self {
            is_decaying: false,
            decay_start: 0,
            base_half_life: half_life,
            awake_half_life: Some(awake_half_life),
            sleep_window: Some(window),
            clock,
        }
    }

    /// Whether evidence is currently fading
    pub fn is_decaying(&self) -> bool {
        self.is_decaying
    }

    /// When the current decay began
    pub fn decay_start(&self) -> Timestamp {
        self.decay_start
    }

    /// Effective half-life at the given instant, in seconds
    ///
    /// The awake half-life is used only when a schedule is present and
    /// the instant falls outside the sleep window; in every other case -
    /// no schedule, no awake value, or inside the window - the base value
    /// applies.
    pub fn half_life(&self, now: Timestamp) -> f32 {
        let (Some(awake), Some(window)) = (self.awake_half_life, self.sleep_window) else {
            return self.base_half_life;
        };

        if window.contains(self.clock.time_of_day(now)) {
            self.base_half_life
        } else {
            awake
        }
    }

    /// Freshness of the last evidence edge, in [0, 1]
    ///
    /// Pure read: does not mutate state. Returns 1.0 when not decaying or
    /// when `decay_start` is in the future (clock skew), 0.0 when the
    /// effective half-life is not positive, and the exponential factor
    /// otherwise, floored to 0.0 below the practical cutoff.
    pub fn decay_factor(&self, now: Timestamp) -> f32 {
        if !self.is_decaying {
            return 1.0;
        }

        // Clock skew: no decay has occurred yet.
        if now < self.decay_start {
            return 1.0;
        }

        let half_life = self.half_life(now);
        if !(half_life.is_finite() && half_life > 0.0) {
            log_warn!(
                "invalid half-life {} detected, treating as immediate decay",
                half_life
            );
            return 0.0;
        }

        let age_s = (now - self.decay_start) as f32 / MS_PER_SECOND;
        let factor = libm::powf(0.5, age_s / half_life);
        if factor < DECAY_CUTOFF {
            0.0
        } else {
            factor
        }
    }

    /// Recompute the factor and update state
    ///
    /// Call periodically from the area's scheduling loop. Clears the
    /// decaying flag once the factor has reached practical zero.
    pub fn tick(&mut self, now: Timestamp) -> f32 {
        let factor = self.decay_factor(now);

        if self.is_decaying && factor <= 0.0 {
            self.is_decaying = false;
        }

        factor
    }

    /// Begin decay, only if not already running
    pub fn start_decay(&mut self, now: Timestamp) {
        if !self.is_decaying {
            self.is_decaying = true;
            self.decay_start = now;
        }
    }

    /// Stop decay, only if currently running
    pub fn stop_decay(&mut self) {
        if self.is_decaying {
            self.is_decaying = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    const HOUR_MS: u64 = 3_600_000;

    #[test]
    fn fresh_until_started() {
        let decay = Decay::new(300.0);
        assert_eq!(decay.decay_factor(1_000_000), 1.0);
    }

    #[test]
    fn halves_every_half_life() {
        let mut decay = Decay::new(100.0);
        decay.start_decay(0);

        assert_eq!(decay.decay_factor(0), 1.0);
        assert!((decay.decay_factor(100_000) - 0.5).abs() < 1e-3);
        assert!((decay.decay_factor(200_000) - 0.25).abs() < 1e-3);
    }

    #[test]
    fn monotonically_non_increasing() {
        let mut decay = Decay::new(60.0);
        decay.start_decay(0);

        let mut last = 1.0;
        for step in 0..50 {
            let factor = decay.decay_factor(step * 10_000);
            assert!(factor <= last);
            last = factor;
        }
    }

    #[test]
    fn floors_below_cutoff() {
        let mut decay = Decay::new(100.0);
        decay.start_decay(0);

        // 0.5^(age/100) < 0.05 once age > ~432s.
        assert!(decay.decay_factor(431_000) > 0.0);
        assert_eq!(decay.decay_factor(500_000), 0.0);
    }

    #[test]
    fn future_start_means_no_decay_yet() {
        let mut decay = Decay::new(100.0);
        decay.start_decay(10_000);
        assert_eq!(decay.decay_factor(5_000), 1.0);
    }

    #[test]
    fn non_positive_half_life_is_immediate_decay() {
        let mut decay = Decay::new(0.0);
        decay.start_decay(0);
        assert_eq!(decay.decay_factor(1), 0.0);

        let mut decay = Decay::new(-5.0);
        decay.start_decay(0);
        assert_eq!(decay.decay_factor(1), 0.0);
    }

    #[test]
    fn start_is_idempotent_while_decaying() {
        let mut decay = Decay::new(100.0);
        decay.start_decay(0);
        let started = decay.decay_start();

        // A second start must not reset the clock.
        decay.start_decay(50_000);
        assert_eq!(decay.decay_start(), started);
    }

    #[test]
    fn stop_is_idempotent_while_stopped() {
        let mut decay = Decay::new(100.0);
        decay.stop_decay();
        assert!(!decay.is_decaying());

        decay.start_decay(0);
        decay.stop_decay();
        decay.stop_decay();
        assert!(!decay.is_decaying());
        assert_eq!(decay.decay_factor(1_000_000), 1.0);
    }

    #[test]
    fn tick_clears_flag_at_zero() {
        let mut decay = Decay::new(100.0);
        decay.start_decay(0);

        assert!(decay.tick(100_000) > 0.0);
        assert!(decay.is_decaying());

        assert_eq!(decay.tick(1_000_000), 0.0);
        assert!(!decay.is_decaying());
    }

    #[test]
    fn awake_half_life_outside_sleep_window() {
        // Overnight window 23:00-07:00, UTC clock. 2024-01-01 00:00 UTC.
        let midnight: Timestamp = 1_704_067_200_000;
        let window = SleepWindow::parse("23:00:00", "07:00:00").unwrap();
        let decay = Decay::with_schedule(1800.0, 600.0, window, LocalClock::utc());

        // 03:00 is inside the window: long base half-life.
        assert_eq!(decay.half_life(midnight + 3 * HOUR_MS), 1800.0);
        // 15:00 is outside: awake half-life.
        assert_eq!(decay.half_life(midnight + 15 * HOUR_MS), 600.0);
        // 23:30 wraps into the window again.
        assert_eq!(decay.half_life(midnight + 23 * HOUR_MS + HOUR_MS / 2), 1800.0);
    }

    #[test]
    fn same_day_window() {
        let midnight: Timestamp = 1_704_067_200_000;
        let window = SleepWindow::new(
            NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
        );
        let decay = Decay::with_schedule(1800.0, 600.0, window, LocalClock::utc());

        assert_eq!(decay.half_life(midnight + 14 * HOUR_MS), 1800.0);
        assert_eq!(decay.half_life(midnight + 16 * HOUR_MS), 600.0);
    }

    #[test]
    fn unscheduled_always_uses_base() {
        let decay = Decay::new(300.0);
        assert_eq!(decay.half_life(0), 300.0);
        assert_eq!(decay.half_life(1_704_067_200_000), 300.0);
    }
}
