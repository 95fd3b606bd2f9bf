//! Time management for the inference engine
//!
//! Provides a clock abstraction so the engine never reads wall-clock time
//! itself - every inference entry point takes an explicit `Timestamp`.
//! This keeps the hot path pure and makes decay behavior fully testable
//! with `FixedTime`.
//!
//! Local-time projection (day-of-week, time slot, sleep windows) is
//! handled by [`LocalClock`], a fixed UTC-offset view used by the decay
//! scheduler and the time-of-day prior table.

use chrono::{DateTime, Datelike, FixedOffset, NaiveTime, Timelike};

use crate::errors::{ModelError, ModelResult};

/// Timestamp in milliseconds since the Unix epoch
pub type Timestamp = u64;

/// Source of time for the system
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;

    /// Check if this source provides wall clock time (vs monotonic)
    fn is_wall_clock(&self) -> bool;

    /// Get precision in milliseconds
    fn precision_ms(&self) -> u32;
}

/// System time source (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct SystemTime;

#[cfg(feature = "std")]
impl TimeSource for SystemTime {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime as StdSystemTime, UNIX_EPOCH};

        StdSystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }

    fn is_wall_clock(&self) -> bool {
        true
    }

    fn precision_ms(&self) -> u32 {
        1
    }
}

/// Fixed time source for testing
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Create a source frozen at the given timestamp
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Jump to an absolute timestamp
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Advance by the given number of milliseconds
    pub fn advance(&mut self, ms: u64) {
        self.timestamp += ms;
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }

    fn is_wall_clock(&self) -> bool {
        false
    }

    fn precision_ms(&self) -> u32 {
        1
    }
}

/// Fixed UTC-offset projection of timestamps onto local wall-clock time
///
/// The engine needs local time for two things: picking the time-of-day
/// prior slot and deciding whether "now" falls inside a configured sleep
/// window. Both only need an offset, not a full tz database; daylight
/// transitions are the host's problem and arrive as a new offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalClock {
    offset_secs: i32,
}

impl LocalClock {
    /// A clock with no offset (local time == UTC)
    pub const fn utc() -> Self {
        Self { offset_secs: 0 }
    }

    /// A clock at a fixed offset east of UTC, in seconds
    pub const fn with_offset(offset_secs: i32) -> Self {
        Self { offset_secs }
    }

    fn local(&self, ts: Timestamp) -> Option<DateTime<FixedOffset>> {
        // Out-of-range offsets fall back to UTC rather than failing the
        // whole query chain.
        let offset =
            FixedOffset::east_opt(self.offset_secs).or_else(|| FixedOffset::east_opt(0))?;
        let utc = DateTime::from_timestamp_millis(ts as i64)?;
        Some(utc.with_timezone(&offset))
    }

    /// Local day of week, 0 = Monday .. 6 = Sunday
    pub fn day_of_week(&self, ts: Timestamp) -> u32 {
        self.local(ts)
            .map(|dt| dt.weekday().num_days_from_monday())
            .unwrap_or(0)
    }

    /// Local time slot index within the day, 0..24 at hourly resolution
    pub fn time_slot(&self, ts: Timestamp) -> usize {
        use crate::constants::prior::SLOT_MINUTES;

        self.local(ts)
            .map(|dt| ((dt.hour() * 60 + dt.minute()) / SLOT_MINUTES) as usize)
            .unwrap_or(0)
    }

    /// Local wall-clock time of day
    pub fn time_of_day(&self, ts: Timestamp) -> NaiveTime {
        self.local(ts)
            .map(|dt| dt.time())
            .unwrap_or(NaiveTime::MIN)
    }
}

impl Default for LocalClock {
    fn default() -> Self {
        Self::utc()
    }
}

/// A daily time window, possibly wrapping past midnight
///
/// Used to model sleep intervals: `23:00:00`-`07:00:00` is a valid
/// overnight window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl SleepWindow {
    /// Create a window from already-parsed times
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Parse a window from `HH:MM:SS` strings
    pub fn parse(start: &str, end: &str) -> ModelResult<Self> {
        let start = NaiveTime::parse_from_str(start, "%H:%M:%S")
            .map_err(|_| ModelError::InvalidTimeFormat)?;
        let end = NaiveTime::parse_from_str(end, "%H:%M:%S")
            .map_err(|_| ModelError::InvalidTimeFormat)?;
        Ok(Self { start, end })
    }

    /// Whether the given time of day falls inside the window
    ///
    /// Same-day windows (`start <= end`) are inclusive on both ends;
    /// overnight windows wrap past midnight.
    pub fn contains(&self, t: NaiveTime) -> bool {
        if self.start <= self.end {
            self.start <= t && t <= self.end
        } else {
            t >= self.start || t <= self.end
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_time_advances() {
        let mut time = FixedTime::new(1000);
        assert_eq!(time.now(), 1000);

        time.advance(500);
        assert_eq!(time.now(), 1500);
    }

    #[test]
    fn day_of_week_is_monday_based() {
        // 2024-01-01 00:00 UTC was a Monday.
        let clock = LocalClock::utc();
        let monday_ms: Timestamp = 1_704_067_200_000;
        assert_eq!(clock.day_of_week(monday_ms), 0);
        assert_eq!(clock.day_of_week(monday_ms + 86_400_000 * 6), 6);
    }

    #[test]
    fn time_slot_is_hourly() {
        let clock = LocalClock::utc();
        let midnight: Timestamp = 1_704_067_200_000;
        assert_eq!(clock.time_slot(midnight), 0);
        assert_eq!(clock.time_slot(midnight + 3_600_000 * 13 + 60_000 * 29), 13);
        assert_eq!(clock.time_slot(midnight + 3_600_000 * 23), 23);
    }

    #[test]
    fn offset_shifts_local_time() {
        // +02:00 turns 23:00 UTC into 01:00 the next local day.
        let clock = LocalClock::with_offset(2 * 3600);
        let monday_23h: Timestamp = 1_704_067_200_000 + 3_600_000 * 23;
        assert_eq!(clock.time_slot(monday_23h), 1);
        assert_eq!(clock.day_of_week(monday_23h), 1);
    }

    #[test]
    fn same_day_window() {
        let w = SleepWindow::parse("13:00:00", "15:00:00").unwrap();
        assert!(w.contains(NaiveTime::from_hms_opt(13, 0, 0).unwrap()));
        assert!(w.contains(NaiveTime::from_hms_opt(14, 30, 0).unwrap()));
        assert!(!w.contains(NaiveTime::from_hms_opt(15, 0, 1).unwrap()));
        assert!(!w.contains(NaiveTime::from_hms_opt(9, 0, 0).unwrap()));
    }

    #[test]
    fn overnight_window_wraps_midnight() {
        let w = SleepWindow::parse("23:00:00", "07:00:00").unwrap();
        assert!(w.contains(NaiveTime::from_hms_opt(23, 30, 0).unwrap()));
        assert!(w.contains(NaiveTime::from_hms_opt(3, 0, 0).unwrap()));
        assert!(w.contains(NaiveTime::from_hms_opt(7, 0, 0).unwrap()));
        assert!(!w.contains(NaiveTime::from_hms_opt(12, 0, 0).unwrap()));
    }

    #[test]
    fn malformed_time_string_is_rejected() {
        assert_eq!(
            SleepWindow::parse("25:00:00", "07:00:00"),
            Err(ModelError::InvalidTimeFormat)
        );
        assert_eq!(
            SleepWindow::parse("23:00", "07:00:00"),
            Err(ModelError::InvalidTimeFormat)
        );
    }
}
