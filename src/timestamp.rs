//! Gregorian timestamps of time-based UUIDs

use std::time;

use chrono::{DateTime, Utc};

/// The number of 100-nanosecond ticks between 1582-10-15T00:00:00Z and 1970-01-01T00:00:00Z.
pub const GREGORIAN_OFFSET: u64 = 0x01b2_1dd2_1381_4000;

const TICKS_PER_SECOND: u64 = 10_000_000;

/// Represents a 60-bit count of 100-nanosecond intervals since the Gregorian reform
/// (1582-10-15T00:00:00Z).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The largest value representable in the 60-bit field.
    pub const MAX: Self = Self((1 << 60) - 1);

    /// Creates a timestamp from raw ticks, discarding bits above the 60th.
    pub const fn from_ticks(ticks: u64) -> Self {
        Self(ticks & Self::MAX.0)
    }

    /// Returns the raw 60-bit tick count.
    pub const fn ticks(&self) -> u64 {
        self.0
    }

    /// Creates a timestamp from a Unix time.
    ///
    /// Times beyond the 60-bit range (after the year 5236) saturate to [`Timestamp::MAX`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::Timestamp;
    ///
    /// let ts = Timestamp::from_unix(0, 0);
    /// assert_eq!(ts.ticks(), rfc4122::timestamp::GREGORIAN_OFFSET);
    /// ```
    pub const fn from_unix(seconds: u64, subsec_nanos: u32) -> Self {
        let ticks = seconds
            .saturating_mul(TICKS_PER_SECOND)
            .saturating_add((subsec_nanos / 100) as u64)
            .saturating_add(GREGORIAN_OFFSET);
        if ticks > Self::MAX.0 {
            Self::MAX
        } else {
            Self(ticks)
        }
    }

    /// Returns the current system time as a timestamp.
    pub fn now() -> Self {
        Self::from_system_time(time::SystemTime::now())
    }

    /// Converts a system time into a timestamp.
    ///
    /// Instants before the Unix epoch are clamped to the epoch; a version 1 generator absorbs the
    /// jump through its clock sequence.
    pub fn from_system_time(t: time::SystemTime) -> Self {
        let elapsed = t.duration_since(time::UNIX_EPOCH).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "system time precedes the Unix epoch; using the epoch");
            time::Duration::ZERO
        });
        Self::from_unix(elapsed.as_secs(), elapsed.subsec_nanos())
    }

    /// Returns the Unix time as whole seconds (possibly negative) and nanoseconds.
    pub const fn to_unix(&self) -> (i64, u32) {
        let since_epoch = self.0 as i64 - GREGORIAN_OFFSET as i64;
        (
            since_epoch.div_euclid(TICKS_PER_SECOND as i64),
            (since_epoch.rem_euclid(TICKS_PER_SECOND as i64) * 100) as u32,
        )
    }

    /// Converts the timestamp into a UTC date-time.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let (seconds, nanos) = self.to_unix();
        DateTime::from_timestamp(seconds, nanos)
    }
}
