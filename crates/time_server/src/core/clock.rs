use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::{OffsetComponents, Tz};

use crate::core::{
    error::{TimeServerError, TimeServerResult},
    models::TimeSnapshot,
};

/// Source of the current instant.
///
/// The core never reads the system clock directly; tests inject a fixed
/// instant so snapshot and conversion results are deterministic.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production time source backed by the system clock.
#[derive(Debug, Clone, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Resolves "now" into a timezone-qualified snapshot and answers offset
/// queries against the IANA database.
#[derive(Clone)]
pub struct TimezoneClock {
    time_source: Arc<dyn TimeSource>,
}

impl fmt::Debug for TimezoneClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimezoneClock").finish_non_exhaustive()
    }
}

impl TimezoneClock {
    pub fn new() -> Self {
        Self::with_time_source(Arc::new(SystemTimeSource))
    }

    pub fn with_time_source(time_source: Arc<dyn TimeSource>) -> Self {
        Self { time_source }
    }

    /// Resolve an IANA identifier against the bundled timezone database.
    pub(crate) fn parse_timezone(&self, timezone_name: &str) -> TimeServerResult<Tz> {
        Tz::from_str(timezone_name).map_err(|_| TimeServerError::InvalidTimezone {
            timezone: timezone_name.to_string(),
        })
    }

    /// The current instant as reported by the injected time source.
    pub(crate) fn now(&self) -> DateTime<Utc> {
        self.time_source.now()
    }

    /// Current local time in the given zone.
    ///
    /// The time source is read once and every calendar field is derived from
    /// that single instant, so the fields can never straddle a second (or a
    /// DST transition) between reads.
    pub fn current_snapshot(&self, timezone_name: &str) -> TimeServerResult<TimeSnapshot> {
        let timezone = self.parse_timezone(timezone_name)?;
        let current_time = self.now().with_timezone(&timezone);

        Ok(TimeSnapshot::from_datetime(&current_time, timezone_name))
    }

    /// Signed minutes east of UTC for `timezone` at `instant`.
    ///
    /// Fractional-hour zones return exact minute counts (Asia/Kathmandu is
    /// 345). Zone validity is established by `parse_timezone` before this is
    /// reachable, so there is no failure (and no zero fallback) here.
    pub fn offset_minutes(&self, instant: DateTime<Utc>, timezone: &Tz) -> i64 {
        let offset = timezone.offset_from_utc_datetime(&instant.naive_utc());
        (offset.base_utc_offset() + offset.dst_offset()).num_minutes()
    }
}

impl Default for TimezoneClock {
    fn default() -> Self {
        Self::new()
    }
}
