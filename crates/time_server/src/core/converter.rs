use chrono::{LocalResult, NaiveTime, TimeZone, Utc};

use crate::core::{
    clock::TimezoneClock,
    error::{TimeServerError, TimeServerResult},
    models::{ConversionResult, TimeSnapshot},
    utils::{self, TIME_INPUT_FORMAT},
};

/// Re-expresses a wall-clock time given in one zone as the same instant in
/// another zone.
#[derive(Debug, Clone)]
pub struct TimeConverter {
    clock: TimezoneClock,
}

impl TimeConverter {
    pub fn new(clock: TimezoneClock) -> Self {
        Self { clock }
    }

    /// Convert `time_str` (24-hour `HH:MM`, interpreted on today's date in
    /// the source zone) from `source_tz` to `target_tz`.
    ///
    /// The requested local time is mapped through the source zone's rules to
    /// a single absolute instant; both snapshots render that one instant, so
    /// dates may differ across the international date line. A wall time that
    /// falls inside a spring-forward gap or a fall-back overlap is rejected
    /// rather than resolved to an arbitrary instant.
    pub fn convert(
        &self,
        source_tz: &str,
        time_str: &str,
        target_tz: &str,
    ) -> TimeServerResult<ConversionResult> {
        let source_zone = self.clock.parse_timezone(source_tz)?;
        let target_zone = self.clock.parse_timezone(target_tz)?;

        let wall_time = NaiveTime::parse_from_str(time_str, TIME_INPUT_FORMAT).map_err(|_| {
            TimeServerError::InvalidTimeFormat {
                time: time_str.to_string(),
            }
        })?;

        // "Today" as observed in the source zone at the current instant
        let today = self.clock.now().with_timezone(&source_zone).date_naive();
        let source_time = match source_zone.from_local_datetime(&today.and_time(wall_time)) {
            LocalResult::Single(dt) => dt,
            LocalResult::Ambiguous(_, _) => {
                return Err(TimeServerError::AmbiguousTime {
                    time: time_str.to_string(),
                });
            }
            LocalResult::None => {
                return Err(TimeServerError::NonexistentTime {
                    time: time_str.to_string(),
                });
            }
        };

        let instant = source_time.with_timezone(&Utc);
        let target_time = instant.with_timezone(&target_zone);

        let difference_minutes = self.clock.offset_minutes(instant, &target_zone)
            - self.clock.offset_minutes(instant, &source_zone);

        Ok(ConversionResult {
            source: TimeSnapshot::from_datetime(&source_time, source_tz),
            target: TimeSnapshot::from_datetime(&target_time, target_tz),
            time_difference: utils::format_offset_difference(difference_minutes),
        })
    }
}
