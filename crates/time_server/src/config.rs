use std::str::FromStr;

use chrono_tz::Tz;

use crate::core::error::{TimeServerError, TimeServerResult};

/// Process configuration, built once at startup and passed down by value.
///
/// The default timezone is resolved eagerly so a bad `LOCAL_TIMEZONE` fails
/// the process at launch instead of on the first defaulted request.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub default_timezone: Tz,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(default_timezone: &str, port: u16) -> TimeServerResult<Self> {
        let default_timezone =
            Tz::from_str(default_timezone).map_err(|_| TimeServerError::InvalidTimezone {
                timezone: default_timezone.to_string(),
            })?;

        Ok(Self {
            default_timezone,
            port,
        })
    }
}
