// Process configuration read from the environment.
//
// Every variable has a default except the calendar token; without a token the process runs
// against an in-memory calendar.

use crate::modules::scheduling::adapters::outbound::google_calendar::{
    DEFAULT_BASE_URL, GoogleCalendarSettings,
};
use chrono_tz::Tz;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {name}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub availability_keyword: String,
    pub default_duration_minutes: i64,
    pub calendar_id: String,
    pub time_zone: Tz,
    pub calendar_token: Option<String>,
    pub calendar_base_url: String,
    pub calendar_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let text = |name: &str, default: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let default_duration_minutes = parse(&lookup, "APPOINTMENT_DURATION_MINUTES", 30_i64)?;
        if default_duration_minutes <= 0 {
            return Err(ConfigError::Invalid {
                name: "APPOINTMENT_DURATION_MINUTES",
                value: default_duration_minutes.to_string(),
                reason: "must be positive".into(),
            });
        }

        let time_zone_name = text("CALENDAR_TIMEZONE", "Europe/Madrid");
        let time_zone = time_zone_name
            .parse::<Tz>()
            .map_err(|e| ConfigError::Invalid {
                name: "CALENDAR_TIMEZONE",
                value: time_zone_name.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            port: parse(&lookup, "PORT", 3000_u16)?,
            availability_keyword: text("AVAILABILITY_EVENT_KEYWORD", "DISPONIBLE"),
            default_duration_minutes,
            calendar_id: text("GOOGLE_CALENDAR_ID", "primary"),
            time_zone,
            calendar_token: lookup("GOOGLE_CALENDAR_TOKEN").filter(|token| !token.trim().is_empty()),
            calendar_base_url: text("GOOGLE_CALENDAR_BASE_URL", DEFAULT_BASE_URL),
            calendar_timeout: Duration::from_secs(parse(&lookup, "CALENDAR_TIMEOUT_SECS", 10_u64)?),
        })
    }

    /// Settings for the Google adapter, if a token is configured.
    pub fn google_settings(&self) -> Option<GoogleCalendarSettings> {
        let access_token = self.calendar_token.clone()?;
        Some(GoogleCalendarSettings {
            base_url: self.calendar_base_url.clone(),
            calendar_id: self.calendar_id.clone(),
            access_token,
            availability_keyword: self.availability_keyword.clone(),
            time_zone: self.time_zone,
            timeout: self.calendar_timeout,
        })
    }
}

fn parse<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name).filter(|value| !value.trim().is_empty()) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            value,
            reason: e.to_string(),
        }),
    }
}
