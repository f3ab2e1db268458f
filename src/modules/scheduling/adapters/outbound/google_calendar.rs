// Google Calendar REST implementation of the CalendarPort.
//
// Responsibilities
// - Translate port calls into Calendar API v3 requests against one calendar.
// - Follow pagination so a window is always returned complete.
// - Map HTTP statuses and transport failures onto CalendarError.
//
// Notes
// - The API's timeMin/timeMax bounds are end > timeMin and start < timeMax, which is the port's
//   window contract.
// - Events without a start or end (e.g. cancelled instances) are skipped.

use crate::modules::scheduling::core::appointment::Appointment;
use crate::modules::scheduling::core::ports::{
    CalendarError, CalendarEvent, CalendarPort, EventTime, appointment_summary,
};
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat, Utc};
use chrono_tz::Tz;
use reqwest::{Client, Response, StatusCode, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/calendar/v3";

const REMINDER_MINUTES: i64 = 60;

#[derive(Debug, Clone)]
pub struct GoogleCalendarSettings {
    pub base_url: String,
    pub calendar_id: String,
    pub access_token: String,
    pub availability_keyword: String,
    pub time_zone: Tz,
    pub timeout: Duration,
}

pub struct GoogleCalendar {
    client: Client,
    settings: GoogleCalendarSettings,
}

impl GoogleCalendar {
    pub fn new(settings: GoogleCalendarSettings) -> Result<Self, CalendarError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| CalendarError::Backend(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, settings })
    }

    fn events_url(&self, event_id: Option<&str>) -> Result<Url, CalendarError> {
        let mut url = Url::parse(&self.settings.base_url)
            .map_err(|e| CalendarError::Backend(format!("invalid calendar base url: {e}")))?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                CalendarError::Backend("calendar base url cannot carry a path".into())
            })?;
            segments
                .pop_if_empty()
                .extend(["calendars", self.settings.calendar_id.as_str(), "events"]);
            if let Some(event_id) = event_id {
                segments.push(event_id);
            }
        }
        Ok(url)
    }

    async fn fetch(
        &self,
        time_min: DateTime<Utc>,
        time_max: Option<DateTime<Utc>>,
        text: Option<&str>,
    ) -> Result<Vec<CalendarEvent>, CalendarError> {
        let url = self.events_url(None)?;
        let mut events = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut query: Vec<(&str, String)> = vec![
                ("timeMin", rfc3339(time_min)),
                ("singleEvents", "true".into()),
                ("orderBy", "startTime".into()),
            ];
            if let Some(time_max) = time_max {
                query.push(("timeMax", rfc3339(time_max)));
            }
            if let Some(text) = text {
                query.push(("q", text.to_string()));
            }
            if let Some(token) = &page_token {
                query.push(("pageToken", token.clone()));
            }

            let response = self
                .client
                .get(url.clone())
                .bearer_auth(&self.settings.access_token)
                .query(&query)
                .send()
                .await
                .map_err(transport_error)?;
            let page: EventsPage = ensure_success(response, &self.settings.calendar_id)
                .await?
                .json()
                .await
                .map_err(transport_error)?;

            events.extend(page.items.into_iter().filter_map(GoogleEvent::into_event));
            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(events)
    }
}

#[async_trait]
impl CalendarPort for GoogleCalendar {
    async fn list_events(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, CalendarError> {
        self.fetch(start, Some(end), None).await
    }

    async fn list_availability_events(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, CalendarError> {
        let keyword = self.settings.availability_keyword.as_str();
        let events = self.fetch(start, Some(end), None).await?;
        Ok(events
            .into_iter()
            .filter(|event| event.mentions(keyword))
            .collect())
    }

    async fn create_appointment(
        &self,
        appointment: &Appointment,
    ) -> Result<CalendarEvent, CalendarError> {
        let time_zone = self.settings.time_zone;
        let body = NewEvent {
            summary: appointment_summary(&appointment.customer),
            description: &appointment.description,
            start: GoogleEventTime::timed(appointment.start_time, time_zone),
            end: GoogleEventTime::timed(appointment.end_time, time_zone),
            reminders: Reminders {
                use_default: false,
                overrides: vec![ReminderOverride {
                    method: "popup",
                    minutes: REMINDER_MINUTES,
                }],
            },
        };

        let response = self
            .client
            .post(self.events_url(None)?)
            .bearer_auth(&self.settings.access_token)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;
        let created: GoogleEvent = ensure_success(response, &self.settings.calendar_id)
            .await?
            .json()
            .await
            .map_err(transport_error)?;

        created.into_event().ok_or_else(|| {
            CalendarError::Backend("created event came back without start or end".into())
        })
    }

    async fn delete_event(&self, event_id: &str) -> Result<(), CalendarError> {
        let response = self
            .client
            .delete(self.events_url(Some(event_id))?)
            .bearer_auth(&self.settings.access_token)
            .send()
            .await
            .map_err(transport_error)?;
        ensure_success(response, event_id).await?;
        Ok(())
    }

    async fn find_events_by_text(
        &self,
        text: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, CalendarError> {
        self.fetch(since, None, Some(text)).await
    }
}

fn rfc3339(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn transport_error(error: reqwest::Error) -> CalendarError {
    if error.is_timeout() {
        CalendarError::Timeout
    } else {
        CalendarError::Backend(format!("Google Calendar request failed: {error}"))
    }
}

async fn ensure_success(response: Response, resource: &str) -> Result<Response, CalendarError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CalendarError::Unauthorized,
        StatusCode::NOT_FOUND | StatusCode::GONE => CalendarError::NotFound(resource.to_string()),
        _ => CalendarError::Backend(format!("Google Calendar responded {status}: {body}")),
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventsPage {
    #[serde(default)]
    items: Vec<GoogleEvent>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoogleEvent {
    id: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    description: String,
    start: Option<GoogleEventTime>,
    end: Option<GoogleEventTime>,
}

impl GoogleEvent {
    fn into_event(self) -> Option<CalendarEvent> {
        let start = self.start.as_ref().and_then(GoogleEventTime::to_event_time);
        let end = self.end.as_ref().and_then(GoogleEventTime::to_event_time);
        let (Some(start), Some(end)) = (start, end) else {
            debug!(event_id = %self.id, "skipping event without start or end");
            return None;
        };
        Some(CalendarEvent {
            id: self.id,
            summary: self.summary,
            description: self.description,
            start,
            end,
        })
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleEventTime {
    #[serde(skip_serializing_if = "Option::is_none")]
    date_time: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_zone: Option<String>,
}

impl GoogleEventTime {
    fn timed(instant: DateTime<Utc>, time_zone: Tz) -> Self {
        Self {
            date_time: Some(instant.with_timezone(&time_zone).fixed_offset()),
            date: None,
            time_zone: Some(time_zone.name().to_string()),
        }
    }

    fn to_event_time(&self) -> Option<EventTime> {
        match (self.date_time, self.date) {
            (Some(instant), _) => Some(EventTime::DateTime(instant.with_timezone(&Utc))),
            (None, Some(date)) => Some(EventTime::Date(date)),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Serialize)]
struct NewEvent<'a> {
    summary: String,
    description: &'a str,
    start: GoogleEventTime,
    end: GoogleEventTime,
    reminders: Reminders,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Reminders {
    use_default: bool,
    overrides: Vec<ReminderOverride>,
}

#[derive(Debug, Serialize)]
struct ReminderOverride {
    method: &'static str,
    minutes: i64,
}
