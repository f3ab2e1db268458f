pub mod calendar_events;
pub mod commands;
pub mod state;

/// A page of the Google Calendar `events.list` response.
pub const GOOGLE_EVENTS_LIST: &str = include_str!("json/google_events_list.json");
