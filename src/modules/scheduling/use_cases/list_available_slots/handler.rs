// Availability query handler.
//
// Responsibilities
// - Fetch the availability blocks of a local day and partition them into candidate slots.
// - Fetch the day's events, drop the availability markers themselves, and subtract the rest.
// - Re-derive availability for a single slot right before a booking is committed.
// - Scan forward day by day for dates that still have capacity.
//
// Every calendar failure propagates unchanged; nothing is retried or cached here.

use crate::modules::scheduling::core::day_window::{DayWindow, local_date};
use crate::modules::scheduling::core::overlap::remove_booked;
use crate::modules::scheduling::core::partition::partition_into_slots;
use crate::modules::scheduling::core::ports::{CalendarError, CalendarEvent, CalendarPort};
use crate::modules::scheduling::core::time_slot::TimeSlot;
use chrono::NaiveDate;
use chrono_tz::Tz;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Upper bound on the days inspected by a single forward search.
pub const MAX_DAYS_SCANNED: usize = 14;

#[derive(Debug, Error)]
pub enum AvailabilityError {
    #[error("slot duration must be positive, got {0} minutes")]
    InvalidDuration(i64),

    #[error(transparent)]
    CalendarPortFailure(#[from] CalendarError),
}

pub struct AvailabilityEngine<TCalendar>
where
    TCalendar: CalendarPort + ?Sized,
{
    calendar: Arc<TCalendar>,
    availability_keyword: String,
    time_zone: Tz,
}

impl<TCalendar> AvailabilityEngine<TCalendar>
where
    TCalendar: CalendarPort + ?Sized,
{
    pub fn new(
        calendar: Arc<TCalendar>,
        availability_keyword: impl Into<String>,
        time_zone: Tz,
    ) -> Self {
        Self {
            calendar,
            availability_keyword: availability_keyword.into(),
            time_zone,
        }
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// An empty result means either no availability is configured for the day or every slot is
    /// taken; callers tell the two apart only if they need to.
    pub async fn available_slots(
        &self,
        date: NaiveDate,
        duration_minutes: i64,
    ) -> Result<Vec<TimeSlot>, AvailabilityError> {
        if duration_minutes <= 0 {
            return Err(AvailabilityError::InvalidDuration(duration_minutes));
        }
        let window = DayWindow::for_date(date, self.time_zone);

        let block_events = self
            .calendar
            .list_availability_events(window.start, window.end)
            .await?;
        if block_events.is_empty() {
            debug!(%date, "no availability blocks configured");
            return Ok(Vec::new());
        }
        let blocks = self.to_slots(&block_events);
        let candidates = partition_into_slots(&blocks, duration_minutes);

        let events = self.calendar.list_events(window.start, window.end).await?;
        let booked = self.to_slots(
            events
                .iter()
                .filter(|event| event.summary != self.availability_keyword),
        );

        let free = remove_booked(candidates, &booked);
        debug!(
            %date,
            duration_minutes,
            blocks = blocks.len(),
            booked = booked.len(),
            free = free.len(),
            "computed available slots"
        );
        Ok(free)
    }

    pub async fn is_slot_available(&self, slot: &TimeSlot) -> Result<bool, AvailabilityError> {
        let date = local_date(slot.start_time(), self.time_zone);
        let requested = slot.start_time().timestamp_millis();
        let free = self
            .available_slots(date, slot.duration_minutes())
            .await?;
        Ok(free
            .iter()
            .any(|candidate| candidate.start_time().timestamp_millis() == requested))
    }

    /// Returns fewer than `count` dates when the scan bound is reached first.
    pub async fn next_available_days(
        &self,
        start_date: NaiveDate,
        count: usize,
        duration_minutes: i64,
    ) -> Result<Vec<NaiveDate>, AvailabilityError> {
        if duration_minutes <= 0 {
            return Err(AvailabilityError::InvalidDuration(duration_minutes));
        }
        let mut days = Vec::new();
        let mut current = Some(start_date);

        for _ in 0..MAX_DAYS_SCANNED {
            if days.len() >= count {
                break;
            }
            let Some(date) = current else { break };
            if !self.available_slots(date, duration_minutes).await?.is_empty() {
                days.push(date);
            }
            current = date.succ_opt();
        }

        Ok(days)
    }

    fn to_slots<'a>(&self, events: impl IntoIterator<Item = &'a CalendarEvent>) -> Vec<TimeSlot> {
        events
            .into_iter()
            .filter_map(|event| match event.to_time_slot(self.time_zone) {
                Ok(slot) => Some(slot),
                Err(error) => {
                    warn!(event_id = %event.id, %error, "skipping calendar event without a valid interval");
                    None
                }
            })
            .collect()
    }
}
