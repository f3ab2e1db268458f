// TimeSlot is the interval shape every scheduling computation works on.
//
// Purpose
// - Represent a half-open interval [start_time, end_time) with an availability flag.
// - Availability blocks, booked intervals and candidate slots are all mapped into this shape.
//
// Boundaries
// - No input or output. Instances are immutable; "mutations" return a new value.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TimeSlotError {
    #[error("slot end {end} must be after start {start}")]
    EmptyInterval {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("slot of {0} minutes does not fit the supported time range")]
    OutOfRange(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeSlot {
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    is_available: bool,
}

impl TimeSlot {
    pub fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Result<Self, TimeSlotError> {
        if start_time >= end_time {
            return Err(TimeSlotError::EmptyInterval {
                start: start_time,
                end: end_time,
            });
        }
        Ok(Self::from_ordered(start_time, end_time))
    }

    /// Builds a slot whose bounds the caller already knows to be ordered.
    pub(crate) fn from_ordered(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        debug_assert!(start_time < end_time, "slot bounds out of order");
        Self {
            start_time,
            end_time,
            is_available: true,
        }
    }

    pub fn starting_at(
        start_time: DateTime<Utc>,
        duration_minutes: i64,
    ) -> Result<Self, TimeSlotError> {
        let end_time = TimeDelta::try_minutes(duration_minutes)
            .and_then(|duration| start_time.checked_add_signed(duration))
            .ok_or(TimeSlotError::OutOfRange(duration_minutes))?;
        Self::new(start_time, end_time)
    }

    pub fn with_availability(self, is_available: bool) -> Self {
        Self {
            is_available,
            ..self
        }
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn end_time(&self) -> DateTime<Utc> {
        self.end_time
    }

    pub fn is_available(&self) -> bool {
        self.is_available
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Half-open intersection: slots that only touch at a boundary do not overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start_time < other.end_time && self.end_time > other.start_time
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start_time && instant < self.end_time
    }
}
