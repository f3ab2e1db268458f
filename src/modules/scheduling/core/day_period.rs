use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::modules::scheduling::core::time_slot::TimeSlot;

const AFTERNOON_STARTS_AT_HOUR: u32 = 12;

/// Half of the local day a slot starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPeriod {
    Morning,
    Afternoon,
}

impl DayPeriod {
    pub fn of(instant: DateTime<Utc>, time_zone: Tz) -> Self {
        if instant.with_timezone(&time_zone).hour() < AFTERNOON_STARTS_AT_HOUR {
            Self::Morning
        } else {
            Self::Afternoon
        }
    }

    pub fn retain(self, slots: Vec<TimeSlot>, time_zone: Tz) -> Vec<TimeSlot> {
        slots
            .into_iter()
            .filter(|slot| Self::of(slot.start_time(), time_zone) == self)
            .collect()
    }
}
