// Local calendar-day boundaries.
//
// Purpose
// - Turn a calendar date into the instants [00:00:00.000, 23:59:59.999] of that day in the
//   configured time zone, and an instant back into its local date.
//
// Notes
// - When a DST transition skips local midnight the day starts at the first instant after the gap.

use chrono::{DateTime, NaiveDate, NaiveTime, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DayWindow {
    pub fn for_date(date: NaiveDate, time_zone: Tz) -> Self {
        let start = local_midnight(date, time_zone);
        let next_start = date
            .succ_opt()
            .map(|next| local_midnight(next, time_zone))
            .unwrap_or(start + TimeDelta::days(1));
        Self {
            start,
            end: next_start - TimeDelta::milliseconds(1),
        }
    }
}

pub fn local_midnight(date: NaiveDate, time_zone: Tz) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    match time_zone.from_local_datetime(&midnight).earliest() {
        Some(local) => local.with_timezone(&Utc),
        None => {
            let offset = time_zone.offset_from_utc_datetime(&midnight).fix();
            let shifted = midnight - TimeDelta::seconds(i64::from(offset.local_minus_utc()));
            Utc.from_utc_datetime(&shifted)
        }
    }
}

pub fn local_date(instant: DateTime<Utc>, time_zone: Tz) -> NaiveDate {
    instant.with_timezone(&time_zone).date_naive()
}
