use crate::modules::scheduling::core::appointment::{
    Appointment, AppointmentStatus, UpcomingAppointment,
};
use crate::modules::scheduling::core::ports::{CalendarError, CalendarEvent, CalendarPort};
use crate::modules::scheduling::core::time_slot::{TimeSlot, TimeSlotError};
use crate::modules::scheduling::use_cases::book_appointment::command::BookAppointment;
use crate::modules::scheduling::use_cases::list_available_slots::handler::{
    AvailabilityEngine, AvailabilityError,
};
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("the requested slot is no longer available")]
    SlotUnavailable,

    #[error(transparent)]
    InvalidSlot(#[from] TimeSlotError),

    #[error("customer identifier must not be blank")]
    InvalidCustomer,

    #[error(transparent)]
    Availability(#[from] AvailabilityError),

    #[error(transparent)]
    CalendarPortFailure(#[from] CalendarError),
}

/// Claim on an interval held for the duration of one booking attempt.
struct Reservation<'a> {
    in_flight: &'a Mutex<Vec<TimeSlot>>,
    slot: TimeSlot,
}

impl Drop for Reservation<'_> {
    fn drop(&mut self) {
        let mut claims = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(index) = claims.iter().position(|claim| *claim == self.slot) {
            claims.swap_remove(index);
        }
    }
}

pub struct AppointmentGuard<TCalendar>
where
    TCalendar: CalendarPort + ?Sized,
{
    calendar: Arc<TCalendar>,
    engine: Arc<AvailabilityEngine<TCalendar>>,
    in_flight: Mutex<Vec<TimeSlot>>,
}

impl<TCalendar> AppointmentGuard<TCalendar>
where
    TCalendar: CalendarPort + ?Sized,
{
    pub fn new(calendar: Arc<TCalendar>, engine: Arc<AvailabilityEngine<TCalendar>>) -> Self {
        Self {
            calendar,
            engine,
            in_flight: Mutex::new(Vec::new()),
        }
    }

    pub async fn create_appointment(
        &self,
        command: BookAppointment,
    ) -> Result<Appointment, ApplicationError> {
        if command.customer.trim().is_empty() {
            return Err(ApplicationError::InvalidCustomer);
        }
        if command.duration_minutes <= 0 {
            return Err(AvailabilityError::InvalidDuration(command.duration_minutes).into());
        }
        let slot = TimeSlot::starting_at(command.start_time, command.duration_minutes)?;

        let Some(_reservation) = self.reserve(&slot) else {
            warn!(
                start = %slot.start_time(),
                end = %slot.end_time(),
                "an overlapping booking is already in flight"
            );
            return Err(ApplicationError::SlotUnavailable);
        };

        if !self.engine.is_slot_available(&slot).await? {
            return Err(ApplicationError::SlotUnavailable);
        }

        let description = if command.description.trim().is_empty() {
            format!("Cita reservada para {}", command.customer)
        } else {
            command.description
        };
        let appointment = Appointment {
            id: Uuid::now_v7().to_string(),
            customer: command.customer,
            start_time: slot.start_time(),
            end_time: slot.end_time(),
            status: AppointmentStatus::Pending,
            description,
            created_at: command.created_at,
        };

        let stored = self.calendar.create_appointment(&appointment).await?;
        let time_zone = self.engine.time_zone();
        let appointment = Appointment {
            id: stored.id,
            start_time: stored.start.resolve(time_zone),
            end_time: stored.end.resolve(time_zone),
            description: stored.description,
            ..appointment
        }
        .confirm();

        info!(
            appointment_id = %appointment.id,
            customer = %appointment.customer,
            start = %appointment.start_time,
            "appointment booked"
        );
        Ok(appointment)
    }

    pub async fn cancel_appointment(&self, appointment_id: &str) -> Result<(), ApplicationError> {
        self.calendar.delete_event(appointment_id).await?;
        info!(%appointment_id, "appointment cancelled");
        Ok(())
    }

    pub async fn upcoming_appointments(
        &self,
        customer: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<UpcomingAppointment>, ApplicationError> {
        if customer.trim().is_empty() {
            return Err(ApplicationError::InvalidCustomer);
        }
        let time_zone = self.engine.time_zone();
        let events = self.calendar.find_events_by_text(customer, since).await?;

        Ok(events
            .into_iter()
            .filter_map(|event| match event.to_time_slot(time_zone) {
                Ok(slot) => Some(upcoming(event, &slot)),
                Err(error) => {
                    warn!(event_id = %event.id, %error, "skipping appointment without a valid interval");
                    None
                }
            })
            .collect())
    }

    fn reserve(&self, slot: &TimeSlot) -> Option<Reservation<'_>> {
        let mut claims = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        if claims.iter().any(|claim| claim.overlaps(slot)) {
            return None;
        }
        claims.push(*slot);
        Some(Reservation {
            in_flight: &self.in_flight,
            slot: *slot,
        })
    }
}

fn upcoming(event: CalendarEvent, slot: &TimeSlot) -> UpcomingAppointment {
    UpcomingAppointment {
        id: event.id,
        summary: event.summary,
        start_time: slot.start_time(),
        end_time: slot.end_time(),
        description: event.description,
    }
}
