use crate::modules::scheduling::core::ports::CalendarPort;
use crate::modules::scheduling::core::services::ServiceCatalog;
use crate::modules::scheduling::use_cases::book_appointment::handler::AppointmentGuard;
use crate::modules::scheduling::use_cases::list_available_slots::handler::AvailabilityEngine;
use chrono_tz::Tz;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<AvailabilityEngine<dyn CalendarPort>>,
    pub guard: Arc<AppointmentGuard<dyn CalendarPort>>,
    pub services: Arc<ServiceCatalog>,
    pub default_duration_minutes: i64,
}

impl AppState {
    pub fn new(
        calendar: Arc<dyn CalendarPort>,
        availability_keyword: &str,
        time_zone: Tz,
        services: ServiceCatalog,
        default_duration_minutes: i64,
    ) -> Self {
        let engine = Arc::new(AvailabilityEngine::new(
            calendar.clone(),
            availability_keyword,
            time_zone,
        ));
        let guard = Arc::new(AppointmentGuard::new(calendar, engine.clone()));
        Self {
            engine,
            guard,
            services: Arc::new(services),
            default_duration_minutes,
        }
    }
}
