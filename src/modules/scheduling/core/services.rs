// Catalog of bookable services.
//
// Purpose
// - Give each service its own appointment duration and a display name used as the booking
//   description.
//
// Responsibilities
// - Resolve the duration of a request: an explicit duration wins, then the service's duration,
//   then the configured default.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub duration_minutes: i64,
}

impl Service {
    pub fn new(id: impl Into<String>, name: impl Into<String>, duration_minutes: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            duration_minutes,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown service: {0}")]
pub struct UnknownService(pub String);

#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    services: Vec<Service>,
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::new(vec![
            Service::new("corte", "Corte", 30),
            Service::new("corte_barba", "Corte + Barba", 60),
            Service::new("completo", "Completo", 75),
        ])
    }
}

impl ServiceCatalog {
    pub fn new(services: Vec<Service>) -> Self {
        Self { services }
    }

    pub fn all(&self) -> &[Service] {
        &self.services
    }

    pub fn get(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|service| service.id == id)
    }

    pub fn lookup(&self, id: Option<&str>) -> Result<Option<&Service>, UnknownService> {
        id.map(|id| self.get(id).ok_or_else(|| UnknownService(id.to_string())))
            .transpose()
    }

    pub fn resolve_duration(
        &self,
        explicit_minutes: Option<i64>,
        service_id: Option<&str>,
        default_minutes: i64,
    ) -> Result<i64, UnknownService> {
        let service = self.lookup(service_id)?;
        Ok(explicit_minutes
            .or(service.map(|service| service.duration_minutes))
            .unwrap_or(default_minutes))
    }
}
