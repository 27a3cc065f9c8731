//! Summary Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::GarageRepositoryPort;
use crate::application::queries::GetSummary;
use crate::domain::{is_upcoming, today_stamp};

/// 统计摘要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub total_vehicles: usize,
    pub total_bookings: usize,
    pub upcoming_services: usize,
}

/// GetSummary Handler
pub struct GetSummaryHandler {
    repository: Arc<dyn GarageRepositoryPort>,
}

impl GetSummaryHandler {
    pub fn new(repository: Arc<dyn GarageRepositoryPort>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, _query: GetSummary) -> Result<SummaryView, ApplicationError> {
        let vehicles = self.repository.list_vehicles().await?;
        let bookings = self.repository.list_bookings().await?;

        let today = today_stamp();
        let upcoming_services = bookings
            .iter()
            .filter(|b| is_upcoming(&b.service_date, &b.status, &today))
            .count();

        Ok(SummaryView {
            total_vehicles: vehicles.len(),
            total_bookings: bookings.len(),
            upcoming_services,
        })
    }
}
