//! Booking Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{BookingRecord, GarageRepositoryPort};
use crate::application::queries::ListBookings;
use crate::domain::{is_upcoming, today_stamp};

/// ListBookings Handler
pub struct ListBookingsHandler {
    repository: Arc<dyn GarageRepositoryPort>,
}

impl ListBookingsHandler {
    pub fn new(repository: Arc<dyn GarageRepositoryPort>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListBookings) -> Result<Vec<BookingRecord>, ApplicationError> {
        let bookings = self.repository.list_bookings().await?;

        if !query.upcoming_only {
            return Ok(bookings);
        }

        let today = today_stamp();
        Ok(bookings
            .into_iter()
            .filter(|b| is_upcoming(&b.service_date, &b.status, &today))
            .collect())
    }
}
