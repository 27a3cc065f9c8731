//! Booking Command Handlers

use std::sync::Arc;

use crate::application::commands::handlers::required_text;
use crate::application::commands::{CreateBooking, DeleteBooking, UpdateBooking};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    BookingPatch, BookingRecord, GarageRepositoryPort, NewBooking, RepositoryError,
};

// ============================================================================
// CreateBooking
// ============================================================================

/// CreateBooking Handler
pub struct CreateBookingHandler {
    repository: Arc<dyn GarageRepositoryPort>,
}

impl CreateBookingHandler {
    pub fn new(repository: Arc<dyn GarageRepositoryPort>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, command: CreateBooking) -> Result<BookingRecord, ApplicationError> {
        // vehicle_id == 0 与缺失同样被拒绝
        let vehicle_id = match command.vehicle_id {
            Some(id) if id != 0 => id,
            _ => return Err(ApplicationError::validation("All fields are required")),
        };

        let booking = NewBooking {
            vehicle_id,
            service_date: required_text(command.service_date)?,
            description: required_text(command.description)?,
            status: required_text(command.status)?,
        };

        // 外键检查由存储在插入操作内完成，未通过时按验证错误上报
        let record = self
            .repository
            .insert_booking(booking)
            .await
            .map_err(|e| match e {
                RepositoryError::InvalidReference(_) => {
                    ApplicationError::validation("Invalid vehicleId")
                }
                other => other.into(),
            })?;

        tracing::info!(
            booking_id = record.id,
            vehicle_id = record.vehicle_id,
            service_date = %record.service_date,
            "Booking created"
        );

        Ok(record)
    }
}

// ============================================================================
// UpdateBooking
// ============================================================================

/// UpdateBooking Handler
///
/// vehicle_id 变更不做外键复查
pub struct UpdateBookingHandler {
    repository: Arc<dyn GarageRepositoryPort>,
}

impl UpdateBookingHandler {
    pub fn new(repository: Arc<dyn GarageRepositoryPort>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, command: UpdateBooking) -> Result<BookingRecord, ApplicationError> {
        let patch = BookingPatch {
            vehicle_id: command.vehicle_id,
            service_date: command.service_date,
            description: command.description,
            status: command.status,
        };

        let record = self
            .repository
            .update_booking(command.id, patch)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound(_) => ApplicationError::not_found("Booking", command.id),
                other => other.into(),
            })?;

        tracing::info!(booking_id = record.id, "Booking updated");

        Ok(record)
    }
}

// ============================================================================
// DeleteBooking
// ============================================================================

/// DeleteBooking Handler
pub struct DeleteBookingHandler {
    repository: Arc<dyn GarageRepositoryPort>,
}

impl DeleteBookingHandler {
    pub fn new(repository: Arc<dyn GarageRepositoryPort>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, command: DeleteBooking) -> Result<(), ApplicationError> {
        self.repository
            .delete_booking(command.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound(_) => ApplicationError::not_found("Booking", command.id),
                other => other.into(),
            })?;

        tracing::info!(booking_id = command.id, "Booking deleted");

        Ok(())
    }
}
