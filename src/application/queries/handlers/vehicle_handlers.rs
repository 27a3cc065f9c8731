//! Vehicle Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{GarageRepositoryPort, VehicleRecord};
use crate::application::queries::ListVehicles;

/// ListVehicles Handler
pub struct ListVehiclesHandler {
    repository: Arc<dyn GarageRepositoryPort>,
}

impl ListVehiclesHandler {
    pub fn new(repository: Arc<dyn GarageRepositoryPort>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, _query: ListVehicles) -> Result<Vec<VehicleRecord>, ApplicationError> {
        Ok(self.repository.list_vehicles().await?)
    }
}
