//! Vehicle Command Handlers

use std::sync::Arc;

use crate::application::commands::handlers::required_text;
use crate::application::commands::{DeleteVehicle, RegisterVehicle, UpdateVehicle};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    GarageRepositoryPort, NewVehicle, RepositoryError, VehiclePatch, VehicleRecord,
};

// ============================================================================
// RegisterVehicle
// ============================================================================

/// RegisterVehicle Handler
pub struct RegisterVehicleHandler {
    repository: Arc<dyn GarageRepositoryPort>,
}

impl RegisterVehicleHandler {
    pub fn new(repository: Arc<dyn GarageRepositoryPort>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, command: RegisterVehicle) -> Result<VehicleRecord, ApplicationError> {
        let vehicle = NewVehicle {
            reg_number: required_text(command.reg_number)?,
            model: required_text(command.model)?,
            owner: required_text(command.owner)?,
        };

        let record = self.repository.insert_vehicle(vehicle).await?;

        tracing::info!(
            vehicle_id = record.id,
            reg_number = %record.reg_number,
            "Vehicle registered"
        );

        Ok(record)
    }
}

// ============================================================================
// UpdateVehicle
// ============================================================================

/// UpdateVehicle Handler
pub struct UpdateVehicleHandler {
    repository: Arc<dyn GarageRepositoryPort>,
}

impl UpdateVehicleHandler {
    pub fn new(repository: Arc<dyn GarageRepositoryPort>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, command: UpdateVehicle) -> Result<VehicleRecord, ApplicationError> {
        let patch = VehiclePatch {
            reg_number: command.reg_number,
            model: command.model,
            owner: command.owner,
        };

        let record = self
            .repository
            .update_vehicle(command.id, patch)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound(_) => ApplicationError::not_found("Vehicle", command.id),
                other => other.into(),
            })?;

        tracing::info!(vehicle_id = record.id, "Vehicle updated");

        Ok(record)
    }
}

// ============================================================================
// DeleteVehicle
// ============================================================================

/// DeleteVehicle Handler - 删除车辆并级联删除其预约
pub struct DeleteVehicleHandler {
    repository: Arc<dyn GarageRepositoryPort>,
}

impl DeleteVehicleHandler {
    pub fn new(repository: Arc<dyn GarageRepositoryPort>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, command: DeleteVehicle) -> Result<(), ApplicationError> {
        let cascaded = self
            .repository
            .delete_vehicle(command.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound(_) => ApplicationError::not_found("Vehicle", command.id),
                other => other.into(),
            })?;

        tracing::info!(
            vehicle_id = command.id,
            cascaded_bookings = cascaded,
            "Vehicle deleted"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryGarageStore;

    fn repository() -> Arc<dyn GarageRepositoryPort> {
        Arc::new(InMemoryGarageStore::new())
    }

    #[tokio::test]
    async fn test_register_rejects_missing_field() {
        let handler = RegisterVehicleHandler::new(repository());

        let result = handler
            .handle(RegisterVehicle {
                reg_number: Some("KA05MN0001".to_string()),
                model: None,
                owner: Some("Rao".to_string()),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_register_rejects_empty_field() {
        // 创建时空字符串与缺失同样被拒绝
        let handler = RegisterVehicleHandler::new(repository());

        let result = handler
            .handle(RegisterVehicle {
                reg_number: Some("".to_string()),
                model: Some("Swift".to_string()),
                owner: Some("Rao".to_string()),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_update_applies_empty_string() {
        // 更新时空字符串会覆盖: Some 即应用
        let repo = repository();
        let register = RegisterVehicleHandler::new(repo.clone());
        let update = UpdateVehicleHandler::new(repo.clone());

        let created = register
            .handle(RegisterVehicle {
                reg_number: Some("KA05MN0001".to_string()),
                model: Some("Swift".to_string()),
                owner: Some("Rao".to_string()),
            })
            .await
            .unwrap();

        let updated = update
            .handle(UpdateVehicle {
                id: created.id,
                reg_number: None,
                model: Some("".to_string()),
                owner: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.model, "");
        assert_eq!(updated.reg_number, "KA05MN0001");
        assert_eq!(updated.owner, "Rao");
    }

    #[tokio::test]
    async fn test_update_missing_vehicle_is_not_found() {
        let handler = UpdateVehicleHandler::new(repository());

        let result = handler
            .handle(UpdateVehicle {
                id: 99,
                reg_number: None,
                model: Some("Polo".to_string()),
                owner: None,
            })
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::NotFound { resource_type: "Vehicle", id: 99 })
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_vehicle_is_not_found() {
        let handler = DeleteVehicleHandler::new(repository());

        let result = handler.handle(DeleteVehicle { id: 42 }).await;

        assert!(matches!(
            result,
            Err(ApplicationError::NotFound { resource_type: "Vehicle", id: 42 })
        ));
    }
}
