//! Vehicle HTTP Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{DeleteVehicle, ListVehicles, RegisterVehicle, UpdateVehicle};
use crate::infrastructure::http::dto::{
    CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取车辆列表
pub async fn list_vehicles(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<VehicleResponse>>, ApiError> {
    let records = state.list_vehicles_handler.handle(ListVehicles).await?;

    Ok(Json(records.into_iter().map(VehicleResponse::from).collect()))
}

/// 登记车辆
pub async fn create_vehicle(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<VehicleResponse>), ApiError> {
    let command = RegisterVehicle {
        reg_number: req.reg_number,
        model: req.model,
        owner: req.owner,
    };

    let record = state.register_vehicle_handler.handle(command).await?;

    Ok((StatusCode::CREATED, Json(VehicleResponse::from(record))))
}

/// 部分更新车辆
pub async fn update_vehicle(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateVehicleRequest>,
) -> Result<Json<VehicleResponse>, ApiError> {
    let command = UpdateVehicle {
        id,
        reg_number: req.reg_number,
        model: req.model,
        owner: req.owner,
    };

    let record = state.update_vehicle_handler.handle(command).await?;

    Ok(Json(VehicleResponse::from(record)))
}

/// 删除车辆（级联删除其预约）
pub async fn delete_vehicle(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.delete_vehicle_handler.handle(DeleteVehicle { id }).await?;

    Ok(StatusCode::NO_CONTENT)
}
