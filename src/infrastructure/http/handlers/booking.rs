//! Booking HTTP Handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{CreateBooking, DeleteBooking, ListBookings, UpdateBooking};
use crate::infrastructure::http::dto::{
    BookingResponse, CreateBookingRequest, ListBookingsQuery, UpdateBookingRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取预约列表（?upcoming=true 时只返回即将到来的预约）
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListBookingsQuery>,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let query = ListBookings {
        upcoming_only: params.upcoming.as_deref() == Some("true"),
    };

    let records = state.list_bookings_handler.handle(query).await?;

    Ok(Json(records.into_iter().map(BookingResponse::from).collect()))
}

/// 创建预约
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), ApiError> {
    let command = CreateBooking {
        vehicle_id: req.vehicle_id,
        service_date: req.service_date,
        description: req.description,
        status: req.status,
    };

    let record = state.create_booking_handler.handle(command).await?;

    Ok((StatusCode::CREATED, Json(BookingResponse::from(record))))
}

/// 部分更新预约
pub async fn update_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateBookingRequest>,
) -> Result<Json<BookingResponse>, ApiError> {
    let command = UpdateBooking {
        id,
        vehicle_id: req.vehicle_id,
        service_date: req.service_date,
        description: req.description,
        status: req.status,
    };

    let record = state.update_booking_handler.handle(command).await?;

    Ok(Json(BookingResponse::from(record)))
}

/// 删除预约
pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.delete_booking_handler.handle(DeleteBooking { id }).await?;

    Ok(StatusCode::NO_CONTENT)
}
