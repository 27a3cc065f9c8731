//! Data Transfer Objects
//!
//! 对外 JSON 字段统一使用 camelCase

use serde::{Deserialize, Serialize};

use crate::application::ports::{BookingRecord, VehicleRecord};
use crate::application::SummaryView;

// ============================================================================
// Vehicle DTOs
// ============================================================================

/// 创建车辆请求
///
/// 字段均为 Option，必填校验（含空字符串拒绝）在应用层统一完成
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    pub reg_number: Option<String>,
    pub model: Option<String>,
    pub owner: Option<String>,
}

/// 部分更新车辆请求
///
/// 字段出现即应用，空字符串也会覆盖
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleRequest {
    pub reg_number: Option<String>,
    pub model: Option<String>,
    pub owner: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: i64,
    pub reg_number: String,
    pub model: String,
    pub owner: String,
}

impl From<VehicleRecord> for VehicleResponse {
    fn from(record: VehicleRecord) -> Self {
        Self {
            id: record.id,
            reg_number: record.reg_number,
            model: record.model,
            owner: record.owner,
        }
    }
}

// ============================================================================
// Booking DTOs
// ============================================================================

/// 创建预约请求
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub vehicle_id: Option<i64>,
    pub service_date: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// 部分更新预约请求
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    pub vehicle_id: Option<i64>,
    pub service_date: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// 预约列表查询参数
///
/// 只有 upcoming=true（精确字符串）才启用过滤
#[derive(Debug, Deserialize)]
pub struct ListBookingsQuery {
    pub upcoming: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: i64,
    pub vehicle_id: i64,
    pub service_date: String,
    pub description: String,
    pub status: String,
}

impl From<BookingRecord> for BookingResponse {
    fn from(record: BookingRecord) -> Self {
        Self {
            id: record.id,
            vehicle_id: record.vehicle_id,
            service_date: record.service_date,
            description: record.description,
            status: record.status,
        }
    }
}

// ============================================================================
// Summary DTO
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub total_vehicles: usize,
    pub total_bookings: usize,
    pub upcoming_services: usize,
}

impl From<SummaryView> for SummaryResponse {
    fn from(view: SummaryView) -> Self {
        Self {
            total_vehicles: view.total_vehicles,
            total_bookings: view.total_bookings,
            upcoming_services: view.upcoming_services,
        }
    }
}
