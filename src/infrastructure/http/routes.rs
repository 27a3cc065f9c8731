//! HTTP Routes
//!
//! API Endpoints:
//! - /                        GET     健康检查
//! - /api/summary             GET     统计摘要
//! - /api/vehicles            GET     车辆列表
//! - /api/vehicles            POST    登记车辆
//! - /api/vehicles/:id        PATCH   部分更新车辆
//! - /api/vehicles/:id        DELETE  删除车辆（级联删除其预约）
//! - /api/bookings            GET     预约列表（?upcoming=true 过滤）
//! - /api/bookings            POST    创建预约
//! - /api/bookings/:id        PATCH   部分更新预约
//! - /api/bookings/:id        DELETE  删除预约
//! - 其余路径                  *       404 { "error": "Not found" }

use axum::{
    routing::{get, patch},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::root))
        .nest("/api", api_routes())
        .fallback(handlers::route_not_found)
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/summary", get(handlers::get_summary))
        .nest("/vehicles", vehicle_routes())
        .nest("/bookings", booking_routes())
}

/// Vehicle 路由
fn vehicle_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::list_vehicles).post(handlers::create_vehicle))
        .route(
            "/:id",
            patch(handlers::update_vehicle).delete(handlers::delete_vehicle),
        )
}

/// Booking 路由
fn booking_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::list_bookings).post(handlers::create_booking))
        .route(
            "/:id",
            patch(handlers::update_booking).delete(handlers::delete_booking),
        )
}
