//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateBookingHandler, DeleteBookingHandler, DeleteVehicleHandler, RegisterVehicleHandler,
    UpdateBookingHandler, UpdateVehicleHandler,
    // Query handlers
    GetSummaryHandler, ListBookingsHandler, ListVehiclesHandler,
    // Ports
    GarageRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub repository: Arc<dyn GarageRepositoryPort>,

    // ========== Command Handlers ==========
    pub register_vehicle_handler: RegisterVehicleHandler,
    pub update_vehicle_handler: UpdateVehicleHandler,
    pub delete_vehicle_handler: DeleteVehicleHandler,
    pub create_booking_handler: CreateBookingHandler,
    pub update_booking_handler: UpdateBookingHandler,
    pub delete_booking_handler: DeleteBookingHandler,

    // ========== Query Handlers ==========
    pub list_vehicles_handler: ListVehiclesHandler,
    pub list_bookings_handler: ListBookingsHandler,
    pub get_summary_handler: GetSummaryHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(repository: Arc<dyn GarageRepositoryPort>) -> Self {
        Self {
            // Command handlers
            register_vehicle_handler: RegisterVehicleHandler::new(repository.clone()),
            update_vehicle_handler: UpdateVehicleHandler::new(repository.clone()),
            delete_vehicle_handler: DeleteVehicleHandler::new(repository.clone()),
            create_booking_handler: CreateBookingHandler::new(repository.clone()),
            update_booking_handler: UpdateBookingHandler::new(repository.clone()),
            delete_booking_handler: DeleteBookingHandler::new(repository.clone()),

            // Query handlers
            list_vehicles_handler: ListVehiclesHandler::new(repository.clone()),
            list_bookings_handler: ListBookingsHandler::new(repository.clone()),
            get_summary_handler: GetSummaryHandler::new(repository.clone()),

            repository,
        }
    }
}
