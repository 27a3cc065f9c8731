//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 端口定义（GarageRepository）
//! - commands: 命令及处理器
//! - queries: 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Booking commands
    CreateBooking,
    DeleteBooking,
    UpdateBooking,
    // Vehicle commands
    DeleteVehicle,
    RegisterVehicle,
    UpdateVehicle,
    // Handlers
    handlers::{
        CreateBookingHandler, DeleteBookingHandler, DeleteVehicleHandler, RegisterVehicleHandler,
        UpdateBookingHandler, UpdateVehicleHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{
    BookingPatch, BookingRecord, GarageRepositoryPort, NewBooking, NewVehicle, RepositoryError,
    VehiclePatch, VehicleRecord,
};

pub use queries::{
    GetSummary,
    ListBookings,
    ListVehicles,
    // Handlers
    handlers::{GetSummaryHandler, ListBookingsHandler, ListVehiclesHandler, SummaryView},
};
