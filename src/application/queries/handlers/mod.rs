//! Query Handlers

mod booking_handlers;
mod summary_handlers;
mod vehicle_handlers;

pub use booking_handlers::ListBookingsHandler;
pub use summary_handlers::{GetSummaryHandler, SummaryView};
pub use vehicle_handlers::ListVehiclesHandler;
