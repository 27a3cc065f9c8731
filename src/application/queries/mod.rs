//! Application Queries

mod booking_queries;
mod summary_queries;
mod vehicle_queries;

pub mod handlers;

pub use booking_queries::ListBookings;
pub use summary_queries::GetSummary;
pub use vehicle_queries::ListVehicles;
