//! Application Commands

mod booking_commands;
mod vehicle_commands;

pub mod handlers;

pub use booking_commands::{CreateBooking, DeleteBooking, UpdateBooking};
pub use vehicle_commands::{DeleteVehicle, RegisterVehicle, UpdateVehicle};
