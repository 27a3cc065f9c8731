//! Command Handlers

mod booking_handlers;
mod vehicle_handlers;

pub use booking_handlers::{CreateBookingHandler, DeleteBookingHandler, UpdateBookingHandler};
pub use vehicle_handlers::{DeleteVehicleHandler, RegisterVehicleHandler, UpdateVehicleHandler};

use crate::application::error::ApplicationError;

/// 创建时的必填字段校验
///
/// 缺失与空字符串同样被拒绝；更新路径不经过此检查（Some 即应用），
/// 两者的不对称是有意保留的原始行为
pub(crate) fn required_text(value: Option<String>) -> Result<String, ApplicationError> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(ApplicationError::validation("All fields are required")),
    }
}
