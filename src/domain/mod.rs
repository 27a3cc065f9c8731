//! Domain Layer - 领域层
//!
//! 车辆与服务预约的共享纯逻辑

mod schedule;

pub use schedule::{is_upcoming, today_stamp};
