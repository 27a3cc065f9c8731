//! Booking Queries

/// 列出预约查询
///
/// upcoming_only 为 true 时只返回"即将到来"的预约
/// （service_date >= 今天，且 status 为 Scheduled 或 Pending）
#[derive(Debug, Clone)]
pub struct ListBookings {
    pub upcoming_only: bool,
}
