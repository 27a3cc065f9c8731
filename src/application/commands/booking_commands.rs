//! Booking Commands

/// 创建预约命令
///
/// vehicle_id 为 0 与缺失同样被拒绝（与字符串字段的空值检查对应）
#[derive(Debug, Clone)]
pub struct CreateBooking {
    pub vehicle_id: Option<i64>,
    pub service_date: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// 部分更新预约命令
///
/// vehicle_id 变更不做外键复查
#[derive(Debug, Clone)]
pub struct UpdateBooking {
    pub id: i64,
    pub vehicle_id: Option<i64>,
    pub service_date: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// 删除预约命令
#[derive(Debug, Clone)]
pub struct DeleteBooking {
    pub id: i64,
}
