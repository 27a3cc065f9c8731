//! Vehicle Queries

/// 列出所有车辆查询
#[derive(Debug, Clone)]
pub struct ListVehicles;
