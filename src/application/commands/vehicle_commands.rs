//! Vehicle Commands

/// 登记车辆命令
///
/// 字段为 Option: 请求中缺失的字段在 handler 中统一校验
#[derive(Debug, Clone)]
pub struct RegisterVehicle {
    pub reg_number: Option<String>,
    pub model: Option<String>,
    pub owner: Option<String>,
}

/// 部分更新车辆命令
///
/// Some 即应用，空字符串也会覆盖
#[derive(Debug, Clone)]
pub struct UpdateVehicle {
    pub id: i64,
    pub reg_number: Option<String>,
    pub model: Option<String>,
    pub owner: Option<String>,
}

/// 删除车辆命令（级联删除其全部预约）
#[derive(Debug, Clone)]
pub struct DeleteVehicle {
    pub id: i64,
}
