//! Repository Port - 出站端口
//!
//! 定义车辆与预约两张表的抽象接口
//! 具体实现在 infrastructure 层（内存存储）
//!
//! 两张表共用一个端口: 级联删除和预约创建时的外键检查
//! 必须在同一次存储操作内原子完成

use async_trait::async_trait;
use thiserror::Error;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Invalid reference: {0}")]
    InvalidReference(String),
}

// ============================================================================
// Records
// ============================================================================

/// 车辆实体
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleRecord {
    pub id: i64,
    pub reg_number: String,
    pub model: String,
    pub owner: String,
}

/// 预约实体
///
/// status 为自由文本，不做枚举约束
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRecord {
    pub id: i64,
    pub vehicle_id: i64,
    pub service_date: String,
    pub description: String,
    pub status: String,
}

/// 新车辆（id 由存储分配）
#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub reg_number: String,
    pub model: String,
    pub owner: String,
}

/// 新预约（id 由存储分配，vehicle_id 必须引用已有车辆）
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub vehicle_id: i64,
    pub service_date: String,
    pub description: String,
    pub status: String,
}

/// 车辆部分更新
///
/// Some 表示"请求中提供了该字段"，空字符串也会覆盖
#[derive(Debug, Clone, Default)]
pub struct VehiclePatch {
    pub reg_number: Option<String>,
    pub model: Option<String>,
    pub owner: Option<String>,
}

/// 预约部分更新
///
/// vehicle_id 变更不做外键复查
#[derive(Debug, Clone, Default)]
pub struct BookingPatch {
    pub vehicle_id: Option<i64>,
    pub service_date: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

// ============================================================================
// Port
// ============================================================================

/// Garage Repository Port
///
/// 每个方法对应一次原子的存储操作
#[async_trait]
pub trait GarageRepositoryPort: Send + Sync {
    /// 插入车辆，分配下一个车辆 id
    async fn insert_vehicle(&self, vehicle: NewVehicle) -> Result<VehicleRecord, RepositoryError>;

    /// 获取所有车辆（插入顺序）
    async fn list_vehicles(&self) -> Result<Vec<VehicleRecord>, RepositoryError>;

    /// 按 id 部分更新车辆
    async fn update_vehicle(
        &self,
        id: i64,
        patch: VehiclePatch,
    ) -> Result<VehicleRecord, RepositoryError>;

    /// 删除车辆并级联删除其全部预约，返回被级联删除的预约数
    async fn delete_vehicle(&self, id: i64) -> Result<usize, RepositoryError>;

    /// 插入预约，分配下一个预约 id
    ///
    /// vehicle_id 不存在时返回 InvalidReference，检查与插入在同一次操作内
    async fn insert_booking(&self, booking: NewBooking) -> Result<BookingRecord, RepositoryError>;

    /// 获取所有预约（插入顺序）
    async fn list_bookings(&self) -> Result<Vec<BookingRecord>, RepositoryError>;

    /// 按 id 部分更新预约
    async fn update_booking(
        &self,
        id: i64,
        patch: BookingPatch,
    ) -> Result<BookingRecord, RepositoryError>;

    /// 按 id 删除预约
    async fn delete_booking(&self, id: i64) -> Result<(), RepositoryError>;
}
