//! Garage - 车辆服务预约系统
//!
//! 架构分层:
//!
//! 领域层 (domain/):
//! - 服务排期判定（"即将到来的预约"纯逻辑）
//!
//! 应用层 (application/):
//! - Ports: 端口定义（GarageRepository）
//! - Commands: 车辆/预约命令处理器
//! - Queries: 列表与统计查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: 内存存储（两张表共用一把锁）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
