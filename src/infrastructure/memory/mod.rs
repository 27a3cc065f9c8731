//! Memory Layer - In-Memory State Management
//!
//! GarageRepositoryPort 的内存实现，车辆与预约两张表共用一把锁

mod garage_store;

pub use garage_store::InMemoryGarageStore;
