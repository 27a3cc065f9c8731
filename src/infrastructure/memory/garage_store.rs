//! In-Memory Garage Store Implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::application::ports::{
    BookingPatch, BookingRecord, GarageRepositoryPort, NewBooking, NewVehicle, RepositoryError,
    VehiclePatch, VehicleRecord,
};

/// 内存表
///
/// 不变量:
/// - 两张表与两个 id 计数器共用同一把锁，
///   级联删除和预约插入时的外键检查在一次加锁内完成
/// - 计数器只增不减，删除后的 id 不复用
#[derive(Debug)]
struct GarageTables {
    vehicles: Vec<VehicleRecord>,
    bookings: Vec<BookingRecord>,
    next_vehicle_id: i64,
    next_booking_id: i64,
}

/// 内存车辆/预约存储
pub struct InMemoryGarageStore {
    tables: RwLock<GarageTables>,
}

impl InMemoryGarageStore {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(GarageTables {
                vehicles: Vec::new(),
                bookings: Vec::new(),
                next_vehicle_id: 1,
                next_booking_id: 1,
            }),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 写入演示数据（进程启动时调用一次）
    pub async fn seed_demo(&self) {
        let mut tables = self.tables.write().await;

        let id = tables.next_vehicle_id;
        tables.next_vehicle_id += 1;
        tables.vehicles.push(VehicleRecord {
            id,
            reg_number: "AP01AB1234".to_string(),
            model: "Swift".to_string(),
            owner: "Reddy".to_string(),
        });

        tracing::info!(vehicle_id = id, "Seeded demo vehicle");
    }
}

impl Default for InMemoryGarageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GarageRepositoryPort for InMemoryGarageStore {
    async fn insert_vehicle(&self, vehicle: NewVehicle) -> Result<VehicleRecord, RepositoryError> {
        let mut tables = self.tables.write().await;

        let id = tables.next_vehicle_id;
        tables.next_vehicle_id += 1;

        let record = VehicleRecord {
            id,
            reg_number: vehicle.reg_number,
            model: vehicle.model,
            owner: vehicle.owner,
        };
        tables.vehicles.push(record.clone());

        Ok(record)
    }

    async fn list_vehicles(&self) -> Result<Vec<VehicleRecord>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.vehicles.clone())
    }

    async fn update_vehicle(
        &self,
        id: i64,
        patch: VehiclePatch,
    ) -> Result<VehicleRecord, RepositoryError> {
        let mut tables = self.tables.write().await;

        let vehicle = tables
            .vehicles
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("Vehicle {}", id)))?;

        if let Some(reg_number) = patch.reg_number {
            vehicle.reg_number = reg_number;
        }
        if let Some(model) = patch.model {
            vehicle.model = model;
        }
        if let Some(owner) = patch.owner {
            vehicle.owner = owner;
        }

        Ok(vehicle.clone())
    }

    async fn delete_vehicle(&self, id: i64) -> Result<usize, RepositoryError> {
        let mut tables = self.tables.write().await;

        let position = tables
            .vehicles
            .iter()
            .position(|v| v.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("Vehicle {}", id)))?;
        tables.vehicles.remove(position);

        // 同一把写锁内级联删除该车辆的全部预约
        let before = tables.bookings.len();
        tables.bookings.retain(|b| b.vehicle_id != id);

        Ok(before - tables.bookings.len())
    }

    async fn insert_booking(&self, booking: NewBooking) -> Result<BookingRecord, RepositoryError> {
        let mut tables = self.tables.write().await;

        // 外键检查与插入共用同一把写锁
        if !tables.vehicles.iter().any(|v| v.id == booking.vehicle_id) {
            return Err(RepositoryError::InvalidReference(format!(
                "Vehicle {}",
                booking.vehicle_id
            )));
        }

        let id = tables.next_booking_id;
        tables.next_booking_id += 1;

        let record = BookingRecord {
            id,
            vehicle_id: booking.vehicle_id,
            service_date: booking.service_date,
            description: booking.description,
            status: booking.status,
        };
        tables.bookings.push(record.clone());

        Ok(record)
    }

    async fn list_bookings(&self) -> Result<Vec<BookingRecord>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.bookings.clone())
    }

    async fn update_booking(
        &self,
        id: i64,
        patch: BookingPatch,
    ) -> Result<BookingRecord, RepositoryError> {
        let mut tables = self.tables.write().await;

        let booking = tables
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("Booking {}", id)))?;

        if let Some(vehicle_id) = patch.vehicle_id {
            booking.vehicle_id = vehicle_id;
        }
        if let Some(service_date) = patch.service_date {
            booking.service_date = service_date;
        }
        if let Some(description) = patch.description {
            booking.description = description;
        }
        if let Some(status) = patch.status {
            booking.status = status;
        }

        Ok(booking.clone())
    }

    async fn delete_booking(&self, id: i64) -> Result<(), RepositoryError> {
        let mut tables = self.tables.write().await;

        let position = tables
            .bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("Booking {}", id)))?;
        tables.bookings.remove(position);

        Ok(())
    }
}
