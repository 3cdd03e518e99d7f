//! Reservation time slot repository for database operations.

use chrono::NaiveTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::time::ReservationTime;

/// Repository providing database operations for reservation time slots.
pub struct ReservationTimeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationTimeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new time slot.
    ///
    /// # Returns
    /// - `Ok(ReservationTime)` - The created slot with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, start_at: NaiveTime) -> Result<ReservationTime, DbErr> {
        let entity = entity::reservation_time::ActiveModel {
            start_at: ActiveValue::Set(start_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ReservationTime::from_entity(entity))
    }

    /// Gets all time slots ordered by start time.
    pub async fn get_all(&self) -> Result<Vec<ReservationTime>, DbErr> {
        let entities = entity::prelude::ReservationTime::find()
            .order_by_asc(entity::reservation_time::Column::StartAt)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(ReservationTime::from_entity)
            .collect())
    }

    /// Finds a time slot by id.
    ///
    /// # Returns
    /// - `Ok(Some(ReservationTime))` - Slot found
    /// - `Ok(None)` - No slot with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<ReservationTime>, DbErr> {
        let entity = entity::prelude::ReservationTime::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(ReservationTime::from_entity))
    }

    /// Deletes a time slot by id.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::ReservationTime::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
