//! Reservation time factory for creating test time slot entities.

use crate::factory::helpers::next_id;
use chrono::NaiveTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservation time slots with customizable fields.
pub struct ReservationTimeFactory<'a> {
    db: &'a DatabaseConnection,
    start_at: NaiveTime,
}

impl<'a> ReservationTimeFactory<'a> {
    /// Creates a new ReservationTimeFactory with default values.
    ///
    /// Defaults:
    /// - start_at: a unique minute-of-day derived from the shared counter, so
    ///   multiple default time slots in one test never collide
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let minute_of_day = (id % (24 * 60)) as u32;
        Self {
            db,
            start_at: NaiveTime::from_hms_opt(minute_of_day / 60, minute_of_day % 60, 0).unwrap(),
        }
    }

    /// Sets the start time for the slot.
    pub fn start_at(mut self, start_at: NaiveTime) -> Self {
        self.start_at = start_at;
        self
    }

    /// Builds and inserts the reservation time entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reservation_time::Model)` - Created time slot entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reservation_time::Model, DbErr> {
        entity::reservation_time::ActiveModel {
            start_at: ActiveValue::Set(self.start_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation time slot with default values.
///
/// Shorthand for `ReservationTimeFactory::new(db).build().await`.
pub async fn create_time(db: &DatabaseConnection) -> Result<entity::reservation_time::Model, DbErr> {
    ReservationTimeFactory::new(db).build().await
}

/// Creates a reservation time slot starting at the given time.
pub async fn create_time_at(
    db: &DatabaseConnection,
    start_at: NaiveTime,
) -> Result<entity::reservation_time::Model, DbErr> {
    ReservationTimeFactory::new(db).start_at(start_at).build().await
}
