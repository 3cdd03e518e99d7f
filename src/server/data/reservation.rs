//! Reservation repository for database operations.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository providing database operations for reservations.
///
/// Returns raw entity models: a reservation row is only foreign keys, and the
/// reservation service assembles the domain model from the rows it references.
pub struct ReservationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new reservation row.
    ///
    /// # Arguments
    /// - `date`: Reserved date
    /// - `member_id`: Booking member id
    /// - `time_id`: Reserved time slot id
    /// - `theme_id`: Reserved theme id
    ///
    /// # Returns
    /// - `Ok(Model)`: The created reservation with its assigned id
    /// - `Err(DbErr)`: Database error during insert
    pub async fn create(
        &self,
        date: NaiveDate,
        member_id: i32,
        time_id: i32,
        theme_id: i32,
    ) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            date: ActiveValue::Set(date),
            member_id: ActiveValue::Set(member_id),
            time_id: ActiveValue::Set(time_id),
            theme_id: ActiveValue::Set(theme_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all reservation rows ordered by id.
    pub async fn get_all(&self) -> Result<Vec<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a reservation row by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find_by_id(id).one(self.db).await
    }

    /// Checks whether any reservation references the given theme.
    ///
    /// Used by the theme service to block deleting a theme that is in use.
    pub async fn exists_by_theme(&self, theme_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::ThemeId.eq(theme_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether any reservation references the given time slot.
    ///
    /// Used by the time service to block deleting a slot that is in use.
    pub async fn exists_by_time(&self, time_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::TimeId.eq(time_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether the (date, time slot, theme) combination is already booked.
    pub async fn exists_by_slot(
        &self,
        date: NaiveDate,
        time_id: i32,
        theme_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::Date.eq(date))
            .filter(entity::reservation::Column::TimeId.eq(time_id))
            .filter(entity::reservation::Column::ThemeId.eq(theme_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a reservation by id.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Reservation::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
