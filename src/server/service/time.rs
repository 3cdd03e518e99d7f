//! Reservation time slot service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{reservation::ReservationRepository, reservation_time::ReservationTimeRepository},
    error::AppError,
    model::time::ReservationTime,
};

/// Service providing business logic for reservation time slots.
pub struct ReservationTimeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationTimeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all time slots ordered by start time.
    pub async fn read_times(&self) -> Result<Vec<ReservationTime>, AppError> {
        let repo = ReservationTimeRepository::new(self.db);

        let times = repo.get_all().await?;

        Ok(times)
    }

    /// Creates a new time slot from a raw `HH:mm` string.
    ///
    /// # Returns
    /// - `Ok(ReservationTime)` - Created slot with its assigned id
    /// - `Err(AppError::DomainErr)` - The start time did not match `HH:mm`
    pub async fn create_time(&self, start_at: &str) -> Result<ReservationTime, AppError> {
        let repo = ReservationTimeRepository::new(self.db);

        let start_at = ReservationTime::parse_start_at(start_at)?;

        let time = repo.create(start_at).await?;

        Ok(time)
    }

    /// Deletes a time slot, refusing while any reservation references it.
    ///
    /// # Returns
    /// - `Ok(())` - Slot deleted
    /// - `Err(AppError::NotFound)` - No slot with that id
    /// - `Err(AppError::BadRequest)` - A reservation still uses the slot
    pub async fn delete_time(&self, id: i32) -> Result<(), AppError> {
        let time_repo = ReservationTimeRepository::new(self.db);
        let reservation_repo = ReservationRepository::new(self.db);

        if time_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Time slot not found".to_string()));
        }

        if reservation_repo.exists_by_time(id).await? {
            return Err(AppError::BadRequest(
                "A reservation using this time slot exists".to_string(),
            ));
        }

        time_repo.delete(id).await?;

        Ok(())
    }
}
