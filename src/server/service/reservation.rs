//! Reservation service: booking validation and assembly.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        member::MemberRepository, reservation::ReservationRepository,
        reservation_time::ReservationTimeRepository, theme::ThemeRepository,
    },
    error::AppError,
    model::{member::Member, reservation::Reservation},
};

/// Service providing business logic for reservations.
///
/// A reservation row is only foreign keys, so this service assembles the
/// domain model from the member, time slot, and theme rows it references.
pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all reservations ordered by id, with time and theme embedded.
    pub async fn read_reservations(&self) -> Result<Vec<Reservation>, AppError> {
        let reservation_repo = ReservationRepository::new(self.db);

        let rows = reservation_repo.get_all().await?;

        let mut reservations = Vec::with_capacity(rows.len());
        for row in rows {
            reservations.push(self.assemble(row).await?);
        }

        Ok(reservations)
    }

    /// Creates a reservation for the logged-in member.
    ///
    /// The booking member comes from the session; the reservation carries the
    /// member's display name.
    ///
    /// # Arguments
    /// - `member`: Booking member resolved from the session
    /// - `date`: Reservation date as a `yyyy-MM-dd` string
    /// - `time_id`: Reserved time slot id
    /// - `theme_id`: Reserved theme id
    ///
    /// # Returns
    /// - `Ok(Reservation)` - Persisted reservation with its assigned id
    /// - `Err(AppError::DomainErr)` - The date did not match `yyyy-MM-dd`
    /// - `Err(AppError::BadRequest)` - Unknown time slot or theme, a slot in
    ///   the past, or a slot that is already booked
    pub async fn create_reservation(
        &self,
        member: Member,
        date: &str,
        time_id: i32,
        theme_id: i32,
    ) -> Result<Reservation, AppError> {
        let time_repo = ReservationTimeRepository::new(self.db);
        let theme_repo = ThemeRepository::new(self.db);

        let Some(time) = time_repo.find_by_id(time_id).await? else {
            return Err(AppError::BadRequest("Time slot not found".to_string()));
        };
        let Some(theme) = theme_repo.find_by_id(theme_id).await? else {
            return Err(AppError::BadRequest("Theme not found".to_string()));
        };

        let reservation = Reservation::new(member.name.clone(), date, time, theme)?;

        if reservation.is_before(Utc::now().naive_utc()) {
            return Err(AppError::BadRequest(
                "Cannot reserve a date and time in the past".to_string(),
            ));
        }

        let reservation_repo = ReservationRepository::new(self.db);

        if reservation_repo
            .exists_by_slot(reservation.date, time_id, theme_id)
            .await?
        {
            return Err(AppError::BadRequest(
                "That theme is already reserved at this date and time".to_string(),
            ));
        }

        let row = reservation_repo
            .create(reservation.date, member.id, time_id, theme_id)
            .await?;

        Ok(Reservation::from_parts(
            row.id,
            reservation.name,
            reservation.date,
            reservation.time,
            reservation.theme,
        ))
    }

    /// Creates a reservation on behalf of an explicitly named member.
    ///
    /// Used by the admin endpoint, which books for any member rather than the
    /// session's own.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - Persisted reservation with its assigned id
    /// - `Err(AppError::BadRequest)` - Unknown member, or any of the
    ///   `create_reservation` rejections
    pub async fn create_reservation_for_member(
        &self,
        member_id: i32,
        date: &str,
        time_id: i32,
        theme_id: i32,
    ) -> Result<Reservation, AppError> {
        let member_repo = MemberRepository::new(self.db);

        let Some(member) = member_repo.find_by_id(member_id).await? else {
            return Err(AppError::BadRequest("Member not found".to_string()));
        };

        self.create_reservation(member, date, time_id, theme_id)
            .await
    }

    /// Deletes a reservation by id.
    ///
    /// # Returns
    /// - `Ok(())` - Reservation deleted
    /// - `Err(AppError::NotFound)` - No reservation with that id
    pub async fn delete_reservation(&self, id: i32) -> Result<(), AppError> {
        let reservation_repo = ReservationRepository::new(self.db);

        if reservation_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Reservation not found".to_string()));
        }

        reservation_repo.delete(id).await?;

        Ok(())
    }

    /// Assembles a domain reservation from a row and the rows it references.
    ///
    /// Foreign keys guarantee the referenced rows exist, so a missing row here
    /// is an internal inconsistency rather than a client error.
    async fn assemble(&self, row: entity::reservation::Model) -> Result<Reservation, AppError> {
        let member_repo = MemberRepository::new(self.db);
        let time_repo = ReservationTimeRepository::new(self.db);
        let theme_repo = ThemeRepository::new(self.db);

        let member = member_repo.find_by_id(row.member_id).await?.ok_or_else(|| {
            AppError::InternalError(format!(
                "reservation {} references missing member {}",
                row.id, row.member_id
            ))
        })?;
        let time = time_repo.find_by_id(row.time_id).await?.ok_or_else(|| {
            AppError::InternalError(format!(
                "reservation {} references missing time slot {}",
                row.id, row.time_id
            ))
        })?;
        let theme = theme_repo.find_by_id(row.theme_id).await?.ok_or_else(|| {
            AppError::InternalError(format!(
                "reservation {} references missing theme {}",
                row.id, row.theme_id
            ))
        })?;

        Ok(Reservation::from_parts(
            row.id,
            member.name,
            row.date,
            time,
            theme,
        ))
    }
}
