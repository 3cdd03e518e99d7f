//! Reservation factory for creating test reservation entities.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a reservation for the given date, member, time slot, and theme.
///
/// Unlike the other factories this takes its foreign keys explicitly, because a
/// reservation is meaningless without the rows it references. Use
/// `helpers::create_reservation_with_dependencies` when any member/time/theme
/// will do.
///
/// # Arguments
/// - `db` - Database connection
/// - `date` - Date to reserve
/// - `member_id` - Booking member id
/// - `time_id` - Reserved time slot id
/// - `theme_id` - Reserved theme id
///
/// # Returns
/// - `Ok(entity::reservation::Model)` - Created reservation entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_reservation(
    db: &DatabaseConnection,
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
    .insert(db)
    .await
}
