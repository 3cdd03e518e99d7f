//! Shared helper utilities for factory methods.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for use in generating unique
/// test identifiers across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a complete reservation with all dependencies.
///
/// This is a convenience method that creates:
/// 1. Member (as the booking member)
/// 2. ReservationTime
/// 3. Theme
/// 4. Reservation on the given date
///
/// All entities are created with default values. Use the individual factories
/// if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
/// - `date` - Date to reserve
///
/// # Returns
/// - `Ok((member, time, theme, reservation))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_dependencies(
    db: &DatabaseConnection,
    date: NaiveDate,
) -> Result<
    (
        entity::member::Model,
        entity::reservation_time::Model,
        entity::theme::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let member = crate::factory::member::create_member(db).await?;
    let time = crate::factory::reservation_time::create_time(db).await?;
    let theme = crate::factory::theme::create_theme(db).await?;
    let reservation =
        crate::factory::reservation::create_reservation(db, date, member.id, time.id, theme.id)
            .await?;

    Ok((member, time, theme, reservation))
}
