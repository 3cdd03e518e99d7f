use super::*;

/// Tests creating a reservation row persists the date and foreign keys.
///
/// Expected: Ok(Model) with an assigned id
#[tokio::test]
async fn creates_reservation_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let time = factory::create_time(db).await?;
    let theme = factory::create_theme(db).await?;

    let repo = ReservationRepository::new(db);
    let row = repo
        .create(date(2040, 8, 5), member.id, time.id, theme.id)
        .await?;

    assert_eq!(row.date, date(2040, 8, 5));
    assert_eq!(row.member_id, member.id);
    assert_eq!(row.time_id, time.id);
    assert_eq!(row.theme_id, theme.id);

    let stored = entity::prelude::Reservation::find_by_id(row.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}
