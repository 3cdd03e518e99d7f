use super::*;

/// Tests listing returns every reservation row ordered by id.
///
/// Expected: Ok(rows) in id order
#[tokio::test]
async fn lists_reservations_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let time = factory::create_time(db).await?;
    let theme = factory::create_theme(db).await?;

    let first =
        factory::create_reservation(db, date(2040, 8, 5), member.id, time.id, theme.id).await?;
    let second =
        factory::create_reservation(db, date(2040, 8, 6), member.id, time.id, theme.id).await?;

    let repo = ReservationRepository::new(db);
    let rows = repo.get_all().await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, first.id);
    assert_eq!(rows[1].id, second.id);

    Ok(())
}
