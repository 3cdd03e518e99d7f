use super::*;

/// Tests a theme with a reservation is reported as in use.
///
/// Expected: Ok(true)
#[tokio::test]
async fn reports_referenced_theme() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, theme, _) =
        test_utils::factory::helpers::create_reservation_with_dependencies(db, date(2040, 8, 5))
            .await?;

    let repo = ReservationRepository::new(db);

    assert!(repo.exists_by_theme(theme.id).await?);

    Ok(())
}

/// Tests a theme without reservations is reported as free.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_unreferenced_theme() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let theme = factory::create_theme(db).await?;

    let repo = ReservationRepository::new(db);

    assert!(!repo.exists_by_theme(theme.id).await?);

    Ok(())
}
