use super::*;

/// Tests deleting an unreferenced theme removes it.
///
/// Expected: Ok and the theme row is gone
#[tokio::test]
async fn deletes_unreferenced_theme() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let theme = factory::create_theme(db).await?;

    let service = ThemeService::new(db);
    service.delete_theme(theme.id).await?;

    let row = entity::prelude::Theme::find_by_id(theme.id).one(db).await?;
    assert!(row.is_none());

    Ok(())
}

/// Tests deleting a theme referenced by a reservation fails.
///
/// Expected: Err(AppError::BadRequest), theme still present
#[tokio::test]
async fn fails_while_reservation_references_theme() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = Utc::now().date_naive() + Days::new(5);
    let (_, _, theme, _) =
        test_utils::factory::helpers::create_reservation_with_dependencies(db, date).await?;

    let service = ThemeService::new(db);
    let result = service.delete_theme(theme.id).await;

    match result.unwrap_err() {
        AppError::BadRequest(message) => assert!(message.contains("reservation")),
        e => panic!("Expected BadRequest error, got: {:?}", e),
    }

    let row = entity::prelude::Theme::find_by_id(theme.id).one(db).await?;
    assert!(row.is_some());

    Ok(())
}

/// Tests deleting a theme that does not exist fails.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_theme() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ThemeService::new(db);
    let result = service.delete_theme(999).await;

    match result.unwrap_err() {
        AppError::NotFound(message) => assert!(message.contains("Theme")),
        e => panic!("Expected NotFound error, got: {:?}", e),
    }

    Ok(())
}
