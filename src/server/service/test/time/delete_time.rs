use super::*;

/// Tests deleting an unreferenced slot removes it.
///
/// Expected: Ok and the slot row is gone
#[tokio::test]
async fn deletes_unreferenced_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let time = factory::create_time(db).await?;

    let service = ReservationTimeService::new(db);
    service.delete_time(time.id).await?;

    let row = entity::prelude::ReservationTime::find_by_id(time.id)
        .one(db)
        .await?;
    assert!(row.is_none());

    Ok(())
}

/// Tests deleting a slot referenced by a reservation fails.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn fails_while_reservation_references_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = Utc::now().date_naive() + Days::new(5);
    let (_, time, _, _) =
        test_utils::factory::helpers::create_reservation_with_dependencies(db, date).await?;

    let service = ReservationTimeService::new(db);
    let result = service.delete_time(time.id).await;

    match result.unwrap_err() {
        AppError::BadRequest(message) => assert!(message.contains("reservation")),
        e => panic!("Expected BadRequest error, got: {:?}", e),
    }

    Ok(())
}

/// Tests deleting a slot that does not exist fails.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ReservationTimeService::new(db);
    let result = service.delete_time(999).await;

    match result.unwrap_err() {
        AppError::NotFound(message) => assert!(message.contains("Time slot")),
        e => panic!("Expected NotFound error, got: {:?}", e),
    }

    Ok(())
}
