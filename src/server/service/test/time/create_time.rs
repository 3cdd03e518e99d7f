use super::*;

/// Tests creating a slot from a well-formed `HH:mm` string.
///
/// Expected: Ok(ReservationTime) with the parsed start time
#[tokio::test]
async fn creates_slot_from_well_formed_time() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ReservationTime)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ReservationTimeService::new(db);
    let time = service.create_time("10:00").await?;

    assert_eq!(time.start_at, NaiveTime::from_hms_opt(10, 0, 0).unwrap());

    let row = entity::prelude::ReservationTime::find_by_id(time.id)
        .one(db)
        .await?;
    assert!(row.is_some());

    Ok(())
}

/// Tests a malformed start time is rejected with the offending value.
///
/// Expected: Err(DomainError::InvalidTimeFormat)
#[tokio::test]
async fn rejects_malformed_time() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ReservationTime)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ReservationTimeService::new(db);
    let result = service.create_time("25:99").await;

    match result.unwrap_err() {
        AppError::DomainErr(DomainError::InvalidTimeFormat { value }) => {
            assert_eq!(value, "25:99");
        }
        e => panic!("Expected InvalidTimeFormat error, got: {:?}", e),
    }

    Ok(())
}
