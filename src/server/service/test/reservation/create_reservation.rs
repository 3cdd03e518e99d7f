use super::*;

/// Tests creating a reservation with well-formed input.
///
/// Verifies that the reservation is persisted, carries the booking member's
/// display name, and embeds the reserved time slot and theme.
///
/// Expected: Ok(Reservation) with an assigned id
#[tokio::test]
async fn creates_reservation_for_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db)
        .name("Kuchan")
        .build()
        .await?;
    let time = factory::create_time(db).await?;
    let theme = factory::create_theme(db).await?;

    let service = ReservationService::new(db);
    let reservation = service
        .create_reservation(
            Member::from_entity(member),
            &format_date(future_date()),
            time.id,
            theme.id,
        )
        .await?;

    assert!(reservation.id.is_some());
    assert_eq!(reservation.name, "Kuchan");
    assert_eq!(reservation.date, future_date());
    assert_eq!(reservation.time.id, time.id);
    assert_eq!(reservation.theme.id, theme.id);

    let count = entity::prelude::Reservation::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests a malformed date string is rejected with the offending value.
///
/// Expected: Err(DomainError::InvalidDateFormat) carrying "20-20-20"
#[tokio::test]
async fn rejects_malformed_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let time = factory::create_time(db).await?;
    let theme = factory::create_theme(db).await?;

    let service = ReservationService::new(db);
    let result = service
        .create_reservation(Member::from_entity(member), "20-20-20", time.id, theme.id)
        .await;

    match result.unwrap_err() {
        AppError::DomainErr(DomainError::InvalidDateFormat { value }) => {
            assert_eq!(value, "20-20-20");
        }
        e => panic!("Expected InvalidDateFormat error, got: {:?}", e),
    }

    Ok(())
}

/// Tests a reservation in the past is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_past_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let time = factory::create_time(db).await?;
    let theme = factory::create_theme(db).await?;

    let yesterday = Utc::now().date_naive() - Days::new(1);

    let service = ReservationService::new(db);
    let result = service
        .create_reservation(
            Member::from_entity(member),
            &format_date(yesterday),
            time.id,
            theme.id,
        )
        .await;

    match result.unwrap_err() {
        AppError::BadRequest(message) => assert!(message.contains("past")),
        e => panic!("Expected BadRequest error, got: {:?}", e),
    }

    Ok(())
}

/// Tests double-booking the same (date, time, theme) slot is rejected.
///
/// Expected: Err(AppError::BadRequest), only one reservation persisted
#[tokio::test]
async fn rejects_already_booked_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let other_member = factory::create_member(db).await?;
    let time = factory::create_time(db).await?;
    let theme = factory::create_theme(db).await?;

    let date = format_date(future_date());

    let service = ReservationService::new(db);
    service
        .create_reservation(Member::from_entity(member), &date, time.id, theme.id)
        .await?;

    let result = service
        .create_reservation(Member::from_entity(other_member), &date, time.id, theme.id)
        .await;

    match result.unwrap_err() {
        AppError::BadRequest(message) => assert!(message.contains("already reserved")),
        e => panic!("Expected BadRequest error, got: {:?}", e),
    }

    let count = entity::prelude::Reservation::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests referencing a time slot that does not exist is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_unknown_time_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let theme = factory::create_theme(db).await?;

    let service = ReservationService::new(db);
    let result = service
        .create_reservation(
            Member::from_entity(member),
            &format_date(future_date()),
            999,
            theme.id,
        )
        .await;

    match result.unwrap_err() {
        AppError::BadRequest(message) => assert!(message.contains("Time slot")),
        e => panic!("Expected BadRequest error, got: {:?}", e),
    }

    Ok(())
}

/// Tests referencing a theme that does not exist is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_unknown_theme() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let time = factory::create_time(db).await?;

    let service = ReservationService::new(db);
    let result = service
        .create_reservation(
            Member::from_entity(member),
            &format_date(future_date()),
            time.id,
            999,
        )
        .await;

    match result.unwrap_err() {
        AppError::BadRequest(message) => assert!(message.contains("Theme")),
        e => panic!("Expected BadRequest error, got: {:?}", e),
    }

    Ok(())
}

/// Tests the admin path books on behalf of the named member.
///
/// Expected: Ok(Reservation) carrying the named member's display name
#[tokio::test]
async fn creates_reservation_for_named_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db)
        .name("Brown")
        .build()
        .await?;
    let time = factory::create_time(db).await?;
    let theme = factory::create_theme(db).await?;

    let service = ReservationService::new(db);
    let reservation = service
        .create_reservation_for_member(
            member.id,
            &format_date(future_date()),
            time.id,
            theme.id,
        )
        .await?;

    assert_eq!(reservation.name, "Brown");

    Ok(())
}

/// Tests the admin path rejects a member id that does not exist.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_unknown_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let time = factory::create_time(db).await?;
    let theme = factory::create_theme(db).await?;

    let service = ReservationService::new(db);
    let result = service
        .create_reservation_for_member(999, &format_date(future_date()), time.id, theme.id)
        .await;

    match result.unwrap_err() {
        AppError::BadRequest(message) => assert!(message.contains("Member")),
        e => panic!("Expected BadRequest error, got: {:?}", e),
    }

    Ok(())
}
