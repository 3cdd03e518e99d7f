use super::*;

/// Tests the ranking counts only reservations inside the rolling window.
///
/// Theme A gets two in-window reservations, theme B one; a reservation dated
/// today and one dated eight days ago must not count, today being outside the
/// `[today - 7, today - 1]` window on both ends.
///
/// Expected: [A, B], the un-reserved window edges ignored
#[tokio::test]
async fn ranks_themes_by_in_window_reservation_count() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let time = factory::create_time(db).await?;
    let theme_a = factory::create_theme(db).await?;
    let theme_b = factory::create_theme(db).await?;

    let today = Utc::now().date_naive();
    // Two in-window reservations for A, one for B.
    factory::create_reservation(db, today - Days::new(2), member.id, time.id, theme_a.id).await?;
    factory::create_reservation(db, today - Days::new(3), member.id, time.id, theme_a.id).await?;
    factory::create_reservation(db, today - Days::new(1), member.id, time.id, theme_b.id).await?;
    // Outside the window on both ends; would flip the ranking if counted.
    factory::create_reservation(db, today, member.id, time.id, theme_b.id).await?;
    factory::create_reservation(db, today - Days::new(8), member.id, time.id, theme_b.id).await?;

    let service = ThemeService::new(db);
    let ranked = service.read_popular_themes().await?;

    let ranked_ids: Vec<i32> = ranked.iter().map(|theme| theme.id).collect();
    assert_eq!(ranked_ids, vec![theme_a.id, theme_b.id]);

    Ok(())
}

/// Tests equal reservation counts order by theme id ascending.
///
/// Expected: deterministic [A, B] for themes created in that order
#[tokio::test]
async fn breaks_ties_by_theme_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let time = factory::create_time(db).await?;
    let theme_a = factory::create_theme(db).await?;
    let theme_b = factory::create_theme(db).await?;

    let today = Utc::now().date_naive();
    // Insert B's reservation first so insertion order disagrees with id order.
    factory::create_reservation(db, today - Days::new(2), member.id, time.id, theme_b.id).await?;
    factory::create_reservation(db, today - Days::new(2), member.id, time.id, theme_a.id).await?;

    let service = ThemeService::new(db);
    let ranked = service.read_popular_themes().await?;

    let ranked_ids: Vec<i32> = ranked.iter().map(|theme| theme.id).collect();
    assert_eq!(ranked_ids, vec![theme_a.id, theme_b.id]);

    Ok(())
}

/// Tests themes without an in-window reservation are not ranked.
///
/// Expected: empty ranking when every reservation falls outside the window
#[tokio::test]
async fn excludes_themes_without_in_window_reservations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let time = factory::create_time(db).await?;
    let theme = factory::create_theme(db).await?;

    let today = Utc::now().date_naive();
    factory::create_reservation(db, today + Days::new(3), member.id, time.id, theme.id).await?;

    let service = ThemeService::new(db);
    let ranked = service.read_popular_themes().await?;

    assert!(ranked.is_empty());

    Ok(())
}
