use super::*;

/// Tests creating a theme assigns an id and persists all fields.
///
/// Expected: Ok(Theme) present in the database
#[tokio::test]
async fn creates_theme() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Theme)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ThemeRepository::new(db);
    let theme = repo
        .create(
            "Duck and Tiger".to_string(),
            "Survive among the ducks and tigers".to_string(),
            "https://image.jpg".to_string(),
        )
        .await?;

    assert_eq!(theme.name, "Duck and Tiger");
    assert_eq!(theme.description, "Survive among the ducks and tigers");
    assert_eq!(theme.thumbnail, "https://image.jpg");

    let row = entity::prelude::Theme::find_by_id(theme.id).one(db).await?;
    assert!(row.is_some());
    assert_eq!(row.unwrap().name, "Duck and Tiger");

    Ok(())
}
