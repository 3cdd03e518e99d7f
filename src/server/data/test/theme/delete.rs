use super::*;

/// Tests deleting a theme removes its row.
///
/// Expected: Ok and the row is gone
#[tokio::test]
async fn deletes_theme() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Theme)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let theme = factory::create_theme(db).await?;

    let repo = ThemeRepository::new(db);
    repo.delete(theme.id).await?;

    let row = entity::prelude::Theme::find_by_id(theme.id).one(db).await?;
    assert!(row.is_none());

    Ok(())
}

/// Tests deleting one theme leaves the others untouched.
#[tokio::test]
async fn leaves_other_themes_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Theme)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doomed = factory::create_theme(db).await?;
    let kept = factory::create_theme(db).await?;

    let repo = ThemeRepository::new(db);
    repo.delete(doomed.id).await?;

    let row = entity::prelude::Theme::find_by_id(kept.id).one(db).await?;
    assert!(row.is_some());

    Ok(())
}
