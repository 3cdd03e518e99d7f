use super::*;

/// Tests credentials matching a stored member return that member.
///
/// Expected: Ok(Some(Member))
#[tokio::test]
async fn finds_member_with_matching_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::member::MemberFactory::new(db)
        .email("kymmi@example.com")
        .password("1111")
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let member = repo
        .find_by_email_and_password("kymmi@example.com", "1111")
        .await?;

    assert!(member.is_some());
    assert_eq!(member.unwrap().id, created.id);

    Ok(())
}

/// Tests a wrong password matches no member.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_wrong_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .email("kymmi@example.com")
        .password("1111")
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let member = repo
        .find_by_email_and_password("kymmi@example.com", "2222")
        .await?;

    assert!(member.is_none());

    Ok(())
}

/// Tests an unknown email matches no member.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .email("kymmi@example.com")
        .password("1111")
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let member = repo
        .find_by_email_and_password("nobody@example.com", "1111")
        .await?;

    assert!(member.is_none());

    Ok(())
}
