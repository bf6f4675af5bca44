use super::*;

/// Tests looking a user up by email.
///
/// Expected: Ok(Some) with the matching user
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db).build().await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_login_identifier(&created.email).await?;

    assert_eq!(found.map(|u| u.id), Some(created.id));

    Ok(())
}

/// Tests falling back to the display name when the identifier is not an email
/// match.
///
/// Expected: Ok(Some) with the matching user
#[tokio::test]
async fn falls_back_to_display_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db).display_name("grace").build().await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_login_identifier("grace").await?;

    assert_eq!(found.map(|u| u.id), Some(created.id));

    Ok(())
}

/// Tests that an unknown identifier resolves to nothing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn unknown_identifier_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_login_identifier("nobody").await?.is_none());

    Ok(())
}

/// Tests that soft-deactivated users are excluded from identifier lookups.
///
/// The id lookup still sees the row, so callers can distinguish "gone" from
/// "deactivated".
///
/// Expected: Ok(None) from the identifier lookup, Ok(Some) by id
#[tokio::test]
async fn deactivated_user_is_excluded() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db).deactivated().build().await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_login_identifier(&created.email).await?.is_none());
    assert!(repo.find_by_id(created.id).await?.is_some());

    Ok(())
}
