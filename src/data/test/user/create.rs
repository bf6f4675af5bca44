use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository inserts the row with the supplied identity,
/// an unset verification timestamp, and the account active.
///
/// Expected: Ok with the created user
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("ada@example.com", "ada")).await?;

    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.display_name, "ada");
    assert!(user.is_active);
    assert!(user.verified_at.is_none());
    assert!(user.authenticated_at.is_none());
    assert_eq!(user.given_name.as_deref(), Some("Ada"));

    Ok(())
}

/// Tests that the identity existence checks see the created row.
///
/// Expected: both existence checks return true afterwards
#[tokio::test]
async fn created_user_is_visible_to_existence_checks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.exists_by_email("ada@example.com").await?);

    repo.create(params("ada@example.com", "ada")).await?;

    assert!(repo.exists_by_email("ada@example.com").await?);
    assert!(repo.exists_by_display_name("ada").await?);

    Ok(())
}

/// Tests that the email unique constraint rejects a duplicate.
///
/// Expected: Err from the second insert
#[tokio::test]
async fn duplicate_email_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("ada@example.com", "ada")).await?;

    let result = repo.create(params("ada@example.com", "ada2")).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that the display name unique constraint rejects a duplicate.
///
/// Expected: Err from the second insert
#[tokio::test]
async fn duplicate_display_name_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("ada@example.com", "ada")).await?;

    let result = repo.create(params("other@example.com", "ada")).await;

    assert!(result.is_err());

    Ok(())
}
