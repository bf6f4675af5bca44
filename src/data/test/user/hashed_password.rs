use super::*;

/// Tests fetching only the stored password hash.
///
/// Expected: Ok(Some) with a PHC-format Argon2 hash
#[tokio::test]
async fn returns_the_stored_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db).build().await?;

    let repo = UserRepository::new(db);
    let hash = repo.hashed_password(created.id).await?;

    assert!(hash.is_some());
    assert!(hash.unwrap().starts_with("$argon2"));

    Ok(())
}

/// Tests the hash lookup for an unknown user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn unknown_user_has_no_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.hashed_password(uuid::Uuid::new_v4()).await?.is_none());

    Ok(())
}
