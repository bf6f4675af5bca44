use super::*;

/// Tests soft-deactivating a user.
///
/// Expected: the flag flips and identifier lookups stop returning the row
#[tokio::test]
async fn flips_the_active_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db).build().await?;

    let repo = UserRepository::new(db);
    repo.deactivate(created.id).await?;

    let reloaded = repo.find_by_id(created.id).await?.unwrap();
    assert!(!reloaded.is_active);
    assert!(repo.find_by_email(&created.email).await?.is_none());

    Ok(())
}
