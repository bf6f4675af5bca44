use super::*;

/// Tests stamping the last-authentication timestamp.
///
/// Expected: `authenticated_at` transitions from None to Some
#[tokio::test]
async fn stamps_the_authentication_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db).build().await?;
    assert!(created.authenticated_at.is_none());

    let repo = UserRepository::new(db);
    repo.touch_authenticated_at(created.id).await?;

    let reloaded = repo.find_by_id(created.id).await?.unwrap();
    assert!(reloaded.authenticated_at.is_some());

    Ok(())
}
