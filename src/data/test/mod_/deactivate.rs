use super::*;

/// Tests that the slug lookup excludes a deactivated mod.
///
/// Expected: Ok(None) by slug, Ok(Some) by id with the flag down
#[tokio::test]
async fn slug_lookup_excludes_deactivated() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_mod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;
    let host = factory::host::create_host_with_publisher(db).await?;

    let repo = ModRepository::new(db);
    let created = repo.create(params("short-lived", user.id, host.id)).await?;

    assert!(repo.find_by_slug("short-lived").await?.is_some());

    repo.deactivate(created.id).await?;

    assert!(repo.find_by_slug("short-lived").await?.is_none());
    let reloaded = repo.find_by_id(created.id).await?.unwrap();
    assert!(!reloaded.is_active);

    Ok(())
}
