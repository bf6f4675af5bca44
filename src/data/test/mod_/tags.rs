use super::*;

/// Tests attaching a tag after creation and listing it.
///
/// Expected: the listed tags include the attached one
#[tokio::test]
async fn attaches_and_lists_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_mod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;
    let host = factory::host::create_host_with_publisher(db).await?;
    let created = factory::mod_::create_mod(db, user.id, host.id).await?;
    let tag = factory::tag::create_tag(db).await?;

    let repo = ModRepository::new(db);
    repo.attach_tag(created.id, tag.id).await?;

    let tags = repo.tags(created.id).await?;
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].id, tag.id);

    Ok(())
}

/// Tests that a mod with no tags lists none.
///
/// Expected: empty vector
#[tokio::test]
async fn untagged_mod_lists_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_mod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;
    let host = factory::host::create_host_with_publisher(db).await?;
    let created = factory::mod_::create_mod(db, user.id, host.id).await?;

    let repo = ModRepository::new(db);

    assert!(repo.tags(created.id).await?.is_empty());

    Ok(())
}
