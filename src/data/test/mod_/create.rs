use super::*;

/// Tests creating a mod without tags.
///
/// Expected: Ok with the created mod, active, and no `mod_tag` rows
#[tokio::test]
async fn creates_mod_without_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_mod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;
    let host = factory::host::create_host_with_publisher(db).await?;

    let repo = ModRepository::new(db);
    let created = repo.create(params("skybox-overhaul", user.id, host.id)).await?;

    assert_eq!(created.slug, "skybox-overhaul");
    assert_eq!(created.name, "Skybox Overhaul");
    assert!(created.is_active);

    let tag_count = entity::prelude::ModTag::find().count(db).await?;
    assert_eq!(tag_count, 0);

    Ok(())
}

/// Tests creating a mod with tags attached in the same transaction.
///
/// Expected: Ok with one `mod_tag` row per tag
#[tokio::test]
async fn creates_mod_with_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_mod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;
    let host = factory::host::create_host_with_publisher(db).await?;
    let tag_a = factory::tag::create_tag(db).await?;
    let tag_b = factory::tag::create_tag(db).await?;

    let repo = ModRepository::new(db);
    let created = repo
        .create(CreateModParams {
            tags: vec![tag_a.id, tag_b.id],
            ..params("tagged-mod", user.id, host.id)
        })
        .await?;

    let tags = repo.tags(created.id).await?;
    assert_eq!(tags.len(), 2);

    Ok(())
}

/// Tests that a failing tag insert rolls the whole creation back.
///
/// The referenced tag does not exist, so the association insert violates its
/// foreign key after the mod row was already written inside the transaction.
///
/// Expected: Err, and no mod row remains
#[tokio::test]
async fn failed_tag_insert_rolls_back_the_mod() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_mod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;
    let host = factory::host::create_host_with_publisher(db).await?;

    let repo = ModRepository::new(db);
    let result = repo
        .create(CreateModParams {
            tags: vec![Uuid::new_v4()],
            ..params("doomed-mod", user.id, host.id)
        })
        .await;

    assert!(result.is_err());

    let mod_count = entity::prelude::Mod::find().count(db).await?;
    assert_eq!(mod_count, 0);

    Ok(())
}
