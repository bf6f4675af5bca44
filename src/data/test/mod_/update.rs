use super::*;

/// Tests updating only the name.
///
/// Expected: name changes, description untouched
#[tokio::test]
async fn updates_name_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_mod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;
    let host = factory::host::create_host_with_publisher(db).await?;

    let repo = ModRepository::new(db);
    let created = repo.create(params("renamable", user.id, host.id)).await?;

    let updated = repo
        .update(UpdateModParams {
            id: created.id,
            name: Some("Skybox Overhaul II".to_string()),
            description: None,
            category_id: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Skybox Overhaul II");
    assert_eq!(updated.description, created.description);

    Ok(())
}

/// Tests updating a missing mod.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_mod_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_mod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ModRepository::new(db);
    let updated = repo
        .update(UpdateModParams {
            id: Uuid::new_v4(),
            name: Some("ghost".to_string()),
            description: None,
            category_id: None,
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
