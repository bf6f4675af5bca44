use super::*;

/// Tests paginating a user's mods.
///
/// Expected: page slices with the total count of the user's active mods
#[tokio::test]
async fn paginates_a_users_mods() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_mod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;
    let other = UserFactory::new(db).build().await?;
    let host = factory::host::create_host_with_publisher(db).await?;

    let repo = ModRepository::new(db);
    for slug in ["alpha", "beta", "gamma"] {
        repo.create(params(slug, user.id, host.id)).await?;
    }
    repo.create(params("delta", other.id, host.id)).await?;

    let (page_one, total) = repo.get_by_user_paginated(user.id, 0, 2).await?;
    assert_eq!(page_one.len(), 2);
    assert_eq!(total, 3);

    let (page_two, _) = repo.get_by_user_paginated(user.id, 1, 2).await?;
    assert_eq!(page_two.len(), 1);

    Ok(())
}

/// Tests that deactivated mods drop out of the listing.
///
/// Expected: the deactivated mod is not returned and the total shrinks
#[tokio::test]
async fn excludes_deactivated_mods() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_mod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;
    let host = factory::host::create_host_with_publisher(db).await?;

    let repo = ModRepository::new(db);
    let keep = repo.create(params("kept", user.id, host.id)).await?;
    let removed = repo.create(params("dropped", user.id, host.id)).await?;

    repo.deactivate(removed.id).await?;

    let (mods, total) = repo.get_by_user_paginated(user.id, 0, 10).await?;
    assert_eq!(total, 1);
    assert_eq!(mods.len(), 1);
    assert_eq!(mods[0].id, keep.id);

    Ok(())
}
