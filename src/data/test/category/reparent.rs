use super::*;

/// Tests moving a category under a different parent.
///
/// Expected: the parent link changes and the child shows up under the new
/// parent only
#[tokio::test]
async fn moves_category_to_new_parent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let old_parent = repo.create(params("Gameplay", None)).await?;
    let new_parent = repo.create(params("Visuals", None)).await?;
    let child = repo.create(params("Shaders", Some(old_parent.id))).await?;

    let moved = repo.reparent(child.id, Some(new_parent.id)).await?.unwrap();
    assert_eq!(moved.parent_id, Some(new_parent.id));

    assert!(repo.children(old_parent.id).await?.is_empty());
    assert_eq!(repo.children(new_parent.id).await?.len(), 1);

    Ok(())
}

/// Tests promoting a child to a root.
///
/// Expected: the parent link clears
#[tokio::test]
async fn promotes_child_to_root() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let parent = repo.create(params("Gameplay", None)).await?;
    let child = repo.create(params("Balance", Some(parent.id))).await?;

    let promoted = repo.reparent(child.id, None).await?.unwrap();
    assert!(promoted.parent_id.is_none());
    assert_eq!(repo.roots().await?.len(), 2);

    Ok(())
}

/// Tests reparenting a missing category.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_category_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);

    assert!(repo.reparent(Uuid::new_v4(), None).await?.is_none());

    Ok(())
}
