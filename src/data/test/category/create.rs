use super::*;

/// Tests creating a root category.
///
/// On the SQLite harness the hierarchy columns keep their inserted defaults,
/// which for a root are also the correct values.
///
/// Expected: Ok with no parent, depth 0, and empty lineage
#[tokio::test]
async fn creates_root_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let root = repo.create(params("Gameplay", None)).await?;

    assert!(root.parent_id.is_none());
    assert_eq!(root.depth, 0);
    assert!(root.lineage.is_empty());

    Ok(())
}

/// Tests creating a child category under a root.
///
/// Expected: Ok with the parent link set
#[tokio::test]
async fn creates_child_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let root = repo.create(params("Gameplay", None)).await?;
    let child = repo.create(params("Balance", Some(root.id))).await?;

    assert_eq!(child.parent_id, Some(root.id));

    Ok(())
}

/// Tests that a dangling parent reference is rejected by the foreign key.
///
/// Expected: Err from the insert
#[tokio::test]
async fn dangling_parent_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let result = repo.create(params("Orphan", Some(Uuid::new_v4()))).await;

    assert!(result.is_err());

    Ok(())
}
