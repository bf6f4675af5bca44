use super::*;

/// Tests listing roots and direct children.
///
/// Expected: roots only at the top, children scoped to their parent and
/// ordered by name
#[tokio::test]
async fn lists_roots_and_children() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let root = repo.create(params("Gameplay", None)).await?;
    let other_root = repo.create(params("Visuals", None)).await?;
    repo.create(params("Weapons", Some(root.id))).await?;
    repo.create(params("Balance", Some(root.id))).await?;

    let roots = repo.roots().await?;
    assert_eq!(roots.len(), 2);

    let children = repo.children(root.id).await?;
    let names: Vec<_> = children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Balance", "Weapons"]);

    assert!(repo.children(other_root.id).await?.is_empty());

    Ok(())
}

/// Tests that deactivated categories drop out of child listings.
///
/// Expected: only the active child remains
#[tokio::test]
async fn excludes_deactivated_children() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let root = repo.create(params("Gameplay", None)).await?;
    let keep = repo.create(params("Balance", Some(root.id))).await?;
    let removed = repo.create(params("Weapons", Some(root.id))).await?;

    repo.deactivate(removed.id).await?;

    let children = repo.children(root.id).await?;
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].id, keep.id);

    Ok(())
}
