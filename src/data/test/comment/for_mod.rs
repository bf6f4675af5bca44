use super::*;

/// Tests listing a mod's comments.
///
/// Expected: only that mod's active comments, in posting order
#[tokio::test]
async fn lists_comments_in_posting_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;
    let host = factory::host::create_host_with_publisher(db).await?;
    let target = factory::mod_::create_mod(db, user.id, host.id).await?;
    let other = factory::mod_::create_mod(db, user.id, host.id).await?;

    let repo = CommentRepository::new(db);
    for content in ["first", "second"] {
        repo.create(CreateCommentParams {
            mod_id: target.id,
            user_id: user.id,
            parent_id: None,
            content: content.to_string(),
        })
        .await?;
    }
    repo.create(CreateCommentParams {
        mod_id: other.id,
        user_id: user.id,
        parent_id: None,
        content: "elsewhere".to_string(),
    })
    .await?;

    let comments = repo.for_mod(target.id).await?;
    let contents: Vec<_> = comments.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(contents, ["first", "second"]);

    Ok(())
}

/// Tests that moderated (deactivated) comments disappear from the thread.
///
/// Expected: only the active comment remains
#[tokio::test]
async fn excludes_deactivated_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;
    let host = factory::host::create_host_with_publisher(db).await?;
    let target = factory::mod_::create_mod(db, user.id, host.id).await?;

    let repo = CommentRepository::new(db);
    let keep = repo
        .create(CreateCommentParams {
            mod_id: target.id,
            user_id: user.id,
            parent_id: None,
            content: "fine".to_string(),
        })
        .await?;
    let removed = repo
        .create(CreateCommentParams {
            mod_id: target.id,
            user_id: user.id,
            parent_id: None,
            content: "spam".to_string(),
        })
        .await?;

    repo.deactivate(removed.id).await?;

    let comments = repo.for_mod(target.id).await?;
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].id, keep.id);

    Ok(())
}
