use super::*;

/// Tests posting a top-level comment on a mod.
///
/// Expected: Ok with no parent and the hierarchy defaults
#[tokio::test]
async fn creates_top_level_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;
    let host = factory::host::create_host_with_publisher(db).await?;
    let target = factory::mod_::create_mod(db, user.id, host.id).await?;

    let repo = CommentRepository::new(db);
    let comment = repo
        .create(CreateCommentParams {
            mod_id: target.id,
            user_id: user.id,
            parent_id: None,
            content: "Works great with the latest release.".to_string(),
        })
        .await?;

    assert!(comment.parent_id.is_none());
    assert_eq!(comment.mod_id, target.id);
    assert_eq!(comment.depth, 0);
    assert!(comment.lineage.is_empty());

    Ok(())
}

/// Tests posting a reply to an existing comment.
///
/// Expected: Ok with the parent link set
#[tokio::test]
async fn creates_reply() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;
    let host = factory::host::create_host_with_publisher(db).await?;
    let target = factory::mod_::create_mod(db, user.id, host.id).await?;

    let repo = CommentRepository::new(db);
    let parent = repo
        .create(CreateCommentParams {
            mod_id: target.id,
            user_id: user.id,
            parent_id: None,
            content: "Does this work on 2.0?".to_string(),
        })
        .await?;

    let reply = repo
        .create(CreateCommentParams {
            mod_id: target.id,
            user_id: user.id,
            parent_id: Some(parent.id),
            content: "Yes, since yesterday's update.".to_string(),
        })
        .await?;

    assert_eq!(reply.parent_id, Some(parent.id));

    Ok(())
}
