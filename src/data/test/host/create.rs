use super::*;

/// Tests creating the publisher → host chain and looking the host up by slug.
///
/// Expected: Ok at every step, slug lookup resolves
#[tokio::test]
async fn creates_publisher_and_host() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_host_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HostRepository::new(db);
    let publisher = repo
        .create_publisher(CreateHostPublisherParams {
            slug: "ironworks".to_string(),
            name: "Ironworks Interactive".to_string(),
            description: None,
        })
        .await?;

    let host = repo
        .create_host(CreateHostParams {
            slug: "dwarfholm".to_string(),
            name: "Dwarfholm".to_string(),
            description: Some("Colony sim".to_string()),
            host_publisher_id: publisher.id,
        })
        .await?;

    assert_eq!(host.host_publisher_id, publisher.id);

    let found = repo.find_by_slug("dwarfholm").await?;
    assert_eq!(found.map(|h| h.id), Some(host.id));

    Ok(())
}

/// Tests that a host cannot be created for a missing publisher.
///
/// Expected: Err from the foreign key
#[tokio::test]
async fn host_requires_existing_publisher() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_host_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HostRepository::new(db);
    let result = repo
        .create_host(CreateHostParams {
            slug: "floating".to_string(),
            name: "Floating".to_string(),
            description: None,
            host_publisher_id: uuid::Uuid::new_v4(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
