use super::*;

/// Tests listing a host's releases.
///
/// Expected: all of the host's releases, none of another host's
#[tokio::test]
async fn lists_releases_for_the_host() -> Result<(), DbErr> {
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
            description: None,
            host_publisher_id: publisher.id,
        })
        .await?;
    let other = repo
        .create_host(CreateHostParams {
            slug: "elfholm".to_string(),
            name: "Elfholm".to_string(),
            description: None,
            host_publisher_id: publisher.id,
        })
        .await?;

    for version in ["1.0.0", "1.1.0"] {
        repo.create_release(CreateHostReleaseParams {
            host_id: host.id,
            version: version.to_string(),
            released_at: Some(Utc::now()),
            description: None,
        })
        .await?;
    }
    repo.create_release(CreateHostReleaseParams {
        host_id: other.id,
        version: "0.9.0".to_string(),
        released_at: None,
        description: None,
    })
    .await?;

    let releases = repo.releases(host.id).await?;
    assert_eq!(releases.len(), 2);
    assert!(releases.iter().all(|r| r.host_id == host.id));

    Ok(())
}
