use super::*;

/// Tests listing the ratings attached to a mod.
///
/// Expected: only that mod's ratings
#[tokio::test]
async fn lists_ratings_for_the_mod() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rating_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = UserFactory::new(db).build().await?;
    let bob = UserFactory::new(db).build().await?;
    let host = factory::host::create_host_with_publisher(db).await?;
    let target = factory::mod_::create_mod(db, alice.id, host.id).await?;
    let other = factory::mod_::create_mod(db, alice.id, host.id).await?;

    let repo = RatingRepository::new(db);
    repo.rate_mod(params(target.id, alice.id)).await?;
    repo.rate_mod(params(target.id, bob.id)).await?;
    repo.rate_mod(params(other.id, bob.id)).await?;

    let ratings = repo.for_mod(target.id).await?;
    assert_eq!(ratings.len(), 2);

    Ok(())
}

/// Tests that deactivated ratings are filtered out.
///
/// Expected: the deactivated rating is not listed
#[tokio::test]
async fn excludes_deactivated_ratings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rating_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;
    let host = factory::host::create_host_with_publisher(db).await?;
    let target = factory::mod_::create_mod(db, user.id, host.id).await?;

    let repo = RatingRepository::new(db);
    let rating = repo.rate_mod(params(target.id, user.id)).await?;

    let mut active: entity::rating::ActiveModel = rating.into();
    active.is_active = sea_orm::ActiveValue::Set(false);
    sea_orm::ActiveModelTrait::update(active, db).await?;

    assert!(repo.for_mod(target.id).await?.is_empty());

    Ok(())
}
