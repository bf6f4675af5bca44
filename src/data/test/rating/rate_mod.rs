use super::*;

/// Tests recording a rating for a mod version.
///
/// Expected: Ok with both the rating row and its association row written
#[tokio::test]
async fn records_rating_and_association() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rating_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;
    let host = factory::host::create_host_with_publisher(db).await?;
    let target = factory::mod_::create_mod(db, user.id, host.id).await?;

    let repo = RatingRepository::new(db);
    let rating = repo.rate_mod(params(target.id, user.id)).await?;

    assert_eq!(rating.rating, "4.50".parse().unwrap());
    assert!(rating.is_active);

    let association = entity::prelude::ModRating::find_by_id((target.id, rating.id, user.id))
        .one(db)
        .await?;
    assert!(association.is_some());
    assert_eq!(association.unwrap().version, "1.2.3");

    Ok(())
}

/// Tests that a failing association insert rolls back the rating row.
///
/// The rated mod does not exist, so the association violates its foreign key
/// after the rating row was written inside the transaction.
///
/// Expected: Err, and no rating row remains
#[tokio::test]
async fn failed_association_rolls_back_rating() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rating_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;

    let repo = RatingRepository::new(db);
    let result = repo.rate_mod(params(Uuid::new_v4(), user.id)).await;

    assert!(result.is_err());

    let rating_count = entity::prelude::Rating::find().count(db).await?;
    assert_eq!(rating_count, 0);

    Ok(())
}
