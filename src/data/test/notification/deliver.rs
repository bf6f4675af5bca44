use super::*;

/// Tests fanning a notification out to multiple users.
///
/// Expected: each recipient sees the notification, non-recipients do not
#[tokio::test]
async fn delivers_to_each_recipient() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = UserFactory::new(db).build().await?;
    let bob = UserFactory::new(db).build().await?;
    let carol = UserFactory::new(db).build().await?;

    let repo = NotificationRepository::new(db);
    let notification = repo
        .create("New release".to_string(), "Version 2.0 is out.".to_string(), None)
        .await?;

    repo.deliver(notification.id, &[alice.id, bob.id]).await?;

    assert_eq!(repo.for_user(alice.id).await?.len(), 1);
    assert_eq!(repo.for_user(bob.id).await?.len(), 1);
    assert!(repo.for_user(carol.id).await?.is_empty());

    Ok(())
}

/// Tests delivering to an empty recipient list.
///
/// Expected: Ok with no rows written
#[tokio::test]
async fn empty_recipient_list_is_a_no_op() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);
    let notification = repo
        .create("Quiet".to_string(), "Nobody hears this.".to_string(), None)
        .await?;

    repo.deliver(notification.id, &[]).await?;

    let count = entity::prelude::UserNotification::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests that deactivated notifications drop out of a user's listing.
///
/// Expected: empty listing after deactivation
#[tokio::test]
async fn excludes_deactivated_notifications() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;

    let repo = NotificationRepository::new(db);
    let notification = factory::notification::create_notification(db).await?;
    repo.deliver(notification.id, &[user.id]).await?;

    let mut active: entity::notification::ActiveModel = notification.into();
    active.is_active = sea_orm::ActiveValue::Set(false);
    sea_orm::ActiveModelTrait::update(active, db).await?;

    assert!(repo.for_user(user.id).await?.is_empty());

    Ok(())
}
