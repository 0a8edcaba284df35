use super::*;

/// Tests listing users returns every row ordered by id.
///
/// Expected: Ok(Vec) with both users, active flag preserved
#[tokio::test]
async fn returns_all_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::create_user(db).await?;
    let inactive = factory::user::UserFactory::new(db)
        .is_active(false)
        .build()
        .await?;

    let users = UserRepository::new(db).get_all().await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, active.id);
    assert!(users[0].is_active);
    assert_eq!(users[1].id, inactive.id);
    assert!(!users[1].is_active);

    Ok(())
}
