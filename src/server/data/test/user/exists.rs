use super::*;

/// Tests the existence check for present and absent users.
///
/// Expected: true for the created user, false for an unknown id
#[tokio::test]
async fn reports_user_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(repo.exists(user.id).await?);
    assert!(!repo.exists(user.id + 1000).await?);

    Ok(())
}
