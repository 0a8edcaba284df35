use super::*;

/// Tests finding a planet favorite for its owner.
///
/// Expected: Ok(Some(Favorite))
#[tokio::test]
async fn finds_existing_planet_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, planet, favorite) = factory::helpers::create_user_with_favorite_planet(db).await?;

    let found = FavoriteRepository::new(db)
        .find_by_user_and_planet(user.id, planet.id)
        .await?;

    assert_eq!(found.map(|f| f.id), Some(favorite.id));

    Ok(())
}

/// Tests that another user's favorite of the same planet is not matched.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_other_users_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, planet, _) = factory::helpers::create_user_with_favorite_planet(db).await?;
    let other = factory::create_user(db).await?;

    let found = FavoriteRepository::new(db)
        .find_by_user_and_planet(other.id, planet.id)
        .await?;

    assert!(found.is_none());

    Ok(())
}
