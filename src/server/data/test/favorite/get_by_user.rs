use super::*;

/// Tests listing favorites only returns rows owned by the requested user.
///
/// Expected: Ok(Vec) with the user's single favorite
#[tokio::test]
async fn returns_only_users_favorites() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, planet, favorite) = factory::helpers::create_user_with_favorite_planet(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_favorite_planet(db, other.id, planet.id).await?;

    let favorites = FavoriteRepository::new(db).get_by_user(user.id).await?;

    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].id, favorite.id);
    assert_eq!(favorites[0].target, FavoriteTarget::Planet(planet.id));

    Ok(())
}

/// Tests listing favorites for a user without any.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_list_without_favorites() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let favorites = FavoriteRepository::new(db).get_by_user(user.id).await?;

    assert!(favorites.is_empty());

    Ok(())
}

/// Tests that a stored row referencing neither target is reported, not returned.
///
/// Expected: Err(AppError::InternalErr(MalformedFavorite))
#[tokio::test]
async fn fails_on_malformed_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let malformed = factory::favorite::create_raw_favorite(db, user.id, None, None).await?;

    let result = FavoriteRepository::new(db).get_by_user(user.id).await;

    assert!(matches!(
        result,
        Err(AppError::InternalErr(InternalError::MalformedFavorite { id, .. })) if id == malformed.id
    ));

    Ok(())
}
