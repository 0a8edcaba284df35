use super::*;

/// Tests finding a character favorite for its owner.
///
/// Expected: Ok(Some(Favorite)) targeting the character
#[tokio::test]
async fn finds_existing_people_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, person, favorite) = factory::helpers::create_user_with_favorite_person(db).await?;

    let found = FavoriteRepository::new(db)
        .find_by_user_and_people(user.id, person.id)
        .await?
        .expect("favorite exists");

    assert_eq!(found.id, favorite.id);
    assert_eq!(found.target, FavoriteTarget::People(person.id));

    Ok(())
}

/// Tests that a planet favorite is not matched by a character lookup with the same id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn does_not_match_planet_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, planet, _) = factory::helpers::create_user_with_favorite_planet(db).await?;

    let found = FavoriteRepository::new(db)
        .find_by_user_and_people(user.id, planet.id)
        .await?;

    assert!(found.is_none());

    Ok(())
}
