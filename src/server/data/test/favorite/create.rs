use super::*;

/// Tests that creating a planet favorite writes only the planet column.
///
/// Expected: Ok(Favorite) and a stored row with people_id NULL
#[tokio::test]
async fn creates_planet_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let favorite = FavoriteRepository::new(db)
        .create(CreateFavoriteParam {
            user_id: user.id,
            target: FavoriteTarget::Planet(planet.id),
        })
        .await?;

    let stored = entity::prelude::Favorites::find_by_id(favorite.id)
        .one(db)
        .await?
        .expect("row was inserted");

    assert_eq!(stored.user_id, user.id);
    assert_eq!(stored.planet_id, Some(planet.id));
    assert!(stored.people_id.is_none());

    Ok(())
}

/// Tests that creating a character favorite writes only the people column.
///
/// Expected: Ok(Favorite) and a stored row with planet_id NULL
#[tokio::test]
async fn creates_people_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let person = factory::create_person(db).await?;

    let favorite = FavoriteRepository::new(db)
        .create(CreateFavoriteParam {
            user_id: user.id,
            target: FavoriteTarget::People(person.id),
        })
        .await?;

    let stored = entity::prelude::Favorites::find_by_id(favorite.id)
        .one(db)
        .await?
        .expect("row was inserted");

    assert!(stored.planet_id.is_none());
    assert_eq!(stored.people_id, Some(person.id));

    Ok(())
}
