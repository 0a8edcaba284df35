use super::*;

/// Tests deleting an existing favorite.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_existing_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, favorite) = factory::helpers::create_user_with_favorite_planet(db).await?;

    let deleted = FavoriteRepository::new(db).delete(favorite.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Favorites::find_by_id(favorite.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a favorite that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = FavoriteRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}
