//! Favorite factory for linking users to planets or characters.
//!
//! Both referenced rows must already exist; create them with the user, planet or
//! people factories first.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a favorite linking `user_id` to a planet.
///
/// # Returns
/// - `Ok(entity::favorites::Model)` - Created favorite with `people_id` unset
/// - `Err(DbErr)` - Database error during insert
pub async fn create_favorite_planet(
    db: &DatabaseConnection,
    user_id: i32,
    planet_id: i32,
) -> Result<entity::favorites::Model, DbErr> {
    entity::favorites::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        planet_id: ActiveValue::Set(Some(planet_id)),
        people_id: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts a favorite linking `user_id` to a character.
///
/// # Returns
/// - `Ok(entity::favorites::Model)` - Created favorite with `planet_id` unset
/// - `Err(DbErr)` - Database error during insert
pub async fn create_favorite_people(
    db: &DatabaseConnection,
    user_id: i32,
    people_id: i32,
) -> Result<entity::favorites::Model, DbErr> {
    entity::favorites::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        planet_id: ActiveValue::Set(None),
        people_id: ActiveValue::Set(Some(people_id)),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts a favorite row with arbitrary references.
///
/// Bypasses the application's one-target rule so tests can seed rows that reference
/// both or neither target.
pub async fn create_raw_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    planet_id: Option<i32>,
    people_id: Option<i32>,
) -> Result<entity::favorites::Model, DbErr> {
    entity::favorites::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        planet_id: ActiveValue::Set(planet_id),
        people_id: ActiveValue::Set(people_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn creates_planet_favorite() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (user, planet, favorite) =
            factory::helpers::create_user_with_favorite_planet(db).await?;

        assert_eq!(favorite.user_id, user.id);
        assert_eq!(favorite.planet_id, Some(planet.id));
        assert!(favorite.people_id.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_people_favorite() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (user, person, favorite) =
            factory::helpers::create_user_with_favorite_person(db).await?;

        assert_eq!(favorite.user_id, user.id);
        assert_eq!(favorite.people_id, Some(person.id));
        assert!(favorite.planet_id.is_none());

        Ok(())
    }
}
