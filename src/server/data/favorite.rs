//! Favorite data repository for database operations.
//!
//! Provides typed queries for a user's favorites keyed by planet or character. Rows are
//! converted to `Favorite` domain models here, so a row that references both targets or
//! neither surfaces as an internal error instead of reaching a response.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::favorite::{CreateFavoriteParam, Favorite, FavoriteTarget},
};

/// Repository providing database operations for favorites.
pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    /// Creates a new FavoriteRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all favorites owned by a user, ordered by id.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the favorites
    ///
    /// # Returns
    /// - `Ok(Vec<Favorite>)` - The user's favorites, empty if none
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr)` - A stored row is malformed
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Favorite>, AppError> {
        let entities = entity::prelude::Favorites::find()
            .filter(entity::favorites::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorites::Column::Id)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(|e| Favorite::from_entity(e).map_err(AppError::from))
            .collect()
    }

    /// Finds the favorite linking a user to a planet.
    ///
    /// # Returns
    /// - `Ok(Some(Favorite))` - The user has favorited this planet
    /// - `Ok(None)` - No such favorite
    /// - `Err(AppError)` - Database error or malformed row
    pub async fn find_by_user_and_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<Option<Favorite>, AppError> {
        let entity = entity::prelude::Favorites::find()
            .filter(entity::favorites::Column::UserId.eq(user_id))
            .filter(entity::favorites::Column::PlanetId.eq(planet_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Favorite::from_entity).transpose()?)
    }

    /// Finds the favorite linking a user to a character.
    ///
    /// # Returns
    /// - `Ok(Some(Favorite))` - The user has favorited this character
    /// - `Ok(None)` - No such favorite
    /// - `Err(AppError)` - Database error or malformed row
    pub async fn find_by_user_and_people(
        &self,
        user_id: i32,
        people_id: i32,
    ) -> Result<Option<Favorite>, AppError> {
        let entity = entity::prelude::Favorites::find()
            .filter(entity::favorites::Column::UserId.eq(user_id))
            .filter(entity::favorites::Column::PeopleId.eq(people_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Favorite::from_entity).transpose()?)
    }

    /// Finds the favorite linking a user to the given target.
    ///
    /// Dispatches to `find_by_user_and_planet` or `find_by_user_and_people`.
    pub async fn find_by_user_and_target(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<Favorite>, AppError> {
        match target {
            FavoriteTarget::Planet(planet_id) => {
                self.find_by_user_and_planet(user_id, planet_id).await
            }
            FavoriteTarget::People(people_id) => {
                self.find_by_user_and_people(user_id, people_id).await
            }
        }
    }

    /// Inserts a new favorite.
    ///
    /// Exactly one reference column is written, derived from the typed target.
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite
    /// - `Err(DbErr)` - Database error during insert, including unique index violations
    pub async fn create(&self, param: CreateFavoriteParam) -> Result<Favorite, DbErr> {
        let entity = entity::favorites::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            planet_id: ActiveValue::Set(param.target.planet_id()),
            people_id: ActiveValue::Set(param.target.people_id()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Favorite {
            id: entity.id,
            user_id: entity.user_id,
            target: param.target,
        })
    }

    /// Deletes a favorite by its primary key.
    ///
    /// # Returns
    /// - `Ok(true)` - The favorite was deleted
    /// - `Ok(false)` - No favorite with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Favorites::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
