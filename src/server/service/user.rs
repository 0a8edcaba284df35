//! User service for business logic.
//!
//! This module provides the `UserService` for listing users and reading the favorites
//! they own.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{favorite::FavoriteRepository, user::UserRepository},
    error::AppError,
    model::{favorite::Favorite, user::User},
};

/// Service providing business logic for users.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every user.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users ordered by id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        Ok(user_repo.get_all().await?)
    }

    /// Retrieves the favorites owned by a user.
    ///
    /// Distinguishes a user without favorites (empty list) from a user that does not exist.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user whose favorites to list
    ///
    /// # Returns
    /// - `Ok(Some(Vec<Favorite>))` - User exists; their favorites ordered by id
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError)` - Database error or malformed favorite row
    pub async fn get_favorites(&self, user_id: i32) -> Result<Option<Vec<Favorite>>, AppError> {
        let user_repo = UserRepository::new(self.db);

        if !user_repo.exists(user_id).await? {
            return Ok(None);
        }

        let favorite_repo = FavoriteRepository::new(self.db);
        let favorites = favorite_repo.get_by_user(user_id).await?;

        Ok(Some(favorites))
    }
}
