//! Favorite service for business logic.
//!
//! Adding a favorite requires both the user and the target to exist and the pair to be
//! new. The duplicate check is a read followed by an insert; the unique indexes on the
//! favorites table catch inserts that race past it, and those are reported as the same
//! duplicate error.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::{
        favorite::FavoriteRepository, people::PeopleRepository, planet::PlanetRepository,
        user::UserRepository,
    },
    error::{favorite::FavoriteError, AppError},
    model::favorite::{CreateFavoriteParam, Favorite, FavoriteTarget},
};

/// Service providing business logic for adding and removing favorites.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new FavoriteService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a planet or character to a user's favorites.
    ///
    /// # Arguments
    /// - `param` - Owner and target of the new favorite
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite
    /// - `Err(FavoriteError::OwnerOrTargetNotFound)` - User or target does not exist
    /// - `Err(FavoriteError::AlreadyFavorited)` - The user already favorited this target
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add(&self, param: CreateFavoriteParam) -> Result<Favorite, AppError> {
        let kind = param.target.kind();

        let user_exists = UserRepository::new(self.db).exists(param.user_id).await?;
        if !user_exists || !self.target_exists(param.target).await? {
            return Err(FavoriteError::OwnerOrTargetNotFound(kind).into());
        }

        let repo = FavoriteRepository::new(self.db);

        if repo
            .find_by_user_and_target(param.user_id, param.target)
            .await?
            .is_some()
        {
            return Err(FavoriteError::AlreadyFavorited(kind).into());
        }

        match repo.create(param).await {
            Ok(favorite) => {
                tracing::info!(
                    "User {} added {:?} to favorites (favorite {})",
                    favorite.user_id,
                    favorite.target,
                    favorite.id
                );
                Ok(favorite)
            }
            Err(err) if is_unique_violation(&err) => {
                Err(FavoriteError::AlreadyFavorited(kind).into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Removes a planet or character from a user's favorites.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the favorite
    /// - `target` - Planet or character to remove
    ///
    /// # Returns
    /// - `Ok(())` - The favorite was deleted
    /// - `Err(FavoriteError::NotFound)` - No favorite links the user to the target
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn remove(&self, user_id: i32, target: FavoriteTarget) -> Result<(), AppError> {
        let repo = FavoriteRepository::new(self.db);

        let favorite = repo
            .find_by_user_and_target(user_id, target)
            .await?
            .ok_or(FavoriteError::NotFound)?;

        // A concurrent request may have removed it between the lookup and the delete
        if !repo.delete(favorite.id).await? {
            return Err(FavoriteError::NotFound.into());
        }

        tracing::info!(
            "User {} removed {:?} from favorites (favorite {})",
            user_id,
            target,
            favorite.id
        );

        Ok(())
    }

    async fn target_exists(&self, target: FavoriteTarget) -> Result<bool, DbErr> {
        let exists = match target {
            FavoriteTarget::Planet(id) => PlanetRepository::new(self.db)
                .find_by_id(id)
                .await?
                .is_some(),
            FavoriteTarget::People(id) => PeopleRepository::new(self.db)
                .find_by_id(id)
                .await?
                .is_some(),
        };

        Ok(exists)
    }
}

/// Whether a database error was caused by a unique index violation.
fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
