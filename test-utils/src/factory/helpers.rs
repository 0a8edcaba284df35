//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user who has a single favorite planet.
///
/// Inserts a default user, a default planet, and the favorite linking them.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, planet, favorite))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_favorite_planet(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::planets::Model,
        entity::favorites::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let planet = crate::factory::planet::create_planet(db).await?;
    let favorite = crate::factory::favorite::create_favorite_planet(db, user.id, planet.id).await?;

    Ok((user, planet, favorite))
}

/// Creates a user who has a single favorite character.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, person, favorite))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_favorite_person(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::people::Model,
        entity::favorites::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let person = crate::factory::people::create_person(db).await?;
    let favorite = crate::factory::favorite::create_favorite_people(db, user.id, person.id).await?;

    Ok((user, person, favorite))
}
