//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible defaults,
//! reducing boilerplate in tests. Every factory draws from a shared counter so that unique
//! columns such as `user.email` never collide within a test binary.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::create_user(&db).await?;
//!     let planet = factory::create_planet(&db).await?;
//!
//!     // Link them
//!     let favorite = factory::create_favorite_planet(&db, user.id, planet.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let planet = factory::planet::PlanetFactory::new(&db)
//!     .name("Tatooine")
//!     .climate("arid")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `planet` - Create planet entities
//! - `people` - Create character entities
//! - `favorite` - Create favorite entities
//! - `helpers` - Shared ID counter and dependency helpers

pub mod favorite;
pub mod helpers;
pub mod people;
pub mod planet;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use favorite::{create_favorite_people, create_favorite_planet};
pub use people::create_person;
pub use planet::create_planet;
pub use user::create_user;
