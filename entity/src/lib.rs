//! SeaORM entity definitions for the favorites catalog.
//!
//! Users, planets and people are seeded catalog tables; `favorites` links a user to
//! exactly one planet or one person.

pub mod prelude;

pub mod favorites;
pub mod people;
pub mod planets;
pub mod user;
