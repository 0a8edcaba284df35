//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories borrow the database connection they are given,
//! use SeaORM entity models internally, and return domain models. Every query the
//! application runs is an explicit typed function here; no handler builds filters itself.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;

#[cfg(test)]
mod test;
