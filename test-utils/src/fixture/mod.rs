//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them to unit test
//! entity-to-domain conversion and serialization without a connection.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let planet = fixture::planet::entity();
//! let favorite = fixture::favorite::entity_builder()
//!     .planet_id(None)
//!     .people_id(Some(3))
//!     .build();
//! ```

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
