//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They borrow the request's database handle, coordinate repository calls, enforce the
//! favorites rules (existence and uniqueness), and return domain models.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
