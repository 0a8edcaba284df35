//! JSON data transfer objects returned by the HTTP API.
//!
//! These types define the wire shape of every response body. Server-side domain models in
//! `server::model` convert into them at the controller boundary.

pub mod api;
pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
