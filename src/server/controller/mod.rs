//! HTTP request handlers.
//!
//! Each handler extracts path parameters and the shared state, calls a service with the
//! request's database handle, and converts the resulting domain models into DTOs. Every
//! handler carries a `utoipa::path` annotation; the router is built from those annotations,
//! which also feed the OpenAPI document and the sitemap.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod sitemap;
pub mod user;

#[cfg(test)]
mod test;

/// Narrows a path id to the width of the table keys.
///
/// Path ids are extracted as `i64` so that any integer reaches the handler. Ids outside the
/// `i32` range cannot match a row and come back as `None`, which handlers report as not found.
fn row_id(id: i64) -> Option<i32> {
    i32::try_from(id).ok()
}
