//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It replaces any global ORM session: every
//! handler receives the database handle explicitly and lends it to the services and
//! repositories it builds.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// Cloning is cheap: `DatabaseConnection` is a connection pool and clones share it.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state around the given connection pool.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
