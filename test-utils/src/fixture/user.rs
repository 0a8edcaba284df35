//! User fixtures for creating in-memory test data.

use entity::user;

/// Default test user email.
pub const DEFAULT_EMAIL: &str = "luke@rebellion.org";

/// Default stored password.
pub const DEFAULT_PASSWORD: &str = "usetheforce";

/// Creates a user entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - email: `"luke@rebellion.org"`
/// - password: `"usetheforce"`
/// - is_active: `true`
pub fn entity() -> user::Model {
    user::Model {
        id: 1,
        email: DEFAULT_EMAIL.to_string(),
        password: DEFAULT_PASSWORD.to_string(),
        is_active: true,
    }
}
