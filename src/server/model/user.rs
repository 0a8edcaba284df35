//! User domain model.
//!
//! The stored password stays in the entity model; the domain model never carries it, so
//! it cannot leak into a response.

use crate::model::user::UserDto;

/// Application user who can own favorites.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Primary key of the user
    pub id: i32,
    /// Login email, unique across users.
    pub email: String,
    /// Whether the account is active.
    pub is_active: bool,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// Drops the password column.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            is_active: entity.is_active,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            is_active: self.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixture;

    #[test]
    fn never_serializes_password() {
        let json = serde_json::to_value(User::from_entity(fixture::user::entity()).into_dto())
            .unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "email": fixture::user::DEFAULT_EMAIL,
                "is_active": true
            })
        );
        assert!(json.get("password").is_none());
    }
}
