//! Favorite fixtures for creating in-memory test data.
//!
//! The builder allows any combination of references, including rows that reference both
//! or neither target, to exercise conversion of malformed rows.

use entity::favorites;

/// Creates a favorite entity model pointing user `1` at planet `1`.
pub fn entity() -> favorites::Model {
    entity_builder().build()
}

/// Creates a favorite entity builder for customization.
///
/// # Returns
/// - `FavoriteEntityBuilder` - Builder with the defaults of `entity()`
pub fn entity_builder() -> FavoriteEntityBuilder {
    FavoriteEntityBuilder {
        id: 1,
        user_id: 1,
        planet_id: Some(1),
        people_id: None,
    }
}

/// Builder for in-memory favorite entity models.
pub struct FavoriteEntityBuilder {
    id: i32,
    user_id: i32,
    planet_id: Option<i32>,
    people_id: Option<i32>,
}

impl FavoriteEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn planet_id(mut self, planet_id: Option<i32>) -> Self {
        self.planet_id = planet_id;
        self
    }

    pub fn people_id(mut self, people_id: Option<i32>) -> Self {
        self.people_id = people_id;
        self
    }

    pub fn build(self) -> favorites::Model {
        favorites::Model {
            id: self.id,
            user_id: self.user_id,
            planet_id: self.planet_id,
            people_id: self.people_id,
        }
    }
}
