//! Character (people) domain model.

use crate::model::people::PersonDto;

/// Catalog character with its descriptive attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<i32>,
}

impl Person {
    /// Converts an entity model to a character domain model at the repository boundary.
    pub fn from_entity(entity: entity::people::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            gender: entity.gender,
            birth_year: entity.birth_year,
            eye_color: entity.eye_color,
            hair_color: entity.hair_color,
            height: entity.height,
        }
    }

    /// Converts the character domain model to a DTO for API responses.
    pub fn into_dto(self) -> PersonDto {
        PersonDto {
            id: self.id,
            name: self.name,
            gender: self.gender,
            birth_year: self.birth_year,
            eye_color: self.eye_color,
            hair_color: self.hair_color,
            height: self.height,
        }
    }
}
