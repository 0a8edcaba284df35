//! Planet domain model.

use crate::model::planet::PlanetDto;

/// Catalog planet with its descriptive attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<i64>,
    pub diameter: Option<i32>,
}

impl Planet {
    /// Converts an entity model to a planet domain model at the repository boundary.
    pub fn from_entity(entity: entity::planets::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            climate: entity.climate,
            terrain: entity.terrain,
            population: entity.population,
            diameter: entity.diameter,
        }
    }

    /// Converts the planet domain model to a DTO for API responses.
    pub fn into_dto(self) -> PlanetDto {
        PlanetDto {
            id: self.id,
            name: self.name,
            climate: self.climate,
            terrain: self.terrain,
            population: self.population,
            diameter: self.diameter,
        }
    }
}
