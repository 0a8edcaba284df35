//! Planet factory for creating test planet entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test planets with customizable fields.
///
/// Descriptive attributes default to `None`; only the name is always populated.
pub struct PlanetFactory<'a> {
    db: &'a DatabaseConnection,
    id: Option<i32>,
    name: String,
    climate: Option<String>,
    terrain: Option<String>,
    population: Option<i64>,
    diameter: Option<i32>,
}

impl<'a> PlanetFactory<'a> {
    /// Creates a new PlanetFactory named `"Planet {n}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: None,
            name: format!("Planet {}", n),
            climate: None,
            terrain: None,
            population: None,
            diameter: None,
        }
    }

    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn climate(mut self, climate: impl Into<String>) -> Self {
        self.climate = Some(climate.into());
        self
    }

    pub fn terrain(mut self, terrain: impl Into<String>) -> Self {
        self.terrain = Some(terrain.into());
        self
    }

    pub fn population(mut self, population: i64) -> Self {
        self.population = Some(population);
        self
    }

    pub fn diameter(mut self, diameter: i32) -> Self {
        self.diameter = Some(diameter);
        self
    }

    /// Builds and inserts the planet entity into the database.
    pub async fn build(self) -> Result<entity::planets::Model, DbErr> {
        entity::planets::ActiveModel {
            id: self.id.map(ActiveValue::Set).unwrap_or(ActiveValue::NotSet),
            name: ActiveValue::Set(self.name),
            climate: ActiveValue::Set(self.climate),
            terrain: ActiveValue::Set(self.terrain),
            population: ActiveValue::Set(self.population),
            diameter: ActiveValue::Set(self.diameter),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a planet with default values.
pub async fn create_planet(db: &DatabaseConnection) -> Result<entity::planets::Model, DbErr> {
    PlanetFactory::new(db).build().await
}
