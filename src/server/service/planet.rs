use sea_orm::DatabaseConnection;

use crate::server::{data::planet::PlanetRepository, error::AppError, model::planet::Planet};

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every planet in the catalog
    pub async fn get_all(&self) -> Result<Vec<Planet>, AppError> {
        let repo = PlanetRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a specific planet by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Planet>, AppError> {
        let repo = PlanetRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }
}
