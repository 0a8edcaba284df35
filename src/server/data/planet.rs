//! Planet data repository for database operations.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::planet::Planet;

/// Repository providing read access to the planet catalog.
pub struct PlanetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetRepository<'a> {
    /// Creates a new PlanetRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every planet ordered by id.
    ///
    /// # Returns
    /// - `Ok(Vec<Planet>)` - All planets, empty if none are seeded
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Planet>, DbErr> {
        let entities = entity::prelude::Planets::find()
            .order_by_asc(entity::planets::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Planet::from_entity).collect())
    }

    /// Finds a planet by its primary key.
    ///
    /// # Returns
    /// - `Ok(Some(Planet))` - Planet found
    /// - `Ok(None)` - No planet with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, DbErr> {
        let entity = entity::prelude::Planets::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Planet::from_entity))
    }
}
