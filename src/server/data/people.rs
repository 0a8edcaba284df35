//! Character data repository for database operations.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::people::Person;

/// Repository providing read access to the character catalog.
pub struct PeopleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PeopleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every character ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Person>, DbErr> {
        let entities = entity::prelude::People::find()
            .order_by_asc(entity::people::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Person::from_entity).collect())
    }

    /// Finds a character by its primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Person>, DbErr> {
        let entity = entity::prelude::People::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Person::from_entity))
    }
}
