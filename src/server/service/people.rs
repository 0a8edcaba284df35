use sea_orm::DatabaseConnection;

use crate::server::{data::people::PeopleRepository, error::AppError, model::people::Person};

pub struct PeopleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PeopleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every character in the catalog
    pub async fn get_all(&self) -> Result<Vec<Person>, AppError> {
        let repo = PeopleRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a specific character by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Person>, AppError> {
        let repo = PeopleRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }
}
