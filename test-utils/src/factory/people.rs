//! People factory for creating test character entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test characters with customizable fields.
pub struct PeopleFactory<'a> {
    db: &'a DatabaseConnection,
    id: Option<i32>,
    name: String,
    gender: Option<String>,
    birth_year: Option<String>,
    eye_color: Option<String>,
    hair_color: Option<String>,
    height: Option<i32>,
}

impl<'a> PeopleFactory<'a> {
    /// Creates a new PeopleFactory named `"Character {n}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: None,
            name: format!("Character {}", n),
            gender: None,
            birth_year: None,
            eye_color: None,
            hair_color: None,
            height: None,
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

    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn birth_year(mut self, birth_year: impl Into<String>) -> Self {
        self.birth_year = Some(birth_year.into());
        self
    }

    pub fn eye_color(mut self, eye_color: impl Into<String>) -> Self {
        self.eye_color = Some(eye_color.into());
        self
    }

    pub fn hair_color(mut self, hair_color: impl Into<String>) -> Self {
        self.hair_color = Some(hair_color.into());
        self
    }

    pub fn height(mut self, height: i32) -> Self {
        self.height = Some(height);
        self
    }

    /// Builds and inserts the character entity into the database.
    pub async fn build(self) -> Result<entity::people::Model, DbErr> {
        entity::people::ActiveModel {
            id: self.id.map(ActiveValue::Set).unwrap_or(ActiveValue::NotSet),
            name: ActiveValue::Set(self.name),
            gender: ActiveValue::Set(self.gender),
            birth_year: ActiveValue::Set(self.birth_year),
            eye_color: ActiveValue::Set(self.eye_color),
            hair_color: ActiveValue::Set(self.hair_color),
            height: ActiveValue::Set(self.height),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values.
pub async fn create_person(db: &DatabaseConnection) -> Result<entity::people::Model, DbErr> {
    PeopleFactory::new(db).build().await
}
