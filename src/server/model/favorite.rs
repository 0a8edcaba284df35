//! Favorite domain models and parameters.
//!
//! A favorite links a user to exactly one planet or one character. The schema stores this
//! as two nullable columns; the domain model stores it as a `FavoriteTarget`, so a favorite
//! referencing both or neither cannot be constructed by the application.

use std::fmt;

use crate::{model::favorite::FavoriteDto, server::error::internal::InternalError};

/// Which catalog a favorite points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteKind {
    Planet,
    People,
}

impl FavoriteKind {
    /// Human-readable name used in API messages.
    ///
    /// People are called "Character" in every message.
    pub fn label(self) -> &'static str {
        match self {
            Self::Planet => "Planet",
            Self::People => "Character",
        }
    }
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The planet or character a favorite refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(i32),
    People(i32),
}

impl FavoriteTarget {
    /// Builds a target of the given kind.
    pub fn new(kind: FavoriteKind, id: i32) -> Self {
        match kind {
            FavoriteKind::Planet => Self::Planet(id),
            FavoriteKind::People => Self::People(id),
        }
    }

    pub fn kind(self) -> FavoriteKind {
        match self {
            Self::Planet(_) => FavoriteKind::Planet,
            Self::People(_) => FavoriteKind::People,
        }
    }

    /// Value for the `planet_id` column.
    pub fn planet_id(self) -> Option<i32> {
        match self {
            Self::Planet(id) => Some(id),
            Self::People(_) => None,
        }
    }

    /// Value for the `people_id` column.
    pub fn people_id(self) -> Option<i32> {
        match self {
            Self::People(id) => Some(id),
            Self::Planet(_) => None,
        }
    }
}

/// A user's favorite planet or character.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub target: FavoriteTarget,
}

impl Favorite {
    /// Converts an entity model to a favorite domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Favorite)` - Row references exactly one target
    /// - `Err(InternalError::MalformedFavorite)` - Row references both targets or neither
    pub fn from_entity(entity: entity::favorites::Model) -> Result<Self, InternalError> {
        let target = match (entity.planet_id, entity.people_id) {
            (Some(planet_id), None) => FavoriteTarget::Planet(planet_id),
            (None, Some(people_id)) => FavoriteTarget::People(people_id),
            (planet_id, people_id) => {
                return Err(InternalError::MalformedFavorite {
                    id: entity.id,
                    planet_id,
                    people_id,
                })
            }
        };

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            target,
        })
    }

    /// Converts the favorite domain model to a DTO for API responses.
    ///
    /// The reference that is not set serializes as `null`.
    pub fn into_dto(self) -> FavoriteDto {
        FavoriteDto {
            id: self.id,
            user_id: self.user_id,
            planet_id: self.target.planet_id(),
            people_id: self.target.people_id(),
        }
    }
}

/// Parameters for adding a favorite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreateFavoriteParam {
    /// Owner of the new favorite
    pub user_id: i32,
    /// Planet or character being favorited
    pub target: FavoriteTarget,
}
