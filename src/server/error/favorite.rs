use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::MessageDto, server::model::favorite::FavoriteKind};

#[derive(Error, Debug, PartialEq)]
pub enum FavoriteError {
    /// The user or the planet/character to favorite does not exist.
    ///
    /// Results in a 404 Not Found response.
    #[error("User or {0} not found")]
    OwnerOrTargetNotFound(FavoriteKind),

    /// The user already has this planet/character in their favorites.
    ///
    /// Results in a 400 Bad Request response.
    #[error("{0} is already in favorites")]
    AlreadyFavorited(FavoriteKind),

    /// No favorite links the user to the requested planet/character.
    ///
    /// Results in a 404 Not Found response.
    #[error("Favorite not found")]
    NotFound,
}

/// Converts favorite errors into HTTP responses.
///
/// The error's display text is returned verbatim as the `message` body, e.g.
/// `{"message": "Character is already in favorites"}`.
///
/// # Returns
/// - 400 Bad Request - For `AlreadyFavorited`
/// - 404 Not Found - For `OwnerOrTargetNotFound` and `NotFound`
impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::AlreadyFavorited(_) => StatusCode::BAD_REQUEST,
            Self::OwnerOrTargetNotFound(_) | Self::NotFound => StatusCode::NOT_FOUND,
        };

        (status, Json(MessageDto::new(self.to_string()))).into_response()
    }
}
