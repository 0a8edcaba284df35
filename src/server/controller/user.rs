use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::MessageDto, favorite::FavoriteDto, user::UserDto},
    server::{
        controller::row_id, error::AppError, service::user::UserService, state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// GET /users - List every user
///
/// Passwords are never included in the response.
///
/// # Returns
/// - `200 OK`: JSON array of UserDto
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(&state.db);

    let users: Vec<UserDto> = user_service
        .get_all()
        .await?
        .into_iter()
        .map(|u| u.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(users)))
}

/// GET /users/{user_id}/favorites - List a user's favorites
///
/// # Path Parameters
/// - `user_id`: ID of the user
///
/// # Returns
/// - `200 OK`: JSON array of FavoriteDto (empty if the user has none)
/// - `404 Not Found`: "User not found"
/// - `500 Internal Server Error`: Database error or malformed favorite row
#[utoipa::path(
    get,
    path = "/users/{user_id}/favorites",
    tag = USER_TAG,
    params(
        ("user_id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved favorites", body = Vec<FavoriteDto>),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(&state.db);

    let favorites = match row_id(user_id) {
        Some(id) => user_service.get_favorites(id).await?,
        None => None,
    };

    let favorites = favorites.ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let favorites_dto: Vec<FavoriteDto> = favorites.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(favorites_dto)))
}
