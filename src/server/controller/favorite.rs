use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::MessageDto,
    server::{
        controller::row_id,
        error::{favorite::FavoriteError, AppError},
        model::favorite::{CreateFavoriteParam, FavoriteKind, FavoriteTarget},
        service::favorite::FavoriteService,
        state::AppState,
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

/// Add a planet to a user's favorites.
///
/// # Returns
/// - `201 Created` - "Planet added to favorites"
/// - `400 Bad Request` - "Planet is already in favorites"
/// - `404 Not Found` - "User or Planet not found"
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/users/{user_id}/favorites/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i64, Path, description = "User ID"),
        ("planet_id" = i64, Path, description = "Planet ID")
    ),
    responses(
        (status = 201, description = "Planet added to favorites", body = MessageDto),
        (status = 400, description = "Planet is already in favorites", body = MessageDto),
        (status = 404, description = "User or planet not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    add_favorite(&state, user_id, FavoriteKind::Planet, planet_id).await
}

/// Add a character to a user's favorites.
///
/// # Returns
/// - `201 Created` - "Character added to favorites"
/// - `400 Bad Request` - "Character is already in favorites"
/// - `404 Not Found` - "User or Character not found"
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/users/{user_id}/favorites/people/{people_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i64, Path, description = "User ID"),
        ("people_id" = i64, Path, description = "Character ID")
    ),
    responses(
        (status = 201, description = "Character added to favorites", body = MessageDto),
        (status = 400, description = "Character is already in favorites", body = MessageDto),
        (status = 404, description = "User or character not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn add_favorite_people(
    State(state): State<AppState>,
    Path((user_id, people_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    add_favorite(&state, user_id, FavoriteKind::People, people_id).await
}

/// Remove a planet from a user's favorites.
///
/// # Returns
/// - `200 OK` - "Planet removed from favorites"
/// - `404 Not Found` - "Favorite not found"
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/users/{user_id}/favorites/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i64, Path, description = "User ID"),
        ("planet_id" = i64, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Planet removed from favorites", body = MessageDto),
        (status = 404, description = "Favorite not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    remove_favorite(&state, user_id, FavoriteKind::Planet, planet_id).await
}

/// Remove a character from a user's favorites.
///
/// # Returns
/// - `200 OK` - "Character removed from favorites"
/// - `404 Not Found` - "Favorite not found"
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/users/{user_id}/favorites/people/{people_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i64, Path, description = "User ID"),
        ("people_id" = i64, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Character removed from favorites", body = MessageDto),
        (status = 404, description = "Favorite not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn remove_favorite_people(
    State(state): State<AppState>,
    Path((user_id, people_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    remove_favorite(&state, user_id, FavoriteKind::People, people_id).await
}

async fn add_favorite(
    state: &AppState,
    user_id: i64,
    kind: FavoriteKind,
    target_id: i64,
) -> Result<(StatusCode, Json<MessageDto>), AppError> {
    // Out-of-range ids cannot reference an existing user or target
    let (Some(user_id), Some(target_id)) = (row_id(user_id), row_id(target_id)) else {
        return Err(FavoriteError::OwnerOrTargetNotFound(kind).into());
    };

    let service = FavoriteService::new(&state.db);

    service
        .add(CreateFavoriteParam {
            user_id,
            target: FavoriteTarget::new(kind, target_id),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(confirmation(kind, "added to"))))
}

async fn remove_favorite(
    state: &AppState,
    user_id: i64,
    kind: FavoriteKind,
    target_id: i64,
) -> Result<(StatusCode, Json<MessageDto>), AppError> {
    let (Some(user_id), Some(target_id)) = (row_id(user_id), row_id(target_id)) else {
        return Err(FavoriteError::NotFound.into());
    };

    let service = FavoriteService::new(&state.db);

    service
        .remove(user_id, FavoriteTarget::new(kind, target_id))
        .await?;

    Ok((StatusCode::OK, Json(confirmation(kind, "removed from"))))
}

/// e.g. "Character added to favorites"
fn confirmation(kind: FavoriteKind, action: &str) -> MessageDto {
    MessageDto::new(format!("{} {} favorites", kind, action))
}
