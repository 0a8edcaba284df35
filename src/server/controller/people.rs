use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::MessageDto, people::PersonDto},
    server::{
        controller::row_id, error::AppError, service::people::PeopleService, state::AppState,
    },
};

/// Tag for grouping character endpoints in OpenAPI documentation
pub static PEOPLE_TAG: &str = "people";

/// List every character.
///
/// # Returns
/// - `200 OK` - Array of characters, empty if none are seeded
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved characters", body = Vec<PersonDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_people(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = PeopleService::new(&state.db);

    let people: Vec<PersonDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(|p| p.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(people)))
}

/// Get a specific character by ID.
///
/// # Returns
/// - `200 OK` - Character details
/// - `404 Not Found` - "Character not found"
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/people/{people_id}",
    tag = PEOPLE_TAG,
    params(
        ("people_id" = i64, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved character", body = PersonDto),
        (status = 404, description = "Character not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(people_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let service = PeopleService::new(&state.db);

    let person = match row_id(people_id) {
        Some(id) => service.get_by_id(id).await?,
        None => None,
    };

    let person = person.ok_or_else(|| AppError::NotFound("Character not found".to_string()))?;

    Ok((StatusCode::OK, Json(person.into_dto())))
}
