use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::MessageDto, planet::PlanetDto},
    server::{
        controller::row_id, error::AppError, service::planet::PlanetService, state::AppState,
    },
};

/// Tag for grouping planet endpoints in OpenAPI documentation
pub static PLANET_TAG: &str = "planet";

/// List every planet.
///
/// # Returns
/// - `200 OK` - Array of planets, empty if none are seeded
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Successfully retrieved planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = PlanetService::new(&state.db);

    let planets: Vec<PlanetDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(|p| p.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(planets)))
}

/// Get a specific planet by ID.
///
/// # Returns
/// - `200 OK` - Planet details
/// - `404 Not Found` - "Planet not found"
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    tag = PLANET_TAG,
    params(
        ("planet_id" = i64, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let service = PlanetService::new(&state.db);

    let planet = match row_id(planet_id) {
        Some(id) => service.get_by_id(id).await?,
        None => None,
    };

    match planet {
        Some(planet) => Ok((StatusCode::OK, Json(planet.into_dto()))),
        None => Err(AppError::NotFound("Planet not found".to_string())),
    }
}
