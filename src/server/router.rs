use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::Layer;
use tower_http::{
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{favorite, people, planet, sitemap, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Holocron",
        description = "Star Wars catalog with per-user favorite planets and characters"
    ),
    tags(
        (name = "planet", description = "Planet catalog"),
        (name = "people", description = "Character catalog"),
        (name = "user", description = "Users and their favorites"),
        (name = "favorite", description = "Adding and removing favorites")
    )
)]
struct ApiDoc;

/// Registers every documented API route.
///
/// Returns the router together with the OpenAPI document generated from the handler
/// annotations.
pub fn api_router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(planet::get_planets))
        .routes(routes!(planet::get_planet))
        .routes(routes!(people::get_people))
        .routes(routes!(people::get_person))
        .routes(routes!(user::get_users))
        .routes(routes!(user::get_user_favorites))
        .routes(routes!(
            favorite::add_favorite_planet,
            favorite::remove_favorite_planet
        ))
        .routes(routes!(
            favorite::add_favorite_people,
            favorite::remove_favorite_people
        ))
        .split_for_parts()
}

/// Builds the complete application router with state, sitemap and request tracing.
pub fn router(state: AppState) -> Router {
    let (api, openapi) = api_router();
    let sitemap = Arc::new(sitemap::build_sitemap(&openapi));

    api.route("/", get(sitemap::get_sitemap))
        .route("/api-docs/openapi.json", get(sitemap::get_openapi))
        .layer(Extension(sitemap))
        .layer(Extension(Arc::new(openapi)))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Wraps the router so that trailing slashes are ignored.
///
/// Normalization has to run before routing, so it wraps the router as a service instead
/// of being added with `Router::layer`.
pub fn app(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
