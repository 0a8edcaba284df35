use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, Extension, Json};
use utoipa::openapi::OpenApi;

use crate::model::api::{RouteDto, SitemapDto};

/// Builds the route listing from the router's OpenAPI document.
///
/// Routes are sorted by path (then method) since the document keys paths in a `BTreeMap`.
pub fn build_sitemap(openapi: &OpenApi) -> SitemapDto {
    let mut routes = Vec::new();

    for (path, item) in &openapi.paths.paths {
        let methods = [
            ("GET", item.get.is_some()),
            ("POST", item.post.is_some()),
            ("PUT", item.put.is_some()),
            ("PATCH", item.patch.is_some()),
            ("DELETE", item.delete.is_some()),
        ];

        routes.extend(
            methods
                .into_iter()
                .filter(|(_, registered)| *registered)
                .map(|(method, _)| RouteDto {
                    method: method.to_string(),
                    path: path.clone(),
                }),
        );
    }

    SitemapDto { routes }
}

/// GET / - List every registered API route.
///
/// Debugging aid; the listing is built once at startup.
pub async fn get_sitemap(Extension(sitemap): Extension<Arc<SitemapDto>>) -> impl IntoResponse {
    (StatusCode::OK, Json(sitemap.as_ref().clone()))
}

/// GET /api-docs/openapi.json - Serve the generated OpenAPI document.
pub async fn get_openapi(Extension(openapi): Extension<Arc<OpenApi>>) -> impl IntoResponse {
    (StatusCode::OK, Json(openapi.as_ref().clone()))
}
