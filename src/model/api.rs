use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every confirmation and error response: `{"message": "..."}`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One registered route in the sitemap listing.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RouteDto {
    pub method: String,
    pub path: String,
}

/// Listing of every registered API route, served at `/`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SitemapDto {
    pub routes: Vec<RouteDto>,
}
