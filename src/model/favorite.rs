use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user's favorite. Exactly one of `planet_id` / `people_id` is non-null.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub people_id: Option<i32>,
}
