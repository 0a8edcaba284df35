use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user. The stored password is never serialized.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}
