use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct GetGpaRequest {
    #[schema(example = "FA21-BCE-123")]
    #[serde(default)]
    pub roll_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GpaSuccessResponse {
    #[schema(example = true)]
    pub success: bool,
    /// Base64 encoded JPEG.
    #[schema(example = "/9j/4AAQSkZJRgABAQ...")]
    pub image: String,
    #[schema(example = "FA21-BCE-123")]
    pub roll_number: String,
}
