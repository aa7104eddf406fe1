//! DTOs for the mapping mutation endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /urls` and `PUT /urls`.
///
/// `path` may be given with or without a leading `/`. `url` is stored
/// verbatim; only its length is checked.
#[derive(Debug, Deserialize, Validate)]
pub struct MappingRequest {
    #[validate(length(min = 1, max = 2048))]
    pub path: String,

    #[validate(length(min = 1, max = 8192))]
    pub url: String,
}

/// Success envelope for mutation endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub const CREATED: Self = Self {
        message: "successfully created",
    };
    pub const UPDATED: Self = Self {
        message: "successfully updated",
    };
}
