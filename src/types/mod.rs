use serde::{Deserialize, Serialize};

use crate::models::ItemId;

/// Login request payload
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub username: Option<String>,
}

/// Token validation response
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidateResponse {
    #[serde(default)]
    pub username: Option<String>,
}

/// Error body returned by the auth endpoints
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AuthFailure {
    #[serde(default)]
    pub message: Option<String>,
}

/// Contact form submission
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// One entry of a gallery reorder batch
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReorderEntry {
    pub id: ItemId,
    pub sort_order: i64,
}
