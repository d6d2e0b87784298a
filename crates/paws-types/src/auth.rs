//! Authentication request/response bodies

use crate::user::{User, UserRole};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/signup`. `name` holds the personal name for an
/// adopter account and the organization name for an NGO account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(rename = "user_type")]
    pub role: UserRole,
}

/// Returned by both auth endpoints. `redirect_url` is the server's
/// choice of landing route for the signed-in role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
    pub redirect_url: String,
}

/// Body of the liveness probe at `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}
