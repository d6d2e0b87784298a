//! Account types
//!
//! A user is either an NGO (shelter staff who publish listings) or an
//! adopter (browses and applies). The role travels on the wire as the
//! `user_type` string the server expects: `"NGO"` or `"Adopter"`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role. Controls which navigation actions and API operations
/// are available to a signed-in user. Defaults to `Adopter`, the role the
/// sign-up screen starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "NGO")]
    Ngo,
    #[default]
    Adopter,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Ngo => "NGO",
            UserRole::Adopter => "Adopter",
        }
    }

    /// Landing route the server redirects this role to after auth.
    pub fn home_route(&self) -> &'static str {
        match self {
            UserRole::Ngo => "/ngo/dashboard",
            UserRole::Adopter => "/",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A registered account as the server returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(rename = "user_type")]
    pub role: UserRole,
}
