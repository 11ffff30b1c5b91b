//! HTTP DTOs for login/logout.

use serde::{Deserialize, Serialize};

use crate::ports::LoginResult;

/// Request to log in (and implicitly register).
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub contact_info: String,
}

/// The caller's own user record, including contact details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub display_name: String,
    pub contact_info: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: CurrentUserResponse,
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            token: result.token.as_str().to_string(),
            user: CurrentUserResponse {
                id: result.user.id().to_string(),
                display_name: result.user.display_name().to_string(),
                contact_info: result.user.contact_info().to_string(),
            },
        }
    }
}
