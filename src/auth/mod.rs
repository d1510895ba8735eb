//! Operator identity and session model.
//!
//! Role data arrives embedded in the session object returned at login or
//! session-verify time; permission checks always take the role as an
//! explicit argument rather than reading ambient session state.

pub mod permissions;

pub use permissions::{can_access_route, has_permission, role_permissions, AdminRole, Permission};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated dashboard operator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: Uuid,
    pub username: String,
    pub role: AdminRole,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLoginResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub admin: AdminUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSessionResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<AdminUser>,
}

impl AdminSessionResponse {
    /// Role carried by the session, if it is valid. Feeds straight into
    /// [`has_permission`] / [`can_access_route`].
    pub fn role(&self) -> Option<AdminRole> {
        if !self.valid {
            return None;
        }
        self.admin.as_ref().map(|admin| admin.role)
    }
}
