//! Operator session endpoints.

use reqwest::Method;

use super::{AdminApiClient, ClientError};
use crate::auth::{AdminLoginRequest, AdminLoginResponse, AdminSessionResponse};

impl AdminApiClient {
    /// Exchanges operator credentials for a session token.
    pub async fn login(&self, request: &AdminLoginRequest) -> Result<AdminLoginResponse, ClientError> {
        self.execute(self.request(Method::POST, "/admin/auth/login").json(request))
            .await
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        self.execute_unit(self.request(Method::POST, "/admin/auth/logout"))
            .await
    }

    /// Verifies the current token and returns the session it belongs to.
    /// The role embedded here is what every permission check takes as its
    /// explicit argument.
    pub async fn verify_session(&self) -> Result<AdminSessionResponse, ClientError> {
        self.execute(self.request(Method::GET, "/admin/auth/session"))
            .await
    }
}
