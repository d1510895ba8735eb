//! User management endpoints. Users are addressed by phone number.

use reqwest::Method;
use serde::Deserialize;

use super::{AdminApiClient, ClientError};
use crate::domain::user::{
    BlockUserRequest, GetUserResponse, ListBlockedUsersResponse, UpdateUserRequest,
};

// PATCH /admin/users/{phone} nests its result one level deeper than the
// other user endpoints.
#[derive(Debug, Deserialize)]
struct UpdatedUserEnvelope {
    user: GetUserResponse,
}

impl AdminApiClient {
    pub async fn get_user(&self, phone: &str) -> Result<GetUserResponse, ClientError> {
        self.execute(self.request(Method::GET, &format!("/admin/users/{phone}")))
            .await
    }

    pub async fn update_user(
        &self,
        phone: &str,
        request: &UpdateUserRequest,
    ) -> Result<GetUserResponse, ClientError> {
        let updated: UpdatedUserEnvelope = self
            .execute(
                self.request(Method::PATCH, &format!("/admin/users/{phone}"))
                    .json(request),
            )
            .await?;
        Ok(updated.user)
    }

    pub async fn delete_user(&self, phone: &str) -> Result<(), ClientError> {
        self.execute_unit(self.request(Method::DELETE, &format!("/admin/users/{phone}")))
            .await
    }

    pub async fn block_user(
        &self,
        phone: &str,
        request: &BlockUserRequest,
    ) -> Result<(), ClientError> {
        self.execute_unit(
            self.request(Method::POST, &format!("/admin/users/{phone}/block"))
                .json(request),
        )
        .await
    }

    pub async fn unblock_user(&self, phone: &str) -> Result<(), ClientError> {
        self.execute_unit(self.request(Method::POST, &format!("/admin/users/{phone}/unblock")))
            .await
    }

    pub async fn list_blocked_users(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<ListBlockedUsersResponse, ClientError> {
        self.execute(
            self.request(Method::GET, "/admin/users/blocked")
                .query(&[("page", page), ("limit", limit)]),
        )
        .await
    }
}
