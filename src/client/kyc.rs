//! Seller KYC review endpoints.

use reqwest::Method;
use uuid::Uuid;

use super::{AdminApiClient, ClientError};
use crate::domain::kyc::{
    KycStatus, ListPendingKycResponse, RejectKycRequest, UpdateSellerKycRequest,
};

impl AdminApiClient {
    pub async fn list_pending_kyc(
        &self,
        page: u32,
        limit: u32,
        status: Option<KycStatus>,
    ) -> Result<ListPendingKycResponse, ClientError> {
        let mut query: Vec<(&str, String)> = vec![
            ("page", page.to_string()),
            ("limit", limit.to_string()),
        ];
        if let Some(status) = status {
            query.push(("status", status.as_str().to_string()));
        }
        self.execute(
            self.request(Method::GET, "/admin/sellers/pending-kyc")
                .query(&query),
        )
        .await
    }

    pub async fn update_seller_kyc(
        &self,
        seller_id: Uuid,
        request: &UpdateSellerKycRequest,
    ) -> Result<(), ClientError> {
        self.execute_unit(
            self.request(Method::PATCH, &format!("/admin/sellers/{seller_id}/kyc"))
                .json(request),
        )
        .await
    }

    pub async fn approve_kyc(&self, seller_id: Uuid) -> Result<(), ClientError> {
        self.execute_unit(
            self.request(Method::POST, &format!("/admin/sellers/{seller_id}/kyc/approve")),
        )
        .await
    }

    pub async fn reject_kyc(
        &self,
        seller_id: Uuid,
        request: &RejectKycRequest,
    ) -> Result<(), ClientError> {
        self.execute_unit(
            self.request(Method::POST, &format!("/admin/sellers/{seller_id}/kyc/reject"))
                .json(request),
        )
        .await
    }
}
