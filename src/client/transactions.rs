//! Transaction and dispute endpoints.

use reqwest::Method;
use serde::Serialize;
use uuid::Uuid;

use super::{AdminApiClient, ClientError};
use crate::dispute::ResolveDisputeRequest;
use crate::domain::transaction::{
    AdminResolveDisputeResponse, ListDisputedTransactionsResponse, MarkResolvedRequest,
    SearchTransactionsResponse,
};

/// Filters for the transaction search screen. At least one of the code or
/// phone filters should be set for the backend to return anything useful.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl AdminApiClient {
    pub async fn search_transactions(
        &self,
        params: &TransactionSearchParams,
    ) -> Result<SearchTransactionsResponse, ClientError> {
        self.execute(
            self.request(Method::GET, "/admin/transactions/search")
                .query(params),
        )
        .await
    }

    pub async fn list_disputed_transactions(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<ListDisputedTransactionsResponse, ClientError> {
        self.execute(
            self.request(Method::GET, "/admin/transactions/disputed")
                .query(&[("page", page), ("limit", limit)]),
        )
        .await
    }

    pub async fn complete_transaction(&self, transaction_id: Uuid) -> Result<(), ClientError> {
        self.execute_unit(
            self.request(Method::PATCH, &format!("/transactions/{transaction_id}/complete")),
        )
        .await
    }

    pub async fn mark_resolved(
        &self,
        transaction_id: Uuid,
        request: &MarkResolvedRequest,
    ) -> Result<(), ClientError> {
        self.execute_unit(
            self.request(
                Method::POST,
                &format!("/transactions/{transaction_id}/mark-resolved"),
            )
            .json(request),
        )
        .await
    }

    /// Submits a resolution decision for a disputed transaction.
    ///
    /// Callers must only pass payloads produced by the dispute validator;
    /// the backend is the sole authority on how much money actually moves.
    /// Rejects on any non-2xx response and never retries.
    pub async fn resolve_dispute(
        &self,
        transaction_id: Uuid,
        request: &ResolveDisputeRequest,
    ) -> Result<AdminResolveDisputeResponse, ClientError> {
        tracing::info!(
            %transaction_id,
            decision = %request.decision,
            "submitting dispute resolution"
        );
        self.execute(
            self.request(
                Method::POST,
                &format!("/admin/transactions/{transaction_id}/resolve-dispute"),
            )
            .json(request),
        )
        .await
    }
}
