//! Seller KYC wire model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Pagination;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KycStatus {
    NotStarted,
    Pending,
    UnderReview,
    Approved,
    Rejected,
}

impl KycStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            KycStatus::NotStarted => "NOT_STARTED",
            KycStatus::Pending => "PENDING",
            KycStatus::UnderReview => "UNDER_REVIEW",
            KycStatus::Approved => "APPROVED",
            KycStatus::Rejected => "REJECTED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    Pending,
    Verified,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusinessType {
    Individual,
    Partnership,
    PrivateLimited,
    Llp,
    PublicLimited,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingKycSellerUser {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingKycSellerKyc {
    pub kyc_status: KycStatus,
    pub basic_details_submitted: bool,
    pub pan_verified: bool,
    pub bank_verified: bool,
    pub rejection_reason: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingKycSellerBasicDetails {
    pub business_name: Option<String>,
    pub business_type: Option<BusinessType>,
    pub pan_number: Option<String>,
    pub gstin: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub contact_person_name: Option<String>,
    pub contact_person_email: Option<String>,
    pub contact_person_phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingKycSellerItem {
    pub seller_id: Uuid,
    pub user: PendingKycSellerUser,
    pub kyc: PendingKycSellerKyc,
    pub basic_details: Option<PendingKycSellerBasicDetails>,
    pub total_transactions: i64,
    pub average_rating: f64,
    pub total_reviews: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPendingKycResponse {
    pub sellers: Vec<PendingKycSellerItem>,
    pub pagination: Pagination,
}

/// Full KYC record for one seller, as rendered in the review drawer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycDetailsResponse {
    pub seller_id: Uuid,
    pub kyc_status: KycStatus,
    pub completion_percentage: f64,
    pub business_name: Option<String>,
    pub business_type: Option<BusinessType>,
    pub pan_number: Option<String>,
    pub pan_verification_status: VerificationStatus,
    pub name_on_pan: Option<String>,
    pub gstin: Option<String>,
    pub registered_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub contact_person_name: Option<String>,
    pub contact_person_email: Option<String>,
    pub contact_person_phone: Option<String>,
    pub bank_account_number: Option<String>,
    pub bank_ifsc_code: Option<String>,
    pub bank_name: Option<String>,
    pub bank_account_holder_name: Option<String>,
    pub bank_verification_status: VerificationStatus,
    pub rejection_reason: Option<String>,
    pub rejected_at: Option<DateTime<Utc>>,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSellerKycRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gstin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ifsc_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectKycRequest {
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kyc_status_uses_wire_names() {
        assert_eq!(
            serde_json::to_string(&KycStatus::UnderReview).unwrap(),
            "\"UNDER_REVIEW\""
        );
        assert_eq!(KycStatus::NotStarted.as_str(), "NOT_STARTED");
    }

    #[test]
    fn business_type_llp_round_trips() {
        let parsed: BusinessType = serde_json::from_str("\"LLP\"").unwrap();
        assert_eq!(parsed, BusinessType::Llp);
    }

    #[test]
    fn update_request_omits_unset_fields() {
        let request = UpdateSellerKycRequest {
            city: Some("Pune".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"city": "Pune"})
        );
    }
}
