//! Marketplace user wire model.

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::kyc::KycStatus;
use super::Pagination;
use crate::utils::amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HeardAboutUs {
    Instagram,
    Youtube,
    Google,
    Friend,
    Linkedin,
    Partner,
    Event,
    Ad,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSellerDetails {
    pub seller_id: Uuid,
    pub business_name: Option<String>,
    pub gst_number: Option<String>,
    pub total_transactions: i64,
    pub average_rating: f64,
    pub total_reviews: i64,
    pub payout_verified: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserKycDetails {
    pub kyc_status: KycStatus,
    pub basic_details_submitted: bool,
    pub pan_verified: bool,
    pub bank_verified: bool,
    pub pan_number: Option<String>,
    pub rejection_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBasicDetails {
    pub business_name: Option<String>,
    pub pan_number: Option<String>,
    pub gstin: Option<String>,
    pub registered_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub contact_person_name: Option<String>,
    pub contact_person_email: Option<String>,
    pub contact_person_phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayoutSummary {
    #[serde(with = "amount")]
    pub total_pending: BigDecimal,
    #[serde(with = "amount")]
    pub total_completed: BigDecimal,
    pub pending_count: i64,
    pub completed_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUserResponse {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub verified: bool,
    pub email_verified: bool,
    pub profile_picture: Option<String>,
    pub heard_about_us: Option<HeardAboutUs>,
    pub is_seller: bool,
    pub is_blocked: bool,
    pub blocked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub seller_details: Option<UserSellerDetails>,
    pub kyc_details: Option<UserKycDetails>,
    pub basic_details: Option<UserBasicDetails>,
    // bank account shapes vary per payout provider; kept opaque
    #[serde(default)]
    pub bank_accounts: Vec<serde_json::Value>,
    pub payout_summary: Option<UserPayoutSummary>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockUserRequest {
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedUserItem {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub blocked_at: DateTime<Utc>,
    pub reason: String,
    pub blocked_by_username: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListBlockedUsersResponse {
    pub users: Vec<BlockedUserItem>,
    pub pagination: Pagination,
}
