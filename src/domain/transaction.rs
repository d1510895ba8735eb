//! Transaction and dispute wire model.

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Pagination;
use crate::dispute::DisputeDecision;
use crate::utils::amount;

/// Lifecycle states a transaction can report. A dispute enters at DISPUTED
/// and leaves through REFUNDED, COMPLETED or SPLIT_SETTLED once an operator
/// submits a resolution decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Created,
    Joined,
    PendingPayment,
    Paid,
    Dispatched,
    Disputed,
    Resolved,
    Completed,
    ReadyForPayout,
    PayoutInitiated,
    Fulfilled,
    Refunded,
    Cancelled,
    SplitSettled,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Created => "CREATED",
            TransactionStatus::Joined => "JOINED",
            TransactionStatus::PendingPayment => "PENDING_PAYMENT",
            TransactionStatus::Paid => "PAID",
            TransactionStatus::Dispatched => "DISPATCHED",
            TransactionStatus::Disputed => "DISPUTED",
            TransactionStatus::Resolved => "RESOLVED",
            TransactionStatus::Completed => "COMPLETED",
            TransactionStatus::ReadyForPayout => "READY_FOR_PAYOUT",
            TransactionStatus::PayoutInitiated => "PAYOUT_INITIATED",
            TransactionStatus::Fulfilled => "FULFILLED",
            TransactionStatus::Refunded => "REFUNDED",
            TransactionStatus::Cancelled => "CANCELLED",
            TransactionStatus::SplitSettled => "SPLIT_SETTLED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OwnerType {
    Buyer,
    Seller,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryMethod {
    Courier,
    LocalPickupDrop,
    InPersonHandover,
    DigitalDelivery,
    ServiceCompletion,
    // legacy values still present on older transactions
    Pickup,
    Digital,
    InPerson,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionParty {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub profile_picture: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSearchResult {
    pub id: Uuid,
    pub txn_code: String,
    pub title: String,
    /// Escrowed deal amount.
    #[serde(with = "amount")]
    pub amount: BigDecimal,
    pub description: Option<String>,
    pub status: TransactionStatus,
    pub owner_type: OwnerType,
    pub delivery_method: Option<DeliveryMethod>,
    pub tracking_link: Option<String>,
    pub chat_link: Option<String>,
    pub buyer: Option<TransactionParty>,
    pub seller: Option<TransactionParty>,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub last_updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTransactionsResponse {
    pub transactions: Vec<TransactionSearchResult>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisputeAttachment {
    pub url: String,
    pub name: String,
    #[serde(rename = "type")]
    pub content_type: String,
}

/// A transaction currently under dispute: the search shape plus the dispute
/// metadata the operator adjudicates on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisputedTransaction {
    #[serde(flatten)]
    pub transaction: TransactionSearchResult,
    pub dispute_reason: Option<String>,
    pub dispute_description: Option<String>,
    pub dispute_attachments: Option<Vec<DisputeAttachment>>,
    pub disputed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListDisputedTransactionsResponse {
    pub transactions: Vec<DisputedTransaction>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkResolvedRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution_notes: Option<String>,
}

/// Backend acknowledgement of a resolution decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminResolveDisputeResponse {
    pub message: String,
    pub transaction_id: Uuid,
    pub decision: DisputeDecision,
    pub status: TransactionStatus,
    #[serde(
        default,
        with = "amount::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub buyer_refund_amount: Option<BigDecimal>,
    #[serde(
        default,
        with = "amount::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub seller_payout_amount: Option<BigDecimal>,
    pub resolved_at: DateTime<Utc>,
}

/// Human-readable label for a dispute reason code. Unknown codes fall back
/// to title-casing the raw value.
pub fn dispute_reason_label(reason: Option<&str>) -> String {
    let Some(reason) = reason else {
        return "-".to_string();
    };
    match reason {
        "ITEM_NOT_RECEIVED" => "Item Not Received".to_string(),
        "ITEM_NOT_AS_DESCRIBED" => "Item Not As Described".to_string(),
        "DAMAGED_ITEM" => "Damaged Item".to_string(),
        "WRONG_ITEM" => "Wrong Item".to_string(),
        "PAYMENT_ISSUE" => "Payment Issue".to_string(),
        "OTHER" => "Other".to_string(),
        other => other
            .split('_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let lower = word.to_lowercase();
                let mut chars = lower.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    fn sample_disputed() -> serde_json::Value {
        json!({
            "id": "a81c7cb0-40a8-4a2d-8e5f-7a3f0c2d9b11",
            "txnCode": "TXN-88412",
            "title": "Refurbished DSLR body",
            "amount": 1000.00,
            "status": "DISPUTED",
            "ownerType": "SELLER",
            "deliveryMethod": "COURIER",
            "createdAt": "2025-12-01T09:00:00Z",
            "lastUpdatedAt": "2025-12-08T17:45:00Z",
            "disputeReason": "ITEM_NOT_AS_DESCRIBED",
            "disputeDescription": "Shutter count far above the listing",
            "disputeAttachments": [
                {"url": "https://cdn.example.test/evidence/1.pdf", "name": "report.pdf", "type": "application/pdf"}
            ],
            "disputedAt": "2025-12-08T17:45:00Z"
        })
    }

    #[test]
    fn disputed_transaction_flattens_the_search_shape() {
        let disputed: DisputedTransaction = serde_json::from_value(sample_disputed()).unwrap();
        assert_eq!(disputed.transaction.txn_code, "TXN-88412");
        assert_eq!(disputed.transaction.status, TransactionStatus::Disputed);
        assert_eq!(
            disputed.transaction.amount,
            BigDecimal::from_str("1000").unwrap()
        );
        assert_eq!(disputed.dispute_reason.as_deref(), Some("ITEM_NOT_AS_DESCRIBED"));
        assert_eq!(
            disputed.dispute_attachments.unwrap()[0].content_type,
            "application/pdf"
        );
    }

    #[test]
    fn statuses_use_wire_names() {
        assert_eq!(
            serde_json::to_string(&TransactionStatus::SplitSettled).unwrap(),
            "\"SPLIT_SETTLED\""
        );
        assert_eq!(
            serde_json::from_str::<TransactionStatus>("\"READY_FOR_PAYOUT\"").unwrap(),
            TransactionStatus::ReadyForPayout
        );
    }

    #[test]
    fn legacy_delivery_methods_still_parse() {
        assert_eq!(
            serde_json::from_str::<DeliveryMethod>("\"PICKUP\"").unwrap(),
            DeliveryMethod::Pickup
        );
        assert_eq!(
            serde_json::from_str::<DeliveryMethod>("\"LOCAL_PICKUP_DROP\"").unwrap(),
            DeliveryMethod::LocalPickupDrop
        );
    }

    #[test]
    fn dispute_reason_labels_cover_known_codes_and_fall_back() {
        assert_eq!(dispute_reason_label(Some("ITEM_NOT_RECEIVED")), "Item Not Received");
        assert_eq!(dispute_reason_label(Some("COURIER_LOST_PARCEL")), "Courier Lost Parcel");
        assert_eq!(dispute_reason_label(None), "-");
    }

    #[test]
    fn resolve_response_parses_split_settlement() {
        let raw = json!({
            "message": "Dispute resolved",
            "transactionId": "a81c7cb0-40a8-4a2d-8e5f-7a3f0c2d9b11",
            "decision": "SPLIT",
            "status": "SPLIT_SETTLED",
            "buyerRefundAmount": 600,
            "sellerPayoutAmount": 400,
            "resolvedAt": "2025-12-09T10:00:00Z"
        });
        let response: AdminResolveDisputeResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.decision, DisputeDecision::Split);
        assert_eq!(response.status, TransactionStatus::SplitSettled);
        assert_eq!(response.buyer_refund_amount, Some(BigDecimal::from(600)));
    }
}
