//! Dispute settlement decisions for escrowed transactions.
//!
//! A disputed transaction is settled by an operator choosing one of three
//! outcomes: refund the buyer in full, pay out the seller in full, or split
//! the escrowed amount between both. This module holds the decision model,
//! the exact payload the backend expects, and the UI-local form state that
//! gates submission.

pub mod validation;

pub use validation::{build_resolution_request, ResolutionError};

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::amount;

/// Settlement outcome chosen by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisputeDecision {
    Refund,
    Payout,
    Split,
}

impl DisputeDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisputeDecision::Refund => "REFUND",
            DisputeDecision::Payout => "PAYOUT",
            DisputeDecision::Split => "SPLIT",
        }
    }
}

impl fmt::Display for DisputeDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisputeDecision {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "refund" => Ok(DisputeDecision::Refund),
            "payout" => Ok(DisputeDecision::Payout),
            "split" => Ok(DisputeDecision::Split),
            other => Err(format!(
                "unknown decision '{other}', expected refund, payout or split"
            )),
        }
    }
}

/// Payload for the resolve-dispute call.
///
/// Amount fields are present only for SPLIT. For REFUND and PAYOUT the
/// backend applies the full escrowed amount to the respective party; this
/// client only gates the request and never computes money movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveDisputeRequest {
    pub decision: DisputeDecision,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ResolveDisputeRequest {
    pub fn refund(notes: Option<String>) -> Self {
        Self {
            decision: DisputeDecision::Refund,
            buyer_refund_amount: None,
            seller_payout_amount: None,
            notes,
        }
    }

    pub fn payout(notes: Option<String>) -> Self {
        Self {
            decision: DisputeDecision::Payout,
            buyer_refund_amount: None,
            seller_payout_amount: None,
            notes,
        }
    }

    pub fn split(buyer_refund: BigDecimal, seller_payout: BigDecimal, notes: Option<String>) -> Self {
        Self {
            decision: DisputeDecision::Split,
            buyer_refund_amount: Some(buyer_refund),
            seller_payout_amount: Some(seller_payout),
            notes,
        }
    }
}

/// Longest resolution note the backend accepts.
pub const NOTES_MAX_LEN: usize = 500;

/// UI-local state for the resolve-dispute surface.
///
/// Selecting a decision clears the validation error; amount inputs stay as
/// entered through failed submissions so the operator can correct and retry.
/// While a submission is in flight further submits are refused: the
/// resolve endpoint has no idempotency key, so this flag is the only
/// defense against a double-submit.
#[derive(Debug, Clone)]
pub struct ResolutionForm {
    decision: DisputeDecision,
    buyer_refund_amount: String,
    seller_payout_amount: String,
    notes: String,
    error: Option<ResolutionError>,
    submitting: bool,
}

impl Default for ResolutionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionForm {
    pub fn new() -> Self {
        Self {
            decision: DisputeDecision::Refund,
            buyer_refund_amount: String::new(),
            seller_payout_amount: String::new(),
            notes: String::new(),
            error: None,
            submitting: false,
        }
    }

    pub fn decision(&self) -> DisputeDecision {
        self.decision
    }

    pub fn buyer_refund_amount(&self) -> &str {
        &self.buyer_refund_amount
    }

    pub fn seller_payout_amount(&self) -> &str {
        &self.seller_payout_amount
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn error(&self) -> Option<&ResolutionError> {
        self.error.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn select_decision(&mut self, decision: DisputeDecision) {
        self.decision = decision;
        self.error = None;
    }

    pub fn set_buyer_refund_amount(&mut self, value: impl Into<String>) {
        self.buyer_refund_amount = value.into();
    }

    pub fn set_seller_payout_amount(&mut self, value: impl Into<String>) {
        self.seller_payout_amount = value.into();
    }

    pub fn set_notes(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.notes = if value.chars().count() > NOTES_MAX_LEN {
            value.chars().take(NOTES_MAX_LEN).collect()
        } else {
            value
        };
    }

    /// Validates the current inputs against the escrowed amount.
    ///
    /// On success returns the payload to submit and marks the form in
    /// flight; further calls yield `None` until [`finish_submit`] runs. On
    /// validation failure the error is stored for display and nothing is
    /// returned.
    ///
    /// [`finish_submit`]: ResolutionForm::finish_submit
    pub fn begin_submit(&mut self, transaction_amount: &BigDecimal) -> Option<ResolveDisputeRequest> {
        if self.submitting {
            return None;
        }

        let notes = match self.notes.trim() {
            "" => None,
            trimmed => Some(trimmed.to_string()),
        };

        match build_resolution_request(
            self.decision,
            &self.buyer_refund_amount,
            &self.seller_payout_amount,
            notes,
            transaction_amount,
        ) {
            Ok(request) => {
                self.error = None;
                self.submitting = true;
                Some(request)
            }
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }

    /// Ends the in-flight submission, success or failure. Entered amounts
    /// and notes survive so a transport failure can be retried as-is.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }
}
