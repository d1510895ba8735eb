//! Validation for settlement decisions on disputed escrow transactions.

use bigdecimal::BigDecimal;
use std::str::FromStr;
use thiserror::Error;

use super::{DisputeDecision, ResolveDisputeRequest};

/// Reasons a resolution decision is rejected before it reaches the backend.
/// Every variant carries a distinct operator-facing message; none of these
/// ever produce request traffic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolutionError {
    #[error("invalid buyer refund amount")]
    InvalidBuyerRefund,

    #[error("invalid seller payout amount")]
    InvalidSellerPayout,

    #[error("split total exceeds escrowed amount of {0}")]
    ExceedsEscrowedAmount(BigDecimal),

    #[error("at least one amount must be positive")]
    NoPositiveAmount,
}

/// Parses an operator-entered amount. Anything that is not a plain
/// non-negative decimal is rejected; there is no JS-style prefix parsing.
fn parse_amount(raw: &str) -> Option<BigDecimal> {
    let value = BigDecimal::from_str(raw.trim()).ok()?;
    if value < BigDecimal::from(0) {
        return None;
    }
    Some(value)
}

/// Builds the resolve-dispute payload for the chosen decision.
///
/// REFUND and PAYOUT are always valid and ignore the amount inputs entirely,
/// stale or not; the backend settles the full escrowed amount for those.
/// SPLIT parses both amounts, bounds their sum by the escrowed total
/// (equality allowed) and requires at least one of them to be positive.
pub fn build_resolution_request(
    decision: DisputeDecision,
    buyer_refund: &str,
    seller_payout: &str,
    notes: Option<String>,
    transaction_amount: &BigDecimal,
) -> Result<ResolveDisputeRequest, ResolutionError> {
    match decision {
        DisputeDecision::Refund => Ok(ResolveDisputeRequest::refund(notes)),
        DisputeDecision::Payout => Ok(ResolveDisputeRequest::payout(notes)),
        DisputeDecision::Split => {
            let buyer = parse_amount(buyer_refund).ok_or(ResolutionError::InvalidBuyerRefund)?;
            let seller = parse_amount(seller_payout).ok_or(ResolutionError::InvalidSellerPayout)?;

            let total = &buyer + &seller;
            if total > *transaction_amount {
                return Err(ResolutionError::ExceedsEscrowedAmount(
                    transaction_amount.clone(),
                ));
            }

            let zero = BigDecimal::from(0);
            if buyer == zero && seller == zero {
                return Err(ResolutionError::NoPositiveAmount);
            }

            Ok(ResolveDisputeRequest::split(buyer, seller, notes))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(raw: &str) -> BigDecimal {
        BigDecimal::from_str(raw).unwrap()
    }

    fn split(buyer: &str, seller: &str, total: &str) -> Result<ResolveDisputeRequest, ResolutionError> {
        build_resolution_request(DisputeDecision::Split, buyer, seller, None, &amount(total))
    }

    #[test]
    fn accepts_split_within_the_escrowed_amount() {
        let request = split("600", "400", "1000.00").unwrap();
        assert_eq!(request.decision, DisputeDecision::Split);
        assert_eq!(request.buyer_refund_amount, Some(amount("600")));
        assert_eq!(request.seller_payout_amount, Some(amount("400")));
        assert_eq!(request.notes, None);
    }

    #[test]
    fn equality_with_the_escrowed_amount_is_allowed() {
        assert!(split("999.99", "0.01", "1000.00").is_ok());
        assert!(split("1000.00", "0", "1000.00").is_ok());
    }

    #[test]
    fn one_cent_over_the_escrowed_amount_is_rejected() {
        let err = split("700", "300.01", "1000.00").unwrap_err();
        assert_eq!(err, ResolutionError::ExceedsEscrowedAmount(amount("1000.00")));
        assert!(err.to_string().contains("1000.00"));
        assert!(err.to_string().contains("exceeds escrowed amount"));
    }

    #[test]
    fn seven_hundred_plus_four_hundred_exceeds_a_thousand() {
        let err = split("700", "400", "1000.00").unwrap_err();
        assert!(err.to_string().contains("1000.00"));
    }

    #[test]
    fn both_amounts_zero_is_rejected_regardless_of_total() {
        assert_eq!(split("0", "0", "1000.00").unwrap_err(), ResolutionError::NoPositiveAmount);
        assert_eq!(split("0", "0", "0").unwrap_err(), ResolutionError::NoPositiveAmount);
        assert_eq!(split("0.00", "0", "5").unwrap_err(), ResolutionError::NoPositiveAmount);
    }

    #[test]
    fn buyer_amount_failures_are_field_specific() {
        assert_eq!(split("abc", "400", "1000").unwrap_err(), ResolutionError::InvalidBuyerRefund);
        assert_eq!(split("-1", "400", "1000").unwrap_err(), ResolutionError::InvalidBuyerRefund);
        assert_eq!(split("", "400", "1000").unwrap_err(), ResolutionError::InvalidBuyerRefund);
        // independent of the other field's value
        assert_eq!(split("abc", "xyz", "1000").unwrap_err(), ResolutionError::InvalidBuyerRefund);
    }

    #[test]
    fn seller_amount_failures_are_field_specific() {
        assert_eq!(split("400", "12x", "1000").unwrap_err(), ResolutionError::InvalidSellerPayout);
        assert_eq!(split("400", "-0.01", "1000").unwrap_err(), ResolutionError::InvalidSellerPayout);
    }

    #[test]
    fn validation_is_idempotent() {
        for _ in 0..2 {
            let err = split("700", "400", "1000.00").unwrap_err();
            assert_eq!(err, ResolutionError::ExceedsEscrowedAmount(amount("1000.00")));
        }
        for _ in 0..2 {
            assert!(split("600", "400", "1000.00").is_ok());
        }
    }

    #[test]
    fn refund_and_payout_ignore_stale_amount_fields() {
        for decision in [DisputeDecision::Refund, DisputeDecision::Payout] {
            let request = build_resolution_request(
                decision,
                "not-a-number",
                "-42",
                Some("buyer produced tracking proof".to_string()),
                &amount("1000.00"),
            )
            .unwrap();
            assert_eq!(request.decision, decision);
            assert_eq!(request.buyer_refund_amount, None);
            assert_eq!(request.seller_payout_amount, None);
            assert_eq!(request.notes.as_deref(), Some("buyer produced tracking proof"));
        }
    }

    #[test]
    fn amounts_accept_surrounding_whitespace() {
        assert!(split(" 600 ", "400", "1000").is_ok());
    }
}
