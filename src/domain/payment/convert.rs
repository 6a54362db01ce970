//! Conversions from wire types to domain types for payments.

use super::wire::{FeeLimitBody, PaymentResponse, PaymentStatusResponse, SendResponse};
use super::{FeeLimit, Payment, PaymentStatus};
use crate::error::LndError;
use crate::http::Operation;
use crate::shared::{base64_to_hex, unix_time};

impl From<FeeLimit> for FeeLimitBody {
    fn from(limit: FeeLimit) -> Self {
        match limit {
            FeeLimit::Fixed(v) => FeeLimitBody::Fixed(v),
            FeeLimit::FixedMsat(v) => FeeLimitBody::FixedMsat(v),
            FeeLimit::Percent(v) => FeeLimitBody::Percent(v),
        }
    }
}

impl From<PaymentStatusResponse> for PaymentStatus {
    fn from(s: PaymentStatusResponse) -> Self {
        match s {
            PaymentStatusResponse::Unknown => PaymentStatus::Unknown,
            PaymentStatusResponse::InFlight => PaymentStatus::InFlight,
            PaymentStatusResponse::Succeeded => PaymentStatus::Succeeded,
            PaymentStatusResponse::Failed => PaymentStatus::Failed,
            PaymentStatusResponse::Initiated => PaymentStatus::Initiated,
        }
    }
}

impl From<PaymentResponse> for Payment {
    fn from(p: PaymentResponse) -> Self {
        Self {
            payment_request: p.payment_request,
            payment_hash: p.payment_hash,
            preimage: non_zero_hex(p.payment_preimage),
            amount: p.value_sat,
            fee: p.fee_sat,
            fee_limit: None,
            status: p.status.map(PaymentStatus::from).unwrap_or(PaymentStatus::Unknown),
            created_at: unix_time(p.creation_date),
            failure_reason: p
                .failure_reason
                .filter(|r| !r.is_empty() && r != "FAILURE_REASON_NONE"),
        }
    }
}

/// Turn a send response into a settled payment, or a payment failure.
pub(super) fn sent_payment(
    payment_request: &str,
    fee_limit: FeeLimit,
    resp: SendResponse,
) -> Result<Payment, LndError> {
    let malformed = |e: String| LndError::malformed(Operation::PayInvoice, e);
    let payment_hash = if resp.payment_hash.is_empty() {
        None
    } else {
        Some(base64_to_hex(&resp.payment_hash).map_err(malformed)?)
    };

    if !resp.payment_error.is_empty() {
        tracing::debug!(
            payment_hash = payment_hash.as_deref().unwrap_or(""),
            "payment rejected by node: {}",
            resp.payment_error
        );
        return Err(LndError::PaymentFailed {
            payment_hash,
            message: resp.payment_error,
        });
    }

    let payment_hash = payment_hash.ok_or_else(|| malformed("missing payment_hash".to_string()))?;
    let preimage = if resp.payment_preimage.is_empty() {
        None
    } else {
        non_zero_hex(base64_to_hex(&resp.payment_preimage).map_err(malformed)?)
    };
    let (amount, fee) = match resp.payment_route {
        Some(route) => (route.total_amt.saturating_sub(route.total_fees), route.total_fees),
        None => (0, 0),
    };

    Ok(Payment {
        payment_request: payment_request.to_string(),
        payment_hash,
        preimage,
        amount,
        fee,
        fee_limit: Some(fee_limit),
        status: PaymentStatus::Succeeded,
        created_at: None,
        failure_reason: None,
    })
}

/// The node reports an unknown preimage as all zeros.
fn non_zero_hex(hex: String) -> Option<String> {
    if hex.is_empty() || hex.bytes().all(|b| b == b'0') {
        None
    } else {
        Some(hex)
    }
}
