//! Conversions from wire types to domain types for invoices.

use super::wire::{AddInvoiceResponse, InvoiceResponse, InvoiceStateResponse};
use super::{AddInvoiceRequest, Invoice, InvoiceState};
use crate::shared::{base64_to_hex, unix_time};

impl From<InvoiceStateResponse> for InvoiceState {
    fn from(s: InvoiceStateResponse) -> Self {
        match s {
            InvoiceStateResponse::Open => InvoiceState::Open,
            InvoiceStateResponse::Settled => InvoiceState::Settled,
            InvoiceStateResponse::Canceled => InvoiceState::Canceled,
            InvoiceStateResponse::Accepted => InvoiceState::Accepted,
        }
    }
}

impl TryFrom<InvoiceResponse> for Invoice {
    type Error = String;

    fn try_from(i: InvoiceResponse) -> Result<Self, Self::Error> {
        if i.r_hash.is_empty() {
            return Err("invoice without r_hash".to_string());
        }
        let state = match i.state {
            Some(s) => InvoiceState::from(s),
            None if i.settled => InvoiceState::Settled,
            None => InvoiceState::Open,
        };
        Ok(Self {
            memo: i.memo,
            payment_request: i.payment_request,
            payment_hash: base64_to_hex(&i.r_hash)?,
            value: i.value,
            amount_paid: i.amt_paid_sat,
            settled: i.settled || state == InvoiceState::Settled,
            state,
            created_at: unix_time(i.creation_date),
            settled_at: unix_time(i.settle_date),
            expiry: i.expiry,
            add_index: i.add_index,
        })
    }
}

/// A freshly added invoice: the node echoes only hash, request, and index;
/// the rest comes from what was asked for.
pub(super) fn added_invoice(
    request: &AddInvoiceRequest,
    resp: AddInvoiceResponse,
) -> Result<Invoice, String> {
    if resp.payment_request.is_empty() {
        return Err("missing payment_request".to_string());
    }
    if resp.r_hash.is_empty() {
        return Err("missing r_hash".to_string());
    }
    let expiry = match request.expiry {
        Some(secs) => i64::try_from(secs).map_err(|_| format!("expiry {} out of range", secs))?,
        None => 0,
    };
    Ok(Invoice {
        memo: request.memo.clone().unwrap_or_default(),
        payment_request: resp.payment_request,
        payment_hash: base64_to_hex(&resp.r_hash)?,
        value: request.value,
        amount_paid: 0,
        settled: false,
        state: InvoiceState::Open,
        created_at: None,
        settled_at: None,
        expiry,
        add_index: resp.add_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invoice_conversion() {
        let wire: InvoiceResponse = serde_json::from_value(json!({
            "memo": "coffee",
            "r_hash": "AAEC/w==",
            "payment_request": "lnbc10u1pj",
            "value": "1000",
            "value_msat": "1000000",
            "settled": true,
            "creation_date": "1700000000",
            "settle_date": "1700000100",
            "expiry": "86400",
            "add_index": "7",
            "amt_paid_sat": "1000",
            "state": "SETTLED"
        }))
        .unwrap();
        let inv = Invoice::try_from(wire).unwrap();
        assert_eq!(inv.payment_hash, "000102ff");
        assert_eq!(inv.value, 1000);
        assert_eq!(inv.state, InvoiceState::Settled);
        assert!(inv.settled);
        assert_eq!(inv.settled_at.unwrap().timestamp(), 1700000100);
        assert_eq!(inv.add_index, 7);
    }

    #[test]
    fn test_state_falls_back_to_settled_flag() {
        let wire: InvoiceResponse = serde_json::from_value(json!({
            "r_hash": "AAEC/w==",
            "value": "5",
            "settled": false
        }))
        .unwrap();
        let inv = Invoice::try_from(wire).unwrap();
        assert_eq!(inv.state, InvoiceState::Open);
        assert!(!inv.settled);
    }

    #[test]
    fn test_unknown_state_is_a_shape_error() {
        let res = serde_json::from_value::<InvoiceResponse>(json!({
            "r_hash": "AAEC/w==",
            "state": "EXPLODED"
        }));
        assert!(res.is_err());
    }

    #[test]
    fn test_added_invoice_keeps_requested_amount() {
        let req = AddInvoiceRequest::new(1000).memo("tip");
        let resp = AddInvoiceResponse {
            r_hash: "AAEC/w==".to_string(),
            payment_request: "lnbc10u1pj".to_string(),
            add_index: 3,
        };
        let inv = added_invoice(&req, resp).unwrap();
        assert_eq!(inv.value, 1000);
        assert_eq!(inv.memo, "tip");
        assert_eq!(inv.payment_hash, "000102ff");
        assert_eq!(inv.state, InvoiceState::Open);
    }

    #[test]
    fn test_added_invoice_without_hash_rejected() {
        let resp = AddInvoiceResponse {
            r_hash: String::new(),
            payment_request: "lnbc10u1pj".to_string(),
            add_index: 3,
        };
        assert!(added_invoice(&AddInvoiceRequest::new(1000), resp).is_err());
    }
}
