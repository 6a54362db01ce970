//! Payments sub-client — history and sending.

use crate::client::LndClient;
use crate::domain::payment::convert::sent_payment;
use crate::domain::payment::wire::{ListPaymentsResponse, SendRequestBody, SendResponse};
use crate::domain::payment::{FeeLimit, Payment};
use crate::error::{LndError, LndResult};
use crate::http::{NodeRequest, Operation};

pub struct Payments<'a> {
    pub(crate) client: &'a LndClient,
}

impl<'a> Payments<'a> {
    /// `GET /v1/payments`. Read-only.
    pub async fn list(&self) -> LndResult<Vec<Payment>> {
        let resp: ListPaymentsResponse = self
            .client
            .send(NodeRequest::new(Operation::ListPayments, "/v1/payments"))
            .await?;
        Ok(resp.payments.into_iter().map(Payment::from).collect())
    }

    /// `POST /v1/channels/transactions`. Pays a BOLT 11 payment request and
    /// waits for the outcome.
    ///
    /// `fee_limit` is always sent. A route that cannot be found, or an
    /// expired request, yields [`LndError::PaymentFailed`]. Not idempotent:
    /// paying the same request twice may be rejected or, for some request
    /// kinds, pay twice.
    pub async fn pay(&self, payment_request: &str, fee_limit: FeeLimit) -> LndResult<Payment> {
        if payment_request.is_empty() {
            return Err(LndError::InvalidRequest(
                "payment request must not be empty".to_string(),
            ));
        }
        let body = SendRequestBody {
            payment_request: payment_request.to_string(),
            fee_limit: fee_limit.into(),
        };
        let req = NodeRequest::new(Operation::PayInvoice, "/v1/channels/transactions").json(&body)?;
        let resp: SendResponse = self.client.send(req).await?;
        sent_payment(payment_request, fee_limit, resp)
    }
}
