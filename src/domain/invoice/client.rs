//! Invoices sub-client — list, lookup, add.

use crate::client::LndClient;
use crate::domain::invoice::convert::added_invoice;
use crate::domain::invoice::wire::{
    AddInvoiceBody, AddInvoiceResponse, InvoiceResponse, ListInvoiceResponse,
};
use crate::domain::invoice::{AddInvoiceRequest, Invoice};
use crate::error::{LndError, LndResult};
use crate::http::request::path_segment;
use crate::http::{NodeRequest, Operation};

pub struct Invoices<'a> {
    pub(crate) client: &'a LndClient,
}

impl<'a> Invoices<'a> {
    /// `GET /v1/invoices`. Read-only.
    pub async fn list(&self) -> LndResult<Vec<Invoice>> {
        let resp: ListInvoiceResponse = self
            .client
            .send(NodeRequest::new(Operation::ListInvoices, "/v1/invoices"))
            .await?;
        resp.invoices
            .into_iter()
            .map(|i| {
                Invoice::try_from(i).map_err(|e| LndError::malformed(Operation::ListInvoices, e))
            })
            .collect()
    }

    /// `GET /v1/invoice/{payment_hash}` with a hex payment hash.
    ///
    /// An unknown hash comes back as a node error for which
    /// [`LndError::is_not_found`] holds; a malformed hash is rejected by
    /// the node with a different status.
    pub async fn lookup(&self, payment_hash: &str) -> LndResult<Invoice> {
        if payment_hash.is_empty() {
            return Err(LndError::InvalidRequest(
                "payment hash must not be empty".to_string(),
            ));
        }
        let path = format!("/v1/invoice/{}", path_segment(payment_hash));
        let resp: InvoiceResponse = self
            .client
            .send(NodeRequest::new(Operation::LookupInvoice, path))
            .await?;
        Invoice::try_from(resp).map_err(|e| LndError::malformed(Operation::LookupInvoice, e))
    }

    /// `POST /v1/invoices`. Mints a new invoice.
    ///
    /// Not idempotent: a retry creates a second, independent receivable.
    pub async fn add(&self, request: AddInvoiceRequest) -> LndResult<Invoice> {
        if request.expiry.is_some_and(|secs| secs > i64::MAX as u64) {
            return Err(LndError::InvalidRequest(
                "expiry must fit in a signed 64-bit number of seconds".to_string(),
            ));
        }
        let body = AddInvoiceBody {
            value: request.value,
            memo: request.memo.clone(),
            expiry: request.expiry,
        };
        let req = NodeRequest::new(Operation::AddInvoice, "/v1/invoices").json(&body)?;
        let resp: AddInvoiceResponse = self.client.send(req).await?;
        added_invoice(&request, resp).map_err(|e| LndError::malformed(Operation::AddInvoice, e))
    }
}
