//! Wallet sub-client — on-chain funds.

use crate::client::LndClient;
use crate::domain::wallet::wire::{
    NewAddressResponse, SendCoinsBody, SendCoinsResponse, TransactionDetails,
    WalletBalanceResponse,
};
use crate::domain::wallet::{
    Address, AddressType, SendCoinsRequest, Transaction, Txid, WalletBalance,
};
use crate::error::{LndError, LndResult};
use crate::http::{NodeRequest, Operation};

pub struct Wallet<'a> {
    pub(crate) client: &'a LndClient,
}

impl<'a> Wallet<'a> {
    /// `GET /v1/balance/blockchain`. Read-only.
    pub async fn balance(&self) -> LndResult<WalletBalance> {
        let resp: WalletBalanceResponse = self
            .client
            .send(NodeRequest::new(Operation::WalletBalance, "/v1/balance/blockchain"))
            .await?;
        Ok(resp.into())
    }

    /// `GET /v1/transactions`. Read-only.
    pub async fn transactions(&self) -> LndResult<Vec<Transaction>> {
        let resp: TransactionDetails = self
            .client
            .send(NodeRequest::new(Operation::GetTransactions, "/v1/transactions"))
            .await?;
        resp.transactions
            .into_iter()
            .map(|t| {
                Transaction::try_from(t)
                    .map_err(|e| LndError::malformed(Operation::GetTransactions, e))
            })
            .collect()
    }

    /// `GET /v1/newaddress?type=…`.
    ///
    /// A GET, but not read-only: each call advances the wallet's derivation
    /// index, so two calls return two different addresses.
    pub async fn new_address(&self, address_type: AddressType) -> LndResult<Address> {
        let resp: NewAddressResponse = self
            .client
            .send(Self::new_address_request(address_type))
            .await?;
        if resp.address.is_empty() {
            return Err(LndError::malformed(Operation::NewAddress, "empty address"));
        }
        Ok(Address {
            address: resp.address,
            address_type,
        })
    }

    /// `POST /v1/transactions`. Broadcasts an on-chain send.
    ///
    /// Not idempotent: a retry after an ambiguous failure may spend twice.
    pub async fn send_coins(&self, request: SendCoinsRequest) -> LndResult<Txid> {
        let request = Self::send_coins_request(request)?;
        let resp: SendCoinsResponse = self.client.send(request).await?;
        Txid::try_from(resp).map_err(|e| LndError::malformed(Operation::SendCoins, e))
    }

    pub(crate) fn new_address_request(address_type: AddressType) -> NodeRequest {
        NodeRequest::new(Operation::NewAddress, "/v1/newaddress")
            .query("type", address_type.as_str())
    }

    pub(crate) fn send_coins_request(request: SendCoinsRequest) -> LndResult<NodeRequest> {
        if request.addr.is_empty() {
            return Err(LndError::InvalidRequest(
                "destination address must not be empty".to_string(),
            ));
        }
        if request.amount == 0 {
            return Err(LndError::InvalidRequest(
                "amount must be a positive number of sats".to_string(),
            ));
        }
        let body = SendCoinsBody {
            addr: request.addr,
            amount: request.amount,
            sat_per_vbyte: request.sat_per_vbyte,
        };
        NodeRequest::new(Operation::SendCoins, "/v1/transactions").json(&body)
    }
}
