//! Peers sub-client — list, connect, disconnect.

use crate::client::LndClient;
use crate::domain::peer::wire::{ConnectPeerBody, LightningAddressBody, ListPeersResponse};
use crate::domain::peer::{ConnectPeerRequest, Peer};
use crate::error::{LndError, LndResult};
use crate::http::request::path_segment;
use crate::http::{NodeRequest, Operation};
use crate::shared::Ack;

pub struct Peers<'a> {
    pub(crate) client: &'a LndClient,
}

impl<'a> Peers<'a> {
    /// `GET /v1/peers`. Read-only.
    pub async fn list(&self) -> LndResult<Vec<Peer>> {
        let resp: ListPeersResponse = self
            .client
            .send(NodeRequest::new(Operation::ListPeers, "/v1/peers"))
            .await?;
        resp.peers
            .into_iter()
            .map(|p| Peer::try_from(p).map_err(|e| LndError::malformed(Operation::ListPeers, e)))
            .collect()
    }

    /// `POST /v1/peers`. Connecting to an already connected peer is
    /// reported by the node as an error.
    pub async fn connect(&self, request: ConnectPeerRequest) -> LndResult<Ack> {
        let request = Self::connect_request(request)?;
        self.client.send(request).await
    }

    /// `DELETE /v1/peers/{pubkey}`.
    pub async fn disconnect(&self, pubkey: &str) -> LndResult<Ack> {
        let request = Self::disconnect_request(pubkey)?;
        self.client.send(request).await
    }

    pub(crate) fn connect_request(request: ConnectPeerRequest) -> LndResult<NodeRequest> {
        if request.pubkey.is_empty() || request.host.is_empty() {
            return Err(LndError::InvalidRequest(
                "peer pubkey and host must not be empty".to_string(),
            ));
        }
        let body = ConnectPeerBody {
            addr: LightningAddressBody {
                pubkey: request.pubkey,
                host: request.host,
            },
            perm: request.perm,
            timeout: request.timeout_secs,
        };
        NodeRequest::new(Operation::ConnectPeer, "/v1/peers").json(&body)
    }

    pub(crate) fn disconnect_request(pubkey: &str) -> LndResult<NodeRequest> {
        if pubkey.is_empty() {
            return Err(LndError::InvalidRequest(
                "peer pubkey must not be empty".to_string(),
            ));
        }
        Ok(NodeRequest::new(
            Operation::DisconnectPeer,
            format!("/v1/peers/{}", path_segment(pubkey)),
        ))
    }
}
