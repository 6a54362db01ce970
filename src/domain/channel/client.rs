//! Channels sub-client — list, open, close.

use crate::client::LndClient;
use crate::domain::channel::wire::{
    ChannelPointResponse, CloseStatusUpdate, ListChannelsResponse, OpenChannelBody,
};
use crate::domain::channel::{Channel, CloseChannelAck, CloseChannelRequest, OpenChannelRequest};
use crate::error::{LndError, LndResult};
use crate::http::request::path_segment;
use crate::http::{BodyMode, NodeRequest, Operation};
use crate::shared::{ChannelPoint, ChannelPointError};

pub struct Channels<'a> {
    pub(crate) client: &'a LndClient,
}

impl<'a> Channels<'a> {
    /// `GET /v1/channels`. Read-only.
    pub async fn list(&self) -> LndResult<Vec<Channel>> {
        let resp: ListChannelsResponse = self.client.send(Self::list_request()).await?;
        resp.channels
            .into_iter()
            .map(|c| {
                Channel::try_from(c).map_err(|e| LndError::malformed(Operation::ListChannels, e))
            })
            .collect()
    }

    /// `POST /v1/channels`. Opens and funds a new channel.
    ///
    /// Not idempotent: every successful call commits a new funding
    /// transaction. Do not retry blindly.
    pub async fn open(&self, request: OpenChannelRequest) -> LndResult<ChannelPoint> {
        let request = Self::open_request(request)?;
        let resp: ChannelPointResponse = self.client.send(request).await?;
        ChannelPoint::try_from(resp).map_err(|e| LndError::malformed(Operation::OpenChannel, e))
    }

    /// `DELETE /v1/channels/{txid}/{index}?force=…`. Starts a cooperative
    /// (or, with `force`, unilateral) close.
    ///
    /// The channel point is split locally; a malformed one is rejected
    /// before anything is sent. Only the first update of the close stream
    /// is read. Not idempotent.
    pub async fn close(&self, request: CloseChannelRequest) -> LndResult<CloseChannelAck> {
        let request = Self::close_request(&request)?;
        let resp: CloseStatusUpdate = self.client.send(request).await?;
        CloseChannelAck::try_from(resp).map_err(|e| LndError::malformed(Operation::CloseChannel, e))
    }

    // ── Request shaping ──────────────────────────────────────────────────

    pub(crate) fn list_request() -> NodeRequest {
        NodeRequest::new(Operation::ListChannels, "/v1/channels")
    }

    pub(crate) fn open_request(request: OpenChannelRequest) -> LndResult<NodeRequest> {
        if request.node_pubkey.is_empty() {
            return Err(LndError::InvalidRequest(
                "node pubkey must not be empty".to_string(),
            ));
        }
        if request.local_funding_amount == 0 {
            return Err(LndError::InvalidRequest(
                "funding amount must be a positive number of sats".to_string(),
            ));
        }
        let body = OpenChannelBody {
            node_pubkey_string: request.node_pubkey,
            local_funding_amount: request.local_funding_amount,
            push_sat: request.push_sat,
            private: request.private,
        };
        NodeRequest::new(Operation::OpenChannel, "/v1/channels").json(&body)
    }

    pub(crate) fn close_request(request: &CloseChannelRequest) -> LndResult<NodeRequest> {
        let point: ChannelPoint = request
            .channel_point
            .parse()
            .map_err(|e: ChannelPointError| LndError::InvalidRequest(e.to_string()))?;
        let path = format!(
            "/v1/channels/{}/{}",
            path_segment(&point.funding_txid),
            point.output_index
        );
        Ok(NodeRequest::new(Operation::CloseChannel, path)
            .query("force", request.force.to_string())
            .body_mode(BodyMode::FirstMessage))
    }
}
