//! Info sub-client — node identity and sync state.

use crate::client::LndClient;
use crate::domain::info::wire::GetInfoResponse;
use crate::domain::info::NodeInfo;
use crate::error::{LndError, LndResult};
use crate::http::{NodeRequest, Operation};

pub struct Info<'a> {
    pub(crate) client: &'a LndClient,
}

impl<'a> Info<'a> {
    /// `GET /v1/getinfo`. Read-only; safe to call repeatedly.
    pub async fn get(&self) -> LndResult<NodeInfo> {
        let resp: GetInfoResponse = self
            .client
            .send(NodeRequest::new(Operation::GetInfo, "/v1/getinfo"))
            .await?;
        NodeInfo::try_from(resp).map_err(|e| LndError::malformed(Operation::GetInfo, e))
    }
}
