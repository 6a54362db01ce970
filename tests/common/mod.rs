//! Scripted transport shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use lnd_rest_sdk::client::LndClient;
use lnd_rest_sdk::http::{NodeRequest, RawResponse, Transport, TransportFailure};

/// Records every request and answers from a queue of scripted outcomes.
#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<NodeRequest>>,
    responses: Mutex<VecDeque<Result<RawResponse, TransportFailure>>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond_json(&self, status: u16, body: Value) {
        self.push(Ok(RawResponse::new(status, body.to_string())));
    }

    pub fn respond_raw(&self, status: u16, body: &str) {
        self.push(Ok(RawResponse::new(status, body)));
    }

    pub fn fail(&self, failure: TransportFailure) {
        self.push(Err(failure));
    }

    fn push(&self, outcome: Result<RawResponse, TransportFailure>) {
        self.responses.lock().unwrap().push_back(outcome);
    }

    pub fn requests(&self) -> Vec<NodeRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> NodeRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: &NodeRequest) -> Result<RawResponse, TransportFailure> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportFailure::new("no scripted response")))
    }
}

/// A client over a fresh mock, plus a handle to script and inspect it.
pub fn mock_client() -> (LndClient, Arc<MockTransport>) {
    let mock = MockTransport::new();
    let client = LndClient::with_transport(mock.clone());
    (client, mock)
}
