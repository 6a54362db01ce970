//! `reqwest`-backed transport — `LndHttp`.
//!
//! One configured client per node. The credential and JSON content type are
//! installed as default headers, so every request carries them.

use crate::config::LndConfig;
use crate::error::{LndError, LndResult};
use crate::http::request::{BodyMode, Method, NodeRequest};
use crate::http::transport::{RawResponse, Transport, TransportFailure};
use crate::network::MACAROON_HEADER;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Certificate, Client, Response};

/// HTTP transport bound to one node endpoint.
#[derive(Debug, Clone)]
pub struct LndHttp {
    base_url: String,
    client: Client,
}

impl LndHttp {
    pub fn new(config: &LndConfig) -> LndResult<Self> {
        if config.host.trim().is_empty() {
            return Err(LndError::Config("node host is empty".to_string()));
        }
        if config.macaroon.is_empty() {
            return Err(LndError::Config("macaroon is empty".to_string()));
        }

        let base_url = config.base_url();
        reqwest::Url::parse(&base_url)
            .map_err(|e| LndError::Config(format!("Invalid node URL '{}': {}", base_url, e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut credential = HeaderValue::from_str(config.macaroon.as_hex())
            .map_err(|e| LndError::Config(format!("Invalid macaroon header value: {}", e)))?;
        credential.set_sensitive(true);
        let name = HeaderName::from_bytes(MACAROON_HEADER.as_bytes())
            .map_err(|e| LndError::Config(format!("Invalid credential header name: {}", e)))?;
        headers.insert(name, credential);

        let mut builder = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(10)
            .default_headers(headers);

        if let Some(pem) = &config.tls_certificate_pem {
            let cert = Certificate::from_pem(pem)
                .map_err(|e| LndError::Config(format!("Invalid TLS certificate: {}", e)))?;
            builder = builder.add_root_certificate(cert);
        }
        if config.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|e| LndError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for LndHttp {
    async fn execute(&self, request: &NodeRequest) -> Result<RawResponse, TransportFailure> {
        let url = format!("{}{}", self.base_url, request.path_and_query());
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut req = self.client.request(method, &url);
        if let Some(body) = request.body_bytes() {
            req = req.body(body);
        }

        let mut resp = req.send().await.map_err(|e| {
            tracing::warn!(
                operation = request.operation.as_str(),
                path = %request.path,
                "request to node failed: {}",
                e
            );
            failure(e)
        })?;
        let status = resp.status().as_u16();

        let body = match request.body_mode {
            BodyMode::Complete => resp.bytes().await.map_err(failure)?.to_vec(),
            BodyMode::FirstMessage => read_first_message(&mut resp).await?,
        };

        tracing::debug!(
            operation = request.operation.as_str(),
            method = request.method.as_str(),
            path = %request.path,
            status,
            "node request completed"
        );

        Ok(RawResponse { status, body })
    }
}

/// Read chunks until the first non-blank line, then stop. The response (and
/// with it the stream) is dropped by the caller.
async fn read_first_message(resp: &mut Response) -> Result<Vec<u8>, TransportFailure> {
    let mut buf: Vec<u8> = Vec::new();
    loop {
        while let Some(pos) = buf.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = buf.drain(..=pos).take(pos).collect();
            if !line.iter().all(|b| b.is_ascii_whitespace()) {
                return Ok(line);
            }
        }
        match resp.chunk().await.map_err(failure)? {
            Some(chunk) => buf.extend_from_slice(&chunk),
            None => return Ok(buf),
        }
    }
}

fn failure(e: reqwest::Error) -> TransportFailure {
    if e.is_timeout() {
        TransportFailure::timeout(e.to_string())
    } else {
        TransportFailure::new(e.to_string())
    }
}
