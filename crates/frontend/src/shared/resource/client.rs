//! Resource endpoint access.
//!
//! [`ResourceClient`] is the seam between the list controller and the wire:
//! every resource exposes the same five operations against its endpoint
//! family. [`ApiClient`] carries the shared REST mechanics (base URL, bearer
//! token injection, envelope decoding) so the per-resource implementations
//! stay one line per operation.

use contracts::domain::common::{Patch, ResourceRecord};
use contracts::shared::envelope::{Envelope, Paginated};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

use super::filter::ListFilter;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Application-level failure: the envelope arrived but did not say
    /// "success". Carries the backend's own message.
    #[error("{0}")]
    Api(String),

    /// No usable response: network failure, or a body that is not an
    /// envelope.
    #[error("request failed: {0}")]
    Transport(String),
}

/// Uniform list/create/update/delete/summary access to one resource.
#[allow(async_fn_in_trait)]
pub trait ResourceClient {
    type Record: ResourceRecord;
    type Create: Serialize + Clone + Send + Sync + 'static;
    type Update: Patch<Self::Record> + Serialize + Clone + Send + Sync + 'static;
    type Summary: Clone + Send + Sync + 'static;

    async fn list(
        &self,
        page: u32,
        limit: u32,
        filter: &ListFilter,
    ) -> Result<Paginated<Self::Record>, ApiError>;

    async fn create(&self, body: &Self::Create) -> Result<Self::Record, ApiError>;

    /// The backend may or may not echo the updated entity; `None` means the
    /// caller merges the submitted fields itself.
    async fn update(&self, id: i64, body: &Self::Update)
        -> Result<Option<Self::Record>, ApiError>;

    async fn remove(&self, id: i64) -> Result<(), ApiError>;

    async fn summary(&self, filter: &ListFilter) -> Result<Self::Summary, ApiError>;
}

/// Supplies the current bearer token at request time. Injected into
/// [`ApiClient`] construction; there is no process-global token.
pub type TokenProvider = Arc<dyn Fn() -> Option<String> + Send + Sync>;

/// Shared REST mechanics for all resource clients.
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    token: TokenProvider,
}

impl ApiClient {
    pub fn new(base: impl Into<String>, token: TokenProvider) -> Self {
        Self {
            base: base.into(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match (self.token)() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::get(&self.url(path)))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let envelope = run::<T>(request).await?;
        require_data(envelope)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let envelope = run::<T>(request).await?;
        require_data(envelope)
    }

    /// PUT returns the updated entity when the backend echoes one.
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, ApiError> {
        let request = self
            .authorize(Request::put(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let envelope = run::<T>(request).await?;
        Ok(envelope.data)
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self
            .authorize(Request::delete(&self.url(path)))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        run::<serde_json::Value>(request).await?;
        Ok(())
    }
}

/// Send the request and decode the envelope. Success is decided by the
/// envelope's message, case-insensitively, not by the HTTP status: failure
/// bodies arrive on 4xx/5xx too and their `result`/`message` is the error.
pub(crate) async fn run<T: DeserializeOwned>(request: Request) -> Result<Envelope<T>, ApiError> {
    let response: Response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let http_ok = response.ok();
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    match serde_json::from_str::<Envelope<T>>(&text) {
        Ok(envelope) if envelope.is_success() => Ok(envelope),
        Ok(envelope) => Err(ApiError::Api(envelope.failure_detail())),
        Err(_) if !http_ok => Err(ApiError::Transport(format!("HTTP {status}"))),
        Err(e) => Err(ApiError::Transport(format!("invalid response body: {e}"))),
    }
}

pub(crate) fn require_data<T>(envelope: Envelope<T>) -> Result<T, ApiError> {
    envelope
        .data
        .ok_or_else(|| ApiError::Api("empty response payload".to_string()))
}
