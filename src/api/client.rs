//! The remote prompt API client.
//!
//! One `PromptClient` per resolved connection. Every operation is a single
//! HTTP round trip: build the URL, send, check the status, validate the body.
//! Non-2xx responses fail with the status and the full response body text;
//! 2xx responses with non-conforming bodies fail validation.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use tracing::debug;

use crate::api::endpoints;
use crate::api::schema::{
    self, CreatePromptRequest, ListPromptsQuery, Prompt, PromptMetaListResponse,
    UpdatePromptVersionRequest,
};
use crate::config::Connection;
use crate::error::{PromptuaryError, Result};

/// Bound on any single remote call. A stalled upstream fails the one
/// operation instead of wedging its callback.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct PromptClient {
    http: reqwest::Client,
    host: String,
}

impl PromptClient {
    pub fn new(connection: &Connection) -> Result<Self> {
        Self::with_timeout(connection, DEFAULT_TIMEOUT)
    }

    /// Build a client carrying the Basic auth and JSON content-type headers
    /// on every request, computed once from the key pair.
    pub fn with_timeout(connection: &Connection, timeout: Duration) -> Result<Self> {
        let credentials = format!("{}:{}", connection.public_key, connection.secret_key);
        let authorization = format!("Basic {}", BASE64.encode(credentials));

        let mut headers = HeaderMap::new();
        let mut authorization = HeaderValue::from_str(&authorization).map_err(|_| {
            PromptuaryError::validation("publicKey", "credentials are not a valid header value")
        })?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            host: connection.host.clone(),
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// List prompt metadata, optionally narrowed by the advisory filters.
    pub async fn list_prompts(&self, query: &ListPromptsQuery) -> Result<PromptMetaListResponse> {
        let url = endpoints::list(&self.host, query)?;
        debug!(%url, "listing prompts");
        let body = self.execute(self.http.get(url)).await?;
        schema::validate_meta_list_response(&body)
    }

    /// Create a prompt (a new name, or a new version of an existing name).
    /// The request is validated locally before any network activity.
    pub async fn create_prompt(&self, request: &CreatePromptRequest) -> Result<Prompt> {
        schema::validate_create_request(request)?;
        let url = endpoints::create(&self.host)?;
        debug!(%url, name = request.name(), "creating prompt");
        let body = self.execute(self.http.post(url).json(request)).await?;
        schema::validate_prompt_response(&body)
    }

    /// Fetch a single prompt. Omitting both `version` and `label` yields the
    /// service's default resolution (conventionally the production label).
    pub async fn get_prompt(
        &self,
        name: &str,
        version: Option<u32>,
        label: Option<&str>,
    ) -> Result<Prompt> {
        let url = endpoints::get(&self.host, name, version, label)?;
        debug!(%url, "fetching prompt");
        let body = self.execute(self.http.get(url)).await?;
        schema::validate_prompt_response(&body)
    }

    /// Replace the labels on one version of a prompt. The service revokes an
    /// assigned label from its previous holder.
    pub async fn update_prompt(
        &self,
        name: &str,
        version: u32,
        request: &UpdatePromptVersionRequest,
    ) -> Result<Prompt> {
        let url = endpoints::update(&self.host, name, version)?;
        debug!(%url, "updating prompt labels");
        let body = self.execute(self.http.patch(url).json(request)).await?;
        schema::validate_prompt_response(&body)
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Value> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PromptuaryError::Request {
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
