use reqwest::Client;
use serde::Serialize;

use crate::config::ProbeConfig;
use crate::error::Result;
use crate::telemetry::payload::TelemetryEnvelope;

pub const PLUGIN_VERSION_HEADER: &str = "X-Plugin-Version";

/// Read endpoints under `{base}/telemetry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Stats,
    Servers,
    Health,
    Errors,
    Usage,
    Filter,
    Cache,
    Sessions,
    Categories,
    Features,
    Hourly,
    Config,
    Performance,
    Punishments,
}

impl Endpoint {
    pub const ALL: [Endpoint; 14] = [
        Endpoint::Stats,
        Endpoint::Servers,
        Endpoint::Health,
        Endpoint::Errors,
        Endpoint::Usage,
        Endpoint::Filter,
        Endpoint::Cache,
        Endpoint::Sessions,
        Endpoint::Categories,
        Endpoint::Features,
        Endpoint::Hourly,
        Endpoint::Config,
        Endpoint::Performance,
        Endpoint::Punishments,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Stats => "/telemetry/stats",
            Endpoint::Servers => "/telemetry/servers",
            Endpoint::Health => "/telemetry/health",
            Endpoint::Errors => "/telemetry/errors",
            Endpoint::Usage => "/telemetry/usage",
            Endpoint::Filter => "/telemetry/filter",
            Endpoint::Cache => "/telemetry/cache",
            Endpoint::Sessions => "/telemetry/sessions",
            Endpoint::Categories => "/telemetry/categories",
            Endpoint::Features => "/telemetry/features",
            Endpoint::Hourly => "/telemetry/hourly",
            Endpoint::Config => "/telemetry/config",
            Endpoint::Performance => "/telemetry/performance",
            Endpoint::Punishments => "/telemetry/punishments",
        }
    }

    /// Report label, e.g. `GET /telemetry/stats`.
    pub fn label(&self) -> String {
        format!("GET {}", self.path())
    }
}

/// Optional query parameters. Absent fields are left off the URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Query {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl Query {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn hours(hours: u32) -> Self {
        Self { hours: Some(hours), limit: None }
    }

    pub fn limit(limit: u32) -> Self {
        Self { hours: None, limit: Some(limit) }
    }

    pub fn hours_limit(hours: u32, limit: u32) -> Self {
        Self { hours: Some(hours), limit: Some(limit) }
    }
}

/// Status and undecoded body. Any status is a valid response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    async fn read(response: reqwest::Response) -> Result<Self> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(Self { status, body })
    }
}

/// Shared HTTP session. Built once, never mutated.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ProbeConfig) -> Result<Self> {
        // Proxy settings inherited from the environment are ignored.
        let client = Client::builder().no_proxy().build()?;
        Ok(Self {
            client,
            base_url: config.base().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn post_telemetry(&self, envelope: &TelemetryEnvelope) -> Result<RawResponse> {
        let url = self.url("/telemetry");
        tracing::debug!(%url, server_id = %envelope.server_id, events = envelope.events.len(), "POST");

        let response = self
            .client
            .post(&url)
            .header(PLUGIN_VERSION_HEADER, envelope.plugin_version.as_str())
            .json(envelope)
            .send()
            .await?;

        let raw = RawResponse::read(response).await?;
        tracing::debug!(%url, status = raw.status, "POST done");
        Ok(raw)
    }

    pub async fn get(&self, endpoint: Endpoint, query: Query) -> Result<RawResponse> {
        let url = self.url(endpoint.path());
        tracing::debug!(%url, ?query, "GET");

        let response = self.client.get(&url).query(&query).send().await?;

        let raw = RawResponse::read(response).await?;
        tracing::debug!(%url, status = raw.status, "GET done");
        Ok(raw)
    }
}
