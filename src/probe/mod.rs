//! Sequential probe against the telemetry API.
//!
//! Every call runs to completion before the next starts. Any HTTP status is
//! reported as-is; a transport fault ends the run with an error.

pub mod report;

use std::io::Write;

use crate::config::ProbeConfig;
use crate::error::Result;
use crate::services::api::{ApiClient, Endpoint, Query, RawResponse};
use crate::telemetry::sample::sample_envelope;

pub use report::{render_report, BodyView};

const BANNER_WIDTH: usize = 60;

pub struct Probe<W: Write> {
    api: ApiClient,
    config: ProbeConfig,
    out: W,
}

impl<W: Write> Probe<W> {
    pub fn new(config: ProbeConfig, out: W) -> Result<Self> {
        let api = ApiClient::new(&config)?;
        Ok(Self { api, config, out })
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Writes one report block for `response`.
    pub fn report(&mut self, label: &str, response: &RawResponse) -> Result<()> {
        self.out.write_all(render_report(label, response).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    /// Posts the sample envelope and returns its freshly generated server id.
    pub async fn submit_telemetry(&mut self) -> Result<String> {
        let envelope = sample_envelope();
        let response = self.api.post_telemetry(&envelope).await?;
        self.report("POST /telemetry", &response)?;
        Ok(envelope.server_id)
    }

    async fn query(&mut self, endpoint: Endpoint, query: Query) -> Result<RawResponse> {
        let response = self.api.get(endpoint, query).await?;
        self.report(&endpoint.label(), &response)?;
        Ok(response)
    }

    pub async fn query_stats(&mut self, hours: u32) -> Result<RawResponse> {
        self.query(Endpoint::Stats, Query::hours(hours)).await
    }

    pub async fn query_servers(&mut self) -> Result<RawResponse> {
        self.query(Endpoint::Servers, Query::none()).await
    }

    pub async fn query_health(&mut self, hours: u32) -> Result<RawResponse> {
        self.query(Endpoint::Health, Query::hours(hours)).await
    }

    pub async fn query_errors(&mut self, limit: u32) -> Result<RawResponse> {
        self.query(Endpoint::Errors, Query::limit(limit)).await
    }

    pub async fn query_usage(&mut self, hours: u32, limit: u32) -> Result<RawResponse> {
        self.query(Endpoint::Usage, Query::hours_limit(hours, limit)).await
    }

    pub async fn query_filter(&mut self, hours: u32) -> Result<RawResponse> {
        self.query(Endpoint::Filter, Query::hours(hours)).await
    }

    pub async fn query_cache(&mut self, hours: u32) -> Result<RawResponse> {
        self.query(Endpoint::Cache, Query::hours(hours)).await
    }

    pub async fn query_sessions(&mut self, limit: u32) -> Result<RawResponse> {
        self.query(Endpoint::Sessions, Query::limit(limit)).await
    }

    pub async fn query_categories(&mut self, hours: u32) -> Result<RawResponse> {
        self.query(Endpoint::Categories, Query::hours(hours)).await
    }

    pub async fn query_features(&mut self) -> Result<RawResponse> {
        self.query(Endpoint::Features, Query::none()).await
    }

    pub async fn query_hourly(&mut self) -> Result<RawResponse> {
        self.query(Endpoint::Hourly, Query::none()).await
    }

    pub async fn query_config(&mut self) -> Result<RawResponse> {
        self.query(Endpoint::Config, Query::none()).await
    }

    pub async fn query_performance(&mut self, hours: u32) -> Result<RawResponse> {
        self.query(Endpoint::Performance, Query::hours(hours)).await
    }

    pub async fn query_punishments(&mut self, hours: u32) -> Result<RawResponse> {
        self.query(Endpoint::Punishments, Query::hours(hours)).await
    }

    /// Full run: banner, POST, every GET in endpoint order, completion banner.
    /// Returns the submitted server id.
    pub async fn run(&mut self) -> Result<String> {
        let rule = "=".repeat(BANNER_WIDTH);
        let hours = self.config.hours;
        let limit = self.config.limit;

        tracing::info!(base_url = %self.api.base_url(), "probe starting");
        writeln!(self.out, "\n{rule}")?;
        writeln!(self.out, "LORAGUARD TELEMETRY API TEST")?;
        writeln!(self.out, "Base URL: {}", self.api.base_url())?;
        writeln!(self.out, "{rule}")?;

        writeln!(self.out, "\n[1] Testing POST /telemetry (sending test data)...")?;
        let server_id = self.submit_telemetry().await?;

        writeln!(self.out, "\n[2] Testing GET endpoints...")?;
        self.query_stats(hours).await?;
        self.query_servers().await?;
        self.query_health(hours).await?;
        self.query_errors(limit).await?;
        self.query_usage(hours, limit).await?;
        self.query_filter(hours).await?;
        self.query_cache(hours).await?;
        self.query_sessions(limit).await?;
        self.query_categories(hours).await?;
        self.query_features().await?;
        self.query_hourly().await?;
        self.query_config().await?;
        self.query_performance(hours).await?;
        self.query_punishments(hours).await?;

        writeln!(self.out, "\n{rule}")?;
        writeln!(self.out, "ALL TESTS COMPLETED")?;
        writeln!(self.out, "{rule}")?;
        self.out.flush()?;

        tracing::info!(%server_id, "probe finished");
        Ok(server_id)
    }
}
