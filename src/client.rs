//! Blocking client for the ADDS data server.

use std::time::Duration;

use reqwest::{blocking, header::USER_AGENT, StatusCode};
use tracing::debug;

use crate::{
    errors::AddsDataErr,
    reports::{parse_metars, parse_pireps, parse_tafs, DataSource, Metar, Pirep, Taf},
};

mod request;

pub use request::{ReportQuery, Route};

/// Settings for an [`AddsClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Address of the data server, without query parameters.
    pub base_url: String,
    /// Sent with every request.
    pub user_agent: String,
    /// Timeout for a whole request.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: AddsClient::DEFAULT_BASE_URL.to_owned(),
            user_agent: concat!("adds-data/", env!("CARGO_PKG_VERSION")).to_owned(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Fetches reports from the data server.
#[derive(Debug, Clone)]
pub struct AddsClient {
    config: ClientConfig,
    client: blocking::Client,
}

impl AddsClient {
    /// The public ADDS data server.
    pub const DEFAULT_BASE_URL: &'static str =
        "https://aviationweather.gov/adds/dataserver_current/httpparam";

    /// Create a client with the default settings.
    pub fn new() -> Result<Self, AddsDataErr> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with custom settings.
    pub fn with_config(config: ClientConfig) -> Result<Self, AddsDataErr> {
        let client = blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(AddsClient { config, client })
    }

    /// The settings this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The URL that would be requested for this source and query.
    pub fn url(&self, source: DataSource, query: &ReportQuery) -> Result<String, AddsDataErr> {
        query.url(&self.config.base_url, source)
    }

    /// Get the METARs selected by `query`.
    pub fn metars(&self, query: &ReportQuery) -> Result<Vec<Metar>, AddsDataErr> {
        let body = self.fetch(&self.url(DataSource::Metars, query)?)?;
        parse_metars(&body)
    }

    /// Get the TAFs selected by `query`.
    pub fn tafs(&self, query: &ReportQuery) -> Result<Vec<Taf>, AddsDataErr> {
        let body = self.fetch(&self.url(DataSource::Tafs, query)?)?;
        parse_tafs(&body)
    }

    /// Get the pilot reports selected by `query`.
    pub fn pireps(&self, query: &ReportQuery) -> Result<Vec<Pirep>, AddsDataErr> {
        let body = self.fetch(&self.url(DataSource::AircraftReports, query)?)?;
        parse_pireps(&body)
    }

    /// Get the most recent METAR for a station.
    pub fn latest_metar(&self, ident: &str) -> Result<Metar, AddsDataErr> {
        latest(self.metars(&ReportQuery::station(ident))?)
    }

    fn fetch(&self, url: &str) -> Result<String, AddsDataErr> {
        debug!(%url, "requesting reports");

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.config.user_agent)
            .send()?;

        if response.status() != StatusCode::OK {
            return Err(AddsDataErr::HttpStatus(response.status()));
        }

        Ok(response.text()?)
    }
}

// The report with the latest observation time.
fn latest(metars: Vec<Metar>) -> Result<Metar, AddsDataErr> {
    metars
        .into_iter()
        .max_by_key(|metar| metar.observation_time)
        .ok_or(AddsDataErr::NoResults)
}

#[cfg(test)]
mod unit {
    use super::*;

    #[test]
    fn test_default_config() {
        let client = AddsClient::new().expect("Error building client.");

        assert_eq!(client.config().base_url, AddsClient::DEFAULT_BASE_URL);
        assert_eq!(client.config().timeout, Duration::from_secs(30));
        assert!(client.config().user_agent.starts_with("adds-data/"));
    }

    #[test]
    fn test_url_uses_configured_base() {
        let client = AddsClient::with_config(ClientConfig {
            base_url: "http://localhost:8080/adds".to_owned(),
            ..ClientConfig::default()
        })
        .expect("Error building client.");

        let url = client
            .url(DataSource::Metars, &ReportQuery::station("kgpi"))
            .expect("Error building url.");
        assert!(url.starts_with("http://localhost:8080/adds?dataSource=metars"));
        assert!(url.contains("stationString=KGPI"));
    }

    #[test]
    fn test_latest_metar() {
        let xml = r#"<response>
  <data num_results="3">
    <METAR>
      <raw_text>KGPI 011753Z 00000KT 10SM CLR 08/M04 A3001</raw_text>
      <station_id>KGPI</station_id>
      <observation_time>2017-04-01T17:53:00Z</observation_time>
    </METAR>
    <METAR>
      <raw_text>KGPI 011853Z 20005KT 10SM CLR 09/M04 A3000</raw_text>
      <station_id>KGPI</station_id>
      <observation_time>2017-04-01T18:53:00Z</observation_time>
    </METAR>
    <METAR>
      <raw_text>KGPI 011653Z 00000KT 10SM CLR 06/M04 A3002</raw_text>
      <station_id>KGPI</station_id>
      <observation_time>2017-04-01T16:53:00Z</observation_time>
    </METAR>
  </data>
</response>"#;

        let metars = parse_metars(xml).expect("Error parsing metars.");
        let newest = latest(metars).expect("No metar found.");
        assert!(newest.text.starts_with("KGPI 011853Z"));

        assert!(latest(vec![]).is_err());
    }
}
