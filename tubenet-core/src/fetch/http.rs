use std::time::Duration;

use chrono::NaiveDate;
use itertools::Itertools;
use log::debug;
use reqwest::blocking::Client;

use super::{DataFetcher, parser};
use crate::{
    DisruptionRecord, FetchError, LineConnection, LineId, NetworkConfig, StationId, StationInfo,
};

/// Fetcher for the HTTP network data service
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(config: &NetworkConfig) -> Result<Self, FetchError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|source| FetchError::Transport {
                url: base_url.clone(),
                source,
            })?;
        Ok(HttpFetcher { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_text(&self, path: &str, query: &[(&str, String)]) -> Result<String, FetchError> {
        let url = format!("{}/{path}", self.base_url);
        debug!("GET {url} {query:?}");

        let transport = |source: reqwest::Error| FetchError::Transport {
            url: url.clone(),
            source,
        };
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.clone(),
                status: status.as_u16(),
            });
        }
        response.text().map_err(transport)
    }
}

impl DataFetcher for HttpFetcher {
    fn fetch_line_connections(&self, line_id: LineId) -> Result<Vec<LineConnection>, FetchError> {
        let text = self.get_text("line/query", &[("line_identifier", line_id.to_string())])?;
        parser::parse_line_connections(&text)
    }

    fn fetch_station_info(&self, ids: &[StationId]) -> Result<Vec<StationInfo>, FetchError> {
        let ids = if ids.is_empty() {
            "0".to_string()
        } else {
            ids.iter().join(",")
        };
        let text = self.get_text("stations/query", &[("id", ids)])?;
        parser::parse_station_info(&text)
    }

    fn fetch_disruptions(&self, date: NaiveDate) -> Result<Vec<DisruptionRecord>, FetchError> {
        let text = self.get_text(
            "disruptions/query",
            &[("date", date.format("%Y-%m-%d").to_string())],
        )?;
        parser::parse_disruptions(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped_from_base_url() {
        let config = NetworkConfig {
            base_url: "http://localhost:8080/tube/".to_string(),
            ..NetworkConfig::default()
        };
        let fetcher = HttpFetcher::new(&config).unwrap();
        assert_eq!(fetcher.base_url(), "http://localhost:8080/tube");
    }
}
