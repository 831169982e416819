use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, LineId};

pub const DEFAULT_BASE_URL: &str = "https://rse-with-python.arc.ucl.ac.uk/londontube-service";
pub const DEFAULT_STATION_COUNT: usize = 296;
pub const DEFAULT_LINE_COUNT: usize = 12;

/// Settings for fetching network data and assembling the real-time network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Root URL of the network data service
    pub base_url: String,
    /// Number of stations in the network universe
    pub station_count: usize,
    /// Number of lines, identified as `0..line_count`
    pub line_count: usize,
    /// Line used when a caller does not name one
    pub default_line: LineId,
    /// First date the disruption service has data for
    pub valid_from: NaiveDate,
    /// Last date the disruption service has data for
    pub valid_until: NaiveDate,
    pub request_timeout_secs: u64,
    /// Fetch and build line graphs on the rayon pool
    pub parallel_fetch: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            station_count: DEFAULT_STATION_COUNT,
            line_count: DEFAULT_LINE_COUNT,
            default_line: 0,
            valid_from: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default(),
            valid_until: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default(),
            request_timeout_secs: 30,
            parallel_fetch: false,
        }
    }
}

impl NetworkConfig {
    /// Reads a configuration from a TOML file; missing keys keep their defaults
    pub fn from_toml_file(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to read config '{}': {}", path.display(), e),
            )
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, Error> {
        let config: NetworkConfig =
            toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.station_count == 0 {
            return Err(Error::Config(
                "station_count must be greater than zero".to_string(),
            ));
        }
        if self.line_count == 0 {
            return Err(Error::Config(
                "line_count must be greater than zero".to_string(),
            ));
        }
        if self.default_line >= self.line_count {
            return Err(Error::Config(format!(
                "default_line {} is outside of 0..{}",
                self.default_line, self.line_count
            )));
        }
        if self.valid_from > self.valid_until {
            return Err(Error::Config(format!(
                "valid_from {} is after valid_until {}",
                self.valid_from, self.valid_until
            )));
        }
        Ok(())
    }
}
