//! Configuration file model
//!
//! The configuration file is optional TOML. Every key is optional; command-line
//! flags take precedence over it and built-in defaults fill whatever is left.
//!
//! ```toml
//! [finance]
//! regular_contributions_period = 12
//!
//! [internet]
//! medium_graphql_url = "https://medium.com/_/graphql"
//! timeout = 10
//! ```

use serde::{Deserialize, Serialize};

use crate::finance::DEFAULT_CONTRIBUTIONS_PERIOD;
use crate::medium::{DEFAULT_MEDIUM_GRAPHQL_URL, DEFAULT_MEDIUM_TIMEOUT_SECS};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub finance: FinanceConfig,
    pub internet: InternetConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinanceConfig {
    pub regular_contributions_period: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InternetConfig {
    pub medium_graphql_url: Option<String>,
    pub timeout: Option<u64>,
}

impl Config {
    pub fn contributions_period(&self, flag: Option<u32>) -> u32 {
        resolve(
            flag,
            self.finance.regular_contributions_period,
            DEFAULT_CONTRIBUTIONS_PERIOD,
        )
    }

    pub fn medium_graphql_url(&self) -> &str {
        self.internet
            .medium_graphql_url
            .as_deref()
            .unwrap_or(DEFAULT_MEDIUM_GRAPHQL_URL)
    }

    pub fn medium_timeout(&self, flag: Option<u64>) -> u64 {
        resolve(flag, self.internet.timeout, DEFAULT_MEDIUM_TIMEOUT_SECS)
    }
}

/// Pick the flag value, then the configured value, then the default
pub fn resolve<T>(flag: Option<T>, configured: Option<T>, default: T) -> T {
    flag.or(configured).unwrap_or(default)
}

/// Parse the contents of a configuration file
pub fn parse_config(contents: &str) -> Result<Config, String> {
    toml::from_str(contents).map_err(|e| format!("Invalid configuration: {e}"))
}
