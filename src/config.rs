//! Demo configuration.
//!
//! Read from environment variables; every value has a default so an empty
//! environment yields a working configuration.

use url::Url;

use crate::demo::DEFAULT_BASE_URL;
use crate::error::Error;

pub const BASE_URL_VAR: &str = "ENVELOPE_DEMO_BASE_URL";
pub const LOG_FORMAT_VAR: &str = "ENVELOPE_DEMO_LOG_FORMAT";

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL the mock routes are registered under.
    pub base_url: Url,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let raw_url = lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw_url).map_err(|e| Error::Config {
            reason: format!("{BASE_URL_VAR}={raw_url}: {e}"),
        })?;

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse::<LogFormat>().map_err(|_| Error::Config {
                reason: format!("{LOG_FORMAT_VAR}={raw}: expected compact or json"),
            })?,
            None => LogFormat::default(),
        };

        Ok(Self {
            base_url,
            log_format,
        })
    }
}
