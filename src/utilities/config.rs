use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{Result, UpdaterError};
use crate::utilities::constants::{
    COLLECTION_FILE, THROTTLE_EVERY_ROWS, THROTTLE_PAUSE_MS, UPDATED_COLLECTION_FILE,
    YGOPRODECK_API_URL,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input_path: String,
    pub output_path: String,
    pub api_url: String,
    pub throttle_every: usize,
    pub throttle_pause_ms: u64,
    /// No timeout unless set: an unresponsive service stalls the run.
    pub request_timeout_secs: Option<u64>,
    pub skip_undecodable: bool,
    pub cache_lookups: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: COLLECTION_FILE.to_string(),
            output_path: UPDATED_COLLECTION_FILE.to_string(),
            api_url: YGOPRODECK_API_URL.to_string(),
            throttle_every: THROTTLE_EVERY_ROWS,
            throttle_pause_ms: THROTTLE_PAUSE_MS,
            request_timeout_secs: None,
            skip_undecodable: false,
            cache_lookups: false,
        }
    }
}

impl Config {
    pub fn new() -> Result<Self> {
        let mut config = Config::default();
        config.update_from_env()?;
        Ok(config)
    }

    pub fn throttle_pause(&self) -> Duration {
        Duration::from_millis(self.throttle_pause_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    fn update_from_env(&mut self) -> Result<()> {
        self.update_from(|key| env::var(key).ok())
    }

    fn update_from<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(input_path) = var("COLLECTION_PATH") {
            self.input_path = input_path;
        }
        if let Some(output_path) = var("OUTPUT_PATH") {
            self.output_path = output_path;
        }
        if let Some(api_url) = var("YGO_API_URL") {
            self.api_url = api_url;
        }
        if let Some(every) = var("THROTTLE_EVERY") {
            self.throttle_every = parse_number("THROTTLE_EVERY", &every)?;
        }
        if let Some(pause) = var("THROTTLE_PAUSE_MS") {
            self.throttle_pause_ms = parse_number("THROTTLE_PAUSE_MS", &pause)?;
        }
        if let Some(timeout) = var("REQUEST_TIMEOUT_SECS") {
            self.request_timeout_secs = Some(parse_number("REQUEST_TIMEOUT_SECS", &timeout)?);
        }
        if let Some(skip) = var("SKIP_UNDECODABLE") {
            self.skip_undecodable = skip == "1";
        }
        if let Some(cache) = var("CACHE_LOOKUPS") {
            self.cache_lookups = cache == "1";
        }
        Ok(())
    }
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        UpdaterError::InvalidConfig(format!("{} must be a whole number, got '{}'", key, value))
    })
}
