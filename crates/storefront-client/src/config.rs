use anyhow::Context;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api_url: String,
    pub token_file: Option<String>,
    pub refresh_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_url = env::var("STOREFRONT_API_URL")
            .unwrap_or_else(|_| "http://localhost:4000/".into());
        let token_file = env::var("STOREFRONT_TOKEN_FILE").ok();
        let refresh_timeout_secs = match env::var("STOREFRONT_REFRESH_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse()
                .context("invalid STOREFRONT_REFRESH_TIMEOUT_SECS")?,
            Err(_) => 10,
        };
        Ok(Self {
            api_url,
            token_file,
            refresh_timeout_secs,
        })
    }
}
