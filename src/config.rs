use dotenvy::dotenv;
use std::env;
use url::Url;

use crate::client::AdminApiClient;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub access_token: Option<String>,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok(); // Load .env file if present

        let api_base_url = env::var("ADMIN_API_BASE_URL")
            .map_err(|_| anyhow::anyhow!("ADMIN_API_BASE_URL must be set"))?;
        Url::parse(&api_base_url)
            .map_err(|err| anyhow::anyhow!("ADMIN_API_BASE_URL is not a valid URL: {err}"))?;

        Ok(Config {
            api_base_url,
            access_token: env::var("ADMIN_ACCESS_TOKEN").ok(),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,
        })
    }

    /// Builds an API client for this configuration, authorized when a token
    /// is present.
    pub fn client(&self) -> AdminApiClient {
        let client = AdminApiClient::with_timeout(&self.api_base_url, self.http_timeout_secs);
        match &self.access_token {
            Some(token) => client.with_access_token(token),
            None => client,
        }
    }
}

/// Masks an access token for log and console output.
pub fn mask_token(token: &str) -> String {
    if token.len() <= 8 {
        return "****".to_string();
    }
    format!("{}****{}", &token[..4], &token[token.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_short_tokens_entirely() {
        assert_eq!(mask_token("abc"), "****");
        assert_eq!(mask_token("12345678"), "****");
    }

    #[test]
    fn masks_the_middle_of_long_tokens() {
        assert_eq!(mask_token("abcd1234efgh"), "abcd****efgh");
    }
}
