use crate::config::toml_config::HttpConfig;
use crate::core::{Fetcher, Payload};
use crate::utils::error::{FetchError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub struct HttpFetcher {
    client: Client,
    strict_status: bool,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            strict_status: config.strict_status,
        })
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Payload> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        tracing::debug!(
            "Response status: {}, content type: {}",
            status,
            content_type.as_deref().unwrap_or("-")
        );

        if self.strict_status && !status.is_success() {
            return Err(FetchError::StatusError {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // The whole body is buffered before anything touches the destination.
        let body = response.bytes().await?.to_vec();

        Ok(Payload {
            status: status.as_u16(),
            content_type,
            body,
        })
    }
}
