//! Client construction - wires the HTTP adapter into the facade

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use tradeline_core::api::ApiError;
use tradeline_core::{RequestMediator, TradelineApi, TradelineClient};
use tradeline_domain::{ClientCredentials, Result, TradelineConfig, TradelineError};
use tradeline_infra::{config, LevelCreditApiClient, LevelCreditApiConfig};

/// Builder for a [`TradelineClient`] talking to the LevelCredit API.
///
/// ```no_run
/// use tradeline::{ClientCredentials, TradelineClientBuilder};
///
/// let client = TradelineClientBuilder::new()
///     .credentials(ClientCredentials::new("client_id", "client_secret"))
///     .base_url("https://sandbox.levelcredit.com")
///     .build()?;
/// # Ok::<(), tradeline::TradelineError>(())
/// ```
#[derive(Clone, Default)]
pub struct TradelineClientBuilder {
    credentials: Option<ClientCredentials>,
    api: LevelCreditApiConfig,
    access_token: Option<String>,
}

impl fmt::Debug for TradelineClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TradelineClientBuilder")
            .field("credentials", &self.credentials)
            .field("api", &self.api)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl TradelineClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder preloaded with a loaded configuration.
    pub fn from_config(config: &TradelineConfig) -> Self {
        Self {
            credentials: Some(config.credentials.clone()),
            api: LevelCreditApiConfig::from(&config.api),
            access_token: None,
        }
    }

    /// Builder preloaded from `.env`, environment variables or a config
    /// file.
    ///
    /// # Errors
    ///
    /// Returns [`TradelineError::Config`] if no usable configuration is
    /// found.
    pub fn from_env() -> Result<Self> {
        config::load().map(|config| Self::from_config(&config))
    }

    pub fn credentials(mut self, credentials: ClientCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.api.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.api.user_agent = user_agent.into();
        self
    }

    /// Default token used by operations called without one.
    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`TradelineError::Config`] if credentials are missing or the
    /// HTTP adapter cannot be created from the configured base URL.
    pub fn build(self) -> Result<TradelineClient> {
        let credentials = self
            .credentials
            .ok_or_else(|| TradelineError::Config("Client credentials are required".into()))?;

        debug!(base_url = %self.api.base_url, timeout = ?self.api.timeout, "Building tradeline client");
        let api: Arc<dyn TradelineApi> =
            Arc::new(LevelCreditApiClient::new(self.api).map_err(config_error)?);

        let mut mediator = RequestMediator::new(api, credentials);
        if let Some(token) = self.access_token {
            mediator.set_access_token(token);
        }

        Ok(TradelineClient::from_mediator(mediator))
    }
}

fn config_error(err: ApiError) -> TradelineError {
    match err {
        ApiError::Config(message) => TradelineError::Config(message),
        other => TradelineError::Config(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use tradeline_domain::ApiConfig;

    use super::*;

    #[test]
    fn build_requires_credentials() {
        let err = TradelineClientBuilder::new().build().err().expect("missing credentials");
        assert_eq!(err, TradelineError::Config("Client credentials are required".into()));
    }

    #[test]
    fn invalid_base_url_is_a_config_error() {
        let err = TradelineClientBuilder::new()
            .credentials(ClientCredentials::new("id", "secret"))
            .base_url("not a url")
            .build()
            .err()
            .expect("invalid url");

        match err {
            TradelineError::Config(message) => {
                assert!(message.starts_with("Invalid base URL 'not a url'"), "{message}");
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn from_config_carries_api_settings() {
        let mut config = TradelineConfig::new(ClientCredentials::new("id", "secret"));
        config.api = ApiConfig { base_url: "https://sandbox.test".into(), timeout_seconds: 7 };

        let builder = TradelineClientBuilder::from_config(&config);
        assert_eq!(builder.api.base_url, "https://sandbox.test");
        assert_eq!(builder.api.timeout, Duration::from_secs(7));
        assert_eq!(builder.credentials, Some(ClientCredentials::new("id", "secret")));
    }

    #[test]
    fn default_token_reaches_the_mediator() {
        let client = TradelineClientBuilder::new()
            .credentials(ClientCredentials::new("id", "secret"))
            .access_token("default-token")
            .build()
            .expect("client");

        assert_eq!(client.mediator().access_token(), Some("default-token"));
        assert_eq!(client.mediator().credentials().client_id, "id");
    }
}
