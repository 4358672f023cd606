//! LevelCredit API client
//!
//! Implements the [`TradelineApi`] port over HTTPS. Every port call is one
//! HTTP round trip. Responses with a failure status are returned as an
//! [`ApiResponse`] carrying the decoded remote errors; only transport
//! problems become [`ApiError`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};
use tradeline_core::api::{
    AccessToken, ApiError, ApiResponse, ApiResult, CreateTradelineSyncRequest, ErrorCollection,
    ErrorEntry, GetPartnerUsersFilter, Order, PatchTradelineSyncRequest, PayProductRequest,
    TradelineSync, User,
};
use tradeline_core::TradelineApi;
use tradeline_domain::constants::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, FAILED_STATUS_ENTRY_POINT,
};
use tradeline_domain::{ApiConfig, ClientCredentials};
use url::Url;

use crate::errors::InfraError;
use crate::http::HttpClient;

const TOKEN_PATH: &[&str] = &["api", "oauth", "v2", "token"];
const TRADELINE_SYNCS_PATH: &[&str] = &["api", "v1", "tradeline-syncs"];
const PARTNER_USERS_PATH: &[&str] = &["api", "v1", "partner", "users"];
const PRODUCTS_PATH: &[&str] = &["api", "v1", "products"];

/// Configuration for [`LevelCreditApiClient`]
#[derive(Debug, Clone)]
pub struct LevelCreditApiConfig {
    /// Base URL of the platform; a path prefix is kept
    pub base_url: String,
    /// Timeout for a single request
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for LevelCreditApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("tradeline-sdk-rust/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl From<&ApiConfig> for LevelCreditApiConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
            ..Self::default()
        }
    }
}

/// HTTP adapter for the [`TradelineApi`] port
#[derive(Clone)]
pub struct LevelCreditApiClient {
    http_client: HttpClient,
    base_url: Url,
}

impl LevelCreditApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the base URL is invalid or the HTTP
    /// client cannot be created
    pub fn new(config: LevelCreditApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ApiError::Config(format!("Invalid base URL '{}': {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Config(format!(
                "Base URL '{}' cannot carry a path",
                config.base_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = HttpClient::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self { http_client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &[&str], tail: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                ApiError::Config(format!("Base URL '{}' cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(path)
            .extend(tail);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url, access_token: Option<&str>) -> RequestBuilder {
        let builder = self.http_client.request(method, url);
        match access_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<(u16, String)> {
        let response = self.http_client.send(request).await?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| ApiError::from(InfraError::from(e)))?;
        Ok((status, body))
    }

    /// Send a request whose successful response carries a `T`.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> ApiResult<ApiResponse<T>> {
        let (status, body) = self.send(request).await?;

        if status >= FAILED_STATUS_ENTRY_POINT {
            return Ok(ApiResponse::with_errors(status, parse_error_body(&body)));
        }
        if body.trim().is_empty() {
            return Ok(ApiResponse::empty(status));
        }

        let value: Value =
            serde_json::from_str(&body).map_err(|e| ApiError::from(InfraError::from(e)))?;
        let errors = embedded_errors(&value);
        if !errors.is_empty() {
            return Ok(ApiResponse::with_errors(status, errors));
        }

        let resource: T =
            serde_json::from_value(value).map_err(|e| ApiError::from(InfraError::from(e)))?;
        Ok(ApiResponse::with_resource(status, resource))
    }

    /// Send a request whose successful response body is ignored.
    async fn execute_without_resource(&self, request: RequestBuilder) -> ApiResult<ApiResponse<()>> {
        let (status, body) = self.send(request).await?;

        let errors = if status >= FAILED_STATUS_ENTRY_POINT {
            parse_error_body(&body)
        } else {
            serde_json::from_str::<Value>(&body)
                .map(|value| embedded_errors(&value))
                .unwrap_or_default()
        };

        Ok(ApiResponse::new(status, errors, None))
    }

    async fn request_token(
        &self,
        credentials: &ClientCredentials,
        grant: &[(&str, &str)],
    ) -> ApiResult<ApiResponse<AccessToken>> {
        let mut form = vec![
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
        ];
        form.extend_from_slice(grant);

        let url = self.endpoint(TOKEN_PATH, &[])?;
        let request = self.request(Method::POST, url, None).form(&form);
        self.execute(request).await
    }
}

#[async_trait]
impl TradelineApi for LevelCreditApiClient {
    #[instrument(skip_all)]
    async fn get_access_token_by_username_password(
        &self,
        credentials: &ClientCredentials,
        username: &str,
        password: &str,
    ) -> ApiResult<ApiResponse<AccessToken>> {
        debug!("Requesting token with password grant");
        self.request_token(
            credentials,
            &[("grant_type", "password"), ("username", username), ("password", password)],
        )
        .await
    }

    #[instrument(skip_all)]
    async fn get_access_token_by_refresh_token(
        &self,
        credentials: &ClientCredentials,
        refresh_token: &str,
    ) -> ApiResult<ApiResponse<AccessToken>> {
        debug!("Requesting token with refresh token grant");
        self.request_token(
            credentials,
            &[("grant_type", "refresh_token"), ("refresh_token", refresh_token)],
        )
        .await
    }

    #[instrument(skip_all)]
    async fn create_tradeline_sync(
        &self,
        request: &CreateTradelineSyncRequest,
        access_token: Option<&str>,
    ) -> ApiResult<ApiResponse<TradelineSync>> {
        let url = self.endpoint(TRADELINE_SYNCS_PATH, &[])?;
        self.execute(self.request(Method::POST, url, access_token).json(request)).await
    }

    #[instrument(skip(self, sync_data_json, access_token))]
    async fn add_data_to_tradeline_sync(
        &self,
        sync_id: i64,
        sync_data_json: &str,
        access_token: Option<&str>,
    ) -> ApiResult<ApiResponse<()>> {
        let url = self.endpoint(TRADELINE_SYNCS_PATH, &[&sync_id.to_string(), "data"])?;
        let request = self
            .request(Method::POST, url, access_token)
            .header(CONTENT_TYPE, "application/json")
            .body(sync_data_json.to_owned());
        self.execute_without_resource(request).await
    }

    #[instrument(skip(self, request, access_token))]
    async fn patch_tradeline_sync(
        &self,
        sync_id: i64,
        request: &PatchTradelineSyncRequest,
        access_token: Option<&str>,
    ) -> ApiResult<ApiResponse<()>> {
        let url = self.endpoint(TRADELINE_SYNCS_PATH, &[&sync_id.to_string()])?;
        self.execute_without_resource(self.request(Method::PATCH, url, access_token).json(request))
            .await
    }

    #[instrument(skip_all)]
    async fn get_partner_users(
        &self,
        filter: &GetPartnerUsersFilter,
        access_token: Option<&str>,
    ) -> ApiResult<ApiResponse<Vec<User>>> {
        let url = self.endpoint(PARTNER_USERS_PATH, &[])?;
        let request = self.request(Method::GET, url, access_token).query(&filter.query_pairs());
        let response: ApiResponse<UsersPayload> = self.execute(request).await?;
        Ok(response.map(UsersPayload::into_users))
    }

    #[instrument(skip(self, request, access_token))]
    async fn pay_product(
        &self,
        product_code: &str,
        request: &PayProductRequest,
        access_token: Option<&str>,
    ) -> ApiResult<ApiResponse<Order>> {
        let url = self.endpoint(PRODUCTS_PATH, &[product_code, "pay"])?;
        self.execute(self.request(Method::POST, url, access_token).json(request)).await
    }
}

/// Partner users come back either as a bare list or as a page.
#[derive(Deserialize)]
#[serde(untagged)]
enum UsersPayload {
    List(Vec<User>),
    Page { results: Vec<User> },
}

impl UsersPayload {
    fn into_users(self) -> Vec<User> {
        match self {
            Self::List(users) | Self::Page { results: users } => users,
        }
    }
}

/// Errors of a failed response.
///
/// Understands `{"errors": [...]}`, OAuth `{"error", "error_description"}`
/// and `{"message"}` bodies. Anything else is reported as raw text.
fn parse_error_body(body: &str) -> ErrorCollection {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return ErrorCollection::new();
    }

    let Ok(value) = serde_json::from_str::<Value>(trimmed) else {
        return vec![ErrorEntry::new(trimmed)].into();
    };

    let errors = embedded_errors(&value);
    if !errors.is_empty() {
        return errors;
    }

    ["error_description", "error", "message"]
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .map(|message| vec![ErrorEntry::new(message)].into())
        .unwrap_or_else(|| vec![ErrorEntry::new(trimmed)].into())
}

/// Entries of an `errors` member, given as a list of messages or objects,
/// or as an object keyed by field.
fn embedded_errors(value: &Value) -> ErrorCollection {
    match value.get("errors") {
        Some(Value::Array(items)) => items.iter().filter_map(error_entry).collect(),
        Some(Value::Object(fields)) => fields
            .iter()
            .flat_map(|(field, messages)| match messages {
                Value::String(message) => vec![ErrorEntry::for_field(field, message)],
                Value::Array(items) => items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(|message| ErrorEntry::for_field(field, message))
                    .collect(),
                _ => Vec::new(),
            })
            .collect(),
        _ => ErrorCollection::new(),
    }
}

fn error_entry(item: &Value) -> Option<ErrorEntry> {
    match item {
        Value::String(message) => Some(ErrorEntry::new(message)),
        Value::Object(object) => {
            let message = object.get("message").and_then(Value::as_str)?;
            let field = ["field", "property_path"]
                .iter()
                .find_map(|key| object.get(*key).and_then(Value::as_str));
            Some(match field {
                Some(field) => ErrorEntry::for_field(field, message),
                None => ErrorEntry::new(message),
            })
        }
        _ => None,
    }
}
