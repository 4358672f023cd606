//! Request mediator
//!
//! One method per remote operation. Each method calls the
//! [`TradelineApi`] port once, classifies the outcome and maps the payload
//! into the domain model:
//!
//! - transport failure: [`TradelineError::Client`] prefixed with the
//!   operation description
//! - status >= 400 or remote errors: [`TradelineError::Response`] carrying
//!   the remote error text
//! - otherwise the mapped resource
//!
//! Credentials and access tokens are passed to the port per call, so the
//! mediator holds no state that changes while a request is in flight.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, error, instrument};
use tradeline_domain::constants::{
    FAILED_STATUS_ENTRY_POINT, SUBSCRIPTION_NOT_CREATED_MESSAGE, USER_NOT_IMPORTED_MESSAGE,
};
use tradeline_domain::{
    AuthenticateResponse, ClientCredentials, OrderResponse, PaymentSourceDataRequest, Result,
    TradelineError,
};

use crate::api::{
    ApiError, ApiResponse, CreateTradelineSyncRequest, GetPartnerUsersFilter,
    PatchTradelineSyncRequest, PayProductRequest, UserEmbeddedEntity,
};
use crate::mapping::{map_authenticate_response, map_order_response, map_payment_source};
use crate::ports::TradelineApi;

/// Remote operations, used for error prefixes and log messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Authenticate,
    CreateTradelineSync,
    AddDataToTradelineSync,
    StartTradelineSync,
    GetSubscriptionUrl,
    PayProduct,
}

impl Operation {
    /// Prefix of [`TradelineError::Client`] messages.
    fn request_description(self) -> &'static str {
        match self {
            Self::Authenticate => "Get error on authenticate request",
            Self::CreateTradelineSync => "Get error on create tradeline sync request",
            Self::AddDataToTradelineSync => "Get error on add data to tradeline sync request",
            Self::StartTradelineSync => "Get error on start tradeline sync request",
            Self::GetSubscriptionUrl => "Get error on get subscription url request",
            Self::PayProduct => "Get error on pay product request",
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            Self::Authenticate => "Authentication failed",
            Self::CreateTradelineSync => "Creating tradeline sync failed",
            Self::AddDataToTradelineSync => "Adding data to tradeline sync failed",
            Self::StartTradelineSync => "Starting tradeline sync failed",
            Self::GetSubscriptionUrl => "Getting subscription url failed",
            Self::PayProduct => "Paying product failed",
        }
    }
}

/// Mediates between the SDK surface and the [`TradelineApi`] port
pub struct RequestMediator {
    api: Arc<dyn TradelineApi>,
    credentials: ClientCredentials,
    access_token: Option<String>,
}

impl RequestMediator {
    pub fn new(api: Arc<dyn TradelineApi>, credentials: ClientCredentials) -> Self {
        Self { api, credentials, access_token: None }
    }

    /// Builder form of [`Self::set_access_token`].
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Default token for calls made without an explicit access token.
    pub fn set_access_token(&mut self, access_token: impl Into<String>) {
        self.access_token = Some(access_token.into());
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn credentials(&self) -> &ClientCredentials {
        &self.credentials
    }

    /// `true` when the remote call succeeded: status below 400 and no
    /// reported errors.
    pub fn is_success_api_response<T>(response: &ApiResponse<T>) -> bool {
        response.status_code < FAILED_STATUS_ENTRY_POINT && response.errors.is_empty()
    }

    /// Credentials for one token request. Each field of the override
    /// replaces the configured one only when it is non-empty.
    fn effective_credentials(&self, credentials: Option<ClientCredentials>) -> ClientCredentials {
        let Some(credentials) = credentials else {
            return self.credentials.clone();
        };

        let pick = |value: String, configured: &str| {
            if value.is_empty() {
                configured.to_string()
            } else {
                value
            }
        };
        ClientCredentials::new(
            pick(credentials.client_id, &self.credentials.client_id),
            pick(credentials.client_secret, &self.credentials.client_secret),
        )
    }

    #[instrument(skip_all)]
    pub async fn get_access_token_by_username_password(
        &self,
        username: &str,
        password: &str,
        credentials: Option<ClientCredentials>,
    ) -> Result<AuthenticateResponse> {
        debug!("Handle \"getAccessTokenByUsernamePassword\" request");
        let credentials = self.effective_credentials(credentials);

        let response = self
            .api
            .get_access_token_by_username_password(&credentials, username, password)
            .await
            .map_err(|err| client_error(Operation::Authenticate, err))?;

        let token = require_resource(Operation::Authenticate, response)?;
        debug!(expires_in = token.expires_in, "Access token received");
        Ok(map_authenticate_response(token))
    }

    #[instrument(skip_all)]
    pub async fn get_access_token_by_refresh_token(
        &self,
        refresh_token: &str,
        credentials: Option<ClientCredentials>,
    ) -> Result<AuthenticateResponse> {
        debug!("Handle \"getAccessTokenByRefreshToken\" request");
        let credentials = self.effective_credentials(credentials);

        let response = self
            .api
            .get_access_token_by_refresh_token(&credentials, refresh_token)
            .await
            .map_err(|err| client_error(Operation::Authenticate, err))?;

        let token = require_resource(Operation::Authenticate, response)?;
        debug!(expires_in = token.expires_in, "Access token refreshed");
        Ok(map_authenticate_response(token))
    }

    /// Create a synchronous tradeline sync and return its id.
    #[instrument(skip_all)]
    pub async fn create_tradeline_sync(&self, access_token: Option<&str>) -> Result<i64> {
        debug!("Handle \"createTradelineSync\" request");
        let request = CreateTradelineSyncRequest::synchronous();

        let response = self
            .api
            .create_tradeline_sync(&request, self.resolve_token(access_token))
            .await
            .map_err(|err| client_error(Operation::CreateTradelineSync, err))?;

        let sync = require_resource(Operation::CreateTradelineSync, response)?;
        debug!(sync_id = sync.id, "Tradeline sync created");
        Ok(sync.id)
    }

    #[instrument(skip(self, sync_data_json, access_token))]
    pub async fn add_data_to_tradeline_sync(
        &self,
        sync_id: i64,
        sync_data_json: &str,
        access_token: Option<&str>,
    ) -> Result<()> {
        debug!("Handle \"addDataToTradelineSync\" request");

        let response = self
            .api
            .add_data_to_tradeline_sync(sync_id, sync_data_json, self.resolve_token(access_token))
            .await
            .map_err(|err| client_error(Operation::AddDataToTradelineSync, err))?;

        ensure_success(Operation::AddDataToTradelineSync, response)?;
        debug!("Data added to tradeline sync");
        Ok(())
    }

    /// Move the sync to `processing`.
    #[instrument(skip(self, access_token))]
    pub async fn start_tradeline_sync(&self, sync_id: i64, access_token: Option<&str>) -> Result<()> {
        debug!("Handle \"startTradelineSync\" request");
        let request = PatchTradelineSyncRequest::start_processing();

        let response = self
            .api
            .patch_tradeline_sync(sync_id, &request, self.resolve_token(access_token))
            .await
            .map_err(|err| client_error(Operation::StartTradelineSync, err))?;

        ensure_success(Operation::StartTradelineSync, response)?;
        debug!("Tradeline sync started");
        Ok(())
    }

    /// Resource URL of the single subscription of the user with `email`.
    ///
    /// # Errors
    ///
    /// [`TradelineError::Logic`] unless exactly one user with exactly one
    /// subscription is returned.
    #[instrument(skip_all)]
    pub async fn get_subscription_resource_url_by_user_email(
        &self,
        email: &str,
        access_token: Option<&str>,
    ) -> Result<String> {
        debug!("Handle \"getSubscriptionResourceUrlByUserEmail\" request");
        let filter =
            GetPartnerUsersFilter::new().email(email).embed(UserEmbeddedEntity::Subscriptions);

        let response = self
            .api
            .get_partner_users(&filter, self.resolve_token(access_token))
            .await
            .map_err(|err| client_error(Operation::GetSubscriptionUrl, err))?;

        let users = ensure_success(Operation::GetSubscriptionUrl, response)?.unwrap_or_default();
        let [user] = users.as_slice() else {
            error!(user_count = users.len(), "{}", USER_NOT_IMPORTED_MESSAGE);
            return Err(TradelineError::Logic(USER_NOT_IMPORTED_MESSAGE.to_string()));
        };
        let [subscription] = user.subscriptions.as_slice() else {
            error!(
                subscription_count = user.subscriptions.len(),
                "{}", SUBSCRIPTION_NOT_CREATED_MESSAGE
            );
            return Err(TradelineError::Logic(SUBSCRIPTION_NOT_CREATED_MESSAGE.to_string()));
        };

        debug!(url = %subscription.url, "Subscription resolved");
        Ok(subscription.url.clone())
    }

    #[instrument(skip(self, object_resource_url, payment_source, access_token))]
    pub async fn pay_product(
        &self,
        product_code: &str,
        amount: Decimal,
        object_resource_url: &str,
        payment_source: &PaymentSourceDataRequest,
        access_token: Option<&str>,
    ) -> Result<OrderResponse> {
        debug!("Handle \"payProduct\" request");
        let request = PayProductRequest {
            amount,
            object_url: object_resource_url.to_string(),
            payment_account: map_payment_source(payment_source),
        };

        let response = self
            .api
            .pay_product(product_code, &request, self.resolve_token(access_token))
            .await
            .map_err(|err| client_error(Operation::PayProduct, err))?;

        let order = require_resource(Operation::PayProduct, response)?;
        debug!(order_id = order.id, status = %order.status, "Product paid");
        Ok(map_order_response(order))
    }

    fn resolve_token<'a>(&'a self, access_token: Option<&'a str>) -> Option<&'a str> {
        access_token.or(self.access_token.as_deref())
    }
}

fn client_error(operation: Operation, err: ApiError) -> TradelineError {
    let message = format!("{}: {}", operation.request_description(), err);
    error!(
        category = ?err.category(),
        "{}: {}",
        operation.failure_message(),
        message
    );
    TradelineError::Client(message)
}

/// Resource of a successful response, `None` when the body carried none.
fn ensure_success<T>(operation: Operation, response: ApiResponse<T>) -> Result<Option<T>> {
    if RequestMediator::is_success_api_response(&response) {
        return Ok(response.resource);
    }

    let message = if response.errors.is_empty() {
        format!("Request failed with status {}", response.status_code)
    } else {
        response.errors.to_string()
    };
    error!(status = response.status_code, "{}: {}", operation.failure_message(), message);
    Err(TradelineError::Response(message))
}

fn require_resource<T>(operation: Operation, response: ApiResponse<T>) -> Result<T> {
    let status = response.status_code;
    ensure_success(operation, response)?.ok_or_else(|| {
        let message = format!("Response with status {status} has no body");
        error!(status, "{}: {}", operation.failure_message(), message);
        TradelineError::Response(message)
    })
}

#[cfg(test)]
mod tests {
    use crate::api::{ErrorCollection, ErrorEntry};

    use super::*;

    #[test]
    fn success_classification_grid() {
        let no_errors = ErrorCollection::new();
        let some_errors: ErrorCollection = vec![ErrorEntry::new("boom")].into();

        let cases = [
            (200, &no_errors, true),
            (201, &no_errors, true),
            (399, &no_errors, true),
            (400, &no_errors, false),
            (500, &no_errors, false),
            (200, &some_errors, false),
            (404, &some_errors, false),
        ];

        for (status, errors, expected) in cases {
            let response: ApiResponse<()> = ApiResponse::new(status, errors.clone(), None);
            assert_eq!(
                RequestMediator::is_success_api_response(&response),
                expected,
                "status {status} with {} errors",
                errors.len()
            );
        }
    }

    #[test]
    fn failure_without_errors_reports_status() {
        let response: ApiResponse<()> = ApiResponse::empty(503);
        let err = ensure_success(Operation::StartTradelineSync, response).unwrap_err();
        assert_eq!(err, TradelineError::Response("Request failed with status 503".to_string()));
    }

    #[test]
    fn client_error_is_prefixed() {
        let err = client_error(
            Operation::PayProduct,
            ApiError::Network("connection refused".to_string()),
        );
        assert_eq!(
            err,
            TradelineError::Client(
                "Get error on pay product request: Network error: connection refused".to_string()
            )
        );
    }
}
