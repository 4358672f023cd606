//! Tradeline client facade - the SDK's public operations

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{info, instrument, warn};
use tradeline_domain::constants::{backreporting_price, BACKREPORTING_PRODUCT_CODE};
use tradeline_domain::{
    AuthenticateRequest, AuthenticateResponse, ClientCredentials, OrderResponse,
    PaymentSourceDataRequest, Result,
};

use crate::mediator::RequestMediator;
use crate::ports::TradelineApi;
use crate::sync_data::extract_email;

/// Entry point of the SDK
pub struct TradelineClient {
    mediator: RequestMediator,
}

impl TradelineClient {
    pub fn new(api: Arc<dyn TradelineApi>, credentials: ClientCredentials) -> Self {
        Self::from_mediator(RequestMediator::new(api, credentials))
    }

    pub fn from_mediator(mediator: RequestMediator) -> Self {
        Self { mediator }
    }

    /// Default token for operations called without an explicit access token.
    pub fn set_access_token(&mut self, access_token: impl Into<String>) {
        self.mediator.set_access_token(access_token);
    }

    /// Individual remote operations, for callers that sequence them
    /// themselves.
    pub fn mediator(&self) -> &RequestMediator {
        &self.mediator
    }

    /// Obtain a token pair.
    ///
    /// Requests without a credential override use the client's own
    /// credentials.
    pub async fn authenticate(&self, request: AuthenticateRequest) -> Result<AuthenticateResponse> {
        let started = Instant::now();
        let result = self.request_token(request).await;
        log_operation_outcome("authenticate", started.elapsed(), &result);
        result
    }

    async fn request_token(&self, request: AuthenticateRequest) -> Result<AuthenticateResponse> {
        match request {
            AuthenticateRequest::RefreshToken { refresh_token } => {
                self.mediator.get_access_token_by_refresh_token(&refresh_token, None).await
            }
            AuthenticateRequest::Password { username, password } => {
                self.mediator.get_access_token_by_username_password(&username, &password, None).await
            }
            AuthenticateRequest::RefreshTokenWithCredentials { credentials, refresh_token } => {
                self.mediator
                    .get_access_token_by_refresh_token(&refresh_token, Some(credentials))
                    .await
            }
            AuthenticateRequest::PasswordWithCredentials { credentials, username, password } => {
                self.mediator
                    .get_access_token_by_username_password(&username, &password, Some(credentials))
                    .await
            }
        }
    }

    /// Import a user's rent history and buy the backreporting product for
    /// them.
    ///
    /// Runs, in order: create sync, add `sync_data_json`, start sync,
    /// resolve the subscription of the user whose email is in the sync data,
    /// pay `LC-BACKREPORT` against it. Every call uses `access_token`.
    ///
    /// The first failing step aborts the purchase and its error is returned
    /// unchanged. Steps already completed remotely are not rolled back.
    #[instrument(skip_all)]
    pub async fn purchase_backreporting(
        &self,
        access_token: &str,
        sync_data_json: &str,
        payment_source: &PaymentSourceDataRequest,
    ) -> Result<OrderResponse> {
        let started = Instant::now();
        let result = self.purchase(access_token, sync_data_json, payment_source).await;
        log_operation_outcome("purchase_backreporting", started.elapsed(), &result);
        result
    }

    async fn purchase(
        &self,
        access_token: &str,
        sync_data_json: &str,
        payment_source: &PaymentSourceDataRequest,
    ) -> Result<OrderResponse> {
        let token = Some(access_token);

        let sync_id = self.mediator.create_tradeline_sync(token).await?;
        self.mediator.add_data_to_tradeline_sync(sync_id, sync_data_json, token).await?;
        self.mediator.start_tradeline_sync(sync_id, token).await?;

        let email = extract_email(sync_data_json)?;
        let url = self.mediator.get_subscription_resource_url_by_user_email(&email, token).await?;

        let order = self
            .mediator
            .pay_product(
                BACKREPORTING_PRODUCT_CODE,
                backreporting_price(),
                &url,
                payment_source,
                token,
            )
            .await?;

        info!(sync_id, order_id = order.id(), status = %order.status(), "Backreporting purchased");
        Ok(order)
    }
}

/// One structured success/failure event per facade operation. Failures carry
/// the error label, never the message, since remote messages may echo user
/// data.
fn log_operation_outcome<T>(operation: &str, elapsed: Duration, result: &Result<T>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match result {
        Ok(_) => info!(operation, duration_ms, "operation_success"),
        Err(err) => warn!(operation, duration_ms, error = err.label(), "operation_failure"),
    }
}
