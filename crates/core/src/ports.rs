//! Port to the remote LevelCredit platform
//!
//! Implemented by the HTTP gateway in `tradeline-infra` and by in-memory
//! mocks in tests. Every method performs one remote call. A returned
//! [`ApiResponse`] may still describe a failure; only transport problems
//! surface as [`ApiError`](crate::api::ApiError).

use async_trait::async_trait;
use tradeline_domain::ClientCredentials;

use crate::api::{
    AccessToken, ApiResponse, ApiResult, CreateTradelineSyncRequest, GetPartnerUsersFilter, Order,
    PatchTradelineSyncRequest, PayProductRequest, TradelineSync, User,
};

/// Remote operations of the LevelCredit API used by the SDK
#[async_trait]
pub trait TradelineApi: Send + Sync {
    /// Exchange partner credentials plus user login for a token pair
    async fn get_access_token_by_username_password(
        &self,
        credentials: &ClientCredentials,
        username: &str,
        password: &str,
    ) -> ApiResult<ApiResponse<AccessToken>>;

    /// Exchange partner credentials plus a refresh token for a new token pair
    async fn get_access_token_by_refresh_token(
        &self,
        credentials: &ClientCredentials,
        refresh_token: &str,
    ) -> ApiResult<ApiResponse<AccessToken>>;

    async fn create_tradeline_sync(
        &self,
        request: &CreateTradelineSyncRequest,
        access_token: Option<&str>,
    ) -> ApiResult<ApiResponse<TradelineSync>>;

    /// Upload the partner's JSON document into a sync. The body is sent as is.
    async fn add_data_to_tradeline_sync(
        &self,
        sync_id: i64,
        sync_data_json: &str,
        access_token: Option<&str>,
    ) -> ApiResult<ApiResponse<()>>;

    async fn patch_tradeline_sync(
        &self,
        sync_id: i64,
        request: &PatchTradelineSyncRequest,
        access_token: Option<&str>,
    ) -> ApiResult<ApiResponse<()>>;

    async fn get_partner_users(
        &self,
        filter: &GetPartnerUsersFilter,
        access_token: Option<&str>,
    ) -> ApiResult<ApiResponse<Vec<User>>>;

    async fn pay_product(
        &self,
        product_code: &str,
        request: &PayProductRequest,
        access_token: Option<&str>,
    ) -> ApiResult<ApiResponse<Order>>;
}
