//! Shared test helpers for `tradeline-core` integration tests.
//!
//! Provides an in-memory [`TradelineApi`] that records every call and
//! answers with canned responses, so tests can assert on call order and
//! arguments without a network.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use tradeline_core::api::{
    AccessToken, ApiResponse, ApiResult, CreateTradelineSyncRequest, GetPartnerUsersFilter, Order,
    PatchTradelineSyncRequest, PayProductRequest, Subscription, TradelineSync, User,
};
use tradeline_core::TradelineApi;
use tradeline_domain::{
    CardAccount, ClientCredentials, OrderStatus, PaymentAccount, PaymentAccountAddress,
    PaymentSourceDataRequest,
};

pub const SUBSCRIPTION_URL: &str = "https://api.levelcredit.com/api/v1/subscriptions/10";
pub const SYNC_ID: i64 = 15;

/// A call received by [`MockTradelineApi`], with owned arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    TokenByPassword { credentials: ClientCredentials, username: String, password: String },
    TokenByRefreshToken { credentials: ClientCredentials, refresh_token: String },
    CreateTradelineSync { request: CreateTradelineSyncRequest, access_token: Option<String> },
    AddDataToTradelineSync { sync_id: i64, sync_data_json: String, access_token: Option<String> },
    PatchTradelineSync {
        sync_id: i64,
        request: PatchTradelineSyncRequest,
        access_token: Option<String>,
    },
    GetPartnerUsers { filter: GetPartnerUsersFilter, access_token: Option<String> },
    PayProduct { product_code: String, request: PayProductRequest, access_token: Option<String> },
}

impl RecordedCall {
    /// Short name used by call-order assertions.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TokenByPassword { .. } => "token_by_password",
            Self::TokenByRefreshToken { .. } => "token_by_refresh_token",
            Self::CreateTradelineSync { .. } => "create_tradeline_sync",
            Self::AddDataToTradelineSync { .. } => "add_data_to_tradeline_sync",
            Self::PatchTradelineSync { .. } => "patch_tradeline_sync",
            Self::GetPartnerUsers { .. } => "get_partner_users",
            Self::PayProduct { .. } => "pay_product",
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        match self {
            Self::TokenByPassword { .. } | Self::TokenByRefreshToken { .. } => None,
            Self::CreateTradelineSync { access_token, .. }
            | Self::AddDataToTradelineSync { access_token, .. }
            | Self::PatchTradelineSync { access_token, .. }
            | Self::GetPartnerUsers { access_token, .. }
            | Self::PayProduct { access_token, .. } => access_token.as_deref(),
        }
    }
}

/// In-memory mock for `TradelineApi`.
///
/// Every operation succeeds by default. Use the `with_*` helpers to swap
/// in a different outcome for one operation.
#[derive(Clone)]
pub struct MockTradelineApi {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    token: ApiResult<ApiResponse<AccessToken>>,
    create_sync: ApiResult<ApiResponse<TradelineSync>>,
    add_data: ApiResult<ApiResponse<()>>,
    patch_sync: ApiResult<ApiResponse<()>>,
    users: ApiResult<ApiResponse<Vec<User>>>,
    pay: ApiResult<ApiResponse<Order>>,
}

impl Default for MockTradelineApi {
    fn default() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            token: Ok(ApiResponse::with_resource(200, access_token())),
            create_sync: Ok(ApiResponse::with_resource(
                201,
                TradelineSync { id: SYNC_ID, status: Some("new".to_string()) },
            )),
            add_data: Ok(ApiResponse::empty(200)),
            patch_sync: Ok(ApiResponse::empty(200)),
            users: Ok(ApiResponse::with_resource(200, vec![user_with_subscriptions(1)])),
            pay: Ok(ApiResponse::with_resource(201, order())),
        }
    }
}

impl MockTradelineApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token_response(mut self, response: ApiResult<ApiResponse<AccessToken>>) -> Self {
        self.token = response;
        self
    }

    pub fn with_create_sync_response(
        mut self,
        response: ApiResult<ApiResponse<TradelineSync>>,
    ) -> Self {
        self.create_sync = response;
        self
    }

    pub fn with_add_data_response(mut self, response: ApiResult<ApiResponse<()>>) -> Self {
        self.add_data = response;
        self
    }

    pub fn with_patch_sync_response(mut self, response: ApiResult<ApiResponse<()>>) -> Self {
        self.patch_sync = response;
        self
    }

    pub fn with_users_response(mut self, response: ApiResult<ApiResponse<Vec<User>>>) -> Self {
        self.users = response;
        self
    }

    pub fn with_pay_response(mut self, response: ApiResult<ApiResponse<Order>>) -> Self {
        self.pay = response;
        self
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_names(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().iter().map(RecordedCall::name).collect()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl TradelineApi for MockTradelineApi {
    async fn get_access_token_by_username_password(
        &self,
        credentials: &ClientCredentials,
        username: &str,
        password: &str,
    ) -> ApiResult<ApiResponse<AccessToken>> {
        self.record(RecordedCall::TokenByPassword {
            credentials: credentials.clone(),
            username: username.to_string(),
            password: password.to_string(),
        });
        self.token.clone()
    }

    async fn get_access_token_by_refresh_token(
        &self,
        credentials: &ClientCredentials,
        refresh_token: &str,
    ) -> ApiResult<ApiResponse<AccessToken>> {
        self.record(RecordedCall::TokenByRefreshToken {
            credentials: credentials.clone(),
            refresh_token: refresh_token.to_string(),
        });
        self.token.clone()
    }

    async fn create_tradeline_sync(
        &self,
        request: &CreateTradelineSyncRequest,
        access_token: Option<&str>,
    ) -> ApiResult<ApiResponse<TradelineSync>> {
        self.record(RecordedCall::CreateTradelineSync {
            request: *request,
            access_token: access_token.map(str::to_string),
        });
        self.create_sync.clone()
    }

    async fn add_data_to_tradeline_sync(
        &self,
        sync_id: i64,
        sync_data_json: &str,
        access_token: Option<&str>,
    ) -> ApiResult<ApiResponse<()>> {
        self.record(RecordedCall::AddDataToTradelineSync {
            sync_id,
            sync_data_json: sync_data_json.to_string(),
            access_token: access_token.map(str::to_string),
        });
        self.add_data.clone()
    }

    async fn patch_tradeline_sync(
        &self,
        sync_id: i64,
        request: &PatchTradelineSyncRequest,
        access_token: Option<&str>,
    ) -> ApiResult<ApiResponse<()>> {
        self.record(RecordedCall::PatchTradelineSync {
            sync_id,
            request: *request,
            access_token: access_token.map(str::to_string),
        });
        self.patch_sync.clone()
    }

    async fn get_partner_users(
        &self,
        filter: &GetPartnerUsersFilter,
        access_token: Option<&str>,
    ) -> ApiResult<ApiResponse<Vec<User>>> {
        self.record(RecordedCall::GetPartnerUsers {
            filter: filter.clone(),
            access_token: access_token.map(str::to_string),
        });
        self.users.clone()
    }

    async fn pay_product(
        &self,
        product_code: &str,
        request: &PayProductRequest,
        access_token: Option<&str>,
    ) -> ApiResult<ApiResponse<Order>> {
        self.record(RecordedCall::PayProduct {
            product_code: product_code.to_string(),
            request: request.clone(),
            access_token: access_token.map(str::to_string),
        });
        self.pay.clone()
    }
}

pub fn access_token() -> AccessToken {
    AccessToken {
        access_token: "access_token".to_string(),
        refresh_token: "refresh_token".to_string(),
        expires_in: 3600,
        token_type: Some("bearer".to_string()),
        scope: None,
    }
}

pub fn user_with_subscriptions(count: usize) -> User {
    let subscriptions = (0..count)
        .map(|index| Subscription {
            id: Some(10 + index as i64),
            url: if index == 0 {
                SUBSCRIPTION_URL.to_string()
            } else {
                format!("https://api.levelcredit.com/api/v1/subscriptions/{}", 10 + index)
            },
            status: Some("active".to_string()),
        })
        .collect();

    User { id: Some(7), email: "jane@example.com".to_string(), subscriptions }
}

pub fn order() -> Order {
    Order {
        id: 1,
        reference_id: "transaction_id".to_string(),
        status: OrderStatus::Complete,
        total: Decimal::new(4995, 2),
        created_at: Utc.with_ymd_and_hms(2021, 6, 1, 12, 30, 0).unwrap(),
    }
}

pub fn client_credentials() -> ClientCredentials {
    ClientCredentials::new("client_id", "client_secret")
}

pub fn credit_card_source() -> PaymentSourceDataRequest {
    PaymentSourceDataRequest::new(
        PaymentAccount::CreditCard(CardAccount::new(
            "Some H. Name",
            "4343-4343-4343-4343",
            chrono::NaiveDate::from_ymd_opt(2030, 12, 31).unwrap(),
            "444",
        )),
        PaymentAccountAddress::new("123 Street", "Test City", "TS", 99999),
    )
}

pub fn sync_data_json() -> String {
    r#"[{"first_name":"Jane","last_name":"Roe","email":"jane@example.com","rent":1200}]"#
        .to_string()
}
