//! Request payloads sent to the LevelCredit API

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Processing mode of a tradeline sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradelineSyncType {
    Synchronous,
    Asynchronous,
}

/// Body of `POST /api/v1/tradeline-syncs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTradelineSyncRequest {
    #[serde(rename = "type")]
    pub sync_type: TradelineSyncType,
}

impl CreateTradelineSyncRequest {
    pub fn synchronous() -> Self {
        Self { sync_type: TradelineSyncType::Synchronous }
    }
}

/// Status a tradeline sync can be moved to by the partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradelineSyncStatus {
    Processing,
}

/// Body of `PATCH /api/v1/tradeline-syncs/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchTradelineSyncRequest {
    pub status: TradelineSyncStatus,
}

impl PatchTradelineSyncRequest {
    pub fn start_processing() -> Self {
        Self { status: TradelineSyncStatus::Processing }
    }
}

/// Entities that can be embedded into a partner user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserEmbeddedEntity {
    Subscriptions,
}

impl UserEmbeddedEntity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Subscriptions => "subscriptions",
        }
    }
}

/// Query of `GET /api/v1/partner/users`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPartnerUsersFilter {
    pub email: Option<String>,
    pub embedded: Vec<UserEmbeddedEntity>,
}

impl GetPartnerUsersFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn embed(mut self, entity: UserEmbeddedEntity) -> Self {
        if !self.embedded.contains(&entity) {
            self.embedded.push(entity);
        }
        self
    }

    /// Query string pairs in the order the API documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(email) = &self.email {
            pairs.push(("email", email.clone()));
        }
        if !self.embedded.is_empty() {
            let embedded: Vec<&str> = self.embedded.iter().map(|entity| entity.as_str()).collect();
            pairs.push(("_embedded", embedded.join(",")));
        }
        pairs
    }
}

/// Payment account type as the API spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiPaymentAccountType {
    #[serde(rename = "BANK")]
    Bank,
    #[serde(rename = "CARD")]
    Card,
    #[serde(rename = "DEBIT_CARD")]
    DebitCard,
}

impl ApiPaymentAccountType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bank => "BANK",
            Self::Card => "CARD",
            Self::DebitCard => "DEBIT_CARD",
        }
    }
}

/// Bank account type as the API spells it. `Unspecified` is sent as an
/// empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiBankAccountType {
    #[serde(rename = "CHECKING")]
    Checking,
    #[serde(rename = "SAVINGS")]
    Savings,
    #[serde(rename = "")]
    Unspecified,
}

impl ApiBankAccountType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Checking => "CHECKING",
            Self::Savings => "SAVINGS",
            Self::Unspecified => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiBankAccount {
    /// Digits only
    pub account: String,
    pub routing: String,
    #[serde(rename = "type")]
    pub account_type: ApiBankAccountType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCardAccount {
    /// Digits only
    pub account: String,
    /// `YYYY-MM`
    pub expiration: String,
    pub cvv: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiPaymentAccountAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// Payment source of a product payment.
///
/// Exactly one of `bank`, `card` and `debit_card` is filled, matching
/// `account_type`. The others are omitted from the JSON body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSource {
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: ApiPaymentAccountType,
    pub address: ApiPaymentAccountAddress,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank: Option<ApiBankAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<ApiCardAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debit_card: Option<ApiCardAccount>,
}

/// Body of `POST /api/v1/products/{code}/pay`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayProductRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub object_url: String,
    pub payment_account: PaymentSource,
}
