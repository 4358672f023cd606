//! Payment account types
//!
//! A [`PaymentAccount`] is a closed set of variants. The account type is
//! derived from the variant, so it can never disagree with the data the
//! variant carries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;

/// Kind of payment account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentAccountType {
    Bank,
    CreditCard,
    DebitCard,
}

impl_domain_status_conversions!(PaymentAccountType {
    Bank => "bank",
    CreditCard => "credit_card",
    DebitCard => "debit_card",
});

/// Bank account type.
///
/// Values unknown to the SDK are kept in [`BankAccountType::Other`] instead
/// of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BankAccountType {
    Checking,
    Savings,
    BusinessChecking,
    Other(String),
}

impl BankAccountType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Checking => "checking",
            Self::Savings => "savings",
            Self::BusinessChecking => "business_checking",
            Self::Other(value) => value,
        }
    }
}

impl From<&str> for BankAccountType {
    fn from(value: &str) -> Self {
        match value {
            "checking" => Self::Checking,
            "savings" => Self::Savings,
            "business_checking" => Self::BusinessChecking,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for BankAccountType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<BankAccountType> for String {
    fn from(value: BankAccountType) -> Self {
        value.as_str().to_string()
    }
}

/// Bank (ACH) account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    holder_name: String,
    account_number: String,
    routing_number: String,
    bank_account_type: BankAccountType,
}

impl BankAccount {
    pub fn new(
        holder_name: impl Into<String>,
        account_number: impl Into<String>,
        routing_number: impl Into<String>,
        bank_account_type: impl Into<BankAccountType>,
    ) -> Self {
        Self {
            holder_name: holder_name.into(),
            account_number: account_number.into(),
            routing_number: routing_number.into(),
            bank_account_type: bank_account_type.into(),
        }
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    /// Raw account number, possibly containing separators.
    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn routing_number(&self) -> &str {
        &self.routing_number
    }

    pub fn bank_account_type(&self) -> &BankAccountType {
        &self.bank_account_type
    }
}

/// Credit or debit card. Which one is decided by the [`PaymentAccount`]
/// variant wrapping it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardAccount {
    holder_name: String,
    account_number: String,
    /// Only year and month are significant
    expiration_date: NaiveDate,
    security_code: String,
}

impl CardAccount {
    pub fn new(
        holder_name: impl Into<String>,
        card_number: impl Into<String>,
        expiration_date: NaiveDate,
        security_code: impl Into<String>,
    ) -> Self {
        Self {
            holder_name: holder_name.into(),
            account_number: card_number.into(),
            expiration_date,
            security_code: security_code.into(),
        }
    }

    /// Card without a security code.
    pub fn without_security_code(
        holder_name: impl Into<String>,
        card_number: impl Into<String>,
        expiration_date: NaiveDate,
    ) -> Self {
        Self::new(holder_name, card_number, expiration_date, String::new())
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    /// Raw card number, possibly containing separators.
    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn expiration_date(&self) -> NaiveDate {
        self.expiration_date
    }

    pub fn security_code(&self) -> &str {
        &self.security_code
    }
}

/// Payment account used to pay for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentAccount {
    Bank(BankAccount),
    CreditCard(CardAccount),
    DebitCard(CardAccount),
}

impl PaymentAccount {
    pub fn account_type(&self) -> PaymentAccountType {
        match self {
            Self::Bank(_) => PaymentAccountType::Bank,
            Self::CreditCard(_) => PaymentAccountType::CreditCard,
            Self::DebitCard(_) => PaymentAccountType::DebitCard,
        }
    }

    pub fn holder_name(&self) -> &str {
        match self {
            Self::Bank(account) => account.holder_name(),
            Self::CreditCard(card) | Self::DebitCard(card) => card.holder_name(),
        }
    }

    pub fn account_number(&self) -> &str {
        match self {
            Self::Bank(account) => account.account_number(),
            Self::CreditCard(card) | Self::DebitCard(card) => card.account_number(),
        }
    }
}

impl From<BankAccount> for PaymentAccount {
    fn from(account: BankAccount) -> Self {
        Self::Bank(account)
    }
}

/// Billing address attached to a payment account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentAccountAddress {
    street: String,
    city: String,
    state: String,
    zip: String,
}

impl PaymentAccountAddress {
    /// `zip` may be given as a string or an integer; it is stored as a string.
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl ToString,
    ) -> Self {
        Self { street: street.into(), city: city.into(), state: state.into(), zip: zip.to_string() }
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }
}

/// Payment account plus its billing address, supplied by the caller of a
/// purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSourceDataRequest {
    payment_account: PaymentAccount,
    address: PaymentAccountAddress,
}

impl PaymentSourceDataRequest {
    pub fn new(payment_account: impl Into<PaymentAccount>, address: PaymentAccountAddress) -> Self {
        Self { payment_account: payment_account.into(), address }
    }

    pub fn payment_account(&self) -> &PaymentAccount {
        &self.payment_account
    }

    pub fn address(&self) -> &PaymentAccountAddress {
        &self.address
    }
}
