//! Payment source mapping
//!
//! Account numbers are reduced to their digits before they leave the SDK.
//! Card expirations are sent as `YYYY-MM`.

use tradeline_domain::{
    BankAccount, BankAccountType, CardAccount, PaymentAccount, PaymentAccountAddress,
    PaymentAccountType, PaymentSourceDataRequest,
};

use crate::api::{
    ApiBankAccount, ApiBankAccountType, ApiCardAccount, ApiPaymentAccountAddress,
    ApiPaymentAccountType, PaymentSource,
};

pub fn map_payment_source(request: &PaymentSourceDataRequest) -> PaymentSource {
    let account = request.payment_account();
    let mut source = PaymentSource {
        name: account.holder_name().to_string(),
        account_type: map_payment_account_type(account.account_type()),
        address: map_address(request.address()),
        bank: None,
        card: None,
        debit_card: None,
    };

    match account {
        PaymentAccount::Bank(bank) => source.bank = Some(map_bank_account(bank)),
        PaymentAccount::CreditCard(card) => source.card = Some(map_card_account(card)),
        PaymentAccount::DebitCard(card) => source.debit_card = Some(map_card_account(card)),
    }

    source
}

pub fn map_payment_account_type(account_type: PaymentAccountType) -> ApiPaymentAccountType {
    match account_type {
        PaymentAccountType::Bank => ApiPaymentAccountType::Bank,
        PaymentAccountType::CreditCard => ApiPaymentAccountType::Card,
        PaymentAccountType::DebitCard => ApiPaymentAccountType::DebitCard,
    }
}

/// Types the API does not know, including business checking, are sent as
/// [`ApiBankAccountType::Unspecified`].
pub fn map_bank_account_type(account_type: &BankAccountType) -> ApiBankAccountType {
    match account_type {
        BankAccountType::Checking => ApiBankAccountType::Checking,
        BankAccountType::Savings => ApiBankAccountType::Savings,
        BankAccountType::BusinessChecking | BankAccountType::Other(_) => {
            ApiBankAccountType::Unspecified
        }
    }
}

fn map_bank_account(account: &BankAccount) -> ApiBankAccount {
    ApiBankAccount {
        account: digits_only(account.account_number()),
        routing: account.routing_number().to_string(),
        account_type: map_bank_account_type(account.bank_account_type()),
    }
}

fn map_card_account(card: &CardAccount) -> ApiCardAccount {
    ApiCardAccount {
        account: digits_only(card.account_number()),
        expiration: card.expiration_date().format("%Y-%m").to_string(),
        cvv: card.security_code().to_string(),
    }
}

fn map_address(address: &PaymentAccountAddress) -> ApiPaymentAccountAddress {
    ApiPaymentAccountAddress {
        street: address.street().to_string(),
        city: address.city().to_string(),
        state: address.state().to_string(),
        zip: address.zip().to_string(),
    }
}

fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn address() -> PaymentAccountAddress {
        PaymentAccountAddress::new("123 Street", "Test City", "TS", 99999)
    }

    fn card() -> CardAccount {
        CardAccount::new(
            "Some H. Name",
            "4343-4343-4343-4343",
            NaiveDate::from_ymd_opt(2030, 12, 31).unwrap(),
            "444",
        )
    }

    #[test]
    fn credit_card_fills_card_slot_only() {
        let request = PaymentSourceDataRequest::new(PaymentAccount::CreditCard(card()), address());

        let source = map_payment_source(&request);

        assert_eq!(source.name, "Some H. Name");
        assert_eq!(source.account_type, ApiPaymentAccountType::Card);
        assert_eq!(
            source.card,
            Some(ApiCardAccount {
                account: "4343434343434343".to_string(),
                expiration: "2030-12".to_string(),
                cvv: "444".to_string(),
            })
        );
        assert!(source.bank.is_none());
        assert!(source.debit_card.is_none());
    }

    #[test]
    fn debit_card_fills_debit_card_slot_only() {
        let request = PaymentSourceDataRequest::new(PaymentAccount::DebitCard(card()), address());

        let source = map_payment_source(&request);

        assert_eq!(source.account_type, ApiPaymentAccountType::DebitCard);
        assert!(source.debit_card.is_some());
        assert!(source.card.is_none());
        assert!(source.bank.is_none());
    }

    #[test]
    fn bank_fills_bank_slot_only() {
        let bank = BankAccount::new("Jane Roe", "0001 2345-678", "044000037", "savings");
        let request = PaymentSourceDataRequest::new(bank, address());

        let source = map_payment_source(&request);

        assert_eq!(source.account_type, ApiPaymentAccountType::Bank);
        assert_eq!(
            source.bank,
            Some(ApiBankAccount {
                account: "00012345678".to_string(),
                routing: "044000037".to_string(),
                account_type: ApiBankAccountType::Savings,
            })
        );
        assert!(source.card.is_none());
        assert!(source.debit_card.is_none());
    }

    #[test]
    fn address_is_copied() {
        let request = PaymentSourceDataRequest::new(PaymentAccount::CreditCard(card()), address());

        let source = map_payment_source(&request);

        assert_eq!(
            source.address,
            ApiPaymentAccountAddress {
                street: "123 Street".to_string(),
                city: "Test City".to_string(),
                state: "TS".to_string(),
                zip: "99999".to_string(),
            }
        );
    }

    #[test]
    fn payment_account_type_table() {
        assert_eq!(map_payment_account_type(PaymentAccountType::Bank).as_str(), "BANK");
        assert_eq!(map_payment_account_type(PaymentAccountType::CreditCard).as_str(), "CARD");
        assert_eq!(map_payment_account_type(PaymentAccountType::DebitCard).as_str(), "DEBIT_CARD");
    }

    #[test]
    fn bank_account_type_table() {
        assert_eq!(map_bank_account_type(&BankAccountType::Checking).as_str(), "CHECKING");
        assert_eq!(map_bank_account_type(&BankAccountType::Savings).as_str(), "SAVINGS");
        assert_eq!(map_bank_account_type(&BankAccountType::BusinessChecking).as_str(), "");
        assert_eq!(map_bank_account_type(&BankAccountType::from("money_market")).as_str(), "");
    }

    #[test]
    fn digit_stripping_is_idempotent() {
        let once = digits_only("4343-4343 4343/4343x");
        assert_eq!(once, "4343434343434343");
        assert_eq!(digits_only(&once), once);
        assert_eq!(digits_only("no digits"), "");
    }
}
