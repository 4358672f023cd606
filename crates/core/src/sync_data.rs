//! Inspection of partner-supplied tradeline sync data

use serde_json::Value;
use tracing::debug;
use tradeline_domain::constants::EMAIL_MISSING_MESSAGE;
use tradeline_domain::{Result, TradelineError};

/// Email of the user a sync document belongs to.
///
/// The document is either a single record object or an array of records.
/// The first record with a top-level `email` key (ASCII case-insensitive)
/// holding a non-empty string wins. Nested objects are not searched.
///
/// # Errors
///
/// [`TradelineError::InvalidArgument`] when the document is not valid JSON
/// or no record carries an email.
pub fn extract_email(sync_data_json: &str) -> Result<String> {
    let document: Value = serde_json::from_str(sync_data_json).map_err(|err| {
        debug!(error = %err, "Sync data is not valid JSON");
        email_missing()
    })?;

    let records = match &document {
        Value::Array(items) => items.as_slice(),
        other => std::slice::from_ref(other),
    };

    records
        .iter()
        .filter_map(Value::as_object)
        .find_map(|record| {
            record
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case("email"))
                .and_then(|(_, value)| value.as_str())
                .map(str::trim)
                .filter(|email| !email.is_empty())
        })
        .map(str::to_string)
        .ok_or_else(email_missing)
}

fn email_missing() -> TradelineError {
    TradelineError::InvalidArgument(EMAIL_MISSING_MESSAGE.to_string())
}
