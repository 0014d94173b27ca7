use std::collections::BTreeMap;

use serde::Deserialize;

use super::TransportError;
use super::number::LenientNumber;
use crate::domain::{CountryCode, CustomerProfile, DEFAULT_MULTIPLIER, PricingProfile};

#[derive(Debug, Deserialize)]
struct CustomerProfileRow {
    sms_price_multiplier: Option<LenientNumber>,
    #[serde(default)]
    country_multipliers: BTreeMap<String, LenientNumber>,
    credit_balance: Option<LenientNumber>,
}

/// Decode the pricing-relevant fields of a backend user record.
///
/// Recovery rules for malformed rows:
/// - a missing or non-numeric `sms_price_multiplier` falls back to 1.0;
/// - a non-numeric or blank-keyed `country_multipliers` entry is dropped, so
///   that country falls through to the default (a stored `0` stays a real
///   override);
/// - a missing or non-numeric `credit_balance` reads as 0.
pub fn decode_customer_profile_json(json: &str) -> Result<CustomerProfile, TransportError> {
    let row: CustomerProfileRow = serde_json::from_str(json)?;

    let default_multiplier = row
        .sms_price_multiplier
        .and_then(LenientNumber::value)
        .unwrap_or(DEFAULT_MULTIPLIER);

    let mut country_overrides = BTreeMap::new();
    for (key, value) in row.country_multipliers {
        let Ok(code) = CountryCode::new(key.as_str()) else {
            tracing::debug!(key = %key, "dropping country multiplier with blank code");
            continue;
        };
        let Some(multiplier) = value.value() else {
            tracing::debug!(country = %code, "dropping non-numeric country multiplier");
            continue;
        };
        country_overrides.insert(code, multiplier);
    }

    let credit_balance = row
        .credit_balance
        .and_then(LenientNumber::value)
        .unwrap_or(0.0);

    Ok(CustomerProfile {
        pricing: PricingProfile {
            default_multiplier,
            country_overrides,
        },
        credit_balance,
    })
}
