//! Transport layer: wire-format quirks of backend records (deserialization).
//!
//! Country prices and customer profiles arrive as JSON rows from the backend
//! data store. Numeric fields show up as JSON numbers or numeric strings
//! depending on how the row was written, so decoding is deliberately lenient
//! where the domain allows it.

mod number;
mod price_table;
mod profile;

pub use price_table::decode_price_table_json;
pub use profile::decode_customer_profile_json;

use crate::domain::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("price record for {country_code:?} has no usable cost")]
    MissingCost { country_code: String },

    #[error("invalid price record for {country_code:?}: {source}")]
    InvalidPriceRecord {
        country_code: String,
        source: ValidationError,
    },
}
