//! SMS segmentation and cost quoting.
//!
//! The bulk-SMS console used to re-implement this calculation on every
//! screen; this crate is the single shared version. The design follows three
//! layers: a domain layer of strong types (country codes, price records,
//! pricing profiles, segment plans), a transport layer for the wire-format
//! quirks of backend records, and a quote layer orchestrating one pricing
//! request end to end.
//!
//! ```rust
//! use smsquote::{
//!     CountryCode, CountryPrice, PriceTable, PricingEngine, PricingProfile, RecipientCount,
//! };
//!
//! fn main() -> Result<(), smsquote::QuoteError> {
//!     let kr = CountryCode::new("KR")?;
//!     let prices = PriceTable::from_iter([CountryPrice::new(kr.clone(), "South Korea", 0.0105)?]);
//!     let engine = PricingEngine::new(prices, PricingProfile::default());
//!
//!     let quote = engine.quote("신규 가입 혜택 안내", &kr, RecipientCount::new(3)?)?;
//!     assert_eq!(quote.segments, 1);
//!     println!("{}: {}", quote.encoding, quote.total_cost_display());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod domain;
pub mod quote;
pub mod transport;

pub use domain::{
    CountryCode, CountryPrice, CustomerProfile, Encoding, PriceTable, PricingProfile, Quote,
    Recipient, RecipientCount, SegmentPlan, ValidationError,
};
pub use quote::{PricingEngine, QuoteError, RecipientList};
pub use transport::{TransportError, decode_customer_profile_json, decode_price_table_json};
