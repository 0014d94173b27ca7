//! Quote layer: orchestrates segmentation, multiplier resolution, and cost
//! aggregation over a loaded price table and customer profile.

mod recipients;

pub use recipients::RecipientList;

use crate::domain::{
    CountryCode, PriceTable, PricingProfile, Quote, RecipientCount, SegmentPlan, ValidationError,
};

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`PricingEngine`].
pub enum QuoteError {
    /// No price record exists for the requested destination. Callers must
    /// block the dependent send; this is never recovered as a zero cost.
    #[error("no price record for country {code}")]
    UnknownCountry { code: CountryCode },

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Quoting pipeline over one price table and one customer profile.
///
/// Holds no mutable state; every [`PricingEngine::quote`] call is an
/// independent pure computation, so an engine can be shared freely across
/// threads and invoked per keystroke for live previews.
pub struct PricingEngine {
    prices: PriceTable,
    profile: PricingProfile,
}

impl PricingEngine {
    /// Create an engine from a loaded price table and pricing profile.
    pub fn new(prices: PriceTable, profile: PricingProfile) -> Self {
        Self { prices, profile }
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    pub fn profile(&self) -> &PricingProfile {
        &self.profile
    }

    /// Quote one message to `recipients` numbers in `country`.
    ///
    /// Fails with [`QuoteError::UnknownCountry`] when the price table has no
    /// record for the destination.
    pub fn quote(
        &self,
        message: &str,
        country: &CountryCode,
        recipients: RecipientCount,
    ) -> Result<Quote, QuoteError> {
        let price = self
            .prices
            .get(country)
            .ok_or_else(|| QuoteError::UnknownCountry {
                code: country.clone(),
            })?;

        let multiplier = self.profile.resolve_multiplier(country);
        let plan = SegmentPlan::for_text(message);
        let quote = Quote::compute(plan, price.cost_per_segment(), multiplier, recipients);

        tracing::debug!(
            country = %country,
            base_cost = quote.base_cost_per_segment,
            multiplier = quote.multiplier,
            encoding = %quote.encoding,
            segments = quote.segments,
            recipients = quote.recipients,
            total_cost = quote.total_cost,
            "computed quote"
        );

        Ok(quote)
    }

    /// Quote one message to every number in a parsed recipient list.
    pub fn quote_bulk(
        &self,
        message: &str,
        country: &CountryCode,
        recipients: &RecipientList,
    ) -> Result<Quote, QuoteError> {
        self.quote(message, country, recipients.count())
    }
}
