//! Country price records, customer pricing profiles, and cost aggregation.

use std::collections::BTreeMap;

use crate::domain::segmentation::{Encoding, SegmentPlan};
use crate::domain::validation::ValidationError;
use crate::domain::value::{CountryCode, RecipientCount};

/// Multiplier applied when a profile carries no default of its own.
pub const DEFAULT_MULTIPLIER: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
/// Billing parameters for one destination country.
///
/// Invariant: `cost_per_segment` is finite and non-negative.
pub struct CountryPrice {
    code: CountryCode,
    name: String,
    cost_per_segment: f64,
}

impl CountryPrice {
    /// Create a validated price record.
    pub fn new(
        code: CountryCode,
        name: impl Into<String>,
        cost_per_segment: f64,
    ) -> Result<Self, ValidationError> {
        if !cost_per_segment.is_finite() || cost_per_segment < 0.0 {
            return Err(ValidationError::CostOutOfRange {
                actual: cost_per_segment,
            });
        }
        Ok(Self {
            code,
            name: name.into(),
            cost_per_segment,
        })
    }

    pub fn code(&self) -> &CountryCode {
        &self.code
    }

    /// Display name of the destination country.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base cost of one transport segment, before any multiplier.
    pub fn cost_per_segment(&self) -> f64 {
        self.cost_per_segment
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Price records keyed by country code.
///
/// One record per code: inserting a record for an existing code replaces the
/// previous one.
pub struct PriceTable {
    records: BTreeMap<CountryCode, CountryPrice>,
}

impl PriceTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the record it replaced, if any.
    pub fn insert(&mut self, price: CountryPrice) -> Option<CountryPrice> {
        self.records.insert(price.code.clone(), price)
    }

    /// Look up the record for an exact country code.
    pub fn get(&self, code: &CountryCode) -> Option<&CountryPrice> {
        self.records.get(code)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in country-code order.
    pub fn iter(&self) -> impl Iterator<Item = &CountryPrice> {
        self.records.values()
    }
}

impl FromIterator<CountryPrice> for PriceTable {
    fn from_iter<I: IntoIterator<Item = CountryPrice>>(iter: I) -> Self {
        let mut table = Self::new();
        for price in iter {
            table.insert(price);
        }
        table
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A customer's billing adjustments (`sms_price_multiplier` and
/// `country_multipliers` on the user record).
///
/// Overrides are typed numbers, so a stored `0.0` is a real override meaning
/// "free", never "unset".
pub struct PricingProfile {
    /// Applied when no country-specific override exists.
    pub default_multiplier: f64,
    /// Per-country overrides, taking precedence over the default.
    pub country_overrides: BTreeMap<CountryCode, f64>,
}

impl Default for PricingProfile {
    fn default() -> Self {
        Self {
            default_multiplier: DEFAULT_MULTIPLIER,
            country_overrides: BTreeMap::new(),
        }
    }
}

impl PricingProfile {
    /// Resolve the effective multiplier for a destination.
    ///
    /// The exact-code override wins when present (zero included); otherwise
    /// the profile default applies.
    pub fn resolve_multiplier(&self, code: &CountryCode) -> f64 {
        match self.country_overrides.get(code) {
            Some(&multiplier) => multiplier,
            None => self.default_multiplier,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Customer record fields the quoting pipeline consumes: pricing adjustments
/// plus the credit balance that gates sends.
pub struct CustomerProfile {
    pub pricing: PricingProfile,
    pub credit_balance: f64,
}

impl Default for CustomerProfile {
    fn default() -> Self {
        Self {
            pricing: PricingProfile::default(),
            credit_balance: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Fully priced quote for one message to one destination country.
///
/// Derived per request; never persisted.
pub struct Quote {
    pub encoding: Encoding,
    pub effective_chars: usize,
    pub segments: usize,
    /// Capacity used for the single-segment classification, for display.
    pub single_segment_limit: usize,
    pub base_cost_per_segment: f64,
    pub multiplier: f64,
    /// `base_cost_per_segment * multiplier`.
    pub cost_per_segment: f64,
    pub recipients: u32,
    /// `cost_per_segment * segments * recipients`.
    pub total_cost: f64,
}

impl Quote {
    /// Combine a segment plan with resolved pricing.
    pub fn compute(
        plan: SegmentPlan,
        base_cost_per_segment: f64,
        multiplier: f64,
        recipients: RecipientCount,
    ) -> Self {
        let cost_per_segment = base_cost_per_segment * multiplier;
        let total_cost = cost_per_segment * plan.segments as f64 * f64::from(recipients.get());
        Self {
            encoding: plan.encoding,
            effective_chars: plan.effective_chars,
            segments: plan.segments,
            single_segment_limit: plan.single_segment_limit(),
            base_cost_per_segment,
            multiplier,
            cost_per_segment,
            recipients: recipients.get(),
            total_cost,
        }
    }

    /// Total cost formatted the way the console displays money (4 decimal
    /// places).
    pub fn total_cost_display(&self) -> String {
        format!("{:.4}", self.total_cost)
    }

    /// Whether `balance` covers this quote. Sends are blocked when it does
    /// not.
    pub fn is_within_balance(&self, balance: f64) -> bool {
        self.total_cost <= balance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(value: &str) -> CountryCode {
        CountryCode::new(value).unwrap()
    }

    #[test]
    fn country_price_rejects_negative_and_non_finite_costs() {
        assert!(matches!(
            CountryPrice::new(code("KR"), "South Korea", -0.01),
            Err(ValidationError::CostOutOfRange { .. })
        ));
        assert!(CountryPrice::new(code("KR"), "South Korea", f64::NAN).is_err());
        assert!(CountryPrice::new(code("KR"), "South Korea", f64::INFINITY).is_err());

        let price = CountryPrice::new(code("KR"), "South Korea", 0.0).unwrap();
        assert_eq!(price.cost_per_segment(), 0.0);
        assert_eq!(price.name(), "South Korea");
    }

    #[test]
    fn price_table_keeps_one_record_per_code() {
        let mut table = PriceTable::new();
        assert!(table.is_empty());

        table.insert(CountryPrice::new(code("KR"), "South Korea", 0.0105).unwrap());
        let replaced = table.insert(CountryPrice::new(code("KR"), "South Korea", 0.0099).unwrap());

        assert_eq!(table.len(), 1);
        assert_eq!(replaced.unwrap().cost_per_segment(), 0.0105);
        assert_eq!(table.get(&code("KR")).unwrap().cost_per_segment(), 0.0099);
        assert!(table.get(&code("JP")).is_none());
    }

    #[test]
    fn zero_override_is_honored() {
        let mut profile = PricingProfile::default();
        profile.country_overrides.insert(code("KR"), 0.0);

        assert_eq!(profile.resolve_multiplier(&code("KR")), 0.0);
        assert_eq!(profile.resolve_multiplier(&code("JP")), 1.0);
    }

    #[test]
    fn default_multiplier_applies_without_override() {
        let profile = PricingProfile {
            default_multiplier: 1.5,
            country_overrides: BTreeMap::new(),
        };
        assert_eq!(profile.resolve_multiplier(&code("KR")), 1.5);
        assert_eq!(profile.resolve_multiplier(&code("US")), 1.5);
    }

    #[test]
    fn quote_multiplies_cost_segments_and_recipients() {
        let plan = SegmentPlan {
            encoding: Encoding::Gsm7Bit,
            effective_chars: 400,
            segments: 3,
        };
        let quote = Quote::compute(plan, 0.05, 2.0, RecipientCount::new(4).unwrap());

        assert_eq!(quote.cost_per_segment, 0.1);
        assert!((quote.total_cost - 1.2).abs() < 1e-9);
        assert_eq!(quote.total_cost_display(), "1.2000");
        assert_eq!(quote.segments, 3);
        assert_eq!(quote.recipients, 4);
        assert_eq!(quote.single_segment_limit, 160);
    }

    #[test]
    fn balance_gate_uses_total_cost() {
        let plan = SegmentPlan::for_text("hello");
        let quote = Quote::compute(plan, 0.05, 1.0, RecipientCount::ONE);

        assert!(quote.is_within_balance(0.05));
        assert!(quote.is_within_balance(10.0));
        assert!(!quote.is_within_balance(0.0499));
    }
}
