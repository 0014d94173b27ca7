//! Domain layer: strong types with validation and invariants (no I/O).

mod pricing;
mod segmentation;
mod validation;
mod value;

pub use pricing::{
    CountryPrice, CustomerProfile, DEFAULT_MULTIPLIER, PriceTable, PricingProfile, Quote,
};
pub use segmentation::{
    Encoding, GSM_EXTENDED_CHARS, GSM_MULTI_SEGMENT_LIMIT, GSM_SINGLE_SEGMENT_LIMIT, SegmentPlan,
    UNICODE_MULTI_SEGMENT_LIMIT, UNICODE_SINGLE_SEGMENT_LIMIT,
};
pub use validation::ValidationError;
pub use value::{CountryCode, Recipient, RecipientCount};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_code_rejects_empty() {
        assert!(matches!(
            CountryCode::new("   "),
            Err(ValidationError::Empty {
                field: CountryCode::FIELD
            })
        ));
    }

    #[test]
    fn ascii_and_unicode_classification() {
        assert_eq!(Encoding::classify("plain ascii 123"), Encoding::Gsm7Bit);
        assert_eq!(Encoding::classify(""), Encoding::Gsm7Bit);
        assert_eq!(Encoding::classify("데이터"), Encoding::Unicode);
        assert_eq!(Encoding::classify("mixed 데이터"), Encoding::Unicode);
    }

    #[test]
    fn segment_count_is_at_least_one() {
        for text in ["", "a", &"a".repeat(500), &"안".repeat(500)] {
            assert!(SegmentPlan::for_text(text).segments >= 1);
        }
    }

    #[test]
    fn zero_override_beats_default_multiplier() {
        let kr = CountryCode::new("KR").unwrap();
        let mut profile = PricingProfile::default();
        profile.country_overrides.insert(kr.clone(), 0.0);

        let plan = SegmentPlan::for_text("hello");
        let quote = Quote::compute(
            plan,
            0.0105,
            profile.resolve_multiplier(&kr),
            RecipientCount::new(5).unwrap(),
        );
        assert_eq!(quote.multiplier, 0.0);
        assert_eq!(quote.total_cost, 0.0);
    }

    #[test]
    fn aggregation_matches_worked_example() {
        let plan = SegmentPlan {
            encoding: Encoding::Gsm7Bit,
            effective_chars: 333,
            segments: 3,
        };
        let quote = Quote::compute(plan, 0.05, 2.0, RecipientCount::new(4).unwrap());
        assert_eq!(quote.total_cost_display(), "1.2000");
    }
}
