use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Destination country identifier as stored on price records and profile
/// overrides (`country_code`).
///
/// Invariant: non-empty after trimming. Codes are matched exactly; no case
/// folding is applied.
pub struct CountryCode(String);

impl CountryCode {
    /// Record field name used by the backend (`country_code`).
    pub const FIELD: &'static str = "country_code";

    /// Create a validated [`CountryCode`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Number of recipients a quote covers.
///
/// Invariant: at least 1. Per-recipient cost is uniform, so bulk totals are a
/// plain multiplication by this count.
pub struct RecipientCount(u32);

impl RecipientCount {
    /// A single recipient.
    pub const ONE: Self = Self(1);

    /// Create a validated recipient count.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::NoRecipients);
        }
        Ok(Self(value))
    }

    /// Get the underlying count.
    pub fn get(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone)]
/// One bulk-send recipient, normalized to E.164.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct Recipient {
    raw: String,
    e164: String,
}

impl Recipient {
    /// Record field name used by the backend (`recipient_number`).
    pub const FIELD: &'static str = "recipient_number";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not carry an explicit
    /// country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164 })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }
}

impl PartialEq for Recipient {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for Recipient {}

impl std::hash::Hash for Recipient {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for Recipient {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for Recipient {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}
