use serde::Deserialize;

/// Numeric field that backend rows store as either JSON number or numeric
/// string.
///
/// Anything else (null, booleans, non-numeric strings, nested values) decodes
/// to "absent" instead of failing the whole payload; the caller decides
/// whether absent is recoverable for the field in question.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LenientNumber(Option<f64>);

impl LenientNumber {
    pub(crate) fn value(self) -> Option<f64> {
        self.0
    }
}

impl<'de> Deserialize<'de> for LenientNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        let parsed = match token.as_bytes().first().copied() {
            Some(b'"') => serde_json::from_str::<String>(token)
                .ok()
                .and_then(|s| s.trim().parse::<f64>().ok()),
            Some(b'-' | b'0'..=b'9') => token.parse::<f64>().ok(),
            _ => None,
        };

        Ok(Self(parsed))
    }
}
