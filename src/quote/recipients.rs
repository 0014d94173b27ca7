use phonenumber::country;

use crate::domain::{Recipient, RecipientCount, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Recipients of one bulk send, parsed from the console's line-oriented
/// input.
///
/// Invariant: never empty.
pub struct RecipientList {
    recipients: Vec<Recipient>,
}

impl RecipientList {
    /// Parse a pasted recipient list, one phone number per line.
    ///
    /// Blank lines are skipped; surrounding whitespace on each line is
    /// ignored. Any line that does not parse as a phone number fails the
    /// whole list with the offending input, so a typo cannot silently shrink
    /// a send.
    pub fn parse(default_region: Option<country::Id>, input: &str) -> Result<Self, ValidationError> {
        let mut recipients = Vec::new();
        for line in input.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            recipients.push(Recipient::parse(default_region, line)?);
        }
        Self::from_recipients(recipients)
    }

    /// Build a list from already-parsed recipients (e.g. selected contacts).
    pub fn from_recipients(recipients: Vec<Recipient>) -> Result<Self, ValidationError> {
        if recipients.is_empty() {
            return Err(ValidationError::NoRecipients);
        }
        Ok(Self { recipients })
    }

    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    pub fn len(&self) -> usize {
        self.recipients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipients.is_empty()
    }

    /// Recipient count for quoting. The list is non-empty by construction.
    pub fn count(&self) -> RecipientCount {
        let len = u32::try_from(self.recipients.len()).unwrap_or(u32::MAX);
        RecipientCount::new(len).unwrap_or(RecipientCount::ONE)
    }
}
