use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidPhoneNumber { input: String },
    CostOutOfRange { actual: f64 },
    NoRecipients,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::CostOutOfRange { actual } => {
                write!(
                    f,
                    "cost per segment out of range: {actual} (expected a finite value >= 0)"
                )
            }
            Self::NoRecipients => write!(f, "recipient count must be at least 1"),
        }
    }
}

impl std::error::Error for ValidationError {}
