//! Encoding classification and transport segmentation.
//!
//! A message whose characters all fit the 7-bit GSM alphabet is billed against
//! the 160/153 segment capacities; anything else goes out as UCS-2 with the
//! 70/67 capacities. Characters from the GSM extended table occupy two
//! positions in the 7-bit alphabet and are counted twice.

/// Characters that require an escape in the GSM 7-bit alphabet.
///
/// Each occurrence consumes two septets. The euro sign is the only non-ASCII
/// member of the table.
pub const GSM_EXTENDED_CHARS: [char; 8] = ['[', ']', '{', '}', '\\', '~', '€', '|'];

/// Single-segment capacity for GSM 7-bit messages.
pub const GSM_SINGLE_SEGMENT_LIMIT: usize = 160;
/// Per-segment capacity for multi-segment GSM 7-bit messages.
pub const GSM_MULTI_SEGMENT_LIMIT: usize = 153;
/// Single-segment capacity for UCS-2 messages.
pub const UNICODE_SINGLE_SEGMENT_LIMIT: usize = 70;
/// Per-segment capacity for multi-segment UCS-2 messages.
pub const UNICODE_MULTI_SEGMENT_LIMIT: usize = 67;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Transport encoding a message text requires.
pub enum Encoding {
    Gsm7Bit,
    Unicode,
}

impl Encoding {
    /// Classify a message text.
    ///
    /// GSM 7-bit when every character is either plain ASCII (code points
    /// 0..=127) or a member of [`GSM_EXTENDED_CHARS`]; UCS-2 otherwise. The
    /// empty string classifies as GSM 7-bit.
    pub fn classify(text: &str) -> Self {
        if text
            .chars()
            .all(|c| c.is_ascii() || GSM_EXTENDED_CHARS.contains(&c))
        {
            Self::Gsm7Bit
        } else {
            Self::Unicode
        }
    }

    /// Capacity of a message that fits in one segment.
    pub fn single_segment_limit(self) -> usize {
        match self {
            Self::Gsm7Bit => GSM_SINGLE_SEGMENT_LIMIT,
            Self::Unicode => UNICODE_SINGLE_SEGMENT_LIMIT,
        }
    }

    /// Per-segment capacity once a message needs more than one segment.
    pub fn multi_segment_limit(self) -> usize {
        match self {
            Self::Gsm7Bit => GSM_MULTI_SEGMENT_LIMIT,
            Self::Unicode => UNICODE_MULTI_SEGMENT_LIMIT,
        }
    }

    /// Human-readable label as shown by the console.
    pub fn label(self) -> &'static str {
        match self {
            Self::Gsm7Bit => "GSM 7-bit",
            Self::Unicode => "Unicode",
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Derived segmentation of one message text. Never persisted; recomputed per
/// pricing request.
pub struct SegmentPlan {
    pub encoding: Encoding,
    /// Billed character count: GSM extended characters count twice, UCS-2
    /// text counts UTF-16 code units.
    pub effective_chars: usize,
    /// Transport segments the message occupies. At least 1, even when empty.
    pub segments: usize,
}

impl SegmentPlan {
    /// Classify `text` and compute its segment count.
    pub fn for_text(text: &str) -> Self {
        let encoding = Encoding::classify(text);
        let effective_chars = match encoding {
            Encoding::Gsm7Bit => {
                let extended = text
                    .chars()
                    .filter(|c| GSM_EXTENDED_CHARS.contains(c))
                    .count();
                text.chars().count() + extended
            }
            // UCS-2 transport bills UTF-16 code units, so astral characters
            // count twice.
            Encoding::Unicode => text.chars().map(char::len_utf16).sum(),
        };

        let segments = if effective_chars <= encoding.single_segment_limit() {
            1
        } else {
            effective_chars
                .div_ceil(encoding.multi_segment_limit())
                .max(1)
        };

        Self {
            encoding,
            effective_chars,
            segments,
        }
    }

    /// Capacity used for the single-segment classification, for display.
    pub fn single_segment_limit(&self) -> usize {
        self.encoding.single_segment_limit()
    }
}
