//! Target-encoding compatibility scans.

use std::fmt;

/// Target encodings the published sheet may be delivered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EncodingProfile {
    /// ISO-8859-1; code points above U+00FF are incompatible.
    #[default]
    Latin1,
    /// Strict 7-bit ASCII.
    Ascii,
}

impl EncodingProfile {
    pub fn encodes(self, ch: char) -> bool {
        match self {
            EncodingProfile::Latin1 => u32::from(ch) <= 0xFF,
            EncodingProfile::Ascii => ch.is_ascii(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EncodingProfile::Latin1 => "latin-1",
            EncodingProfile::Ascii => "ascii",
        }
    }
}

impl fmt::Display for EncodingProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Zero-based character positions (character counts, not byte offsets) of
/// characters the profile cannot represent.
pub fn incompatible_positions(text: &str, profile: EncodingProfile) -> Vec<usize> {
    text.chars()
        .enumerate()
        .filter(|(_, ch)| !profile.encodes(*ch))
        .map(|(position, _)| position)
        .collect()
}
