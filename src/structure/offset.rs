// Mon Oct 19 2026 - Alex

use std::fmt;

/// Byte offset inside a class layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Offset {
    value: u64,
}

impl Offset {
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    pub fn zero() -> Self {
        Self { value: 0 }
    }

    pub fn as_u64(&self) -> u64 {
        self.value
    }

    /// Parses `0x1A0`-style literals as they appear in offset dumps.
    pub fn from_hex_literal(literal: &str) -> Option<Self> {
        let digits = literal
            .strip_prefix("0x")
            .or_else(|| literal.strip_prefix("0X"))?;
        u64::from_str_radix(digits, 16).ok().map(Self::new)
    }

    pub fn advance(&self, size: u64) -> Self {
        Self::new(self.value.saturating_add(size))
    }

    /// Bytes from `self` up to `later`, zero if `later` is not ahead.
    pub fn gap_to(&self, later: Offset) -> u64 {
        later.value.saturating_sub(self.value)
    }
}

/// Formats as at least four uppercase hex digits, the form used in
/// generated annotations and padding names.
impl fmt::UpperHex for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}", self.value)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.value)
    }
}

impl From<u64> for Offset {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}
