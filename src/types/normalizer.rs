// Mon Oct 19 2026 - Alex

use crate::types::tables::{self, ARRAY_ALIASES, FALLBACK, SPECIAL};
use crate::types::{ResolvedType, ScalarType};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static ARRAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9_<>:]+)\[(\d+)\]").expect("array pattern is valid")
});

/// Which rule produced a [`Normalized`] type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionSource {
    /// `Base[N]` with a known base.
    Array,
    /// `Base[N]` with an unknown base, lowered to `uint32_t[N]`.
    ArrayFallback,
    ArrayAlias,
    Alias,
    /// A user alias from the configuration file.
    Configured,
    Special,
    /// Unknown type, lowered to `uint32_t`.
    Fallback,
}

impl ResolutionSource {
    pub fn is_fallback(self) -> bool {
        matches!(self, Self::ArrayFallback | Self::Fallback)
    }
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Array => "array",
            Self::ArrayFallback => "array-fallback",
            Self::ArrayAlias => "array-alias",
            Self::Alias => "alias",
            Self::Configured => "configured",
            Self::Special => "special",
            Self::Fallback => "fallback",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalized {
    pub resolved: ResolvedType,
    pub source: ResolutionSource,
}

impl Normalized {
    fn new(resolved: ResolvedType, source: ResolutionSource) -> Self {
        Self { resolved, source }
    }

    pub fn size(&self) -> u64 {
        self.resolved.size()
    }

    pub fn is_fallback(&self) -> bool {
        self.source.is_fallback()
    }
}

/// Lowers raw dump type strings to canonical sized types.
///
/// Never fails: anything unrecognised becomes `uint32_t` (or `uint32_t[N]`
/// for arrays) and is tagged so callers can report it.
#[derive(Debug, Clone, Default)]
pub struct TypeNormalizer {
    extra_aliases: IndexMap<String, ScalarType>,
}

impl TypeNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_aliases(extra_aliases: IndexMap<String, ScalarType>) -> Self {
        Self { extra_aliases }
    }

    pub fn normalize(&self, raw: &str) -> Normalized {
        let raw = raw.trim();

        if let Some((base, count)) = split_array(raw) {
            return match self.lookup_base(base) {
                Some(elem) => Normalized::new(ResolvedType::Array(elem, count), ResolutionSource::Array),
                None => Normalized::new(ResolvedType::Array(FALLBACK, count), ResolutionSource::ArrayFallback),
            };
        }

        if let Some(&ty) = ARRAY_ALIASES.get(raw) {
            return Normalized::new(ResolvedType::Scalar(ty), ResolutionSource::ArrayAlias);
        }

        if let Some(ty) = tables::lookup_base(raw) {
            return Normalized::new(ResolvedType::Scalar(ty), ResolutionSource::Alias);
        }

        if let Some(&ty) = self.extra_aliases.get(raw) {
            return Normalized::new(ResolvedType::Scalar(ty), ResolutionSource::Configured);
        }

        if let Some(&ty) = SPECIAL.get(raw) {
            return Normalized::new(ResolvedType::Scalar(ty), ResolutionSource::Special);
        }

        Normalized::new(ResolvedType::Scalar(FALLBACK), ResolutionSource::Fallback)
    }

    fn lookup_base(&self, base: &str) -> Option<ScalarType> {
        tables::lookup_base(base).or_else(|| self.extra_aliases.get(base).copied())
    }
}

/// Normalizes with the built-in tables only.
pub fn normalize(raw: &str) -> ResolvedType {
    TypeNormalizer::new().normalize(raw).resolved
}

// A count too large for u64 is not treated as an array.
fn split_array(raw: &str) -> Option<(&str, u64)> {
    let caps = ARRAY_PATTERN.captures(raw)?;
    let base = caps.get(1)?.as_str();
    let count = caps.get(2)?.as_str().parse().ok()?;
    Some((base, count))
}
