// Mon Oct 19 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pointer width of the layouts we emit (x64 dumps only).
pub const POINTER_SIZE: u64 = 8;

/// Canonical fixed-size types a dumped field can be lowered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarType {
    #[serde(rename = "bool")]
    Bool,
    #[serde(rename = "uint8_t")]
    U8,
    #[serde(rename = "int16_t")]
    I16,
    #[serde(rename = "uint16_t")]
    U16,
    #[serde(rename = "int32_t")]
    I32,
    #[serde(rename = "uint32_t")]
    U32,
    #[serde(rename = "int64_t")]
    I64,
    #[serde(rename = "uint64_t")]
    U64,
    #[serde(rename = "float")]
    F32,
    #[serde(rename = "char")]
    Char,
    #[serde(rename = "void*")]
    Ptr,
    #[serde(rename = "Vector2")]
    Vector2,
    #[serde(rename = "Vector3")]
    Vector3,
    #[serde(rename = "Vector4")]
    Vector4,
}

impl ScalarType {
    pub const ALL: [ScalarType; 14] = [
        Self::Bool,
        Self::U8,
        Self::U16,
        Self::I16,
        Self::I32,
        Self::U32,
        Self::I64,
        Self::U64,
        Self::F32,
        Self::Vector3,
        Self::Vector2,
        Self::Vector4,
        Self::Char,
        Self::Ptr,
    ];

    /// The name written into generated declarations.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::U8 => "uint8_t",
            Self::I16 => "int16_t",
            Self::U16 => "uint16_t",
            Self::I32 => "int32_t",
            Self::U32 => "uint32_t",
            Self::I64 => "int64_t",
            Self::U64 => "uint64_t",
            Self::F32 => "float",
            Self::Char => "char",
            Self::Ptr => "void*",
            Self::Vector2 => "Vector2",
            Self::Vector3 => "Vector3",
            Self::Vector4 => "Vector4",
        }
    }

    pub fn size(self) -> u64 {
        match self {
            Self::Bool | Self::U8 | Self::Char => 1,
            Self::I16 | Self::U16 => 2,
            Self::I32 | Self::U32 | Self::F32 => 4,
            Self::I64 | Self::U64 | Self::Vector2 => 8,
            Self::Ptr => POINTER_SIZE,
            Self::Vector3 => 12,
            Self::Vector4 => 16,
        }
    }

    /// Exact match against a canonical name, e.g. `"uint32_t"` or `"void*"`.
    pub fn from_canonical(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ty| ty.name() == name)
    }

    pub fn is_vector(self) -> bool {
        matches!(self, Self::Vector2 | Self::Vector3 | Self::Vector4)
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A raw type after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedType {
    Scalar(ScalarType),
    Array(ScalarType, u64),
}

impl ResolvedType {
    /// Canonical name of the scalar, or of the element for arrays.
    pub fn name(&self) -> &'static str {
        self.element().name()
    }

    pub fn element(&self) -> ScalarType {
        match self {
            Self::Scalar(ty) | Self::Array(ty, _) => *ty,
        }
    }

    pub fn size(&self) -> u64 {
        match self {
            Self::Scalar(ty) => ty.size(),
            Self::Array(elem, count) => elem.size().saturating_mul(*count),
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_, _))
    }
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(ty) => write!(f, "{}", ty),
            Self::Array(elem, count) => write!(f, "{}[{}]", elem, count),
        }
    }
}
