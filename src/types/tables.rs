// Mon Oct 19 2026 - Alex

use crate::types::ScalarType;
use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Raw dump spellings and the canonical type each one lowers to.
pub static ALIASES: Lazy<IndexMap<&'static str, ScalarType>> = Lazy::new(|| {
    IndexMap::from([
        ("bool", ScalarType::Bool),
        ("uint8", ScalarType::U8),
        ("uint16", ScalarType::U16),
        ("int16", ScalarType::I16),
        ("int32", ScalarType::I32),
        ("uint32", ScalarType::U32),
        ("int64", ScalarType::I64),
        ("uint64", ScalarType::U64),
        ("float32", ScalarType::F32),
        ("float", ScalarType::F32),
        ("Vector", ScalarType::Vector3),
        ("Vector2", ScalarType::Vector2),
        ("Vector2D", ScalarType::Vector2),
        ("Vector3", ScalarType::Vector3),
        ("Vector4", ScalarType::Vector4),
        ("QAngle", ScalarType::Vector3),
        ("Quaternion", ScalarType::Vector4),
        ("char", ScalarType::Char),
        ("CUtlStringToken", ScalarType::U32),
        ("CModelState", ScalarType::Ptr),
    ])
});

/// Bracketed spellings that map onto a vector type.
///
/// Every bracketed key here is matched by the array rule first, so only
/// `Vector2D` can ever be answered from this table.
pub static ARRAY_ALIASES: Lazy<IndexMap<&'static str, ScalarType>> = Lazy::new(|| {
    IndexMap::from([
        ("Vector2D", ScalarType::Vector2),
        ("float[2]", ScalarType::Vector2),
        ("float[3]", ScalarType::Vector3),
        ("float[4]", ScalarType::Vector4),
    ])
});

/// Engine handle, token and time types.
pub static SPECIAL: Lazy<IndexMap<&'static str, ScalarType>> = Lazy::new(|| {
    IndexMap::from([
        ("CHandle<C_BaseEntity>", ScalarType::U32),
        ("CHandle<C_BaseModelEntity>", ScalarType::U32),
        ("CUtlStringToken", ScalarType::U32),
        ("GameTime_t", ScalarType::F32),
        ("GameTick_t", ScalarType::I32),
        ("AttachmentHandle_t", ScalarType::U8),
    ])
});

/// Type used for anything the tables do not know.
pub const FALLBACK: ScalarType = ScalarType::U32;

/// Looks `name` up as an alias key first, then as a canonical name.
pub fn lookup_base(name: &str) -> Option<ScalarType> {
    ALIASES
        .get(name)
        .copied()
        .or_else(|| ScalarType::from_canonical(name))
}
