// Mon Oct 19 2026 - Alex

pub mod scalar;
pub mod tables;
pub mod normalizer;

pub use scalar::{ScalarType, ResolvedType, POINTER_SIZE};
pub use normalizer::{TypeNormalizer, Normalized, ResolutionSource, normalize};
