// Mon Oct 19 2026 - Alex

pub mod header;
pub mod report;

pub use header::{CodeEmitter, emit};
pub use report::{ConversionReport, TypeFallback, OverlappingField};
