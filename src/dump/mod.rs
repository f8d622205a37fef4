// Mon Oct 19 2026 - Alex

pub mod record;
pub mod extractor;

pub use record::{FieldRecord, ClassRecord};
pub use extractor::{ClassExtractor, extract};
