// Mon Oct 19 2026 - Alex

pub mod config;
pub mod error;
pub mod types;
pub mod dump;
pub mod structure;
pub mod output;
pub mod converter;
pub mod ui;

pub use config::Config;
pub use error::{ConvertError, Result};
pub use types::{TypeNormalizer, ResolvedType, ScalarType, normalize};
pub use dump::{ClassExtractor, ClassRecord, FieldRecord, extract};
pub use structure::{DependencyOrderer, LayoutComputer, SizeTable, order, compute_sizes};
pub use output::{CodeEmitter, ConversionReport, emit};
pub use converter::{Converter, Conversion, convert};
