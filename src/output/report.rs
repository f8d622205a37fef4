// Mon Oct 19 2026 - Alex

use crate::structure::{DroppedClass, LayoutWalk, OrphanParent, SizeTable};
use crate::types::ResolutionSource;
use itertools::Itertools;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeFallback {
    pub class: String,
    pub field: String,
    pub raw_type: String,
    pub lowered_to: String,
    #[serde(serialize_with = "serialize_source")]
    pub source: ResolutionSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlappingField {
    pub class: String,
    pub field: String,
    pub offset: u64,
    pub cursor: u64,
}

/// Everything the pipeline degraded on while converting one dump.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub classes_extracted: usize,
    pub classes_emitted: usize,
    pub dropped_classes: Vec<DroppedClass>,
    pub orphan_parents: Vec<OrphanParent>,
    pub type_fallbacks: Vec<TypeFallback>,
    pub overlapping_fields: Vec<OverlappingField>,
    pub sizes: SizeTable,
}

impl ConversionReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records fallbacks and overlaps seen while emitting `class`.
    pub fn record_walk(&mut self, class: &str, walk: &LayoutWalk<'_>) {
        for (field, ty) in walk.fields() {
            if ty.is_fallback() {
                log::warn!("{}::{}: unknown type '{}', using {}", class, field.name, field.raw_type, ty.resolved);
                self.type_fallbacks.push(TypeFallback {
                    class: class.to_string(),
                    field: field.name.clone(),
                    raw_type: field.raw_type.clone(),
                    lowered_to: ty.resolved.to_string(),
                    source: ty.source,
                });
            }
        }

        for (field, cursor) in walk.overlaps() {
            log::warn!("{}::{} at {} overlaps previous data ending at {}, dropped", class, field.name, field.offset, cursor);
            self.overlapping_fields.push(OverlappingField {
                class: class.to_string(),
                field: field.name.clone(),
                offset: field.offset.as_u64(),
                cursor: cursor.as_u64(),
            });
        }
    }

    pub fn has_dropped_classes(&self) -> bool {
        !self.dropped_classes.is_empty()
    }

    pub fn fallback_count(&self) -> usize {
        self.type_fallbacks.len()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} classes emitted, {} dropped, {} type fallbacks, {} overlapping fields",
            self.classes_emitted,
            self.classes_extracted,
            self.dropped_classes.len(),
            self.type_fallbacks.len(),
            self.overlapping_fields.len()
        )?;
        if self.has_dropped_classes() {
            write!(f, " [dropped: {}]", self.dropped_classes.iter().map(|d| &d.name).join(", "))?;
        }
        Ok(())
    }
}

fn serialize_source<S: serde::Serializer>(source: &ResolutionSource, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(source)
}
