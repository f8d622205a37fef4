// Mon Oct 19 2026 - Alex

use crate::dump::FieldRecord;
use crate::structure::{Offset, OrderedClass};
use crate::types::{Normalized, TypeNormalizer};
use indexmap::IndexMap;
use serde::Serialize;

/// Computed total size per class name, in dependency order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SizeTable {
    sizes: IndexMap<String, u64>,
}

impl SizeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A later class with the same name replaces the earlier size.
    pub fn insert(&mut self, name: &str, size: u64) {
        self.sizes.insert(name.to_string(), size);
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.sizes.get(name).copied()
    }

    /// Size a class inherits from `parent`, zero for roots.
    pub fn base_of(&self, parent: Option<&str>) -> u64 {
        parent.and_then(|p| self.get(p)).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.sizes.iter().map(|(name, size)| (name.as_str(), *size))
    }
}

/// One step of walking a class body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement<'a> {
    /// Unclaimed bytes `[offset, offset + size)` before the next field.
    Padding { offset: Offset, size: u64 },
    Field { field: &'a FieldRecord, ty: Normalized },
    /// Field starting below the cursor; left out of the layout.
    Overlap { field: &'a FieldRecord, cursor: Offset },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutWalk<'a> {
    pub placements: Vec<Placement<'a>>,
    pub end: Offset,
}

impl<'a> LayoutWalk<'a> {
    pub fn fields(&self) -> impl Iterator<Item = (&'a FieldRecord, &Normalized)> {
        self.placements.iter().filter_map(|p| match p {
            Placement::Field { field, ty } => Some((*field, ty)),
            _ => None,
        })
    }

    pub fn overlaps(&self) -> impl Iterator<Item = (&'a FieldRecord, Offset)> + '_ {
        self.placements.iter().filter_map(|p| match p {
            Placement::Overlap { field, cursor } => Some((*field, *cursor)),
            _ => None,
        })
    }

    pub fn padding_bytes(&self) -> u64 {
        self.placements
            .iter()
            .map(|p| match p {
                Placement::Padding { size, .. } => *size,
                _ => 0,
            })
            .sum()
    }
}

/// Walks `fields` in source order from `start`.
///
/// Both the size pass and the emitter go through here, so they agree on
/// which fields are kept.
pub fn walk_fields<'a>(fields: &'a [FieldRecord], start: Offset, normalizer: &TypeNormalizer) -> LayoutWalk<'a> {
    let mut cursor = start;
    let mut placements = Vec::with_capacity(fields.len());

    for field in fields {
        if field.offset < cursor {
            log::trace!("{} overlaps cursor {}", field, cursor);
            placements.push(Placement::Overlap { field, cursor });
            continue;
        }

        let gap = cursor.gap_to(field.offset);
        if gap > 0 {
            placements.push(Placement::Padding { offset: cursor, size: gap });
        }

        let ty = normalizer.normalize(&field.raw_type);
        cursor = cursor.max(field.offset.advance(ty.size()));
        placements.push(Placement::Field { field, ty });
    }

    LayoutWalk { placements, end: cursor }
}

/// Computes class sizes, parents first.
pub struct LayoutComputer<'n> {
    normalizer: &'n TypeNormalizer,
}

impl<'n> LayoutComputer<'n> {
    pub fn new(normalizer: &'n TypeNormalizer) -> Self {
        Self { normalizer }
    }

    /// `ordered` must already be in dependency order.
    pub fn compute_sizes(&self, ordered: &[OrderedClass]) -> SizeTable {
        let mut sizes = SizeTable::new();

        for class in ordered {
            let walk = walk_fields(&class.record.fields, Offset::zero(), self.normalizer);
            let parent_size = sizes.base_of(class.parent());
            let size = walk.end.as_u64().max(parent_size);
            log::trace!("{} is {} bytes (parent {})", class.name(), size, parent_size);
            sizes.insert(class.name(), size);
        }

        log::debug!("computed sizes for {} classes", sizes.len());
        sizes
    }

    /// Body layout as it is emitted: starting after the inherited region.
    pub fn body<'a>(&self, class: &'a OrderedClass, sizes: &SizeTable) -> LayoutWalk<'a> {
        let start = Offset::new(sizes.base_of(class.parent()));
        walk_fields(&class.record.fields, start, self.normalizer)
    }
}

pub fn compute_sizes(ordered: &[OrderedClass]) -> SizeTable {
    let normalizer = TypeNormalizer::new();
    LayoutComputer::new(&normalizer).compute_sizes(ordered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dump::ClassRecord;
    use crate::structure::order;
    use crate::types::{ResolvedType, ScalarType};

    #[test]
    fn test_health_and_position() {
        let records = vec![ClassRecord::new("C_Player")
            .with_field("m_flHealth", 0x0, "float32")
            .with_field("m_vecPos", 0x10, "Vector")];
        let ordered = order(&records);
        let sizes = compute_sizes(&ordered);
        assert_eq!(sizes.get("C_Player"), Some(28));

        let normalizer = TypeNormalizer::new();
        let walk = LayoutComputer::new(&normalizer).body(&ordered[0], &sizes);
        assert_eq!(walk.placements.len(), 3);
        assert_eq!(walk.placements[1], Placement::Padding { offset: Offset::new(4), size: 12 });
        match &walk.placements[2] {
            Placement::Field { field, ty } => {
                assert_eq!(field.offset, Offset::new(0x10));
                assert_eq!(ty.resolved, ResolvedType::Scalar(ScalarType::Vector3));
            }
            other => panic!("unexpected placement {:?}", other),
        }
        assert_eq!(walk.padding_bytes(), 12);
    }

    #[test]
    fn test_overlapping_fields_are_skipped() {
        let fields = vec![
            FieldRecord::new("a", 0, "int64"),
            FieldRecord::new("b", 4, "int64"),
            FieldRecord::new("c", 8, "bool"),
        ];
        let walk = walk_fields(&fields, Offset::zero(), &TypeNormalizer::new());
        assert_eq!(walk.end, Offset::new(9));
        let overlapped: Vec<_> = walk.overlaps().map(|(f, c)| (f.name.as_str(), c.as_u64())).collect();
        assert_eq!(overlapped, vec![("b", 8)]);
        assert_eq!(walk.fields().count(), 2);
    }

    #[test]
    fn test_out_of_order_field_below_cursor_is_skipped() {
        let fields = vec![FieldRecord::new("late", 0x20, "int32"), FieldRecord::new("early", 0x0, "int32")];
        let walk = walk_fields(&fields, Offset::zero(), &TypeNormalizer::new());
        assert_eq!(walk.end, Offset::new(0x24));
        assert_eq!(walk.overlaps().count(), 1);
    }

    #[test]
    fn test_child_inherits_parent_size() {
        let records = vec![
            ClassRecord::new("Base").with_field("big", 0x0, "uint8[64]"),
            ClassRecord::new("Small").with_parent("Base").with_field("x", 0x8, "bool"),
            ClassRecord::new("Large").with_parent("Base").with_field("y", 0x40, "Vector4"),
        ];
        let ordered = order(&records);
        let sizes = compute_sizes(&ordered);
        assert_eq!(sizes.get("Base"), Some(64));
        assert_eq!(sizes.get("Small"), Some(64));
        assert_eq!(sizes.get("Large"), Some(80));

        for class in &ordered {
            if let Some(parent) = class.parent() {
                assert!(sizes.get(class.name()) >= sizes.get(parent));
            }
        }
    }

    #[test]
    fn test_body_starts_after_parent() {
        let records = vec![
            ClassRecord::new("Base").with_field("a", 0x0, "int32"),
            ClassRecord::new("Derived").with_parent("Base").with_field("b", 0x2, "int16").with_field("c", 0x8, "int32"),
        ];
        let ordered = order(&records);
        let sizes = compute_sizes(&ordered);
        let normalizer = TypeNormalizer::new();
        let walk = LayoutComputer::new(&normalizer).body(&ordered[1], &sizes);
        assert_eq!(walk.overlaps().count(), 1);
        assert_eq!(walk.placements[1], Placement::Padding { offset: Offset::new(4), size: 4 });
        assert_eq!(walk.end, Offset::new(12));
    }

    #[test]
    fn test_unknown_types_are_four_bytes() {
        let records = vec![ClassRecord::new("X").with_field("h", 0x0, "CUtlVector<int>").with_field("arr", 0x4, "Mystery[3]")];
        let sizes = compute_sizes(&order(&records));
        assert_eq!(sizes.get("X"), Some(16));
    }

    #[test]
    fn test_empty_class() {
        let records = vec![ClassRecord::new("Empty")];
        assert_eq!(compute_sizes(&order(&records)).get("Empty"), Some(0));
    }
}
