// Mon Oct 19 2026 - Alex

use crate::structure::{LayoutComputer, OrderedClass, Placement, SizeTable};
use crate::types::{ResolvedType, TypeNormalizer};

const PREAMBLE: &str = "\
#pragma once
#include <cstdint>
#include <cstddef>

struct Vector2 { float x, y; };
struct Vector3 { float x, y, z; };
struct Vector4 { float x, y, z, w; };
using QAngle = Vector3;

";

/// Renders ordered classes as a C++ header with explicit padding.
pub struct CodeEmitter<'n> {
    layout: LayoutComputer<'n>,
}

impl<'n> CodeEmitter<'n> {
    pub fn new(normalizer: &'n TypeNormalizer) -> Self {
        Self {
            layout: LayoutComputer::new(normalizer),
        }
    }

    pub fn emit(&self, ordered: &[OrderedClass], sizes: &SizeTable) -> String {
        let mut code = String::from(PREAMBLE);

        for class in ordered {
            code.push_str(&format!("class {};\n", class.name()));
        }
        code.push('\n');

        for class in ordered {
            self.emit_class(&mut code, class, sizes);
        }

        code
    }

    fn emit_class(&self, code: &mut String, class: &OrderedClass, sizes: &SizeTable) {
        match class.parent() {
            Some(parent) => code.push_str(&format!("class {} : public {}\n", class.name(), parent)),
            None => code.push_str(&format!("class {}\n", class.name())),
        }
        code.push_str("{\npublic:\n");

        for placement in self.layout.body(class, sizes).placements {
            match placement {
                Placement::Padding { offset, size } => {
                    code.push_str(&format!("    char pad_{:X}[{}];\n", offset, size));
                }
                Placement::Field { field, ty } => {
                    let decl = match ty.resolved {
                        ResolvedType::Scalar(scalar) => format!("{} {}", scalar, field.name),
                        ResolvedType::Array(elem, count) => format!("{} {}[{}]", elem, field.name, count),
                    };
                    code.push_str(&format!("    {}; // {} {}\n", decl, field.offset, field.raw_type));
                }
                Placement::Overlap { .. } => {}
            }
        }

        code.push_str("};\n\n");
    }
}

pub fn emit(ordered: &[OrderedClass], sizes: &SizeTable) -> String {
    let normalizer = TypeNormalizer::new();
    CodeEmitter::new(&normalizer).emit(ordered, sizes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dump::ClassRecord;
    use crate::structure::{compute_sizes, order};

    fn render(records: Vec<ClassRecord>) -> String {
        let ordered = order(&records);
        let sizes = compute_sizes(&ordered);
        emit(&ordered, &sizes)
    }

    #[test]
    fn test_preamble_and_empty_input() {
        let code = render(Vec::new());
        assert_eq!(code, format!("{}\n", PREAMBLE));
        assert!(code.starts_with("#pragma once\n#include <cstdint>\n"));
        assert!(code.contains("using QAngle = Vector3;"));
    }

    #[test]
    fn test_padding_between_fields() {
        let code = render(vec![ClassRecord::new("C_Player")
            .with_parent("None")
            .with_field("m_flHealth", 0x0, "float32")
            .with_field("m_vecPos", 0x10, "Vector")]);

        let expected = "\
class C_Player
{
public:
    float m_flHealth; // 0x0000 float32
    char pad_0004[12];
    Vector3 m_vecPos; // 0x0010 Vector
};
";
        assert!(code.contains(expected), "{}", code);
        assert_eq!(code.matches("pad_").count(), 1);
    }

    #[test]
    fn test_inheritance_and_order() {
        let code = render(vec![
            ClassRecord::new("Child").with_parent("Base").with_field("b", 0x8, "int32"),
            ClassRecord::new("Base").with_parent("None").with_field("a", 0x0, "int64"),
        ]);

        assert!(code.contains("class Child : public Base\n{\npublic:\n    int32_t b; // 0x0008 int32\n};"));
        assert!(code.find("class Base;").unwrap() < code.find("class Child;").unwrap());
        assert!(code.find("class Base\n").unwrap() < code.find("class Child : public Base").unwrap());
    }

    #[test]
    fn test_arrays_and_dropped_overlaps() {
        let code = render(vec![ClassRecord::new("Arr")
            .with_field("m_vec", 0x0, "float[3]")
            .with_field("m_shadow", 0x4, "int32")
            .with_field("m_ids", 0xC, "CHandle<C_BaseEntity>[2]")]);

        assert!(code.contains("    float m_vec[3]; // 0x0000 float[3]\n"));
        assert!(!code.contains("m_shadow"));
        assert!(code.contains("    uint32_t m_ids[2]; // 0x000C CHandle<C_BaseEntity>[2]\n"));
    }

    #[test]
    fn test_child_padding_starts_at_parent_size() {
        let code = render(vec![
            ClassRecord::new("Base").with_field("a", 0x0, "int32"),
            ClassRecord::new("Derived").with_parent("Base").with_field("b", 0x1A0, "GameTime_t"),
        ]);
        assert!(code.contains("    char pad_0004[412];\n    float b; // 0x01A0 GameTime_t\n"));
    }

    #[test]
    fn test_unresolved_parent_is_not_inherited() {
        let code = render(vec![ClassRecord::new("Lonely").with_parent("CEntityInstance")]);
        assert!(code.contains("class Lonely\n{\npublic:\n};\n"));
        assert!(!code.contains("public CEntityInstance"));
    }
}
