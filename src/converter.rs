// Mon Oct 19 2026 - Alex

use crate::config::Config;
use crate::dump::ClassExtractor;
use crate::error::{ConvertError, Result};
use crate::output::{CodeEmitter, ConversionReport};
use crate::structure::{DependencyOrderer, LayoutComputer, SizeTable};
use crate::types::TypeNormalizer;
use itertools::Itertools;

/// Output of one conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub header: String,
    pub sizes: SizeTable,
    pub report: ConversionReport,
}

/// Runs extract, order, size and emit over one dump.
pub struct Converter {
    config: Config,
    normalizer: TypeNormalizer,
}

impl Converter {
    pub fn new(config: Config) -> Self {
        let normalizer = TypeNormalizer::with_aliases(config.aliases.clone());
        Self { config, normalizer }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn convert(&self, text: &str) -> Result<Conversion> {
        let records = ClassExtractor::new().extract(text);
        let ordering = DependencyOrderer::new().order(&records);

        let layout = LayoutComputer::new(&self.normalizer);
        let sizes = layout.compute_sizes(&ordering.classes);

        let mut report = ConversionReport::new();
        report.classes_extracted = records.len();
        report.classes_emitted = ordering.classes.len();
        for class in &ordering.classes {
            report.record_walk(class.name(), &layout.body(class, &sizes));
        }
        report.dropped_classes = ordering.dropped;
        report.orphan_parents = ordering.orphans;
        report.sizes = sizes.clone();

        if self.config.strict && report.has_dropped_classes() {
            let names = report.dropped_classes.iter().map(|d| &d.name).join(", ");
            return Err(ConvertError::Strict(report.dropped_classes.len(), names));
        }

        let header = CodeEmitter::new(&self.normalizer).emit(&ordering.classes, &sizes);
        log::info!("{}", report);

        Ok(Conversion { header, sizes, report })
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Converts with the default configuration, which never fails.
pub fn convert(text: &str) -> String {
    let normalizer = TypeNormalizer::new();
    let records = ClassExtractor::new().extract(text);
    let ordered = DependencyOrderer::new().order(&records).classes;
    let sizes = LayoutComputer::new(&normalizer).compute_sizes(&ordered);
    CodeEmitter::new(&normalizer).emit(&ordered, &sizes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScalarType;

    const DUMP: &str = r#"
namespace client_dll {
    // Parent: C_BaseModelEntity
    // Field count: 2
    namespace C_BaseAnimGraph {
        constexpr std::ptrdiff_t m_bInitiallyPopulateInterpHistory = 0x30; // bool
        constexpr std::ptrdiff_t m_pClientsideRagdoll = 0x38; // CBaseAnimGraph*
    }
    // Parent: None
    // Field count: 3
    namespace C_BaseModelEntity {
        constexpr std::ptrdiff_t m_flHealth = 0x0; // float32
        constexpr std::ptrdiff_t m_vecPos = 0x10; // Vector
        constexpr std::ptrdiff_t m_vecOverlap = 0x14; // Vector
    }
    // Parent: Loop
    namespace Loop {
        constexpr std::ptrdiff_t m_x = 0x0; // int32
    }
}
"#;

    #[test]
    fn test_end_to_end() {
        let conversion = Converter::default().convert(DUMP).unwrap();
        let header = &conversion.header;

        assert!(header.contains("class C_BaseModelEntity;\nclass C_BaseAnimGraph;\n\n"));
        assert!(header.contains(
            "class C_BaseModelEntity\n{\npublic:\n    float m_flHealth; // 0x0000 float32\n    char pad_0004[12];\n    Vector3 m_vecPos; // 0x0010 Vector\n};\n"
        ));
        assert!(header.contains(
            "class C_BaseAnimGraph : public C_BaseModelEntity\n{\npublic:\n    char pad_001C[20];\n    bool m_bInitiallyPopulateInterpHistory; // 0x0030 bool\n    char pad_0031[7];\n    uint32_t m_pClientsideRagdoll; // 0x0038 CBaseAnimGraph*\n};\n"
        ));
        assert!(!header.contains("Loop"));

        assert_eq!(conversion.sizes.get("C_BaseModelEntity"), Some(28));
        assert_eq!(conversion.sizes.get("C_BaseAnimGraph"), Some(0x3C));

        let report = &conversion.report;
        assert_eq!(report.classes_extracted, 3);
        assert_eq!(report.classes_emitted, 2);
        assert_eq!(report.dropped_classes[0].name, "Loop");
        assert_eq!(report.orphan_parents[0].parent, "None");
        assert_eq!(report.overlapping_fields[0].field, "m_vecOverlap");
        assert_eq!(report.type_fallbacks[0].raw_type, "CBaseAnimGraph*");
    }

    #[test]
    fn test_convert_matches_converter() {
        let conversion = Converter::default().convert(DUMP).unwrap();
        assert_eq!(convert(DUMP), conversion.header);
    }

    #[test]
    fn test_strict_rejects_dropped_classes() {
        let converter = Converter::new(Config::new().with_strict(true));
        match converter.convert(DUMP) {
            Err(ConvertError::Strict(count, names)) => {
                assert_eq!(count, 1);
                assert_eq!(names, "Loop");
            }
            other => panic!("expected strict failure, got {:?}", other.map(|c| c.report)),
        }
    }

    #[test]
    fn test_configured_alias_changes_type() {
        let converter = Converter::new(Config::new().with_alias("CBaseAnimGraph*", ScalarType::Ptr));
        let conversion = converter.convert(DUMP).unwrap();
        assert!(conversion.header.contains("    void* m_pClientsideRagdoll; // 0x0038 CBaseAnimGraph*\n"));
        assert_eq!(conversion.sizes.get("C_BaseAnimGraph"), Some(0x40));
        assert!(conversion.report.type_fallbacks.is_empty());
    }

    #[test]
    fn test_parent_declarations_precede_children() {
        let header = convert(DUMP);
        for (child, parent) in [("C_BaseAnimGraph", "C_BaseModelEntity")] {
            let fwd_parent = header.find(&format!("class {};", parent)).unwrap();
            let fwd_child = header.find(&format!("class {};", child)).unwrap();
            assert!(fwd_parent < fwd_child);
            let full_parent = header.find(&format!("class {}\n", parent)).unwrap();
            let full_child = header.find(&format!("class {} : public {}\n", child, parent)).unwrap();
            assert!(full_parent < full_child);
        }
    }
}
