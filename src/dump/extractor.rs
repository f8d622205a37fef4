// Mon Oct 19 2026 - Alex

use crate::dump::{ClassRecord, FieldRecord};
use crate::structure::Offset;
use once_cell::sync::Lazy;
use regex::Regex;

// A block runs from its parent annotation to the first closing brace after
// `namespace Name {`. Nested braces are not tracked.
static BLOCK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)// Parent:\s*(\w+).*?namespace\s+(\w+)\s*\{([^}]*)\}")
        .expect("block pattern is valid")
});

static FIELD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"constexpr std::ptrdiff_t\s+(\w+)\s*=\s*(0x[0-9A-Fa-f]+);\s*//\s*(.+)")
        .expect("field pattern is valid")
});

/// Pulls class records out of an offset dump.
pub struct ClassExtractor;

impl ClassExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, text: &str) -> Vec<ClassRecord> {
        let mut classes = Vec::new();

        for caps in BLOCK_PATTERN.captures_iter(text) {
            let parent = &caps[1];
            let name = &caps[2];
            let body = &caps[3];

            let fields: Vec<FieldRecord> = body.lines().filter_map(parse_field_line).collect();
            log::trace!("extracted {} (parent {}) with {} fields", name, parent, fields.len());

            classes.push(ClassRecord {
                name: name.to_string(),
                parent: Some(parent.to_string()),
                fields,
            });
        }

        log::debug!("extracted {} class blocks", classes.len());
        classes
    }
}

impl Default for ClassExtractor {
    fn default() -> Self {
        Self::new()
    }
}

pub fn extract(text: &str) -> Vec<ClassRecord> {
    ClassExtractor::new().extract(text)
}

fn parse_field_line(line: &str) -> Option<FieldRecord> {
    let caps = FIELD_PATTERN.captures(line.trim())?;
    let Some(offset) = Offset::from_hex_literal(&caps[2]) else {
        log::debug!("ignoring field {} with out-of-range offset {}", &caps[1], &caps[2]);
        return None;
    };

    Some(FieldRecord {
        name: caps[1].to_string(),
        offset,
        raw_type: caps[3].trim().to_string(),
    })
}
