// Mon Oct 19 2026 - Alex

use crate::structure::Offset;
use std::fmt;

/// One `name = 0x..; // type` line of a class block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRecord {
    pub name: String,
    pub offset: Offset,
    pub raw_type: String,
}

impl FieldRecord {
    pub fn new(name: &str, offset: u64, raw_type: &str) -> Self {
        Self {
            name: name.to_string(),
            offset: Offset::new(offset),
            raw_type: raw_type.to_string(),
        }
    }
}

impl fmt::Display for FieldRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}: {}", self.name, self.offset, self.raw_type)
    }
}

/// A class block as extracted from the dump.
///
/// `parent` is the annotation verbatim; whether it names a known class is
/// only decided when ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRecord {
    pub name: String,
    pub parent: Option<String>,
    pub fields: Vec<FieldRecord>,
}

impl ClassRecord {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parent: None,
            fields: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent: &str) -> Self {
        self.parent = Some(parent.to_string());
        self
    }

    pub fn with_field(mut self, name: &str, offset: u64, raw_type: &str) -> Self {
        self.fields.push(FieldRecord::new(name, offset, raw_type));
        self
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }
}

impl fmt::Display for ClassRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(parent) = &self.parent {
            write!(f, " : {}", parent)?;
        }
        write!(f, " ({} fields)", self.fields.len())
    }
}
