// Mon Oct 19 2026 - Alex

use crate::dump::ClassRecord;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;

/// A class that survived ordering.
///
/// `parent` is only set when the annotated parent is itself one of the
/// extracted classes, and is then guaranteed to precede this class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedClass {
    pub record: ClassRecord,
    pub parent: Option<String>,
}

impl OrderedClass {
    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }
}

/// A class left out because its parent chain never resolved (a cycle).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedClass {
    pub name: String,
    pub parent: String,
}

impl fmt::Display for DroppedClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (waiting on {})", self.name, self.parent)
    }
}

/// An annotation naming a parent that is not in the dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrphanParent {
    pub class: String,
    pub parent: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ordering {
    pub classes: Vec<OrderedClass>,
    pub dropped: Vec<DroppedClass>,
    pub orphans: Vec<OrphanParent>,
}

/// Kahn's algorithm over the single-parent class graph.
pub struct DependencyOrderer;

impl DependencyOrderer {
    pub fn new() -> Self {
        Self
    }

    pub fn order(&self, records: &[ClassRecord]) -> Ordering {
        let mut known: IndexMap<&str, Vec<usize>> = IndexMap::new();
        for (index, record) in records.iter().enumerate() {
            known.entry(record.name.as_str()).or_default().push(index);
        }

        let mut children: IndexMap<&str, Vec<usize>> = IndexMap::new();
        let mut waiting = vec![false; records.len()];
        let mut orphans = Vec::new();

        for (index, record) in records.iter().enumerate() {
            let Some(parent) = record.parent() else { continue };
            if known.contains_key(parent) {
                children.entry(parent).or_default().push(index);
                waiting[index] = true;
            } else {
                orphans.push(OrphanParent {
                    class: record.name.clone(),
                    parent: parent.to_string(),
                });
            }
        }

        let mut queue: VecDeque<usize> = (0..records.len()).filter(|&i| !waiting[i]).collect();
        let mut emitted = vec![false; records.len()];
        let mut classes = Vec::with_capacity(records.len());

        while let Some(index) = queue.pop_front() {
            let record = &records[index];
            emitted[index] = true;

            if let Some(ready) = children.get(record.name.as_str()) {
                for &child in ready {
                    // A duplicate parent name releases its children only once.
                    if waiting[child] {
                        waiting[child] = false;
                        queue.push_back(child);
                    }
                }
            }

            let parent = record
                .parent()
                .filter(|p| known.contains_key(p))
                .map(str::to_string);
            classes.push(OrderedClass {
                record: record.clone(),
                parent,
            });
        }

        let dropped: Vec<DroppedClass> = records
            .iter()
            .enumerate()
            .filter(|(i, _)| !emitted[*i])
            .map(|(_, record)| DroppedClass {
                name: record.name.clone(),
                parent: record.parent().unwrap_or_default().to_string(),
            })
            .collect();

        for class in &dropped {
            log::warn!("dropping class {} with unresolved parent chain", class);
        }
        log::debug!(
            "ordered {} classes ({} dropped, {} orphan parents)",
            classes.len(),
            dropped.len(),
            orphans.len()
        );

        Ordering { classes, dropped, orphans }
    }
}

impl Default for DependencyOrderer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn order(records: &[ClassRecord]) -> Vec<OrderedClass> {
    DependencyOrderer::new().order(records).classes
}
